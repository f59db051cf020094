//! Priority levels and the fixed name table.
//!
//! Values line up with the common logging-severity scale so familiar
//! thresholds carry over. The extremes are reachable under two names each:
//! `ALL`/`MINIMUM` and `OFF`/`MAXIMUM`.
//!
//! Decision rule: a declaration is elided when its level is strictly below
//! the run's threshold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ElideError, Result};

/// Priority attached to an elidable declaration or to a run's threshold.
/// Lower means more eager to elide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(pub i32);

impl Level {
    pub const ALL: Level = Level(i32::MIN);
    pub const FINEST: Level = Level(300);
    pub const FINER: Level = Level(400);
    pub const FINE: Level = Level(500);
    pub const CONFIG: Level = Level(700);
    pub const INFO: Level = Level(800);
    pub const WARNING: Level = Level(900);
    pub const SEVERE: Level = Level(1000);
    /// Gate for assertion-style checks, above every logging-derived level.
    pub const ASSERTION: Level = Level(2000);
    pub const OFF: Level = Level(i32::MAX);

    pub const MINIMUM: Level = Level::ALL;
    pub const MAXIMUM: Level = Level::OFF;

    /// Raw integer value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Canonical name when this value is a named checkpoint.
    /// The extremes report `ALL` and `OFF`, never their aliases.
    pub fn name(self) -> Option<&'static str> {
        NAMED_LEVELS
            .iter()
            .find(|(_, lvl)| *lvl == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Level {
    fn from(v: i32) -> Self {
        Level(v)
    }
}

impl FromStr for Level {
    type Err = ElideError;

    fn from_str(s: &str) -> Result<Self> {
        parse_threshold(s)
    }
}

// Canonical names first so `Level::name` never returns an alias.
static NAMED_LEVELS: [(&str, Level); 12] = [
    ("ALL", Level::ALL),
    ("FINEST", Level::FINEST),
    ("FINER", Level::FINER),
    ("FINE", Level::FINE),
    ("CONFIG", Level::CONFIG),
    ("INFO", Level::INFO),
    ("WARNING", Level::WARNING),
    ("SEVERE", Level::SEVERE),
    ("ASSERTION", Level::ASSERTION),
    ("OFF", Level::OFF),
    ("MINIMUM", Level::MINIMUM),
    ("MAXIMUM", Level::MAXIMUM),
];

/// The full name table, aliases included.
pub fn named_levels() -> &'static [(&'static str, Level)] {
    &NAMED_LEVELS
}

pub(crate) fn valid_names() -> String {
    NAMED_LEVELS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Case-sensitive exact lookup of a level name. No trimming or case folding.
pub fn resolve(name: &str) -> Result<Level> {
    NAMED_LEVELS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, lvl)| *lvl)
        .ok_or_else(|| {
            tracing::trace!(token = name, "unknown elision level name");
            ElideError::UnknownLevelName(name.to_string())
        })
}

/// True exactly when `declared < threshold`.
pub fn should_elide(declared: Level, threshold: Level) -> bool {
    declared < threshold
}

/// Parse a command-line threshold: a decimal `i32` or one of the level names.
///
/// A numeric token outside the `i32` range is neither, so it is reported as
/// an unknown level name.
pub fn parse_threshold(token: &str) -> Result<Level> {
    match token.parse::<i32>() {
        Ok(v) => Ok(Level(v)),
        Err(_) => resolve(token),
    }
}

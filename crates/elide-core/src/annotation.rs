//! The elidable tag as a plain data contract.
//!
//! A host hands over `(declaration id, level)` pairs. The level is always the
//! literal integer written on the declaration; names are resolved only on the
//! threshold side. Overrides do not inherit the tag: an untagged declaration
//! is never elided even if the one it overrides is tagged.

use serde::{Deserialize, Serialize};

use crate::level::{should_elide, Level};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elidable {
    pub declaration: String,
    pub level: Level,
}

impl Elidable {
    pub fn new(declaration: impl Into<String>, level: impl Into<Level>) -> Self {
        Self {
            declaration: declaration.into(),
            level: level.into(),
        }
    }

    pub fn is_elided_below(&self, threshold: Level) -> bool {
        should_elide(self.level, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_level_compares_against_threshold() {
        let fine = Elidable::new("app.Log.fine", 500);
        let warn = Elidable::new("app.Log.warning", Level::WARNING);
        assert!(fine.is_elided_below(Level::INFO));
        assert!(!warn.is_elided_below(Level::INFO));
        assert!(!fine.is_elided_below(Level::FINE));
    }
}

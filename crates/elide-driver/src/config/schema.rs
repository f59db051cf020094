use std::collections::HashSet;
use std::slice;

use serde::Deserialize;
use elide_core::{parse_threshold, ElideError, Level, Result, ResultKind};

use crate::policy::Declaration;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElideConfig {
    pub version: u32,

    /// Run threshold; absent means `ALL` (nothing elided).
    #[serde(default)]
    pub elide_below: Option<ThresholdToken>,

    #[serde(default)]
    pub declarations: Vec<DeclarationConfig>,
}

impl ElideConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ElideError::UnsupportedVersion(self.version));
        }

        self.threshold()?;

        let mut seen = HashSet::with_capacity(self.declarations.len());
        for d in &self.declarations {
            if d.id.trim().is_empty() {
                return Err(ElideError::Config("declarations[].id must not be empty".into()));
            }
            if !seen.insert(d.id.as_str()) {
                return Err(ElideError::Config(format!("duplicate declaration id: {}", d.id)));
            }
        }
        Ok(())
    }

    /// Threshold written in the file, or `ALL` when absent.
    pub fn threshold(&self) -> Result<Level> {
        match &self.elide_below {
            Some(tok) => tok.resolve(),
            None => Ok(Level::ALL),
        }
    }

    pub fn declarations(&self) -> Vec<Declaration> {
        self.declarations.iter().map(DeclarationConfig::to_declaration).collect()
    }
}

/// Threshold as written: a YAML integer or a level name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ThresholdToken {
    Number(i64),
    Name(String),
}

impl ThresholdToken {
    pub fn resolve(&self) -> Result<Level> {
        match self {
            ThresholdToken::Number(n) => i32::try_from(*n).map(Level).map_err(|_| {
                ElideError::Config(format!("elide_below out of 32-bit range: {n}"))
            }),
            ThresholdToken::Name(s) => parse_threshold(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationConfig {
    pub id: String,

    /// Literal level on the elidable tag; absent means untagged.
    #[serde(default)]
    pub level: Option<i32>,

    #[serde(default)]
    pub returns: Option<Returns>,
}

impl DeclarationConfig {
    pub fn to_declaration(&self) -> Declaration {
        Declaration {
            id: self.id.clone(),
            level: self.level.map(Level),
            returns: self
                .returns
                .as_ref()
                .map(|r| r.kinds().to_vec())
                .unwrap_or_default(),
        }
    }
}

/// Static result kind reported by the host: one kind, or several candidates.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Returns {
    One(ResultKind),
    Candidates(Vec<ResultKind>),
}

impl Returns {
    pub fn kinds(&self) -> &[ResultKind] {
        match self {
            Returns::One(k) => slice::from_ref(k),
            Returns::Candidates(ks) => ks,
        }
    }
}

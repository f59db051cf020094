use serde::Serialize;

use elide_core::{placeholder_for_candidates, Elidable, Level, Placeholder, ResultKind};

/// A declaration as handed over by the host compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub id: String,
    /// Literal level on the elidable tag. `None` means untagged.
    pub level: Option<Level>,
    /// Static result kinds, highest precedence resolved by the policy.
    pub returns: Vec<ResultKind>,
}

impl Declaration {
    pub fn elidable(&self) -> Option<Elidable> {
        self.level.map(|lvl| Elidable::new(self.id.clone(), lvl))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepReason {
    /// No elidable tag; never elided whatever overridden members say.
    Untagged,
    /// Tagged, but not strictly below the threshold.
    AtOrAboveThreshold,
}

/// Decision from policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum ElisionDecision {
    Keep { reason: KeepReason },
    /// `placeholder` is `None` when the host reported no result kind.
    Elide { placeholder: Option<Placeholder> },
}

impl ElisionDecision {
    pub fn is_elided(&self) -> bool {
        matches!(self, ElisionDecision::Elide { .. })
    }
}

/// Per-declaration outcome, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionRecord {
    pub id: String,
    pub level: Option<Level>,
    #[serde(flatten)]
    pub decision: ElisionDecision,
}

/// Run-scoped elision policy.
/// Construct once per run; read-only afterwards.
#[derive(Debug, Clone, Copy)]
pub struct ElisionPolicy {
    threshold: Level,
}

impl ElisionPolicy {
    pub fn new(threshold: Level) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Level {
        self.threshold
    }

    pub fn elides(&self, tag: &Elidable) -> bool {
        tag.is_elided_below(self.threshold)
    }

    pub fn decide(&self, decl: &Declaration) -> ElisionDecision {
        let Some(tag) = decl.elidable() else {
            return ElisionDecision::Keep { reason: KeepReason::Untagged };
        };

        if !self.elides(&tag) {
            return ElisionDecision::Keep { reason: KeepReason::AtOrAboveThreshold };
        }

        let placeholder = placeholder_for_candidates(&decl.returns);
        tracing::debug!(
            id = %decl.id,
            level = tag.level.value(),
            threshold = self.threshold.value(),
            ?placeholder,
            "declaration elided"
        );
        ElisionDecision::Elide { placeholder }
    }

    pub fn evaluate(&self, decls: &[Declaration]) -> Vec<DecisionRecord> {
        let records: Vec<DecisionRecord> = decls
            .iter()
            .map(|d| DecisionRecord {
                id: d.id.clone(),
                level: d.level,
                decision: self.decide(d),
            })
            .collect();

        let elided = records.iter().filter(|r| r.decision.is_elided()).count();
        tracing::info!(
            threshold = self.threshold.value(),
            total = records.len(),
            elided,
            "elision policy evaluated"
        );
        records
    }
}

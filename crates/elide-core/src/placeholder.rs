//! Replacement values for calls to elided declarations.
//!
//! The host compiler decides a declaration's static result kind; this module
//! only maps a kind to its placeholder and orders competing kinds:
//! unit, then boolean, then numeric value types, then nullable references,
//! then the bottom type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Static result kind of an elidable declaration, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Unit,
    Boolean,
    Byte,
    Short,
    Char,
    Int,
    Long,
    Float,
    Double,
    /// Nullable reference type.
    Reference,
    /// Bottom type: the declaration never returns normally.
    Nothing,
}

impl ResultKind {
    // Lower rank wins when several kinds are candidates.
    fn rank(self) -> u8 {
        match self {
            ResultKind::Unit => 0,
            ResultKind::Boolean => 1,
            ResultKind::Byte
            | ResultKind::Short
            | ResultKind::Char
            | ResultKind::Int
            | ResultKind::Long
            | ResultKind::Float
            | ResultKind::Double => 2,
            ResultKind::Reference => 3,
            ResultKind::Nothing => 4,
        }
    }
}

/// Value substituted for a call to an elided declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    Unit,
    False,
    /// Zero of the given numeric kind.
    Zero(ResultKind),
    Null,
    /// Call site raises instead of producing a value.
    Unreachable,
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Unit => f.write_str("()"),
            Placeholder::False => f.write_str("false"),
            Placeholder::Zero(ResultKind::Float) => f.write_str("0.0f"),
            Placeholder::Zero(ResultKind::Double) => f.write_str("0.0"),
            Placeholder::Zero(ResultKind::Long) => f.write_str("0L"),
            Placeholder::Zero(ResultKind::Char) => f.write_str("'\\0'"),
            Placeholder::Zero(_) => f.write_str("0"),
            Placeholder::Null => f.write_str("null"),
            Placeholder::Unreachable => f.write_str("<unreachable>"),
        }
    }
}

/// Placeholder for a single result kind.
pub fn placeholder_for(kind: ResultKind) -> Placeholder {
    match kind {
        ResultKind::Unit => Placeholder::Unit,
        ResultKind::Boolean => Placeholder::False,
        ResultKind::Reference => Placeholder::Null,
        ResultKind::Nothing => Placeholder::Unreachable,
        numeric => Placeholder::Zero(numeric),
    }
}

/// Placeholder for the highest-precedence kind among `kinds`.
///
/// Ties inside the numeric group keep the first candidate given.
pub fn placeholder_for_candidates(kinds: &[ResultKind]) -> Option<Placeholder> {
    kinds
        .iter()
        .copied()
        .enumerate()
        .min_by_key(|(idx, k)| (k.rank(), *idx))
        .map(|(_, k)| placeholder_for(k))
}

//! Text and JSON rendering of elision decisions.

use std::fmt::Write as _;

use serde::Serialize;
use elide_core::{named_levels, ElideError, Level, Result};

use crate::policy::{DecisionRecord, ElisionDecision, KeepReason};

fn describe(level: Level) -> String {
    match level.name() {
        Some(name) => format!("{level} ({name})"),
        None => level.to_string(),
    }
}

pub fn render_levels() -> String {
    let mut out = String::new();
    for (name, level) in named_levels() {
        let _ = writeln!(out, "{name:<10} {level}");
    }
    out
}

pub fn render_text(threshold: Level, records: &[DecisionRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "threshold: {}", describe(threshold));
    for r in records {
        let level = r.level.map(describe).unwrap_or_else(|| "untagged".into());
        match &r.decision {
            ElisionDecision::Elide { placeholder: Some(p) } => {
                let _ = writeln!(out, "ELIDE {} level={level} -> {p}", r.id);
            }
            ElisionDecision::Elide { placeholder: None } => {
                let _ = writeln!(out, "ELIDE {} level={level}", r.id);
            }
            ElisionDecision::Keep { reason: KeepReason::Untagged } => {
                let _ = writeln!(out, "KEEP  {} untagged", r.id);
            }
            ElisionDecision::Keep { reason: KeepReason::AtOrAboveThreshold } => {
                let _ = writeln!(out, "KEEP  {} level={level}", r.id);
            }
        }
    }
    out
}

#[derive(Serialize)]
struct JsonReport<'a> {
    threshold: Level,
    threshold_name: Option<&'static str>,
    declarations: &'a [DecisionRecord],
}

pub fn render_json(threshold: Level, records: &[DecisionRecord]) -> Result<String> {
    let report = JsonReport {
        threshold,
        threshold_name: threshold.name(),
        declarations: records,
    };
    serde_json::to_string_pretty(&report)
        .map(|s| s + "\n")
        .map_err(|e| ElideError::Config(format!("report serialization failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use elide_core::Placeholder;

    fn records() -> Vec<DecisionRecord> {
        vec![
            DecisionRecord {
                id: "log.fine".into(),
                level: Some(Level::FINE),
                decision: ElisionDecision::Elide { placeholder: Some(Placeholder::Unit) },
            },
            DecisionRecord {
                id: "main".into(),
                level: None,
                decision: ElisionDecision::Keep { reason: KeepReason::Untagged },
            },
        ]
    }

    #[test]
    fn text_report_names_levels() {
        let out = render_text(Level::INFO, &records());
        assert_eq!(
            out,
            "threshold: 800 (INFO)\nELIDE log.fine level=500 (FINE) -> ()\nKEEP  main untagged\n"
        );
    }

    #[test]
    fn json_report_flattens_decision() {
        let out = render_json(Level::INFO, &records()).unwrap_or_default();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap_or_default();
        assert_eq!(v["threshold"], 800);
        assert_eq!(v["threshold_name"], "INFO");
        assert_eq!(v["declarations"][0]["decision"], "elide");
        assert_eq!(v["declarations"][0]["placeholder"], "unit");
        assert_eq!(v["declarations"][1]["reason"], "untagged");
    }

    #[test]
    fn level_table_lists_aliases() {
        let out = render_levels();
        assert!(out.contains("MAXIMUM"));
        assert!(out.contains("2147483647"));
    }
}

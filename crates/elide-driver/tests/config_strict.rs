#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use elide_core::{ElideError, Level, ResultKind};
use elide_driver::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
elide_below: INFO
declarations:
  - id: "app.Log.fine"
    levle: 500 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.threshold().unwrap(), Level::ALL);
    assert!(cfg.declarations.is_empty());
}

#[test]
fn threshold_accepts_name_integer_and_quoted_integer() {
    for (raw, want) in [("INFO", 800), ("700", 700), ("\"-3\"", -3), ("MAXIMUM", i32::MAX)] {
        let s = format!("version: 1\nelide_below: {raw}\n");
        let cfg = config::load_from_str(&s).expect("must parse");
        assert_eq!(cfg.threshold().unwrap(), Level(want), "{raw}");
    }
}

#[test]
fn unknown_threshold_name_is_reported() {
    let err = config::load_from_str("version: 1\nelide_below: info\n").expect_err("must fail");
    assert_eq!(err, ElideError::UnknownLevelName("info".into()));
}

#[test]
fn out_of_range_threshold_rejected() {
    let err = config::load_from_str("version: 1\nelide_below: 4294967296\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err, ElideError::UnsupportedVersion(2));
}

#[test]
fn duplicate_declaration_ids_rejected() {
    let bad = r#"
version: 1
declarations:
  - id: "a"
    level: 1
  - id: "a"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("duplicate declaration id: a"));
}

#[test]
fn level_must_be_a_literal_integer() {
    let bad = r#"
version: 1
declarations:
  - id: "a"
    level: FINE
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_CONFIG");
}

#[test]
fn returns_accepts_one_kind_or_candidates() {
    let ok = r#"
version: 1
declarations:
  - id: "a"
    level: 500
    returns: unit
  - id: "b"
    level: 500
    returns: [reference, nothing]
  - id: "c"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    let decls = cfg.declarations();
    assert_eq!(decls[0].returns, vec![ResultKind::Unit]);
    assert_eq!(decls[1].returns, vec![ResultKind::Reference, ResultKind::Nothing]);
    assert_eq!(decls[2].level, None);
    assert!(decls[2].returns.is_empty());
}

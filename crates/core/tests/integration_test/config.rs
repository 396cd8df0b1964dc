//! Tests for building a Configuration from TOML documents.

use athena_executor_core::*;

const BASE: &str = r#"
region = "eu-west-3"
output_location = "s3://bucket/results"
workgroup = "primary"
database = "default"
"#;

const AWS_PROFILE_AUTH: &str = r#"
[auth]
mode = "aws_profile"
profile = "test-profile"
"#;

fn build(text: &str) -> Result<Configuration, ConfigError> {
    let doc: toml::Table = toml::from_str(text).expect("valid toml");
    Configuration::build(&doc)
}

#[test]
fn test_ssl_and_logging_defaults() {
    let cfg = build(&format!("{BASE}{AWS_PROFILE_AUTH}")).unwrap();

    assert!(!cfg.ssl().disable_cert_checking);
    assert_eq!(cfg.logging().level, "INFO");
    assert!(cfg.logging().file_logging);
    assert_eq!(cfg.logging().log_file, "logs/athena-executor.log");
}

#[test]
fn test_ssl_cert_checking_disabled() {
    let cfg = build(&format!(
        "{BASE}{AWS_PROFILE_AUTH}\n[ssl]\ndisable_cert_checking = true\n"
    ))
    .unwrap();

    assert!(cfg.ssl().disable_cert_checking);
}

#[test]
fn test_custom_logging() {
    let cfg = build(&format!(
        "{BASE}{AWS_PROFILE_AUTH}\n[logging]\nlevel = \"DEBUG\"\nfile_logging = false\nlog_file = \"custom-logs/app.log\"\n"
    ))
    .unwrap();

    assert_eq!(cfg.logging().level, "DEBUG");
    assert!(!cfg.logging().file_logging);
    assert_eq!(cfg.logging().log_file, "custom-logs/app.log");
}

#[test]
fn test_full_user_password_configuration() {
    let text = format!(
        "{BASE}\n[auth]\nmode = \"user_password\"\nuser = \"testuser\"\npassword = \"testpass\"\n\
         \n[ssl]\ndisable_cert_checking = false\n\
         \n[logging]\nlevel = \"WARN\"\nfile_logging = true\nlog_file = \"logs/test.log\"\n"
    );
    let cfg = build(&text).unwrap();

    assert_eq!(cfg.region(), "eu-west-3");
    assert_eq!(cfg.output_location(), "s3://bucket/results");
    assert_eq!(cfg.workgroup(), "primary");
    assert_eq!(cfg.database(), "default");

    assert_eq!(cfg.auth_mode(), AuthMode::UserPassword);
    match cfg.auth() {
        Auth::UserPassword { user, password } => {
            assert_eq!(user, "testuser");
            assert_eq!(password, "testpass");
        }
        other => panic!("expected user/password auth, got {:?}", other),
    }

    assert!(!cfg.ssl().disable_cert_checking);
    assert_eq!(cfg.logging().level, "WARN");
    assert!(cfg.logging().file_logging);
    assert_eq!(cfg.logging().log_file, "logs/test.log");
}

#[test]
fn test_missing_required_keys_are_named() {
    for key in ["region", "output_location", "workgroup", "database"] {
        let text: String = BASE
            .lines()
            .filter(|line| !line.starts_with(&format!("{key} ")))
            .map(|line| format!("{line}\n"))
            .collect();
        let err = build(&format!("{text}{AWS_PROFILE_AUTH}")).unwrap_err();
        assert_eq!(err, ConfigError::Missing { key: key.to_string() });
    }
}

#[test]
fn test_missing_auth_mode() {
    let err = build(BASE).unwrap_err();
    assert_eq!(err.key(), Some("auth.mode"));
    assert!(matches!(err, ConfigError::Missing { .. }));
}

#[test]
fn test_user_password_requires_both_fields() {
    let err = build(&format!("{BASE}[auth]\nmode = \"user_password\"\nuser = \"u\"\n")).unwrap_err();
    assert_eq!(err, ConfigError::Missing { key: "auth.password".into() });

    let err = build(&format!("{BASE}[auth]\nmode = \"user_password\"\npassword = \"p\"\n")).unwrap_err();
    assert_eq!(err, ConfigError::Missing { key: "auth.user".into() });
}

#[test]
fn test_aws_profile_requires_profile() {
    let err = build(&format!("{BASE}[auth]\nmode = \"aws_profile\"\nuser = \"u\"\n")).unwrap_err();
    assert_eq!(err, ConfigError::Missing { key: "auth.profile".into() });
}

#[test]
fn test_mixed_case_auth_mode_matches_lowercase() {
    let upper = build(&format!("{BASE}[auth]\nmode = \"AWS_PROFILE\"\nprofile = \"p\"\n")).unwrap();
    let lower = build(&format!("{BASE}[auth]\nmode = \"aws_profile\"\nprofile = \"p\"\n")).unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_unrecognized_and_blank_auth_modes_fail() {
    for mode in ["kerberos", "", "   "] {
        let err = build(&format!("{BASE}[auth]\nmode = \"{mode}\"\nprofile = \"p\"\n")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedAuthMode { .. }), "mode {mode:?}");
        assert_eq!(err.key(), Some("auth.mode"));
    }
}

#[test]
fn test_optional_key_with_wrong_type_fails() {
    let err = build(&format!(
        "{BASE}{AWS_PROFILE_AUTH}\n[logging]\nfile_logging = \"yes\"\n"
    ))
    .unwrap_err();
    assert_eq!(err.key(), Some("logging.file_logging"));
}

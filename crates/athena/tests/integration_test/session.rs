//! Real Athena round trips driven by a TOML profile.

use athena_executor_athena::AthenaConnector;
use athena_executor_core::{parse_script, Configuration, Connector, ExecutionOutcome, SqlSession};

/// Load the profile named by `ATHENA_EXECUTOR_TEST_CONFIG`.
fn test_config() -> Configuration {
    let path = std::env::var("ATHENA_EXECUTOR_TEST_CONFIG")
        .expect("ATHENA_EXECUTOR_TEST_CONFIG must point to a TOML profile");
    let text = std::fs::read_to_string(&path).expect("readable config");
    Configuration::from_toml_str(&text).expect("valid config")
}

/// Run with: `cargo test -p athena-executor-athena -- --ignored`
///
/// Requires `ATHENA_EXECUTOR_TEST_CONFIG` and working AWS credentials for the
/// auth mode configured in that file.
#[tokio::test]
#[ignore]
async fn test_real_select() {
    let config = test_config();
    let session = AthenaConnector::new()
        .connect(&config)
        .await
        .expect("connect to Athena");

    let stmts = parse_script("-- smoke test\nSELECT 1 AS test_column;\n");
    assert_eq!(stmts.len(), 1);

    let outcome = session.execute(&stmts[0]).await.expect("query succeeds");
    assert_eq!(outcome, ExecutionOutcome::ResultSet);
}

#[tokio::test]
#[ignore]
async fn test_real_invalid_sql_fails() {
    let config = test_config();
    let session = AthenaConnector::new()
        .connect(&config)
        .await
        .expect("connect to Athena");

    let stmts = parse_script("SELEKT nothing FROM nowhere;");
    let err = session.execute(&stmts[0]).await.unwrap_err();
    assert!(err.to_string().contains("failed") || err.to_string().contains("AWS SDK error"));
}

use std::path::PathBuf;

use clap::Parser;

/// Example profile shown in the long help and after usage errors.
pub const EXAMPLE_CONFIG: &str = r#"Example configuration (TOML):

  region = "eu-west-3"
  output_location = "s3://bucket/query-results"
  workgroup = "primary"
  database = "default"

  [auth]
  mode = "aws_profile"  # or "user_password" with user = "..." and password = "..."
  profile = "your-profile"

  [ssl]
  # Disable certificate verification (NOT recommended)
  disable_cert_checking = false

  [logging]
  level = "INFO"  # DEBUG, INFO, WARN, ERROR
  file_logging = true
  log_file = "logs/athena-executor.log"
"#;

/// Execute the statements of a SQL file against AWS Athena, in order.
///
/// Comments are stripped, the script is split on `;`, and each statement
/// runs only after the previous one succeeded. The first failure stops the run.
#[derive(Parser, Debug)]
#[command(
    name = "athena-executor",
    version,
    about = "Execute a SQL script against AWS Athena",
    after_long_help = EXAMPLE_CONFIG
)]
pub struct CliArgs {
    /// Path to the SQL file containing the statements
    pub sql_file: PathBuf,

    /// Path to the TOML configuration file
    pub config_file: PathBuf,

    /// Per-statement timeout in seconds
    #[arg(long, env = "ATHENA_QUERY_TIMEOUT", default_value_t = 300)]
    pub query_timeout: u64,
}

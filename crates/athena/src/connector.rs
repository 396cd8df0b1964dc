//! Opening Athena sessions from a validated configuration.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_athena::config::Region;
use tracing::{debug, info, warn};

use athena_executor_core::{Auth, BoxError, Configuration, Connector};

use crate::client::{AthenaError, AthenaSession, DEFAULT_QUERY_TIMEOUT_SECS};

/// Provider name attached to static credentials from the config file.
const CREDENTIALS_PROVIDER_NAME: &str = "athena-executor-config";

/// Builds [`AthenaSession`]s.
///
/// `connect` loads the AWS SDK config for the configured region and auth
/// mode, then checks that the workgroup is reachable so bad credentials fail
/// before any statement runs.
#[derive(Debug, Clone)]
pub struct AthenaConnector {
    query_timeout: Duration,
}

impl Default for AthenaConnector {
    fn default() -> Self {
        Self {
            query_timeout: Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS),
        }
    }
}

impl AthenaConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeout applied to every statement run through the opened session.
    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    async fn open(&self, config: &Configuration) -> Result<AthenaSession, AthenaError> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region().to_string()));

        match config.auth() {
            Auth::UserPassword { user, password } => {
                debug!(access_key_id = %user, "Using static credentials");
                loader = loader.credentials_provider(Credentials::new(
                    user,
                    password,
                    None, // session token
                    None, // expiry
                    CREDENTIALS_PROVIDER_NAME,
                ));
            }
            Auth::AwsProfile { profile } => {
                debug!(profile = %profile, "Using shared AWS profile");
                loader = loader.profile_name(profile);
            }
        }

        if config.ssl().disable_cert_checking {
            warn!("disable_cert_checking is set but the AWS SDK always verifies certificates");
        }

        let sdk_config = loader.load().await;
        let client = aws_sdk_athena::Client::new(&sdk_config);

        client
            .get_work_group()
            .work_group(config.workgroup())
            .send()
            .await
            .map_err(|e| AthenaError::AwsSdk(e.to_string()))?;

        info!(
            region = %config.region(),
            database = %config.database(),
            workgroup = %config.workgroup(),
            auth = %config.auth_mode(),
            "Athena session opened"
        );

        Ok(AthenaSession::new(
            client,
            config.database(),
            config.workgroup(),
            config.output_location(),
        )
        .with_timeout(self.query_timeout))
    }
}

#[async_trait]
impl Connector for AthenaConnector {
    type Session = AthenaSession;

    async fn connect(&self, config: &Configuration) -> Result<AthenaSession, BoxError> {
        Ok(self.open(config).await?)
    }
}

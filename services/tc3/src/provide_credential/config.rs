use crate::{Config, Credential};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use tcsign_core::{Context, ProvideCredential, Result};

/// Static configuration based loader.
///
/// Environment values take precedence over the supplied config, so a
/// deployed process can override build-time defaults without code changes.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new ConfigCredentialProvider.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let env_config = Config::from_env(ctx);
        let config = self.config.as_ref();

        let secret_id = env_config.secret_id.or_else(|| config.secret_id.clone());
        let secret_key = env_config.secret_key.or_else(|| config.secret_key.clone());
        let security_token = env_config
            .security_token
            .or_else(|| config.security_token.clone());

        match (&secret_id, &secret_key) {
            (Some(secret_id), Some(secret_key)) => {
                debug!("loading credential from config");
                Ok(Some(Credential {
                    secret_id: secret_id.clone(),
                    secret_key: secret_key.clone(),
                    security_token,
                    expires_in: None,
                }))
            }
            _ => {
                debug!("incomplete config, skipping");
                Ok(None)
            }
        }
    }
}

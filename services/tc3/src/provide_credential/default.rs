use crate::{Config, Credential};
use async_trait::async_trait;
use std::sync::Arc;
use tcsign_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// Default loader for Tencent Cloud credentials.
///
/// This loader will try to load credentials in the following order:
/// 1. From the supplied configuration (merged with the environment)
/// 2. From environment variables alone
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider.
    pub fn new(config: Config) -> Self {
        let chain = ProvideCredentialChain::new()
            .push(super::ConfigCredentialProvider::new(Arc::new(config)))
            .push(super::EnvCredentialProvider::new());

        Self { chain }
    }
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use std::collections::HashMap;
    use tcsign_core::StaticEnv;

    #[tokio::test]
    async fn test_config_takes_precedence() -> Result<()> {
        let ctx = Context::new();
        let provider = DefaultCredentialProvider::new(Config {
            secret_id: Some("config_secret_id".to_string()),
            secret_key: Some("config_secret_key".to_string()),
            ..Default::default()
        });

        let cred = provider.provide_credential(&ctx).await?.expect("must load");
        assert_eq!(cred.secret_id, "config_secret_id");
        Ok(())
    }

    #[tokio::test]
    async fn test_falls_back_to_env() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (
                    TENCENTCLOUD_SECRET_ID.to_string(),
                    "env_secret_id".to_string(),
                ),
                (
                    TENCENTCLOUD_SECRET_KEY.to_string(),
                    "env_secret_key".to_string(),
                ),
            ]),
        });
        let provider = DefaultCredentialProvider::default();

        let cred = provider.provide_credential(&ctx).await?.expect("must load");
        assert_eq!(cred.secret_id, "env_secret_id");
        Ok(())
    }

    #[tokio::test]
    async fn test_nothing_configured_yields_none() -> Result<()> {
        let ctx = Context::new();
        let provider = DefaultCredentialProvider::default();
        assert!(provider.provide_credential(&ctx).await?.is_none());
        Ok(())
    }
}

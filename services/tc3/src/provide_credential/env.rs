use crate::{constants::*, Credential};
use async_trait::async_trait;
use tcsign_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads Tencent Cloud credentials from environment
/// variables.
///
/// This provider looks for the following environment variables:
/// - `TENCENTCLOUD_SECRET_ID`: the secret ID
/// - `TENCENTCLOUD_SECRET_KEY`: the secret key
/// - `TENCENTCLOUD_TOKEN` or `TENCENTCLOUD_SECURITY_TOKEN`: the security
///   token (optional)
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let secret_id = envs.get(TENCENTCLOUD_SECRET_ID);
        let secret_key = envs.get(TENCENTCLOUD_SECRET_KEY);

        match (secret_id, secret_key) {
            (Some(id), Some(key)) => {
                let security_token = envs
                    .get(TENCENTCLOUD_TOKEN)
                    .or_else(|| envs.get(TENCENTCLOUD_SECURITY_TOKEN))
                    .cloned();

                Ok(Some(Credential {
                    secret_id: id.clone(),
                    secret_key: key.clone(),
                    security_token,
                    expires_in: None,
                }))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tcsign_core::StaticEnv;

    #[tokio::test]
    async fn test_env_credential_provider() -> Result<()> {
        let envs = HashMap::from([
            (
                TENCENTCLOUD_SECRET_ID.to_string(),
                "test_secret_id".to_string(),
            ),
            (
                TENCENTCLOUD_SECRET_KEY.to_string(),
                "test_secret_key".to_string(),
            ),
        ]);

        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?.expect("must load");
        assert_eq!(cred.secret_id, "test_secret_id");
        assert_eq!(cred.secret_key, "test_secret_key");
        assert!(cred.security_token.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_with_security_token() -> Result<()> {
        let envs = HashMap::from([
            (
                TENCENTCLOUD_SECRET_ID.to_string(),
                "test_secret_id".to_string(),
            ),
            (
                TENCENTCLOUD_SECRET_KEY.to_string(),
                "test_secret_key".to_string(),
            ),
            (
                TENCENTCLOUD_TOKEN.to_string(),
                "test_security_token".to_string(),
            ),
        ]);

        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        let cred = provider.provide_credential(&ctx).await?.expect("must load");
        assert_eq!(cred.security_token.as_deref(), Some("test_security_token"));

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> Result<()> {
        // Only the secret ID is set.
        let envs = HashMap::from([(
            TENCENTCLOUD_SECRET_ID.to_string(),
            "test_secret_id".to_string(),
        )]);

        let ctx = Context::new().with_env(StaticEnv { envs });

        let provider = EnvCredentialProvider::new();
        assert!(provider.provide_credential(&ctx).await?.is_none());

        Ok(())
    }
}

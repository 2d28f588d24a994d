use crate::constants::*;
use tcsign_core::utils::Redact;
use tcsign_core::Context;
use std::fmt::{Debug, Formatter};

/// Config for Tencent Cloud services.
///
/// Values are supplied at configuration time as opaque strings; nothing here
/// is mutated after startup.
#[derive(Clone, Default)]
pub struct Config {
    /// Region for Tencent Cloud services
    pub region: Option<String>,
    /// Secret ID (Access Key ID)
    pub secret_id: Option<String>,
    /// Secret Key (Secret Access Key)
    pub secret_key: Option<String>,
    /// Security token for temporary credentials
    pub security_token: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("secret_id", &Redact::from(&self.secret_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("security_token", &Redact::from(&self.security_token))
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            region: ctx.env_var(TENCENTCLOUD_REGION),
            secret_id: ctx.env_var(TENCENTCLOUD_SECRET_ID),
            secret_key: ctx.env_var(TENCENTCLOUD_SECRET_KEY),
            security_token: ctx
                .env_var(TENCENTCLOUD_TOKEN)
                .or_else(|| ctx.env_var(TENCENTCLOUD_SECURITY_TOKEN)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tcsign_core::StaticEnv;

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (TENCENTCLOUD_SECRET_ID.to_string(), "id".to_string()),
                (TENCENTCLOUD_SECRET_KEY.to_string(), "key".to_string()),
                (TENCENTCLOUD_SECURITY_TOKEN.to_string(), "token".to_string()),
            ]),
        });

        let config = Config::from_env(&ctx);
        assert_eq!(config.secret_id.as_deref(), Some("id"));
        assert_eq!(config.secret_key.as_deref(), Some("key"));
        assert_eq!(config.security_token.as_deref(), Some("token"));
        assert!(config.region.is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config {
            secret_id: Some("AKIDz8krbsJ5yKBZQpn74WFkmLPx3".to_string()),
            secret_key: Some("Gu5t9xGARNpq86cd98joQYCN3".to_string()),
            ..Default::default()
        };
        let out = format!("{config:?}");
        assert!(!out.contains("Gu5t9xGARNpq86cd98joQYCN3"));
    }
}

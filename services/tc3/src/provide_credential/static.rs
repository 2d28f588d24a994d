use crate::Credential;
use async_trait::async_trait;
use tcsign_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides credentials supplied at initialization
/// time.
///
/// This is the seam for callers whose secret material comes from a build
/// configuration or another external source: inject the two opaque strings
/// here instead of hardcoding them next to the signing code.
#[derive(Debug)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with the given credentials.
    pub fn new(secret_id: &str, secret_key: &str) -> Self {
        Self {
            credential: Credential {
                secret_id: secret_id.to_string(),
                secret_key: secret_key.to_string(),
                security_token: None,
                expires_in: None,
            },
        }
    }

    /// Create a new StaticCredentialProvider with a security token.
    pub fn with_security_token(secret_id: &str, secret_key: &str, security_token: &str) -> Self {
        Self {
            credential: Credential {
                secret_id: secret_id.to_string(),
                secret_key: secret_key.to_string(),
                security_token: Some(security_token.to_string()),
                expires_in: None,
            },
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

use tcsign_core::time::{now, DateTime};
use tcsign_core::utils::Redact;
use tcsign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential for Tencent Cloud API calls.
///
/// Immutable once loaded; the signer only reads it, so concurrent signing
/// operations share it without synchronization.
#[derive(Default, Clone)]
pub struct Credential {
    /// Secret ID
    pub secret_id: String,
    /// Secret Key
    pub secret_key: String,
    /// Security token for temporary credentials
    pub security_token: Option<String>,
    /// Expiration time for this credential
    pub expires_in: Option<DateTime>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret_id", &Redact::from(&self.secret_id))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("security_token", &Redact::from(&self.security_token))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        if self.secret_id.is_empty() || self.secret_key.is_empty() {
            return false;
        }
        // Take 120s as buffer to avoid edge cases.
        if let Some(valid) = self
            .expires_in
            .map(|v| v > now() + chrono::TimeDelta::try_minutes(2).expect("in bounds"))
        {
            return valid;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_credential_is_invalid() {
        assert!(!Credential::default().is_valid());
        assert!(!Credential {
            secret_id: "AKIDexample".to_string(),
            ..Default::default()
        }
        .is_valid());
    }

    #[test]
    fn test_expired_credential_is_invalid() {
        let cred = Credential {
            secret_id: "AKIDexample".to_string(),
            secret_key: "Secretkey".to_string(),
            security_token: Some("token".to_string()),
            expires_in: Some(now() - chrono::TimeDelta::try_minutes(1).expect("in bounds")),
        };
        assert!(!cred.is_valid());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential {
            secret_id: "AKIDz8krbsJ5yKBZQpn74WFkmLPx3".to_string(),
            secret_key: "Gu5t9xGARNpq86cd98joQYCN3".to_string(),
            security_token: None,
            expires_in: None,
        };
        let out = format!("{cred:?}");
        assert!(!out.contains("Gu5t9xGARNpq86cd98joQYCN3"));
        assert!(!out.contains("AKIDz8krbsJ5yKBZQpn74WFkmLPx3"));
    }
}

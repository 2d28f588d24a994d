use crate::{Context, Result};
use std::fmt::Debug;

/// SigningCredential is implemented by credential types a signer can use.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is still usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used by the signer to load credentials.
///
/// Services may require different credentials to sign requests; Tencent Cloud
/// needs a secret id and a secret key, optionally with a security token.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load credential from the current environment.
    ///
    /// Returns `Ok(None)` when this provider has nothing to offer, letting a
    /// chain fall through to the next provider.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by the signer to build the signed request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` is the exact byte sequence the caller will transmit. Schemes
    /// that bind the payload into the signature must hash these bytes and
    /// nothing else; re-serializing a copy can reorder fields and break the
    /// signature without any local error.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &[u8],
        cred: Option<&Self::Credential>,
    ) -> Result<()>;
}

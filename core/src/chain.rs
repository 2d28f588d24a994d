use crate::{Context, ProvideCredential, Result};
use log::debug;
use std::fmt::Debug;
use std::sync::Arc;

/// A chain of credential providers tried in order.
///
/// The first provider that returns a credential wins; providers that return
/// `Ok(None)` are skipped silently.
pub struct ProvideCredentialChain<C: Send + Sync + Unpin + 'static> {
    providers: Vec<Arc<dyn ProvideCredential<Credential = C>>>,
}

impl<C: Send + Sync + Unpin + 'static> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .finish()
    }
}

impl<C: Send + Sync + Unpin + 'static> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Send + Sync + Unpin + 'static> ProvideCredentialChain<C> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Append a provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }
}

#[async_trait::async_trait]
impl<C: Send + Sync + Unpin + 'static> ProvideCredential for ProvideCredentialChain<C> {
    type Credential = C;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        for provider in &self.providers {
            debug!("trying credential provider: {provider:?}");
            if let Some(cred) = provider.provide_credential(ctx).await? {
                return Ok(Some(cred));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct Fixed(Option<&'static str>);

    #[async_trait]
    impl ProvideCredential for Fixed {
        type Credential = &'static str;

        async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn test_chain_returns_first_some() {
        let chain = ProvideCredentialChain::new()
            .push(Fixed(None))
            .push(Fixed(Some("second")))
            .push(Fixed(Some("third")));

        let ctx = Context::new();
        let got = chain.provide_credential(&ctx).await.expect("must succeed");
        assert_eq!(got, Some("second"));
    }

    #[tokio::test]
    async fn test_empty_chain_returns_none() {
        let chain: ProvideCredentialChain<&'static str> = ProvideCredentialChain::new();
        let ctx = Context::new();
        assert_eq!(chain.provide_credential(&ctx).await.expect("ok"), None);
    }
}

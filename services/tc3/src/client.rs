use crate::constants::{CONTENT_TYPE_JSON, X_TC_ACTION, X_TC_REGION, X_TC_VERSION};
use crate::{Config, Credential, RequestSigner};
use bytes::Bytes;
use http::header;
use log::debug;
use tcsign_core::{Context, Error, ProvideCredential, Result, Signer};

/// Client dispatches signed POST calls to one Tencent Cloud service.
///
/// Each call independently derives its canonical request, signing key and
/// Authorization header from the credential and the payload; nothing is
/// shared between concurrent calls, so a client can be cloned and used from
/// many tasks at once.
///
/// The returned future resolves exactly once, to either the raw response
/// body or a classified error. Response JSON is the caller's to decode, and
/// so is any retry policy.
///
/// # Known limitation
///
/// Clock skew between client and server beyond the API's tolerance window
/// surfaces as an authentication rejection from the server; the signer has
/// no way to detect it locally.
#[derive(Clone, Debug)]
pub struct Client {
    ctx: Context,
    signer: Signer<Credential>,

    endpoint: String,
    version: String,
    region: Option<String>,
}

impl Client {
    /// Create a new client for a Tencent Cloud service.
    ///
    /// `service` is the API family name, e.g. `ocr`; it determines both the
    /// endpoint (`<service>.tencentcloudapi.com`) and the credential scope.
    /// `version` is the API version date, e.g. `2018-11-19`.
    ///
    /// The region defaults to `TENCENTCLOUD_REGION` from the context's
    /// environment if set.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = Credential>,
        service: &str,
        version: &str,
    ) -> Self {
        let signer = Signer::new(ctx.clone(), provider, RequestSigner::new(service));
        let region = Config::from_env(&ctx).region;

        Self {
            ctx,
            signer,
            endpoint: format!("https://{service}.tencentcloudapi.com"),
            version: version.to_string(),
            region,
        }
    }

    /// Set the region sent as `X-TC-Region`, e.g. `ap-guangzhou`.
    ///
    /// Overrides any region picked up from the environment.
    pub fn with_region(mut self, region: &str) -> Self {
        self.region = Some(region.to_string());
        self
    }

    /// Call an API action with a JSON payload, returning the raw response
    /// body.
    ///
    /// `payload` must be the final serialized form of the request; the same
    /// bytes are hashed into the signature and written to the connection.
    pub async fn call(&self, action: &str, payload: Bytes) -> Result<String> {
        let mut builder = http::Request::builder()
            .method(http::Method::POST)
            .uri(self.endpoint.as_str())
            .header(header::CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(X_TC_ACTION, action)
            .header(X_TC_VERSION, self.version.as_str());
        if let Some(region) = &self.region {
            builder = builder.header(X_TC_REGION, region.as_str());
        }
        let req = builder.body(())?;

        let (mut parts, _) = req.into_parts();
        self.signer.sign(&mut parts, &payload).await?;

        debug!("dispatching {action} to {}", self.endpoint);
        let resp = self
            .ctx
            .http_send(http::Request::from_parts(parts, payload))
            .await?;

        let status = resp.status();
        let body = resp.into_body();
        if status != http::StatusCode::OK {
            return Err(Error::status_unexpected(format!(
                "server returned status {}: {}",
                status.as_u16(),
                String::from_utf8_lossy(&body)
            )));
        }

        String::from_utf8(body.to_vec())
            .map_err(|e| Error::unexpected("response body is not valid utf-8").with_source(e))
    }
}

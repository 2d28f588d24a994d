//! Reqwest backed [`HttpSend`] implementation.
//!
//! This is the production transport for tcsign. Connection failures, TLS
//! failures and timeouts all surface as [`tcsign_core::ErrorKind::TransportFailed`];
//! reading the response body to completion is part of the send, so a
//! truncated body is reported the same way rather than succeeding with
//! partial bytes.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use std::time::Duration;
use tcsign_core::{Error, HttpSend, Result};

/// HttpSend implementation backed by a [`reqwest::Client`].
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: reqwest::Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Create a ReqwestHttpSend whose connections time out after `timeout`.
    ///
    /// The timeout bounds only the network step; it cannot detect clock skew
    /// between client and server, which the server reports as an
    /// authentication failure instead.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .build()
            .map_err(|e| Error::config_invalid("failed to build reqwest client").with_source(e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = reqwest::Request::try_from(req)
            .map_err(|e| Error::request_invalid("failed to convert request").with_source(e))?;

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport_failed(format!("request failed: {e}")).with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| {
                Error::transport_failed("failed to read response body").with_source(e)
            })?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcsign_core::ErrorKind;

    #[tokio::test]
    async fn test_connection_refused_is_transport_failure() {
        // Port 1 on localhost is essentially never listening.
        let send = ReqwestHttpSend::default();
        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri("http://127.0.0.1:1/")
            .body(Bytes::new())
            .expect("request must be valid");

        let err = send.http_send(req).await.expect_err("must fail");
        assert_eq!(err.kind(), ErrorKind::TransportFailed);
    }
}

//! Tencent Cloud API signer (TC3-HMAC-SHA256).
//!
//! Signs requests against the `*.tencentcloudapi.com` API family and
//! dispatches them through a pluggable transport.
//!
//! ## Example
//!
//! ```no_run
//! use tcsign_core::{Context, Result};
//! use tcsign_http_send_reqwest::ReqwestHttpSend;
//! use tcsign_tc3::{Client, StaticCredentialProvider};
//!
//! # async fn example() -> Result<()> {
//! let ctx = Context::new().with_http_send(ReqwestHttpSend::default());
//! let provider = StaticCredentialProvider::new("secret_id", "secret_key");
//!
//! let client = Client::new(ctx, provider, "ocr", "2018-11-19").with_region("ap-guangzhou");
//! let body = client
//!     .call("IDCardOCR", r#"{"ImageBase64":"","CardSide":"FRONT"}"#.into())
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
pub use client::Client;

mod sign_request;
pub use sign_request::RequestSigner;

mod credential;
pub use credential::Credential;

mod config;
pub use config::Config;

mod provide_credential;
pub use provide_credential::ConfigCredentialProvider;
pub use provide_credential::DefaultCredentialProvider;
pub use provide_credential::EnvCredentialProvider;
pub use provide_credential::StaticCredentialProvider;

mod constants;

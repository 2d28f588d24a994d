//! Call the OCR service's IDCardOCR action with a signed request.
//!
//! Usage:
//!
//! ```shell
//! export TENCENTCLOUD_SECRET_ID=your_secret_id
//! export TENCENTCLOUD_SECRET_KEY=your_secret_key
//! cargo run --example idcard_ocr -- path/to/id_card.jpg
//! ```

use bytes::Bytes;
use serde::Serialize;
use tcsign_core::{Context, OsEnv, Result};
use tcsign_http_send_reqwest::ReqwestHttpSend;
use tcsign_tc3::{Client, Config, DefaultCredentialProvider};

/// Request body for the IDCardOCR action.
///
/// Serialized exactly once; the same bytes are hashed into the signature
/// and written to the connection.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct IdCardOcrRequest {
    image_base64: String,
    card_side: &'static str,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let image_path = std::env::args()
        .nth(1)
        .expect("usage: idcard_ocr <image path>");
    let image = std::fs::read(&image_path)?;

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let provider = DefaultCredentialProvider::new(Config::default());
    let client = Client::new(ctx, provider, "ocr", "2018-11-19").with_region("ap-guangzhou");

    let payload = serde_json::to_vec(&IdCardOcrRequest {
        image_base64: tcsign_core::hash::base64_encode(&image),
        card_side: "FRONT",
    })
    .map_err(|e| tcsign_core::Error::unexpected("failed to serialize request").with_source(e))?;

    let body = client.call("IDCardOCR", Bytes::from(payload)).await?;
    println!("{body}");

    Ok(())
}

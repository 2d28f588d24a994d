//! Constants for the TC3-HMAC-SHA256 scheme and Tencent Cloud environments.

/// Algorithm identifier carried in StringToSign and the Authorization header.
pub const TC3_ALGORITHM: &str = "TC3-HMAC-SHA256";
/// Prefix mixed into the secret key before the derivation chain starts.
pub const TC3_KEY_PREFIX: &str = "TC3";
/// Fixed terminator of the credential scope and the derivation chain.
pub const TC3_REQUEST: &str = "tc3_request";

/// Header names signed into the canonical request, ascending order.
///
/// The semicolon-joined form of this list is the SignedHeaders field of the
/// Authorization header.
pub const TC3_SIGNED_HEADERS: &str = "content-type;host";

/// Content type every Tencent Cloud API call carries. The charset parameter
/// is part of the signed value and must match the transmitted header exactly.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

// Protocol headers.
pub const X_TC_ACTION: &str = "x-tc-action";
pub const X_TC_REGION: &str = "x-tc-region";
pub const X_TC_TIMESTAMP: &str = "x-tc-timestamp";
pub const X_TC_TOKEN: &str = "x-tc-token";
pub const X_TC_VERSION: &str = "x-tc-version";

// Environment variable names.
pub const TENCENTCLOUD_SECRET_ID: &str = "TENCENTCLOUD_SECRET_ID";
pub const TENCENTCLOUD_SECRET_KEY: &str = "TENCENTCLOUD_SECRET_KEY";
pub const TENCENTCLOUD_TOKEN: &str = "TENCENTCLOUD_TOKEN";
pub const TENCENTCLOUD_SECURITY_TOKEN: &str = "TENCENTCLOUD_SECURITY_TOKEN";
pub const TENCENTCLOUD_REGION: &str = "TENCENTCLOUD_REGION";

use std::borrow::Cow;
use std::mem;

use crate::{Error, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use http::header::HeaderName;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;
use std::str::FromStr;

/// The working set a signer canonicalizes and writes back.
///
/// Built once per signing operation from the request parts; immutable inputs
/// in, one signed request out, no state survives the operation.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// HTTP query parameters, stored percent-decoded.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

/// Characters left bare when reassembling a query; everything outside the
/// unreserved set is escaped.
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn query_encode(s: &str) -> Cow<'_, str> {
    utf8_percent_encode(s, QUERY_ENCODE).into()
}

impl SigningRequest {
    /// Build a signing request from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTPS),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return them when applying back.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing request back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        let query_size = self.query_size();

        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = Some(self.scheme);
            uri_parts.authority = Some(self.authority);
            uri_parts.path_and_query = {
                let paq = if query_size == 0 {
                    self.path
                } else {
                    let mut s = self.path;
                    s.reserve(query_size + 1);

                    s.push('?');
                    for (i, (k, v)) in self.query.iter().enumerate() {
                        if i > 0 {
                            s.push('&');
                        }

                        s.push_str(&query_encode(k));
                        if !v.is_empty() {
                            s.push('=');
                            s.push_str(&query_encode(v));
                        }
                    }

                    s
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get query size.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.query
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
    }

    /// Convert sorted query to a canonical percent-encoded string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a=b&c=d"
    /// ```
    pub fn query_to_string(mut query: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        // Sort via param name.
        query.sort();

        for (idx, (k, v)) in query.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&query_encode(&k));
            if !v.is_empty() {
                s.push_str(sep);
                s.push_str(&query_encode(&v));
            }
        }

        s
    }

    /// Get header value by name.
    ///
    /// Returns empty string if header not found.
    #[inline]
    pub fn header_get_or_default(&self, key: &HeaderName) -> Result<&str> {
        match self.headers.get(key) {
            Some(v) => Ok(v.to_str()?),
            None => Ok(""),
        }
    }

    /// Normalize header value by trimming leading and trailing spaces.
    pub fn header_value_normalize(v: &mut HeaderValue) {
        let bs = v.as_bytes();

        let starting_index = bs.iter().position(|b| *b != b' ').unwrap_or(0);
        let ending_offset = bs.iter().rev().position(|b| *b != b' ').unwrap_or(0);
        let ending_index = bs.len() - ending_offset;

        // This can't fail because we started with a valid HeaderValue and then only trimmed spaces
        *v = HeaderValue::from_bytes(&bs[starting_index..ending_index])
            .expect("invalid header value")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults_path_to_root() {
        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri("https://ocr.tencentcloudapi.com")
            .body(())
            .expect("request must be valid");
        let (mut parts, _) = req.into_parts();

        let signing_req = SigningRequest::build(&mut parts).expect("must build");
        assert_eq!(signing_req.path, "/");
        assert_eq!(signing_req.authority.as_str(), "ocr.tencentcloudapi.com");
        assert!(signing_req.query.is_empty());
    }

    #[test]
    fn test_build_rejects_missing_authority() {
        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri("/relative")
            .body(())
            .expect("request must be valid");
        let (mut parts, _) = req.into_parts();

        assert!(SigningRequest::build(&mut parts).is_err());
    }

    #[test]
    fn test_apply_round_trips() {
        let req = http::Request::builder()
            .method(http::Method::POST)
            .uri("https://ocr.tencentcloudapi.com/?a=b")
            .header("content-type", "application/json; charset=utf-8")
            .body(())
            .expect("request must be valid");
        let (mut parts, _) = req.into_parts();

        let signing_req = SigningRequest::build(&mut parts).expect("must build");
        signing_req.apply(&mut parts).expect("must apply");

        assert_eq!(
            parts.uri.to_string(),
            "https://ocr.tencentcloudapi.com/?a=b"
        );
        assert_eq!(
            parts.headers.get("content-type").unwrap(),
            "application/json; charset=utf-8"
        );
    }

    #[test]
    fn test_apply_reencodes_query() {
        let req = http::Request::builder()
            .method(http::Method::GET)
            .uri("https://example.tencentcloudapi.com/?a=b%26c&sp=x%20y")
            .body(())
            .expect("request must be valid");
        let (mut parts, _) = req.into_parts();

        let signing_req = SigningRequest::build(&mut parts).expect("must build");
        // Stored decoded, reassembled encoded.
        assert_eq!(
            signing_req.query,
            vec![
                ("a".to_string(), "b&c".to_string()),
                ("sp".to_string(), "x y".to_string()),
            ]
        );
        signing_req.apply(&mut parts).expect("must apply");
        assert_eq!(parts.uri.query(), Some("a=b%26c&sp=x%20y"));
    }

    #[test]
    fn test_query_to_string_sorts() {
        let query = vec![
            ("c".to_string(), "d".to_string()),
            ("a".to_string(), "b".to_string()),
        ];
        assert_eq!(SigningRequest::query_to_string(query, "=", "&"), "a=b&c=d");
    }

    #[test]
    fn test_query_to_string_encodes_reserved() {
        let query = vec![("a".to_string(), "b&c=d".to_string())];
        assert_eq!(
            SigningRequest::query_to_string(query, "=", "&"),
            "a=b%26c%3Dd"
        );
    }

    #[test]
    fn test_header_value_normalize() {
        let mut v = HeaderValue::from_static("  spaced out  ");
        SigningRequest::header_value_normalize(&mut v);
        assert_eq!(v, "spaced out");
    }
}

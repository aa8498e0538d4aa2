// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! TB1-HMAC-SHA256 request signature.

use http::Method;
use log::debug;

use crate::hash::hex_hmac_sha256;
use crate::hash::hex_sha256;
use crate::hash::EMPTY_STRING_SHA256;
use crate::Credential;

/// Scheme name placed in front of the Authorization header value.
pub const ALGORITHM: &str = "TB1-HMAC-SHA256";

/// Path prefix of the signed namespace.
///
/// Always part of the canonical string, even when the request is dispatched
/// somewhere else.
pub const SIGNED_PATH_PREFIX: &str = "/api/v1";

/// Header carrying the content hash.
pub const TB_CONTENT_SHA256: &str = "tb-content-sha256";

/// Check whether requests with this method may carry a body.
pub fn method_has_body(method: &Method) -> bool {
    method == Method::POST || method == Method::PUT
}

/// Compute the content hash for a request.
///
/// Only a non-empty body of a POST or PUT is hashed. Everything else hashes
/// the empty string.
pub fn content_sha256(method: &Method, body: Option<&str>) -> String {
    match body {
        Some(body) if method_has_body(method) && !body.is_empty() => hex_sha256(body.as_bytes()),
        _ => EMPTY_STRING_SHA256.to_string(),
    }
}

/// Construct the canonical string.
///
/// ## Format
///
/// ```text
/// METHOD + "\n" +
/// "/api/v1" + Path + "\n" +
/// Query + "\n" +
/// "date:" + Date + "\n" +
/// "tb-content-sha256:" + ContentHash + "\n" +
/// ContentHash
/// ```
///
/// The content hash appears twice: once in the header block and once as the
/// trailing line.
pub fn canonical_string(
    method: &Method,
    path: &str,
    query: &str,
    date: &str,
    content_sha256: &str,
) -> String {
    let content_sha256 = content_sha256.trim();

    let mut s = String::with_capacity(256);
    s.push_str(&method.as_str().to_uppercase());
    s.push('\n');
    s.push_str(SIGNED_PATH_PREFIX);
    s.push_str(path.trim());
    s.push('\n');
    s.push_str(query.trim());
    s.push('\n');
    s.push_str("date:");
    s.push_str(date.trim());
    s.push('\n');
    s.push_str(TB_CONTENT_SHA256);
    s.push(':');
    s.push_str(content_sha256);
    s.push('\n');
    s.push_str(content_sha256);

    debug!("canonical string: {s:?}");
    s
}

/// Sign the request and build the Authorization header value:
/// `TB1-HMAC-SHA256 {partner_id}:{hex_hmac}`.
///
/// `path` is the logical path below `/api/v1` and `query` the already encoded
/// query string, exactly as sent on the wire.
pub fn sign(
    cred: &Credential,
    method: &Method,
    path: &str,
    query: &str,
    date: &str,
    content_sha256: &str,
) -> String {
    let s = canonical_string(method, path, query, date, content_sha256);
    let signature = hex_hmac_sha256(cred.signing_key.as_bytes(), s.as_bytes());

    format!("{ALGORITHM} {}:{signature}", cred.partner_id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const DATE: &str = "Mon, 01 Jan 2024 00:00:00 GMT";

    #[test]
    fn test_canonical_string() {
        let s = canonical_string(&Method::GET, "/balance", "", DATE, EMPTY_STRING_SHA256);

        assert_eq!(
            s,
            "GET\n/api/v1/balance\n\ndate:Mon, 01 Jan 2024 00:00:00 GMT\ntb-content-sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\ne3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_canonical_string_trims_inputs() {
        let trimmed = canonical_string(
            &Method::GET,
            "/accounts",
            "limit=50",
            DATE,
            EMPTY_STRING_SHA256,
        );
        let padded = canonical_string(
            &Method::GET,
            " /accounts ",
            " limit=50\n",
            "  Mon, 01 Jan 2024 00:00:00 GMT ",
            &format!(" {EMPTY_STRING_SHA256} "),
        );

        assert_eq!(trimmed, padded);
    }

    #[test]
    fn test_canonical_string_uppercases_method() {
        let method = Method::from_bytes(b"patch").unwrap();
        let s = canonical_string(&method, "/cards/1", "", DATE, EMPTY_STRING_SHA256);

        assert!(s.starts_with("PATCH\n/api/v1/cards/1\n"));
    }

    #[test]
    fn test_content_hash_appears_twice() {
        let hash = content_sha256(&Method::POST, Some(r#"{"amount":100,"currency":"EUR"}"#));
        let s = canonical_string(&Method::POST, "/holds", "", DATE, &hash);

        let lines: Vec<&str> = s.split('\n').collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], format!("tb-content-sha256:{hash}"));
        assert_eq!(lines[5], hash);
    }

    #[test]
    fn test_sign_example() {
        let cred = Credential::new("P1", "secret");
        let auth = sign(&cred, &Method::GET, "/balance", "", DATE, EMPTY_STRING_SHA256);

        assert_eq!(
            auth,
            "TB1-HMAC-SHA256 P1:136ce615e53fda34563d0b142fee0d8311dfee9b414b75546c9b12d02170c7d0"
        );
    }

    #[test]
    fn test_sign_with_query() {
        let cred = Credential::new("P1", "secret");
        let auth = sign(
            &cred,
            &Method::GET,
            "/accounts/42/history",
            "limit=50&skip=500",
            DATE,
            EMPTY_STRING_SHA256,
        );

        assert_eq!(
            auth,
            "TB1-HMAC-SHA256 P1:607c4174a056ad55f51567465f05e3ce48c8b088602f5db736a3d68a86e0dcd3"
        );
    }

    #[test]
    fn test_sign_with_body() {
        let cred = Credential::new("P1", "secret");
        let hash = content_sha256(&Method::POST, Some(r#"{"amount":100,"currency":"EUR"}"#));
        assert_eq!(
            hash,
            "f50d36c1739463e571da8e929fdeb3bc35c5bf86051c653d6a61deedcb10944e"
        );

        let auth = sign(&cred, &Method::POST, "/holds", "", DATE, &hash);
        assert_eq!(
            auth,
            "TB1-HMAC-SHA256 P1:9c7287eff175963d7fb9e3de8bb37d6102754454215fe2d844ba37128c3b2341"
        );
    }

    #[test]
    fn test_sign_is_deterministic() {
        let cred = Credential::new("P1", "secret");
        let a = sign(&cred, &Method::DELETE, "/holds/7", "", DATE, EMPTY_STRING_SHA256);
        let b = sign(&cred, &Method::DELETE, "/holds/7", "", DATE, EMPTY_STRING_SHA256);
        assert_eq!(a, b);

        let other = Credential::new("P1", "another-secret");
        let c = sign(&other, &Method::DELETE, "/holds/7", "", DATE, EMPTY_STRING_SHA256);
        assert_ne!(a, c);
    }

    #[test_case(Method::GET, Some("{\"a\":1}") ; "get ignores body")]
    #[test_case(Method::DELETE, Some("{\"a\":1}") ; "delete ignores body")]
    #[test_case(Method::POST, Some("") ; "post with empty body")]
    #[test_case(Method::PUT, None ; "put without body")]
    #[test_case(Method::GET, None ; "get without body")]
    fn test_content_sha256_empty(method: Method, body: Option<&str>) {
        assert_eq!(content_sha256(&method, body), EMPTY_STRING_SHA256);
    }

    #[test_case(Method::POST ; "post")]
    #[test_case(Method::PUT ; "put")]
    fn test_content_sha256_with_body(method: Method) {
        assert_eq!(
            content_sha256(&method, Some("{}x")),
            hex_sha256(b"{}x")
        );
    }
}

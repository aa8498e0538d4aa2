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

use http::uri::Authority;
use http::uri::Scheme;
use http::Uri;
use tbsign_core::Error;
use tbsign_core::Result;

/// BaseUrl is the parsed api endpoint of a client.
///
/// It is split once into scheme, authority and path prefix, so that
/// host-rewritten requests can reuse the same host without the prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    scheme: Scheme,
    authority: Authority,
    prefix: String,
}

impl BaseUrl {
    /// Parse an absolute url like `https://sandbox.tb-api.example/api/v1`.
    ///
    /// Returns a config error when scheme or host is missing, or when the
    /// url carries userinfo.
    pub fn parse(url: &str) -> Result<Self> {
        let uri: Uri = url.trim().parse().map_err(|e| {
            Error::config_invalid(format!("base url {url:?} is not a valid url")).with_source(e)
        })?;
        let parts = uri.into_parts();

        let scheme = parts
            .scheme
            .ok_or_else(|| Error::config_invalid(format!("base url {url:?} has no scheme")))?;
        if scheme != Scheme::HTTP && scheme != Scheme::HTTPS {
            return Err(Error::config_invalid(format!(
                "base url {url:?} has unsupported scheme {scheme}"
            )));
        }

        let authority = parts
            .authority
            .filter(|v| !v.host().is_empty())
            .ok_or_else(|| Error::config_invalid(format!("base url {url:?} has no host")))?;
        // Userinfo would leak into the host header.
        if authority.as_str().contains('@') {
            return Err(Error::config_invalid("base url must not carry userinfo"));
        }

        let prefix = match parts.path_and_query {
            Some(paq) if paq.query().is_some() => {
                return Err(Error::config_invalid(format!(
                    "base url {url:?} must not carry a query"
                )))
            }
            Some(paq) => paq.path().trim_end_matches('/').to_string(),
            None => String::new(),
        };

        Ok(Self {
            scheme,
            authority,
            prefix,
        })
    }

    /// Value of the `host` header: host with the port if any.
    pub fn host(&self) -> &str {
        self.authority.as_str()
    }

    /// Url scheme, `http` or `https`.
    pub fn scheme(&self) -> &str {
        self.scheme.as_str()
    }

    /// Path prefix without trailing slash, may be empty.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `{scheme}://{host}{prefix}{path}`
    pub fn standard_url(&self, path: &str) -> String {
        format!(
            "{}://{}{}{}",
            self.scheme, self.authority, self.prefix, path
        )
    }

    /// `{scheme}://{host}{path}`, bypassing the configured prefix.
    pub fn rewritten_url(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme, self.authority, path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tbsign_core::ErrorKind;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_parse() {
        let base = BaseUrl::parse("https://sandbox.tb-api.example/api/v1").unwrap();

        assert_eq!(base.scheme(), "https");
        assert_eq!(base.host(), "sandbox.tb-api.example");
        assert_eq!(base.prefix(), "/api/v1");
        assert_eq!(
            base.standard_url("/balance"),
            "https://sandbox.tb-api.example/api/v1/balance"
        );
        assert_eq!(
            base.rewritten_url("/client/token"),
            "https://sandbox.tb-api.example/client/token"
        );
    }

    #[test]
    fn test_parse_with_port_and_trailing_slash() {
        let base = BaseUrl::parse("http://127.0.0.1:8080/api/v1/").unwrap();

        assert_eq!(base.host(), "127.0.0.1:8080");
        assert_eq!(base.prefix(), "/api/v1");
        assert_eq!(
            base.standard_url("/cards/9"),
            "http://127.0.0.1:8080/api/v1/cards/9"
        );
    }

    #[test]
    fn test_parse_without_path() {
        let base = BaseUrl::parse("https://api.tb-api.example").unwrap();

        assert_eq!(base.prefix(), "");
        assert_eq!(
            base.standard_url("/balance"),
            base.rewritten_url("/balance")
        );
    }

    #[test_case("" ; "empty")]
    #[test_case("not a url" ; "spaces")]
    #[test_case("/api/v1" ; "path only")]
    #[test_case("sandbox.tb-api.example" ; "no scheme")]
    #[test_case("ftp://sandbox.tb-api.example/api/v1" ; "unsupported scheme")]
    #[test_case("https://sandbox.tb-api.example/api/v1?x=1" ; "with query")]
    #[test_case("https://user:pw@sandbox.tb-api.example/api/v1" ; "with userinfo")]
    #[test_case("https://user@sandbox.tb-api.example:8443/api/v1" ; "with user and port")]
    fn test_parse_invalid(input: &str) {
        let err = BaseUrl::parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}

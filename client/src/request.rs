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

//! Construction of signed requests.

use std::sync::Arc;

use bytes::Bytes;
use http::header::HeaderName;
use http::header::AUTHORIZATION;
use http::header::CONTENT_TYPE;
use http::header::DATE;
use http::header::HOST;
use http::HeaderValue;
use http::Method;
use log::debug;
use serde_json::Value;
use tbsign_core::sign::content_sha256;
use tbsign_core::sign::method_has_body;
use tbsign_core::sign::sign;
use tbsign_core::sign::TB_CONTENT_SHA256;
use tbsign_core::time::format_http_date;
use tbsign_core::time::now;
use tbsign_core::time::DateTime;
use tbsign_core::Credential;
use tbsign_core::Result;

use crate::constants::CONTENT_TYPE_JSON;
use crate::BaseUrl;
use crate::Query;

/// Where a request is dispatched to.
///
/// The signature is always computed against `/api/v1{path}`, whatever the
/// target is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchTarget {
    /// `{base_url}{path}`
    #[default]
    Standard,
    /// `{scheme}://{host}{path}`, skipping the base url path prefix.
    HostRewritten,
}

/// The closed set of headers sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// `date`, in http date format.
    pub date: String,
    /// `tb-content-sha256`, lowercase hex.
    pub content_sha256: String,
    /// `authorization`, `TB1-HMAC-SHA256 {partner_id}:{signature}`.
    pub authorization: String,
    /// `host`, taken from the base url.
    pub host: String,
    /// `content-type`, always `application/json`.
    pub content_type: &'static str,
}

/// A fully built and signed request, ready for dispatch.
///
/// Created fresh for every call and never changed after signing.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    method: Method,
    path: String,
    target: DispatchTarget,
    url: String,
    query: String,
    payload: Option<String>,
    headers: SignedHeaders,
}

impl OutboundRequest {
    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Logical path below `/api/v1`, as signed.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Dispatch target used to resolve the url.
    pub fn target(&self) -> DispatchTarget {
        self.target
    }

    /// Full url including the encoded query.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Encoded query, empty if there is none.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Serialized json body, `None` if the request carries no body.
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Headers computed for this request.
    pub fn headers(&self) -> &SignedHeaders {
        &self.headers
    }

    /// Convert into a request that can be handed to the transport.
    pub fn into_http(self) -> Result<http::Request<Bytes>> {
        let body = self.payload.map(Bytes::from).unwrap_or_default();
        let mut req = http::Request::builder()
            .method(self.method)
            .uri(self.url)
            .body(body)?;

        let headers = req.headers_mut();
        headers.insert(DATE, self.headers.date.parse()?);
        headers.insert(
            HeaderName::from_static(TB_CONTENT_SHA256),
            self.headers.content_sha256.parse()?,
        );
        headers.insert(AUTHORIZATION, {
            let mut value: HeaderValue = self.headers.authorization.parse()?;
            value.set_sensitive(true);

            value
        });
        headers.insert(HOST, self.headers.host.parse()?);
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(self.headers.content_type),
        );

        Ok(req)
    }
}

/// RequestBuilder turns call parameters into a signed [`OutboundRequest`].
///
/// It holds only read-only state and can be shared between concurrent calls.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    cred: Arc<Credential>,
    base: BaseUrl,
    time: Option<DateTime>,
}

impl RequestBuilder {
    /// Create a new builder.
    pub fn new(cred: Credential, base: BaseUrl) -> Self {
        Self {
            cred: Arc::new(cred),
            base,
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Base url requests are resolved against.
    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    /// Build a signed request.
    ///
    /// - `path` is the logical path below the api prefix, like `/balance`.
    /// - `body` is only sent for POST and PUT, and only when non-empty.
    /// - `query` is encoded once and used for both the url and the signature.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&Query>,
        target: DispatchTarget,
    ) -> OutboundRequest {
        let mut url = match target {
            DispatchTarget::Standard => self.base.standard_url(path),
            DispatchTarget::HostRewritten => self.base.rewritten_url(path),
        };

        let query = query.map(Query::encode).unwrap_or_default();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }

        // Serialized once, the same string is hashed and sent.
        let payload = if has_body(&method, body) {
            body.map(Value::to_string)
        } else {
            None
        };

        let date = format_http_date(self.time.unwrap_or_else(now));
        let content_sha256 = content_sha256(&method, payload.as_deref());
        let authorization = sign(&self.cred, &method, path, &query, &date, &content_sha256);

        debug!("built request: {method} {url}");
        OutboundRequest {
            method,
            path: path.to_string(),
            target,
            url,
            query,
            payload,
            headers: SignedHeaders {
                date,
                content_sha256,
                authorization,
                host: self.base.host().to_string(),
                content_type: CONTENT_TYPE_JSON,
            },
        }
    }
}

fn has_body(method: &Method, body: Option<&Value>) -> bool {
    if !method_has_body(method) {
        return false;
    }

    match body {
        None | Some(Value::Null) => false,
        Some(Value::Object(m)) => !m.is_empty(),
        Some(Value::Array(v)) => !v.is_empty(),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

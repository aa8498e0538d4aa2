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

use bytes::Bytes;
use http::Method;
use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tbsign_core::time::DateTime;
use tbsign_core::Context;
use tbsign_core::Error;
use tbsign_core::Result;

use crate::Config;
use crate::DispatchTarget;
use crate::OutboundRequest;
use crate::Query;
use crate::RequestBuilder;

/// Client for the banking api.
///
/// Holds only read-only state: cloning is cheap and concurrent calls on the
/// same client are independent.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    builder: RequestBuilder,
}

impl Client {
    /// Create a new client.
    ///
    /// `base_url` defaults to the sandbox environment. A malformed url fails
    /// here, before any request is built.
    ///
    /// ```no_run
    /// # async fn example() -> tbsign::Result<()> {
    /// let client = tbsign::Client::new("P1", "secret", None)?;
    /// let balance = client.get_account_balance("42").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        partner_id: impl Into<String>,
        signing_key: impl Into<String>,
        base_url: Option<&str>,
    ) -> Result<Self> {
        let mut cfg = Config::new()
            .with_partner_id(partner_id)
            .with_signing_key(signing_key);
        if let Some(url) = base_url {
            cfg = cfg.with_base_url(url);
        }

        #[cfg(feature = "default-context")]
        let ctx = crate::context::default_context();
        #[cfg(not(feature = "default-context"))]
        let ctx = Context::new();

        Self::from_config(cfg, ctx)
    }

    /// Create a client from the `TBSIGN_*` environment variables.
    #[cfg(feature = "default-context")]
    pub fn from_env() -> Result<Self> {
        let ctx = crate::context::default_context();
        let cfg = Config::new().from_env(&ctx);
        Self::from_config(cfg, ctx)
    }

    /// Create a client from config and context.
    pub fn from_config(cfg: Config, ctx: Context) -> Result<Self> {
        let cred = cfg.credential()?;
        let base = cfg.base_url()?;

        Ok(Self {
            ctx,
            builder: RequestBuilder::new(cred, base),
        })
    }

    /// Replace the context, for example to use another transport.
    pub fn with_context(mut self, ctx: Context) -> Self {
        self.ctx = ctx;
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.builder = self.builder.with_time(time);
        self
    }

    /// Builder used to sign requests of this client.
    pub fn request_builder(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Build and sign a request without sending it.
    pub fn build(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&Query>,
        target: DispatchTarget,
    ) -> OutboundRequest {
        self.builder.build(method, path, body, query, target)
    }

    /// Sign and send a request, returning the response as is.
    ///
    /// Non-2xx responses are not errors here, see [`Client::call`].
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&Query>,
        target: DispatchTarget,
    ) -> Result<http::Response<Bytes>> {
        let req = self.build(method, path, body, query, target).into_http()?;
        let resp = self.ctx.http_send(req).await?;

        debug!("got response: {}", resp.status());
        Ok(resp)
    }

    /// Sign and send a request, decoding a 2xx json body into `T`.
    ///
    /// Non-2xx responses are returned as [`tbsign_core::ErrorKind::Rejected`]
    /// carrying status and body. An empty body decodes as `null`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&Query>,
        target: DispatchTarget,
    ) -> Result<T> {
        let (parts, body) = self
            .send(method, path, body, query, target)
            .await?
            .into_parts();

        if !parts.status.is_success() {
            return Err(Error::rejected(
                parts.status,
                String::from_utf8_lossy(&body),
            ));
        }

        let content: &[u8] = if body.is_empty() { b"null" } else { &body[..] };
        serde_json::from_slice(content)
            .map_err(|e| Error::unexpected("failed to decode response body").with_source(e))
    }
}

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

use std::fmt::Debug;
use std::fmt::Formatter;

use tbsign_core::utils::Redact;
use tbsign_core::Context;
use tbsign_core::Credential;
use tbsign_core::Error;
use tbsign_core::Result;

use crate::constants::*;
use crate::BaseUrl;

/// Config carries all the configuration of a client.
#[derive(Clone, Default)]
pub struct Config {
    /// `partner_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TBSIGN_PARTNER_ID`]
    pub partner_id: Option<String>,
    /// `signing_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TBSIGN_SIGNING_KEY`]
    pub signing_key: Option<String>,
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`TBSIGN_BASE_URL`]
    /// - [`DEFAULT_BASE_URL`] otherwise
    pub base_url: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set partner_id
    pub fn with_partner_id(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    /// Set signing_key
    pub fn with_signing_key(mut self, signing_key: impl Into<String>) -> Self {
        self.signing_key = Some(signing_key.into());
        self
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load config from env, fields already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(TBSIGN_PARTNER_ID) {
            self.partner_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TBSIGN_SIGNING_KEY) {
            self.signing_key.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(TBSIGN_BASE_URL) {
            self.base_url.get_or_insert(v);
        }

        self
    }

    /// Resolve the credential, failing if any part is missing.
    pub fn credential(&self) -> Result<Credential> {
        let cred = Credential::new(
            self.partner_id.clone().unwrap_or_default(),
            self.signing_key.clone().unwrap_or_default(),
        );
        if !cred.is_valid() {
            return Err(Error::config_invalid(
                "partner_id and signing_key must both be set",
            ));
        }
        Ok(cred)
    }

    /// Parse the base url, falling back to [`DEFAULT_BASE_URL`].
    pub fn base_url(&self) -> Result<BaseUrl> {
        BaseUrl::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("partner_id", &self.partner_id.as_ref().map(Redact::from))
            .field("signing_key", &self.signing_key.as_ref().map(Redact::from))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tbsign_core::ErrorKind;
    use tbsign_core::StaticEnv;

    use super::*;

    fn env_ctx(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[test]
    fn test_from_env() {
        let ctx = env_ctx(&[
            (TBSIGN_PARTNER_ID, "P1"),
            (TBSIGN_SIGNING_KEY, "secret"),
            (TBSIGN_BASE_URL, "http://127.0.0.1:8080/api/v1"),
        ]);

        let cfg = Config::new().from_env(&ctx);
        let cred = cfg.credential().unwrap();
        assert_eq!(cred.partner_id, "P1");
        assert_eq!(cred.signing_key, "secret");
        assert_eq!(cfg.base_url().unwrap().host(), "127.0.0.1:8080");
    }

    #[test]
    fn test_from_env_keeps_explicit_values() {
        let ctx = env_ctx(&[(TBSIGN_PARTNER_ID, "from-env"), (TBSIGN_SIGNING_KEY, "env-key")]);

        let cfg = Config::new().with_partner_id("explicit").from_env(&ctx);
        assert_eq!(cfg.partner_id.as_deref(), Some("explicit"));
        assert_eq!(cfg.signing_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_default_base_url() {
        let cfg = Config::new();
        assert_eq!(
            cfg.base_url().unwrap(),
            BaseUrl::parse(DEFAULT_BASE_URL).unwrap()
        );
    }

    #[test]
    fn test_missing_credential() {
        let err = Config::new()
            .with_partner_id("P1")
            .credential()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_debug_redacts_signing_key() {
        let cfg = Config::new()
            .with_partner_id("P1")
            .with_signing_key("a-very-long-signing-secret");

        let out = format!("{cfg:?}");
        assert!(!out.contains("a-very-long-signing-secret"));
    }
}

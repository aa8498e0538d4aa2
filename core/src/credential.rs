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

use crate::utils::Redact;

/// Credential used to sign every request.
#[derive(Clone)]
pub struct Credential {
    /// Public partner identifier, sent inside the Authorization header.
    pub partner_id: String,
    /// Secret HMAC key, never transmitted.
    pub signing_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(partner_id: impl Into<String>, signing_key: impl Into<String>) -> Self {
        Self {
            partner_id: partner_id.into(),
            signing_key: signing_key.into(),
        }
    }

    /// Check if both fields are present.
    pub fn is_valid(&self) -> bool {
        !self.partner_id.is_empty() && !self.signing_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("partner_id", &Redact::from(&self.partner_id))
            .field("signing_key", &Redact::from(&self.signing_key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_signing_key() {
        let cred = Credential::new("partner-0001", "a-very-long-signing-secret");
        let out = format!("{cred:?}");

        assert!(!out.contains("a-very-long-signing-secret"));
        assert_eq!(
            out,
            r#"Credential { partner_id: par***001, signing_key: a-v***ret }"#
        );
    }

    #[test]
    fn test_is_valid() {
        assert!(Credential::new("P1", "secret").is_valid());
        assert!(!Credential::new("", "secret").is_valid());
        assert!(!Credential::new("P1", "").is_valid());
    }
}

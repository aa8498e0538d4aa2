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

//! Endpoint wrappers.
//!
//! Every wrapper maps its arguments to a path, a method, a body and a query,
//! then goes through [`Client::call`](crate::Client::call). Responses are
//! returned as [`serde_json::Value`].

mod accounts;
mod cards;
mod client_facing;
mod clients;
mod deliveries;
mod holds;
mod payments;
mod subscriptions;
mod transfers;

pub use cards::NewCard;
pub use clients::{ClientUpdate, KycDocument, NewClient};
pub use deliveries::NewDelivery;
pub use holds::NewHold;
pub use payments::NewPayment;
pub use subscriptions::NewSubscription;
pub use transfers::CardTransfer;

use percent_encoding::utf8_percent_encode;
use percent_encoding::PercentEncode;
use serde::Serialize;
use serde_json::Value;
use tbsign_core::Result;

use crate::constants::QUERY_ENCODE_SET;
use crate::strip_nulls;
use crate::Query;

/// Optional filters of history endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Start of the period, RFC 3339.
    pub from: Option<String>,
    /// End of the period, RFC 3339.
    pub to: Option<String>,
    /// Max number of entries.
    pub limit: Option<u32>,
    /// Number of entries to skip.
    pub skip: Option<u32>,
}

impl HistoryFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the period.
    pub fn with_period(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self.to = Some(to.into());
        self
    }

    /// Set limit and skip.
    pub fn with_page(mut self, limit: u32, skip: u32) -> Self {
        self.limit = Some(limit);
        self.skip = Some(skip);
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .push_opt("from", self.from.as_deref())
            .push_opt("to", self.to.as_deref())
            .push_opt("limit", self.limit)
            .push_opt("skip", self.skip)
    }
}

/// Serialize endpoint params into a json body without `null` fields.
pub(crate) fn to_body<T: Serialize>(params: &T) -> Result<Value> {
    Ok(strip_nulls(serde_json::to_value(params)?))
}

/// Percent-encode a path parameter.
pub(crate) fn segment(v: &str) -> PercentEncode<'_> {
    utf8_percent_encode(v, &QUERY_ENCODE_SET)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_history_filter_to_query() {
        assert!(HistoryFilter::new().to_query().is_empty());

        let q = HistoryFilter::new()
            .with_period("2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z")
            .with_page(50, 500)
            .to_query();
        assert_eq!(
            q.encode(),
            "from=2024-01-01T00%3A00%3A00Z&to=2024-02-01T00%3A00%3A00Z&limit=50&skip=500"
        );

        let q = HistoryFilter {
            limit: Some(10),
            ..Default::default()
        }
        .to_query();
        assert_eq!(q.encode(), "limit=10");
    }

    #[test]
    fn test_to_body_strips_nulls() {
        let body = to_body(&NewHold {
            account_id: "acc_1".to_string(),
            amount: 0,
            currency: "EUR".to_string(),
            reference: None,
            expires_at: None,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({"accountId": "acc_1", "amount": 0, "currency": "EUR"})
        );
    }

    #[test]
    fn test_segment() {
        assert_eq!(segment("card_81").to_string(), "card_81");
        assert_eq!(segment("a/b c").to_string(), "a%2Fb%20c");
    }
}

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

use http::Method;
use serde::Serialize;
use serde_json::json;
use serde_json::Value;
use tbsign_core::Result;

use super::segment;
use super::to_body;
use super::HistoryFilter;
use crate::Client;
use crate::DispatchTarget;

/// Params of [`Client::create_card`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    /// Account the card is issued on.
    pub account_id: String,
    /// `VIRTUAL` or `PHYSICAL`.
    pub card_type: String,
    /// Name embossed on the card.
    pub holder_name: Option<String>,
    /// Delivery to ship a physical card with.
    pub delivery_id: Option<String>,
}

impl Client {
    /// List the cards attached to an account.
    pub async fn get_cards(&self, account_id: &str) -> Result<Value> {
        let path = format!("/accounts/{}/cards", segment(account_id));
        self.call(Method::GET, &path, None, None, DispatchTarget::Standard)
            .await
    }

    /// Get one card.
    pub async fn get_card(&self, card_id: &str) -> Result<Value> {
        let path = format!("/cards/{}", segment(card_id));
        self.call(Method::GET, &path, None, None, DispatchTarget::Standard)
            .await
    }

    /// Issue a new card.
    pub async fn create_card(&self, params: &NewCard) -> Result<Value> {
        let body = to_body(params)?;
        self.call(
            Method::POST,
            "/cards",
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// Change the status of a card, for example `ACTIVE` or `LOCKED`.
    pub async fn update_card_status(&self, card_id: &str, status: &str) -> Result<Value> {
        let path = format!("/cards/{}/status", segment(card_id));
        let body = json!({ "status": status });
        self.call(
            Method::PUT,
            &path,
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// Get the operation history of a card.
    pub async fn get_card_history(&self, card_id: &str, filter: &HistoryFilter) -> Result<Value> {
        let path = format!("/cards/{}/history", segment(card_id));
        let query = filter.to_query();
        self.call(
            Method::GET,
            &path,
            None,
            Some(&query),
            DispatchTarget::Standard,
        )
        .await
    }
}

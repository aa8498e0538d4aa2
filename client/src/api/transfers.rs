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
use serde_json::Value;
use tbsign_core::Result;

use super::segment;
use super::to_body;
use crate::Client;
use crate::DispatchTarget;

/// Params of [`Client::create_card_transfer`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTransfer {
    /// Card to debit.
    pub from_card_id: String,
    /// Card to credit.
    pub to_card_id: String,
    /// Amount in minor units.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Free text reference.
    pub reference: Option<String>,
}

impl Client {
    /// Move funds from one card to another.
    pub async fn create_card_transfer(&self, params: &CardTransfer) -> Result<Value> {
        let body = to_body(params)?;
        self.call(
            Method::POST,
            "/card-transfers",
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// Get a card-to-card transfer.
    pub async fn get_card_transfer(&self, transfer_id: &str) -> Result<Value> {
        let path = format!("/card-transfers/{}", segment(transfer_id));
        self.call(Method::GET, &path, None, None, DispatchTarget::Standard)
            .await
    }
}

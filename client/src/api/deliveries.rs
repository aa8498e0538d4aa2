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

/// Params of [`Client::create_delivery`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDelivery {
    /// Card to deliver.
    pub card_id: String,
    /// Street and house number.
    pub address_line1: String,
    /// Additional address line.
    pub address_line2: Option<String>,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
}

impl Client {
    /// Order the delivery of a physical card.
    pub async fn create_delivery(&self, params: &NewDelivery) -> Result<Value> {
        let body = to_body(params)?;
        self.call(
            Method::POST,
            "/deliveries",
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// Get the state of a delivery.
    pub async fn get_delivery(&self, delivery_id: &str) -> Result<Value> {
        let path = format!("/deliveries/{}", segment(delivery_id));
        self.call(Method::GET, &path, None, None, DispatchTarget::Standard)
            .await
    }
}

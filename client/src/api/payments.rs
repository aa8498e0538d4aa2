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

/// Params of [`Client::create_payment`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    /// Account to debit.
    pub account_id: String,
    /// Amount in minor units.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// IBAN of the beneficiary.
    pub beneficiary_iban: String,
    /// Name of the beneficiary.
    pub beneficiary_name: String,
    /// Remittance information.
    pub reference: Option<String>,
}

impl Client {
    /// Send an outgoing payment.
    pub async fn create_payment(&self, params: &NewPayment) -> Result<Value> {
        let body = to_body(params)?;
        self.call(
            Method::POST,
            "/payments",
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// Get a payment.
    pub async fn get_payment(&self, payment_id: &str) -> Result<Value> {
        let path = format!("/payments/{}", segment(payment_id));
        self.call(Method::GET, &path, None, None, DispatchTarget::Standard)
            .await
    }
}

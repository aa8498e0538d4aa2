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
use crate::Query;

/// Params of [`Client::create_hold`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHold {
    /// Account to hold funds on.
    pub account_id: String,
    /// Amount in minor units.
    pub amount: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Free text reference.
    pub reference: Option<String>,
    /// RFC 3339, the hold is released automatically after it.
    pub expires_at: Option<String>,
}

impl Client {
    /// Reserve funds on an account.
    pub async fn create_hold(&self, params: &NewHold) -> Result<Value> {
        let body = to_body(params)?;
        self.call(
            Method::POST,
            "/holds",
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// List the active holds of an account.
    pub async fn get_holds(&self, account_id: &str) -> Result<Value> {
        let query = Query::new().push("accountId", account_id);
        self.call(
            Method::GET,
            "/holds",
            None,
            Some(&query),
            DispatchTarget::Standard,
        )
        .await
    }

    /// Release a hold.
    pub async fn delete_hold(&self, hold_id: &str) -> Result<Value> {
        let path = format!("/holds/{}", segment(hold_id));
        self.call(Method::DELETE, &path, None, None, DispatchTarget::Standard)
            .await
    }
}

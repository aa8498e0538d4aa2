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
use serde_json::Value;
use tbsign_core::Result;

use super::segment;
use super::HistoryFilter;
use crate::Client;
use crate::DispatchTarget;

impl Client {
    /// List the accounts of the partner.
    pub async fn get_accounts(&self) -> Result<Value> {
        self.call(Method::GET, "/accounts", None, None, DispatchTarget::Standard)
            .await
    }

    /// Get one account.
    pub async fn get_account(&self, account_id: &str) -> Result<Value> {
        let path = format!("/accounts/{}", segment(account_id));
        self.call(Method::GET, &path, None, None, DispatchTarget::Standard)
            .await
    }

    /// Get the balance of an account.
    pub async fn get_account_balance(&self, account_id: &str) -> Result<Value> {
        let path = format!("/accounts/{}/balance", segment(account_id));
        self.call(Method::GET, &path, None, None, DispatchTarget::Standard)
            .await
    }

    /// Get the operation history of an account.
    ///
    /// Only the filters that are set end up in the query.
    pub async fn get_account_history(
        &self,
        account_id: &str,
        filter: &HistoryFilter,
    ) -> Result<Value> {
        let path = format!("/accounts/{}/history", segment(account_id));
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

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

//! Client-facing endpoints.
//!
//! They are served outside of the api prefix of the base url, but are still
//! signed against `/api/v1{path}`.

use http::Method;
use serde_json::Value;
use tbsign_core::Result;

use super::segment;
use crate::Client;
use crate::DispatchTarget;
use crate::Query;

impl Client {
    /// Get a short lived token for an end client.
    pub async fn get_client_token(&self, client_id: &str) -> Result<Value> {
        let query = Query::new().push("clientId", client_id);
        self.call(
            Method::GET,
            "/client/token",
            None,
            Some(&query),
            DispatchTarget::HostRewritten,
        )
        .await
    }

    /// Get a client-facing session.
    pub async fn get_client_session(&self, session_id: &str) -> Result<Value> {
        let path = format!("/client/sessions/{}", segment(session_id));
        self.call(
            Method::GET,
            &path,
            None,
            None,
            DispatchTarget::HostRewritten,
        )
        .await
    }
}

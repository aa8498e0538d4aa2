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

/// Params of [`Client::create_subscription`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    /// Url receiving the event callbacks.
    pub url: String,
    /// Event names, for example `card.created`.
    pub events: Vec<String>,
    /// Shared secret used to sign callbacks.
    pub secret: Option<String>,
}

impl Client {
    /// List the event subscriptions.
    pub async fn get_subscriptions(&self) -> Result<Value> {
        self.call(
            Method::GET,
            "/subscriptions",
            None,
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// Subscribe to events.
    pub async fn create_subscription(&self, params: &NewSubscription) -> Result<Value> {
        let body = to_body(params)?;
        self.call(
            Method::POST,
            "/subscriptions",
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// Remove a subscription.
    pub async fn delete_subscription(&self, subscription_id: &str) -> Result<Value> {
        let path = format!("/subscriptions/{}", segment(subscription_id));
        self.call(Method::DELETE, &path, None, None, DispatchTarget::Standard)
            .await
    }
}

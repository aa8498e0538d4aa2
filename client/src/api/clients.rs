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

/// Params of [`Client::create_client`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Phone number in E.164 format.
    pub phone: Option<String>,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
}

/// Params of [`Client::update_client`], only set fields are changed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    /// Contact email.
    pub email: Option<String>,
    /// Phone number in E.164 format.
    pub phone: Option<String>,
    /// Street and house number.
    pub address_line1: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
}

/// Params of [`Client::upload_kyc_document`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KycDocument {
    /// For example `ID_CARD`, `PASSPORT` or `PROOF_OF_ADDRESS`.
    pub document_type: String,
    /// Original file name, like `passport.pdf`.
    pub file_name: String,
    /// Base64 encoded file content.
    pub content: String,
}

impl Client {
    /// Register a new end client.
    pub async fn create_client(&self, params: &NewClient) -> Result<Value> {
        let body = to_body(params)?;
        self.call(
            Method::POST,
            "/clients",
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// Get an end client with its KYC state.
    pub async fn get_client(&self, client_id: &str) -> Result<Value> {
        let path = format!("/clients/{}", segment(client_id));
        self.call(Method::GET, &path, None, None, DispatchTarget::Standard)
            .await
    }

    /// Update an end client.
    ///
    /// An update without any field sends no body.
    pub async fn update_client(&self, client_id: &str, params: &ClientUpdate) -> Result<Value> {
        let path = format!("/clients/{}", segment(client_id));
        let body = to_body(params)?;
        self.call(
            Method::PUT,
            &path,
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }

    /// Attach a KYC document to an end client.
    pub async fn upload_kyc_document(
        &self,
        client_id: &str,
        document: &KycDocument,
    ) -> Result<Value> {
        let path = format!("/clients/{}/documents", segment(client_id));
        let body = to_body(document)?;
        self.call(
            Method::POST,
            &path,
            Some(&body),
            None,
            DispatchTarget::Standard,
        )
        .await
    }
}

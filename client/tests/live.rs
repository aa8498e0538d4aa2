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

//! Smoke tests against a real environment.
//!
//! Enabled with `TBSIGN_TEST=on`, configured through the `TBSIGN_*`
//! variables (a `.env` file is loaded if present).

use std::env;

use http::{Method, StatusCode};
use log::{debug, warn};
use serde_json::Value;
use tbsign::{Client, DispatchTarget, HistoryFilter, Result};

fn init_client() -> Option<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();
    if env::var("TBSIGN_TEST").is_err() || env::var("TBSIGN_TEST").unwrap() != "on" {
        return None;
    }

    Some(Client::from_env().expect("TBSIGN_PARTNER_ID and TBSIGN_SIGNING_KEY must be set"))
}

#[tokio::test]
async fn test_list_accounts() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("TBSIGN_TEST is not set, skipped");
        return Ok(());
    };

    let accounts = client.get_accounts().await?;
    debug!("got accounts: {accounts}");
    Ok(())
}

#[tokio::test]
async fn test_account_history() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("TBSIGN_TEST is not set, skipped");
        return Ok(());
    };
    let account_id =
        env::var("TBSIGN_ACCOUNT_ID").expect("env TBSIGN_ACCOUNT_ID must set");

    let history = client
        .get_account_history(&account_id, &HistoryFilter::new().with_page(10, 0))
        .await?;
    debug!("got history: {history}");
    Ok(())
}

#[tokio::test]
async fn test_wrong_key_is_rejected() -> Result<()> {
    let Some(client) = init_client() else {
        warn!("TBSIGN_TEST is not set, skipped");
        return Ok(());
    };
    let partner_id = env::var("TBSIGN_PARTNER_ID").expect("env TBSIGN_PARTNER_ID must set");
    let base_url = env::var("TBSIGN_BASE_URL").ok();
    let wrong = Client::new(partner_id, "not-the-signing-key", base_url.as_deref())?;

    let resp = wrong
        .send(Method::GET, "/accounts", None, None, DispatchTarget::Standard)
        .await?;
    assert!(matches!(
        resp.status(),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
    ));

    // The valid client still works after the rejected call.
    let _: Value = client
        .call(Method::GET, "/accounts", None, None, DispatchTarget::Standard)
        .await?;
    Ok(())
}

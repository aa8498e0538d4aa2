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

//! Signed HTTP client for the TB1-HMAC-SHA256 banking api.
//!
//! Every request is signed with HMAC-SHA256 over a canonical string built
//! from the method, the path below `/api/v1`, the encoded query, the `date`
//! header and the SHA256 of the body. [`RequestBuilder`] assembles the
//! request so that exactly what is signed is what is sent.
//!
//! ## Example
//!
//! ```no_run
//! use tbsign::{Client, HistoryFilter};
//!
//! # async fn example() -> tbsign::Result<()> {
//! let client = Client::new("P1", "secret", Some("https://sandbox.tb-api.example/api/v1"))?;
//!
//! let history = client
//!     .get_account_history("42", &HistoryFilter::new().with_page(50, 500))
//!     .await?;
//! println!("{history}");
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub use tbsign_core::{Context, Credential, Error, ErrorKind, HttpSend, Result};

mod constants;
pub use constants::DEFAULT_BASE_URL;

mod base_url;
pub use base_url::BaseUrl;

mod config;
pub use config::Config;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

mod params;
pub use params::strip_nulls;

mod query;
pub use query::Query;

mod request;
pub use request::{DispatchTarget, OutboundRequest, RequestBuilder, SignedHeaders};

mod client;
pub use client::Client;

mod api;
pub use api::*;

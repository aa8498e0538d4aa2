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

//! Core components for signing TB1-HMAC-SHA256 requests.
//!
//! ## Overview
//!
//! - **Signature**: [`sign`] builds the canonical string of a request and
//!   turns it into an `Authorization` header value.
//! - **Context**: a container for the transport ([`HttpSend`]) and the
//!   environment ([`Env`]) used by a client.
//! - **Credential**: partner id and signing key.
//!
//! ## Example
//!
//! ```
//! use http::Method;
//! use tbsign_core::hash::EMPTY_STRING_SHA256;
//! use tbsign_core::{sign, Credential};
//!
//! let cred = Credential::new("P1", "secret");
//! let auth = sign::sign(
//!     &cred,
//!     &Method::GET,
//!     "/balance",
//!     "",
//!     "Mon, 01 Jan 2024 00:00:00 GMT",
//!     EMPTY_STRING_SHA256,
//! );
//! assert!(auth.starts_with("TB1-HMAC-SHA256 P1:"));
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod sign;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
mod credential;
pub use credential::Credential;
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};
mod http;
pub use http::{HttpSend, NoopHttpSend};

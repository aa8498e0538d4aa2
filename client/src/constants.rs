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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Env values used to configure the client.
pub const TBSIGN_PARTNER_ID: &str = "TBSIGN_PARTNER_ID";
pub const TBSIGN_SIGNING_KEY: &str = "TBSIGN_SIGNING_KEY";
pub const TBSIGN_BASE_URL: &str = "TBSIGN_BASE_URL";

/// Sandbox environment, used when no base url is given.
pub const DEFAULT_BASE_URL: &str = "https://sandbox.tb-api.example/api/v1";

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// AsciiSet for query keys and values.
///
/// Encode every byte except `A-Z a-z 0-9 - _ . ! ~ * ( )`.
///
/// Unlike `encodeURIComponent`, `'` is encoded: http and https urls always
/// carry it as `%27` in the query, so the signed query must do the same.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

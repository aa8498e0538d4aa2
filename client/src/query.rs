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

use percent_encoding::utf8_percent_encode;
use serde_json::Value;

use crate::constants::QUERY_ENCODE_SET;

/// Query is an ordered list of query parameters.
///
/// The encoded form is used both in the dispatched url and in the canonical
/// string, so encoding must be stable: pairs are kept in insertion order and
/// never sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from a json object.
    ///
    /// - `null` values are dropped.
    /// - Strings are used as is, numbers and booleans are rendered as text.
    /// - Arrays become repeated keys, `null` items are dropped.
    /// - Nested objects are rendered as compact json.
    ///
    /// Anything other than an object yields an empty query.
    pub fn from_value(value: &Value) -> Self {
        let mut q = Self::new();
        let Value::Object(map) = value else {
            return q;
        };

        for (k, v) in map {
            match v {
                Value::Array(items) => {
                    for item in items {
                        if let Some(s) = scalar_to_string(item) {
                            q.pairs.push((k.clone(), s));
                        }
                    }
                }
                v => {
                    if let Some(s) = scalar_to_string(v) {
                        q.pairs.push((k.clone(), s));
                    }
                }
            }
        }
        q
    }

    /// Push a new pair.
    pub fn push(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Push a new pair only if `value` is `Some`.
    pub fn push_opt<T: ToString>(self, key: impl Into<String>, value: Option<T>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Check if there is no pair.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Get the raw (unencoded) pairs.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Encode into `k1=v1&k2=v2`, percent-encoding keys and values.
    ///
    /// Returns an empty string for an empty query.
    pub fn encode(&self) -> String {
        let mut s = String::new();
        for (idx, (k, v)) in self.pairs.iter().enumerate() {
            if idx != 0 {
                s.push('&');
            }
            s.extend(utf8_percent_encode(k, &QUERY_ENCODE_SET));
            s.push('=');
            s.extend(utf8_percent_encode(v, &QUERY_ENCODE_SET));
        }
        s
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        }
    }
}

fn scalar_to_string(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        v => Some(v.to_string()),
    }
}

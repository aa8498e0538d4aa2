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

use serde_json::Value;

/// Remove top level `null` entries from a json object.
///
/// Endpoint wrappers build a body with every optional field and let this
/// drop the absent ones. `0`, `false` and `""` are kept. Non-object values
/// are returned unchanged.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(mut map) => {
            map.retain(|_, v| !v.is_null());
            Value::Object(map)
        }
        v => v,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_strip_nulls() {
        let v = strip_nulls(json!({
            "amount": 0,
            "blocked": false,
            "label": "",
            "reference": null,
            "tags": [null],
        }));

        assert_eq!(
            v,
            json!({
                "amount": 0,
                "blocked": false,
                "label": "",
                "tags": [null],
            })
        );
    }

    #[test]
    fn test_strip_nulls_is_idempotent() {
        let input = json!({"a": null, "b": 1, "c": {"d": null}});

        let once = strip_nulls(input);
        let twice = strip_nulls(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once, json!({"b": 1, "c": {"d": null}}));
    }

    #[test]
    fn test_strip_nulls_non_object() {
        assert_eq!(strip_nulls(Value::Null), Value::Null);
        assert_eq!(strip_nulls(json!([1, null])), json!([1, null]));
    }
}

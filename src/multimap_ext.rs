// Baserow Rust SDK for the Baserow no-code database REST API
// Copyright 2025 the baserow-rs contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use multimap::MultiMap;
use urlencoding::encode as urlencode;

/// Multimap for string keys and string values. Used for query parameters,
/// where a key may legitimately occur more than once (`queue=a&queue=b`),
/// and for per-call extra headers.
pub type Multimap = MultiMap<String, String>;

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap.
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Adds a key-value pair only when the value is present.
    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>);

    /// Adds all entries of another multimap to this one.
    fn add_multimap(&mut self, other: Multimap);

    /// Converts the multimap to an urlencoded HTTP query string. Every value
    /// of a multi-valued key becomes its own `key=value` occurrence.
    fn to_query_string(&self) -> String;
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn add_opt<K: Into<String>, V: Into<String>>(&mut self, key: K, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key.into(), v.into());
        }
    }

    fn add_multimap(&mut self, other: Multimap) {
        for (key, values) in other.into_iter() {
            for value in values {
                self.insert(key.clone(), value);
            }
        }
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&urlencode(key));
                query.push('=');
                query.push_str(&urlencode(value));
            }
        }
        query
    }
}

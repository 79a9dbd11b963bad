// Copyright 2019 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use super::*;
use std::fmt::{Display, Formatter};
use std::iter::FromIterator;

/// An ordered list of *unescaped* query items.
///
/// Insertion order is preserved and duplicate keys are allowed; both are
/// reflected in [`map_to_query_string`]. Values are anything that implements
/// [`Display`], so numbers, booleans and identifiers are stored in their
/// textual form:
///
/// ```
/// use wire_uri::{map_to_query_string, QueryMap};
/// let mut query = QueryMap::new();
/// query.insert("n", 3);
/// query.insert("ok", true);
/// query.insert("name", "a b");
/// assert_eq!(map_to_query_string(&query), "?n=3&ok=true&name=a%20b");
/// ```
///
/// A key may also be present without a value (see [`QueryMap::insert_flag`]).
/// It is emitted without an `=`, parses back as a key without a value, and
/// reads as an empty value through [`QueryMap::get`] and [`QueryMap::iter`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct QueryMap(Vec<(String, Option<String>)>);

impl QueryMap {
    /// Creates an empty query map.
    pub fn new() -> QueryMap {
        QueryMap(Vec::new())
    }

    /// Appends `key=value`.
    pub fn insert<K: Into<String>, V: Display>(&mut self, key: K, value: V) {
        self.0.push((key.into(), Some(value.to_string())));
    }

    /// Appends a key that has no value.
    pub fn insert_flag<K: Into<String>>(&mut self, key: K) {
        self.0.push((key.into(), None));
    }

    /// The value of the first item named `key`, if any.
    ///
    /// A key without a value reads as `""`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// The values of every item named `key`, in order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().filter(move |(k, _)| *k == key).map(|(_, v)| v)
    }

    /// True if at least one item is named `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The number of items, counting duplicates.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_ref().map_or("", String::as_str)))
    }

    /// Parses an escaped query string such as `a=1&b=2`. A single leading
    /// `?` is ignored.
    ///
    /// Items are split on `&`, and empty items are skipped. Each item is split
    /// at its first `=`, and the key and value are unescaped separately.
    /// An item without an `=` is a key without a value, as if added with
    /// [`QueryMap::insert_flag`].
    pub fn from_escaped(escaped_query: &str) -> QueryMap {
        let escaped_query = escaped_query.strip_prefix('?').unwrap_or(escaped_query);

        let items = escaped_query
            .split('&')
            .filter(|item| !item.is_empty())
            .map(|item| match item.find('=') {
                Some(i) => (
                    escape::unescape(&item[..i]),
                    Some(escape::unescape(&item[i + 1..])),
                ),
                None => (escape::unescape(item), None),
            })
            .collect();

        QueryMap(items)
    }

    /// Writes the escaped `k1=v1&k2=v2` form, without a leading `?`.
    pub fn write_escaped<T: core::fmt::Write + ?Sized>(&self, f: &mut T) -> core::fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_char('&')?;
            }

            write!(f, "{}", key.escape_uri().for_query_key())?;

            if let Some(value) = value {
                f.write_char('=')?;
                write!(f, "{}", value.escape_uri().for_query_value())?;
            }
        }
        Ok(())
    }

    /// Returns the escaped `k1=v1&k2=v2` form, without a leading `?`.
    pub fn to_escaped_query(&self) -> String {
        self.to_string()
    }
}

impl Display for QueryMap {
    /// Same as [`QueryMap::write_escaped`].
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.write_escaped(f)
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut ret = QueryMap::new();
        for (key, value) in iter {
            ret.insert(key, value);
        }
        ret
    }
}

/// Serializes `query_map` into an escaped query string of the form `?n1=v1&n2=v2`.
///
/// Keys are escaped with [`escape::QUERY_KEY`] and values with
/// [`escape::QUERY_VALUE`]. An empty map yields an empty string.
pub fn map_to_query_string(query_map: &QueryMap) -> String {
    if query_map.is_empty() {
        return String::new();
    }

    let mut ret = String::from("?");
    ret.push_str(&query_map.to_escaped_query());
    ret
}

/// Parses an escaped query string into a [`QueryMap`].
///
/// This is the inverse of [`map_to_query_string`]; see [`QueryMap::from_escaped`].
pub fn query_map(escaped_query: &str) -> QueryMap {
    QueryMap::from_escaped(escaped_query)
}

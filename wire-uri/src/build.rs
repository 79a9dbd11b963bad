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

const HTTP_SCHEME: &str = "http";

/// Where a URI built by [`Uri::build_http`] points to.
///
/// Usually created implicitly from a `&str` or a `(&str, u16)` tuple.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HttpPrefix<'a> {
    /// Either a full prefix like `"https://example.com:8080"`, or just a host
    /// and optional port like `"example.com"` or `"example.com:8080"`, in which
    /// case the scheme is `http`.
    Prefix(&'a str),

    /// A host and a port. A port of zero or `80` is left out of the authority.
    HostPort(&'a str, u16),
}

impl<'a> From<&'a str> for HttpPrefix<'a> {
    fn from(prefix: &'a str) -> Self {
        HttpPrefix::Prefix(prefix)
    }
}

impl<'a> From<&'a String> for HttpPrefix<'a> {
    fn from(prefix: &'a String) -> Self {
        HttpPrefix::Prefix(prefix.as_str())
    }
}

impl<'a> From<(&'a str, u16)> for HttpPrefix<'a> {
    fn from((host, port): (&'a str, u16)) -> Self {
        HttpPrefix::HostPort(host, port)
    }
}

impl HttpPrefix<'_> {
    /// Resolves this prefix into an escaped scheme, authority and base path.
    fn resolve(&self) -> (String, String, String) {
        match *self {
            HttpPrefix::Prefix(prefix) => {
                if prefix.contains("://") {
                    let base = Uri::parse(prefix);

                    if !base.scheme.is_empty() && base.escaped_opaque.starts_with("//") {
                        let mut path = base.escaped_path;
                        if path.ends_with('/') {
                            path.pop();
                        }
                        return (base.scheme, base.escaped_authority, path);
                    }

                    debug!(
                        "Prefix {:?} has no usable scheme, using it as the authority",
                        prefix
                    );
                }

                (
                    HTTP_SCHEME.to_string(),
                    prefix.escape_uri().for_host_and_port().to_string(),
                    String::new(),
                )
            }
            HttpPrefix::HostPort(host, port) => {
                let mut authority = host.escape_uri().for_host_and_port().to_string();
                if port != 0 && default_port_for_scheme(HTTP_SCHEME) != Some(port) {
                    authority.push(':');
                    authority.push_str(&port.to_string());
                }
                (HTTP_SCHEME.to_string(), authority, String::new())
            }
        }
    }
}

impl Uri {
    /// Builds an HTTP(S) URI from a prefix, a sequence of unescaped path
    /// segments, and an optional map of unescaped query items.
    ///
    /// Each path segment is escaped on its own and appended after a `/`, so
    /// segments may safely contain `/` or `?`. The query is encoded with
    /// [`map_to_query_string`]; `None` and an empty map both yield no query.
    ///
    /// Malformed prefixes are not rejected: anything that does not contain
    /// `://`, or does not parse as a scheme followed by `//authority`, is
    /// escaped and used as the authority.
    ///
    /// ```
    /// use wire_uri::{PathSegments, QueryMap, Uri};
    /// let path: PathSegments = ["a", "b"].iter().collect();
    /// assert_eq!(
    ///     Uri::build_http("example.com", &path, None).as_string(),
    ///     "http://example.com/a/b"
    /// );
    ///
    /// let path = PathSegments::from("x");
    /// let query: QueryMap = vec![("q", "1 2")].into_iter().collect();
    /// assert_eq!(
    ///     Uri::build_http("example.com:8080", &path, Some(&query)).as_string(),
    ///     "http://example.com:8080/x?q=1%202"
    /// );
    /// ```
    pub fn build_http<'a, P: Into<HttpPrefix<'a>>>(
        prefix: P,
        path: &PathSegments,
        query: Option<&QueryMap>,
    ) -> Uri {
        let (scheme, authority, mut escaped_path) = prefix.into().resolve();

        escaped_path.push_str(&path.to_escaped_path());

        let escaped_query = query.map(QueryMap::to_escaped_query).unwrap_or_default();

        Uri::from_escaped_hier_parts(scheme, authority, escaped_path, escaped_query)
    }
}

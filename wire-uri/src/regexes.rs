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

use regex::Regex;
lazy_static! {
    /// Splits a URI string at the first colon into "scheme" and "opaque".
    ///
    /// * scheme = $1
    /// * opaque = $2
    ///
    /// Only matches if everything before the first colon is a candidate scheme;
    /// the candidate is then checked with `URI_CHECK_SCHEME`.
    pub(crate) static ref URI_SCHEME_VS_OPAQUE: Regex = Regex::new(r#"(?s)^([^:/?#%]+):(.*)$"#)
        .expect("URI_SCHEME_VS_OPAQUE");

    /// Regex for verifying that a URI scheme is well-formed.
    pub(crate) static ref URI_CHECK_SCHEME: Regex = Regex::new(r#"^[A-Za-z][-+.A-Za-z0-9]*$"#)
        .expect("URI_CHECK_SCHEME");

    /// Splits a hierarchical opaque part into "authority", "path", and "query".
    ///
    /// * `//example.com/test/path?query`
    ///   * $2 = `example.com`
    ///   * $3 = `/test/path`
    ///   * $5 = `query`
    ///
    /// Never fails to match an opaque part starting with `/`.
    pub(crate) static ref URI_HIER_PART: Regex = Regex::new(r#"(?s)^(//([^/?]*))?([^?]*)(\?(.*))?$"#)
        .expect("URI_HIER_PART");

    /// Splits the authority into "userinfo", "host", and "port"
    ///
    /// * userinfo = $2
    /// * host     = $3
    /// * port     = $5
    ///
    /// Never fails to match: anything that does not look like a bracketed
    /// IPv6 literal is a host running up to the first colon.
    pub(crate) static ref URI_AUTHORITY: Regex = Regex::new(r#"(?s)^(([^@]*)@)?(\[[^\]]*\]|[^:]*)(:(.*))?$"#)
        .expect("URI_AUTHORITY");
}

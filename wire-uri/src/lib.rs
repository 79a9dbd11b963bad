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

//! # Immutable, Escaped-Form URI Values
//!
//! This crate provides [`Uri`], a value type for [Uniform Resource Identifiers][IETF-RFC3986]
//! that keeps every component in its escaped (wire) form and only decodes on request.
//!
//! A [`Uri`] holds exactly five strings: the scheme, the *opaque part* (everything after
//! the scheme's colon), and the escaped authority, path and query. It can be created in
//! three ways:
//!
//! * By parsing an escaped string with [`Uri::parse`] (or `From<&str>`/`FromStr`).
//!   Parsing never fails: anything that cannot be split into components is kept in
//!   the opaque part, so the original string always comes back out of [`Uri::as_string`].
//! * From discrete parts with [`Uri::from_parts`].
//! * With the HTTP builder [`Uri::build_http`], which escapes each segment of a
//!   [`PathSegments`] and each item of a [`QueryMap`] individually.
//!
//! ```
//! use wire_uri::prelude::*;
//!
//! let path: PathSegments = ["users", "J. Doe"].iter().collect();
//! let mut query = QueryMap::new();
//! query.insert("limit", 10);
//!
//! let uri = Uri::build_http("example.com:8080", &path, Some(&query));
//! assert_eq!(uri.as_string(), "http://example.com:8080/users/J.%20Doe?limit=10");
//!
//! let parsed = Uri::parse(&uri.as_string());
//! assert_eq!(parsed, uri);
//! assert_eq!(parsed.path_segments(), path);
//! assert_eq!(parsed.query_map(), query);
//! ```
//!
//! ## Percent Encoding
//!
//! The [`escape`] module contains the percent-encoding codec used throughout the crate.
//! Escaping takes a caller-selectable set of [`AllowedChars`](escape::AllowedChars)
//! that are exempt from escaping; unescaping passes malformed escapes through literally.
//!
//! ## Diagnostics
//!
//! Malformed input is never reported as an error. Instead, the fallbacks taken while
//! parsing are reported through the [`log`](https://docs.rs/log) crate at the `debug`
//! level.
//!
//! [IETF-RFC3986]: https://tools.ietf.org/html/rfc3986

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate log;

pub mod escape;
use escape::*;

mod error;
pub use error::{DecodingError, DecodingErrorKind};

mod authority;
pub use authority::{default_port_for_scheme, AuthorityParts};

mod path;
pub use path::PathSegments;

mod query;
pub use query::{map_to_query_string, query_map, QueryMap};

mod uri;
pub use uri::Uri;

mod build;
pub use build::HttpPrefix;

mod regexes;
pub(crate) use regexes::*;

#[cfg(test)]
mod test;

#[doc(hidden)]
pub mod prelude {
    pub use super::escape::StrExt;
    pub use super::{map_to_query_string, query_map};
    pub use super::{HttpPrefix, PathSegments, QueryMap, Uri};
}

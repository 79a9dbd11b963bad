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

//! # URI percent encoding/decoding ("URI Escaping")
//!
//! Percent encoding is performed by [`escape_uri()`], which returns an iterator that
//! escapes the string. Likewise, percent decoding is performed by [`unescape_uri()`].
//! Both are provided by the [`StrExt`] trait, which extends `str`. The free functions
//! [`escape()`], [`escape_with()`], [`unescape()`] and [`try_unescape()`] are thin
//! wrappers that return owned strings.
//!
//! # Usage Patterns
//!
//! The iterator returned by [`escape_uri()`] implements [`core::fmt::Display`],
//! and thus also implements [`std::string::ToString`]:
//!
//! ```
//! use wire_uri::prelude::*;
//! let escaped_string = "This needs escaping".escape_uri().to_string();
//!
//! assert_eq!(&escaped_string, "This%20needs%20escaping");
//! ```
//!
//! # Allowed Sets
//!
//! The unreserved characters (`A-Z a-z 0-9 - . _ ~`) are never escaped. Every other
//! byte is escaped unless it appears in the [`AllowedChars`] set that the escaper
//! was given. Different parts of a URI need different sets: a path segment must
//! escape `/`, while a query value must escape `&`.
//!
//! ```
//! # use wire_uri::prelude::*;
//! assert_eq!("a b/c".escape_uri_with("/").to_string(), "a%20b/c");
//! assert_eq!("a b/c".escape_uri().for_path_segment().to_string(), "a%20b%2Fc");
//! ```
//!
//! The predefined sets are [`DEFAULT`], [`HOST_AND_PORT`], [`PATH_SEGMENT`],
//! [`QUERY_KEY`], [`QUERY_VALUE`] and [`USER_INFO`].
//!
//! # Handling Encoding Errors
//!
//! While escaping cannot fail, an escaped string can contain errors. The lossy
//! decoders handle them as follows:
//!
//!  * A `%` that is not followed by two hex digits is kept as a literal `%`.
//!  * Decoded bytes that are not valid UTF8 are replaced with
//!    [`U+FFFD REPLACEMENT CHARACTER`][U+FFFD] (`�`) when decoding to a string.
//!
//! Use [`unescape_to_bytes()`] to get the exact decoded bytes, or [`try_unescape()`]
//! to treat either situation as a [`DecodingError`].
//!
//! [U+FFFD]: core::char::REPLACEMENT_CHARACTER
//! [`escape_uri()`]: trait.StrExt.html#tymethod.escape_uri
//! [`unescape_uri()`]: trait.StrExt.html#tymethod.unescape_uri
//! [`DecodingError`]: crate::DecodingError
mod escape_uri;
pub use escape_uri::*;

mod unescape_uri;
pub use unescape_uri::*;


use crate::error::DecodingError;

/// Trait for `str` adding URI percent encoding/decoding
///
/// See the [module-level](index.html) documentation for more details.
///
pub trait StrExt {
    /// Gets an iterator that percent-encodes everything except the unreserved
    /// characters and the characters in [`DEFAULT`].
    ///
    /// This behavior can be modified by appending one of the modifiers on
    /// [`EscapeUri`], like [`for_path_segment()`] or [`full()`].
    ///
    /// [`for_path_segment()`]: struct.EscapeUri.html#method.for_path_segment
    /// [`full()`]: struct.EscapeUri.html#method.full
    fn escape_uri(&self) -> EscapeUri<'_, 'static>;

    /// Gets an iterator that percent-encodes everything except the unreserved
    /// characters and the characters in `allowed`.
    fn escape_uri_with<'b, A: Into<AllowedChars<'b>>>(&self, allowed: A) -> EscapeUri<'_, 'b>;

    /// Gets an iterator that performs URI percent-decoding, yielding raw bytes.
    fn unescape_uri(&self) -> UnescapeUri<'_>;
}

impl StrExt for str {
    fn escape_uri(&self) -> EscapeUri<'_, 'static> {
        self.escape_uri_with(DEFAULT)
    }

    fn escape_uri_with<'b, A: Into<AllowedChars<'b>>>(&self, allowed: A) -> EscapeUri<'_, 'b> {
        EscapeUri {
            iter: self.as_bytes().iter(),
            state: EscapeUriState::Normal,
            allowed: allowed.into(),
        }
    }

    fn unescape_uri(&self) -> UnescapeUri<'_> {
        UnescapeUri {
            bytes: self.as_bytes(),
            index: 0,
        }
    }
}

/// Percent-encodes `s` using the [`DEFAULT`] allowed set.
pub fn escape(s: &str) -> String {
    s.escape_uri().to_string()
}

/// Percent-encodes every byte of `s` that is neither unreserved nor listed in `allowed`.
///
/// ```
/// assert_eq!(wire_uri::escape::escape_with("a b/c", "/"), "a%20b/c");
/// ```
pub fn escape_with<'b, A: Into<AllowedChars<'b>>>(s: &str, allowed: A) -> String {
    s.escape_uri_with(allowed).to_string()
}

/// Decodes all `%XX` sequences in `s`. Never fails; see the
/// [module-level](index.html) documentation for how errors are handled.
pub fn unescape(s: &str) -> String {
    s.unescape_uri().to_string()
}

/// Decodes all `%XX` sequences in `s` into the exact resulting bytes.
pub fn unescape_to_bytes(s: &str) -> Vec<u8> {
    s.unescape_uri().to_bytes()
}

/// Strictly decodes all `%XX` sequences in `s`.
///
/// # Errors
///
/// Fails if `s` contains a malformed escape, or if the result is not valid UTF8.
pub fn try_unescape(s: &str) -> Result<String, DecodingError> {
    s.unescape_uri().try_to_string()
}

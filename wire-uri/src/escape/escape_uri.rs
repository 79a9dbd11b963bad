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

use core::fmt::Write;
use std::borrow::Cow;
use std::fmt::Display;
use std::iter::FusedIterator;

pub(crate) fn is_byte_uri_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'.' || b == b'_' || b == b'~'
}

/// A set of characters that are exempt from percent-encoding, on top of
/// the unreserved characters (`A-Z a-z 0-9 - . _ ~`), which are never escaped.
///
/// Only ASCII characters are meaningful here: bytes outside of the ASCII range
/// are always escaped. A `%` in the set is ignored, so that escaped output can
/// always be unescaped back to the original input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct AllowedChars<'a>(&'a str);

impl<'a> AllowedChars<'a> {
    /// Creates an allowed set from the characters in `chars`.
    pub const fn new(chars: &'a str) -> AllowedChars<'a> {
        AllowedChars(chars)
    }

    /// Returns the characters in this set, as given to [`AllowedChars::new`].
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Determines if the given byte would be escaped when using this set.
    pub fn byte_needs_escape(&self, b: u8) -> bool {
        if is_byte_uri_unreserved(b) {
            return false;
        }

        if b == b'%' || (b & 0x80) != 0 {
            return true;
        }

        !self.0.as_bytes().contains(&b)
    }
}

impl<'a> From<&'a str> for AllowedChars<'a> {
    fn from(chars: &'a str) -> Self {
        AllowedChars::new(chars)
    }
}

impl Default for AllowedChars<'static> {
    fn default() -> Self {
        DEFAULT
    }
}

/// Allowed set used by [`escape()`](super::escape): everything that can appear
/// unescaped somewhere in a URI except for `%`, `[` and `]`.
pub const DEFAULT: AllowedChars<'static> = AllowedChars::new(":@!$'()*+,=/?&#;");

/// Allowed set for the `host[:port]` portion of an authority.
pub const HOST_AND_PORT: AllowedChars<'static> = AllowedChars::new("!$&'()*+,;=:[]@");

/// Allowed set for a single path segment. Note that `/` is not included.
pub const PATH_SEGMENT: AllowedChars<'static> = AllowedChars::new("!$&'()*+,;=:@");

/// Allowed set for a query key, which must not contain `&`, `;` or `=`.
pub const QUERY_KEY: AllowedChars<'static> = AllowedChars::new(":@!$'()*+,");

/// Allowed set for a query value, which must not contain `&` or `;`.
pub const QUERY_VALUE: AllowedChars<'static> = AllowedChars::new(":@!$'()*+,=");

/// Allowed set for a user name or password, which must not contain `:` or `@`.
pub const USER_INFO: AllowedChars<'static> = AllowedChars::new("!$&'()*+,;=");

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub(super) enum EscapeUriState {
    Normal,
    OutputHighNibble(u8),
    OutputLowNibble(u8),
}

fn hex_digit(nibble: u8) -> char {
    if nibble < 10 {
        (b'0' + nibble) as char
    } else {
        (b'A' + nibble - 10) as char
    }
}

/// An iterator used to apply URI percent encoding to strings.
///
/// It is constructed via the methods [`escape_uri()`] and [`escape_uri_with()`].
/// See the documentation for [`StrExt`] for more information.
///
/// [`StrExt`]: trait.StrExt.html
/// [`escape_uri()`]: trait.StrExt.html#tymethod.escape_uri
/// [`escape_uri_with()`]: trait.StrExt.html#tymethod.escape_uri_with
#[derive(Debug, Clone)]
pub struct EscapeUri<'a, 'b> {
    pub(super) iter: std::slice::Iter<'a, u8>,
    pub(super) state: EscapeUriState,
    pub(super) allowed: AllowedChars<'b>,
}

impl<'a, 'b> From<EscapeUri<'a, 'b>> for Cow<'a, str> {
    fn from(iter: EscapeUri<'a, 'b>) -> Self {
        iter.to_cow()
    }
}

impl<'a, 'b> EscapeUri<'a, 'b> {
    /// Determines if this iterator will actually escape anything.
    pub fn is_needed(&self) -> bool {
        let allowed = self.allowed;
        self.iter.clone().any(|b| allowed.byte_needs_escape(*b))
    }

    /// Converts this iterator into a [`std::borrow::Cow<str>`], borrowing the
    /// input when nothing needs to be escaped.
    pub fn to_cow(&self) -> Cow<'a, str> {
        if self.state == EscapeUriState::Normal && !self.is_needed() {
            if let Ok(s) = std::str::from_utf8(self.iter.as_slice()) {
                return Cow::from(s);
            }
        }
        Cow::from(self.to_string())
    }

    /// Replaces the allowed set of this iterator.
    pub fn allowing<'c>(self, allowed: AllowedChars<'c>) -> EscapeUri<'a, 'c> {
        EscapeUri {
            iter: self.iter,
            state: self.state,
            allowed,
        }
    }

    /// Converts this iterator into one that escapes all except unreserved characters.
    pub fn full(self) -> EscapeUri<'a, 'static> {
        self.allowing(AllowedChars::new(""))
    }

    /// Converts this iterator into one suitable for a single path segment.
    pub fn for_path_segment(self) -> EscapeUri<'a, 'static> {
        self.allowing(PATH_SEGMENT)
    }

    /// Converts this iterator into one suitable for a query key.
    pub fn for_query_key(self) -> EscapeUri<'a, 'static> {
        self.allowing(QUERY_KEY)
    }

    /// Converts this iterator into one suitable for a query value.
    pub fn for_query_value(self) -> EscapeUri<'a, 'static> {
        self.allowing(QUERY_VALUE)
    }

    /// Converts this iterator into one suitable for a `host[:port]` string.
    pub fn for_host_and_port(self) -> EscapeUri<'a, 'static> {
        self.allowing(HOST_AND_PORT)
    }
}

impl<'a, 'b> Display for EscapeUri<'a, 'b> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.clone().try_for_each(|c| f.write_char(c))
    }
}

impl<'a, 'b> FusedIterator for EscapeUri<'a, 'b> {}

impl<'a, 'b> Iterator for EscapeUri<'a, 'b> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match self.state {
            EscapeUriState::Normal => match self.iter.next().copied() {
                Some(b) if self.allowed.byte_needs_escape(b) => {
                    self.state = EscapeUriState::OutputHighNibble(b);
                    Some('%')
                }
                Some(b) => Some(b as char),
                None => None,
            },

            EscapeUriState::OutputHighNibble(b) => {
                self.state = EscapeUriState::OutputLowNibble(b);
                Some(hex_digit(b >> 4))
            }

            EscapeUriState::OutputLowNibble(b) => {
                self.state = EscapeUriState::Normal;
                Some(hex_digit(b & 0b1111))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.iter.size_hint().0;
        let pending = match self.state {
            EscapeUriState::Normal => 0,
            EscapeUriState::OutputHighNibble(_) => 2,
            EscapeUriState::OutputLowNibble(_) => 1,
        };
        (n + pending, Some(n * 3 + pending))
    }
}

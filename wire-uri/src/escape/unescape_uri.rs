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

use crate::error::{DecodingError, DecodingErrorKind};
use std::borrow::Cow;
use std::fmt;
use std::fmt::Display;
use std::iter::FusedIterator;

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// An iterator used to apply URI percent decoding to strings.
///
/// It is constructed via the method [`unescape_uri()`].
/// See the documentation for [`StrExt`] for more information.
///
/// The iterator yields raw decoded bytes. A `%` that is not followed by two
/// hex digits is passed through as a literal `%`; [`first_error()`] can be
/// used to find out whether that happened.
///
/// [`StrExt`]: trait.StrExt.html
/// [`unescape_uri()`]: trait.StrExt.html#tymethod.unescape_uri
/// [`first_error()`]: #method.first_error
#[derive(Debug, Clone)]
pub struct UnescapeUri<'a> {
    pub(super) bytes: &'a [u8],
    pub(super) index: usize,
}

impl<'a> Display for UnescapeUri<'a> {
    /// Writes the decoded string, replacing invalid UTF8 with `U+FFFD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

impl<'a> From<UnescapeUri<'a>> for Cow<'a, str> {
    fn from(iter: UnescapeUri<'a>) -> Self {
        iter.to_cow()
    }
}

impl<'a> FusedIterator for UnescapeUri<'a> {}

impl<'a> UnescapeUri<'a> {
    /// Indicates the number of bytes that have been read by this iterator
    /// from the source string.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the first malformed percent-escape sequence, if any.
    ///
    /// This does not check whether the decoded bytes are valid UTF8;
    /// use [`UnescapeUri::try_to_string`] for that.
    pub fn first_error(&self) -> Option<DecodingError> {
        let bytes = self.bytes;
        let mut i = self.index;

        while i < bytes.len() {
            if bytes[i] != b'%' {
                i += 1;
                continue;
            }

            match (bytes.get(i + 1).copied(), bytes.get(i + 2).copied()) {
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {
                    i += 3;
                }
                (Some(hi), _) if !hi.is_ascii_hexdigit() => {
                    return Some(DecodingError::new(
                        DecodingErrorKind::InvalidEscape(hi as char),
                        i + 1,
                    ));
                }
                (Some(_), Some(lo)) => {
                    return Some(DecodingError::new(
                        DecodingErrorKind::InvalidEscape(lo as char),
                        i + 2,
                    ));
                }
                _ => return Some(DecodingError::new(DecodingErrorKind::MissingChar, i)),
            }
        }

        None
    }

    /// Decodes the rest of the input into a byte vector. Never fails.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.clone().collect()
    }

    /// Decodes the string (lossily if necessary), returning it as a copy-on-write type.
    pub fn to_cow(&self) -> Cow<'a, str> {
        let rest = &self.bytes[self.index..];
        if !rest.contains(&b'%') {
            if let Ok(s) = std::str::from_utf8(rest) {
                return Cow::from(s);
            }
        }
        Cow::from(self.to_string())
    }

    /// Attempts to losslessly decode the string, returning it as a standard [`String`].
    ///
    /// # Errors
    ///
    /// Returns a [`DecodingError`] if a malformed escape sequence is present, or
    /// if the decoded bytes are not valid UTF8.
    pub fn try_to_string(&self) -> Result<String, DecodingError> {
        if let Some(err) = self.first_error() {
            return Err(err);
        }

        String::from_utf8(self.to_bytes()).map_err(|err| {
            let valid_up_to = err.utf8_error().valid_up_to();
            DecodingError::new(DecodingErrorKind::InvalidUtf8, valid_up_to)
        })
    }

    /// Attempts to losslessly decode the string, returning it as a copy-on-write type.
    ///
    /// # Errors
    ///
    /// Same as [`UnescapeUri::try_to_string`].
    pub fn try_to_cow(&self) -> Result<Cow<'a, str>, DecodingError> {
        let rest = &self.bytes[self.index..];
        if !rest.contains(&b'%') {
            if let Ok(s) = std::str::from_utf8(rest) {
                return Ok(Cow::from(s));
            }
        }
        self.try_to_string().map(Cow::from)
    }
}

impl<'a> Iterator for UnescapeUri<'a> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        let bytes = self.bytes;
        let b = *bytes.get(self.index)?;

        if b == b'%' {
            let hi = bytes.get(self.index + 1).copied().and_then(hex_value);
            let lo = bytes.get(self.index + 2).copied().and_then(hex_value);

            if let (Some(hi), Some(lo)) = (hi, lo) {
                self.index += 3;
                return Some((hi << 4) | lo);
            }
        }

        self.index += 1;
        Some(b)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bytes.len() - self.index;
        ((n + 2) / 3, Some(n))
    }
}

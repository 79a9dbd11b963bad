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

use std::fmt;

/// Error returned by the strict (lossless) percent-decoding methods,
/// such as [`try_unescape`](crate::escape::try_unescape).
///
/// The lossy decoders never fail; they pass malformed escapes through
/// literally and replace invalid UTF8 with `U+FFFD`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecodingError {
    kind: DecodingErrorKind,

    /// The index at which the error occurred.
    ///
    /// For malformed escapes this is the byte offset into the escaped input.
    /// For [`DecodingErrorKind::InvalidUtf8`] it is the byte offset into the
    /// decoded output at which the invalid sequence starts.
    pub index: usize,
}

impl DecodingError {
    pub(crate) fn new(kind: DecodingErrorKind, index: usize) -> Self {
        Self { kind, index }
    }

    /// The kind of decoding error.
    pub fn kind(&self) -> DecodingErrorKind {
        self.kind
    }
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at index {}", self.kind, self.index)
    }
}

impl ::std::error::Error for DecodingError {}

/// The reason a [`DecodingError`] was emitted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DecodingErrorKind {
    /// The input ended before the two hex digits following a `%`.
    MissingChar,

    /// A character following a `%` was not a hex digit.
    InvalidEscape(char),

    /// The decoded bytes are not valid UTF8.
    InvalidUtf8,
}

impl fmt::Display for DecodingErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingChar => write!(f, "missing char after `%`"),
            Self::InvalidEscape(c) => write!(
                f,
                "the char after `%` must be a valid hex character `{:?}`",
                c
            ),
            Self::InvalidUtf8 => write!(f, "decoded bytes are not valid utf8"),
        }
    }
}

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
use std::iter::FromIterator;

/// An ordered sequence of *unescaped* path segments.
///
/// This is the path input to [`Uri::build_http`], and the output of
/// [`Uri::path_segments`]. Each segment is escaped on its own, so a
/// segment may contain `/` without introducing a new segment.
///
/// ```
/// use wire_uri::PathSegments;
/// let path: PathSegments = ["files", "a/b"].iter().collect();
/// assert_eq!(path.to_escaped_path(), "/files/a%2Fb");
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default)]
pub struct PathSegments(Vec<String>);

impl PathSegments {
    /// Creates an empty path.
    pub fn new() -> PathSegments {
        PathSegments(Vec::new())
    }

    /// Splits an escaped path like `/a/b%20c` into its unescaped segments.
    ///
    /// The leading slash is dropped; every other slash separates two segments,
    /// so `"/"` yields one empty segment and `""` yields none.
    pub fn from_escaped_path(escaped_path: &str) -> PathSegments {
        if escaped_path.is_empty() {
            return PathSegments::new();
        }

        let trimmed = escaped_path.strip_prefix('/').unwrap_or(escaped_path);

        trimmed.split('/').map(escape::unescape).collect()
    }

    /// Appends a segment.
    pub fn push<S: Into<String>>(&mut self, segment: S) {
        self.0.push(segment.into());
    }

    /// The number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the unescaped segments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Escapes each segment with [`escape::PATH_SEGMENT`] and joins them, each
    /// preceded by a `/`. An empty sequence gives an empty path.
    pub fn to_escaped_path(&self) -> String {
        let mut ret = String::new();
        for seg in self.0.iter() {
            ret.push('/');
            ret.extend(seg.escape_uri().for_path_segment());
        }
        ret
    }
}

impl<S: AsRef<str>> FromIterator<S> for PathSegments {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        PathSegments(iter.into_iter().map(|x| x.as_ref().to_string()).collect())
    }
}

impl From<Vec<String>> for PathSegments {
    fn from(segments: Vec<String>) -> Self {
        PathSegments(segments)
    }
}

impl From<&[&str]> for PathSegments {
    fn from(segments: &[&str]) -> Self {
        segments.iter().collect()
    }
}

impl From<&str> for PathSegments {
    /// A path made of a single segment.
    fn from(segment: &str) -> Self {
        PathSegments(vec![segment.to_string()])
    }
}

impl From<PathSegments> for Vec<String> {
    fn from(path: PathSegments) -> Self {
        path.0
    }
}

impl<'a> IntoIterator for &'a PathSegments {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_path_segments() {
        let test_table = vec![
            ("", vec![]),
            ("/", vec![""]),
            ("/a/b/c", vec!["a", "b", "c"]),
            ("/a/b/c/", vec!["a", "b", "c", ""]),
            ("/a//b", vec!["a", "", "b"]),
            ("/a%2Fb/c%20d", vec!["a/b", "c d"]),
            ("rel/path", vec!["rel", "path"]),
        ];

        for (escaped, segments) in test_table {
            let path = PathSegments::from_escaped_path(escaped);
            let expected: PathSegments = segments.iter().collect();
            assert_eq!(expected, path, "escaped path: {:?}", escaped);
        }
    }

    #[test]
    fn segments_keep_their_boundaries() {
        let path: PathSegments = ["a/b", "?", "", "c d"].iter().collect();
        let escaped = path.to_escaped_path();

        assert_eq!("/a%2Fb/%3F//c%20d", escaped);
        assert_eq!(path, PathSegments::from_escaped_path(&escaped));
    }

    #[test]
    fn empty_path_escapes_to_nothing() {
        assert_eq!("", PathSegments::new().to_escaped_path());
    }
}

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

/// Schemes with a well-known port that is implied when no port is given.
const DEFAULT_PORTS: &[(&str, u16)] = &[("http", 80), ("https", 443), ("ftp", 21)];

/// Returns the port implied by `scheme`, if it has one.
///
/// ```
/// assert_eq!(wire_uri::default_port_for_scheme("https"), Some(443));
/// assert_eq!(wire_uri::default_port_for_scheme("mailto"), None);
/// ```
pub fn default_port_for_scheme(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| *name == scheme)
        .map(|(_, port)| *port)
}

/// The raw, still-escaped pieces of an authority component.
///
/// Produced by [`Uri::authority_parts`]; every accessor on [`Uri`] that deals with
/// the authority goes through this type.
#[derive(Debug, Eq, Clone, Copy, PartialEq, Hash, Default)]
pub struct AuthorityParts<'a> {
    pub(crate) userinfo: Option<&'a str>,
    pub(crate) host: &'a str,
    pub(crate) port: Option<&'a str>,
}

impl<'a> AuthorityParts<'a> {
    /// Splits an escaped authority using the grammar `[user[":"pass]"@"]host[":"port]`.
    ///
    /// This never fails; missing pieces are left empty.
    pub fn from_escaped(authority: &'a str) -> AuthorityParts<'a> {
        let captures = match URI_AUTHORITY.captures(authority) {
            Some(x) => x,
            None => {
                debug!("Unable to split authority {:?}", authority);
                return AuthorityParts {
                    host: authority,
                    ..AuthorityParts::default()
                };
            }
        };

        AuthorityParts {
            userinfo: captures.get(2).map(|x| x.as_str()),
            host: captures.get(3).map_or("", |x| x.as_str()),
            port: captures.get(5).map(|x| x.as_str()),
        }
    }

    /// The escaped `user[:pass]` portion, if an `@` was present.
    pub fn raw_userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    /// The escaped user name: the userinfo up to its first colon.
    pub fn raw_user_name(&self) -> &'a str {
        match self.userinfo {
            Some(info) => info.split(':').next().unwrap_or(info),
            None => "",
        }
    }

    /// The escaped password: the userinfo after its first colon.
    pub fn raw_password(&self) -> &'a str {
        match self.userinfo.and_then(|info| info.find(':').map(|i| &info[i + 1..])) {
            Some(password) => password,
            None => "",
        }
    }

    /// The escaped host. IPv6 literals keep their brackets.
    pub fn raw_host(&self) -> &'a str {
        self.host
    }

    /// The text after the colon that follows the host, if present.
    pub fn raw_port(&self) -> Option<&'a str> {
        self.port
    }

    /// The explicit port, if one is present and is a valid 16-bit number.
    pub fn port(&self) -> Option<u16> {
        let port = self.port.filter(|x| !x.is_empty())?;

        match port.parse::<u16>() {
            Ok(x) => Some(x),
            Err(_) => {
                debug!("Ignoring unparsable port {:?}", port);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_parts() {
        let parts = AuthorityParts::from_escaped("username:password@example.com:1234");
        assert_eq!(Some("username:password"), parts.raw_userinfo());
        assert_eq!("username", parts.raw_user_name());
        assert_eq!("password", parts.raw_password());
        assert_eq!("example.com", parts.raw_host());
        assert_eq!(Some(1234), parts.port());

        let parts = AuthorityParts::from_escaped("username@[2000::1]:1234");
        assert_eq!("username", parts.raw_user_name());
        assert_eq!("", parts.raw_password());
        assert_eq!("[2000::1]", parts.raw_host());
        assert_eq!(Some(1234), parts.port());

        let parts = AuthorityParts::from_escaped("example.com");
        assert_eq!(None, parts.raw_userinfo());
        assert_eq!("example.com", parts.raw_host());
        assert_eq!(None, parts.raw_port());
        assert_eq!(None, parts.port());
    }

    #[test]
    fn authority_parts_degrade_gracefully() {
        assert_eq!(AuthorityParts::default(), AuthorityParts::from_escaped(""));

        let parts = AuthorityParts::from_escaped("host:http");
        assert_eq!("host", parts.raw_host());
        assert_eq!(Some("http"), parts.raw_port());
        assert_eq!(None, parts.port());

        let parts = AuthorityParts::from_escaped("host:99999");
        assert_eq!(None, parts.port());

        let parts = AuthorityParts::from_escaped("host:");
        assert_eq!(Some(""), parts.raw_port());
        assert_eq!(None, parts.port());

        let parts = AuthorityParts::from_escaped("[::1");
        assert_eq!("[", parts.raw_host());
        assert_eq!(Some(":1"), parts.raw_port());
    }

    #[test]
    fn default_ports() {
        assert_eq!(Some(80), default_port_for_scheme("http"));
        assert_eq!(Some(443), default_port_for_scheme("https"));
        assert_eq!(Some(21), default_port_for_scheme("ftp"));
        assert_eq!(None, default_port_for_scheme("HTTP"));
        assert_eq!(None, default_port_for_scheme(""));
    }
}

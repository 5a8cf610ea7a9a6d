// Baserow Rust SDK for the Baserow no-code database REST API
// Copyright 2025 the baserow-rs contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::str::FromStr;

use url::{Position, Url};

use crate::error::ValidationErr;
use crate::multimap_ext::{Multimap, MultimapExt};

/// Represents the location of a Baserow deployment.
///
/// A `BaseUrl` keeps only the origin of the configured URL (scheme, host and
/// optional port); any path or trailing slash is normalized away at
/// construction. Request paths are always absolute from the root and are
/// resolved against this origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    origin: String,
}

impl BaseUrl {
    /// The normalized origin, without a trailing slash.
    pub fn as_str(&self) -> &str {
        &self.origin
    }

    /// Builds the full request URL for a path and query parameters. A leading
    /// slash is inserted into the path if missing; query parameters are
    /// urlencoded with one occurrence per value.
    pub(crate) fn build_url(&self, path: &str, query_params: &Multimap) -> String {
        let mut url = self.origin.clone();
        if !path.starts_with('/') {
            url.push('/');
        }
        url.push_str(path);
        if !query_params.is_empty() {
            url.push('?');
            url.push_str(&query_params.to_query_string());
        }
        url
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "a Baserow API URL is required".into(),
            ));
        }

        let url = Url::parse(s)
            .map_err(|e| ValidationErr::InvalidBaseUrl(format!("{s}: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ValidationErr::InvalidBaseUrl(format!(
                "{s}: scheme must be http or https"
            )));
        }
        if url.host_str().is_none() {
            return Err(ValidationErr::InvalidBaseUrl(format!("{s}: missing host")));
        }

        Ok(BaseUrl {
            origin: url[..Position::BeforePath].to_string(),
        })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let base: BaseUrl = "https://api.example.com/".parse().unwrap();
        assert_eq!(base.as_str(), "https://api.example.com");
    }

    #[test]
    fn port_is_preserved() {
        let base: BaseUrl = "http://localhost:8000".parse().unwrap();
        assert_eq!(base.as_str(), "http://localhost:8000");
    }

    #[test]
    fn path_prefix_is_discarded() {
        let base: BaseUrl = "https://api.example.com/some/prefix/".parse().unwrap();
        assert_eq!(base.as_str(), "https://api.example.com");
    }

    #[test]
    fn empty_url_is_rejected() {
        assert!("".parse::<BaseUrl>().is_err());
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert!("ftp://example.com".parse::<BaseUrl>().is_err());
    }

    #[test]
    fn build_url_inserts_leading_slash() {
        let base: BaseUrl = "https://api.example.com".parse().unwrap();
        let url = base.build_url("api/workspaces/", &Multimap::new());
        assert_eq!(url, "https://api.example.com/api/workspaces/");
    }

    #[test]
    fn build_url_appends_query_string() {
        let base: BaseUrl = "https://api.example.com".parse().unwrap();
        let mut query = Multimap::new();
        query.add("queue", "celery");
        query.add("queue", "export");
        let url = base.build_url("/api/_health/celery-queue/", &query);
        assert_eq!(
            url,
            "https://api.example.com/api/_health/celery-queue/?queue=celery&queue=export"
        );
    }
}

// Copyright 2024 Felix Engl
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


use thiserror::Error;
use url::Url;

const HTTPS_PREFIX: &str = "https://";

/// The input can not be turned into a fetchable url.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("The input is empty!")]
    Empty,
    #[error("The input {input:?} is not a valid url: {source}")]
    Unparsable {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("The url {0:?} does not point to a web resource!")]
    NotAddressable(String),
}

/// A user input together with the url that is fetched and the form shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    raw: String,
    normalized: String,
    display: String,
}

impl UrlRecord {
    /// The input as provided by the user
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The url with a scheme, used for fetching and the domain features.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The input without a leading `https://`
    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Normalizes a user input to a fetchable url.
///
/// Inputs not starting with `http` are prefixed with `http://`, an explicit
/// scheme other than http(s) is rejected. The display form
/// strips `https://` from the trimmed input twice, so `https://https://a.com`
/// is displayed as `a.com`.
pub fn normalize(raw: &str) -> Result<UrlRecord, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::Empty);
    }

    let normalized = match explicit_scheme(trimmed) {
        Some((scheme, rest)) => {
            if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
                return Err(NormalizeError::NotAddressable(trimmed.to_string()));
            }
            format!("{}://{rest}", scheme.to_ascii_lowercase())
        }
        None if trimmed.starts_with("http") => trimmed.to_string(),
        None => format!("http://{trimmed}"),
    };

    let parsed = Url::parse(&normalized).map_err(|source| NormalizeError::Unparsable {
        input: trimmed.to_string(),
        source,
    })?;
    let has_host = parsed.host_str().is_some_and(|host| !host.is_empty());
    if !matches!(parsed.scheme(), "http" | "https") || !has_host {
        return Err(NormalizeError::NotAddressable(normalized));
    }

    let display = strip_https(strip_https(trimmed)).to_string();
    if display.is_empty() {
        return Err(NormalizeError::NotAddressable(normalized));
    }
    log::trace!("Normalized {trimmed:?} to {normalized:?}");

    Ok(UrlRecord {
        raw: raw.to_string(),
        normalized,
        display,
    })
}

/// Splits `<scheme>://<rest>` if [value] starts with a syntactically valid scheme.
fn explicit_scheme(value: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = value.split_once("://")?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|first| first.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}

fn strip_https(value: &str) -> &str {
    value.strip_prefix(HTTPS_PREFIX).unwrap_or(value)
}

#[cfg(test)]
mod test {
    use super::{normalize, NormalizeError};

    #[test]
    fn adds_a_scheme_if_missing() {
        let record = normalize("example.com/news/1").unwrap();
        assert_eq!("http://example.com/news/1", record.normalized());
        assert_eq!("example.com/news/1", record.display());
        assert_eq!("example.com/news/1", record.raw());
    }

    #[test]
    fn keeps_an_existing_scheme() {
        let record = normalize("http://example.com").unwrap();
        assert_eq!("http://example.com", record.normalized());
        assert_eq!("http://example.com", record.display());

        let record = normalize("https://www.example.co.uk/a").unwrap();
        assert_eq!("https://www.example.co.uk/a", record.normalized());
        assert_eq!("www.example.co.uk/a", record.display());
    }

    #[test]
    fn strips_https_twice_for_display() {
        let record = normalize("https://https://example.com").unwrap();
        assert_eq!("example.com", record.display());
        assert!(!record.display().starts_with("https://"));
    }

    #[test]
    fn trims_the_input() {
        let record = normalize("  example.org \n").unwrap();
        assert_eq!("http://example.org", record.normalized());
        assert_eq!("example.org", record.display());
    }

    #[test]
    fn the_scheme_is_case_insensitive() {
        let record = normalize("HTTPS://example.com/a").unwrap();
        assert_eq!("https://example.com/a", record.normalized());
        let record = normalize("Http://example.com").unwrap();
        assert_eq!("http://example.com", record.normalized());
    }

    #[test]
    fn other_schemes_are_not_addressable() {
        assert_eq!(
            Err(NormalizeError::NotAddressable("ftp://x.com".to_string())),
            normalize("ftp://x.com")
        );
        assert!(matches!(
            normalize("file:///etc/passwd"),
            Err(NormalizeError::NotAddressable(_))
        ));
        assert!(matches!(
            normalize("javascript://alert(1)"),
            Err(NormalizeError::NotAddressable(_))
        ));
    }

    #[test]
    fn an_empty_display_is_not_addressable() {
        assert!(matches!(
            normalize("https://https://"),
            Err(NormalizeError::NotAddressable(_))
        ));
    }

    #[test]
    fn ports_and_paths_are_not_schemes() {
        let record = normalize("example.com:8080/a?next=http://b.com").unwrap();
        assert_eq!("http://example.com:8080/a?next=http://b.com", record.normalized());
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(Err(NormalizeError::Empty), normalize(""));
        assert_eq!(Err(NormalizeError::Empty), normalize("   \t"));
    }

    #[test]
    fn unparsable_input_fails() {
        assert!(matches!(
            normalize("http://exa mple.com"),
            Err(NormalizeError::Unparsable { .. })
        ));
        assert!(matches!(
            normalize("http://"),
            Err(NormalizeError::Unparsable { .. })
        ));
    }
}

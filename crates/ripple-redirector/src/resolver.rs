use http::StatusCode;
use ripple_core::{MappingSet, ShortCode, SHORT_PATH_PREFIX};

/// Where to send a client whose short code was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub location: String,
    /// Always `302 Found` so a code can be repointed later.
    pub status: StatusCode,
}

/// Outcome of resolving a request path against the short-link table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The code is mapped; redirect to its target.
    Redirect(RedirectTarget),
    /// Well-formed code with no mapping. Carries the lowercased code.
    NotFound(String),
    /// The path is not a short-link path at all.
    Invalid,
}

/// Extracts the short code from a `/ln/<code>` path.
///
/// The code must be 1-4 hex digits in either case. It is lowercased but not
/// padded, so `/ln/4ac` yields `4ac`, never `04ac`.
pub fn parse_path(path: &str) -> Option<ShortCode> {
    let code = path.strip_prefix(SHORT_PATH_PREFIX)?;
    ShortCode::new(code).ok()
}

/// Resolves a raw request path against `mappings`.
pub fn resolve(path: &str, mappings: &MappingSet) -> Resolution {
    let Some(code) = parse_path(path) else {
        return Resolution::Invalid;
    };

    match mappings.get(&code) {
        Some(url) => Resolution::Redirect(RedirectTarget {
            location: url.to_string(),
            status: StatusCode::FOUND,
        }),
        None => Resolution::NotFound(code.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mappings(entries: &[(&str, &str)]) -> MappingSet {
        entries
            .iter()
            .map(|(code, url)| (ShortCode::new(*code).unwrap(), url.to_string()))
            .collect()
    }

    fn redirect(url: &str) -> Resolution {
        Resolution::Redirect(RedirectTarget {
            location: url.to_string(),
            status: StatusCode::FOUND,
        })
    }

    #[test]
    fn redirects_mapped_code_with_302() {
        let set = mappings(&[("a1b2", "https://www.google.com")]);

        assert_eq!(resolve("/ln/a1b2", &set), redirect("https://www.google.com"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let set = mappings(&[("a1b2", "https://www.google.com")]);

        assert_eq!(resolve("/ln/A1B2", &set), resolve("/ln/a1b2", &set));
        assert_eq!(resolve("/ln/a1B2", &set), redirect("https://www.google.com"));
    }

    #[test]
    fn repeated_lookups_agree() {
        let set = mappings(&[("beef", "https://x")]);

        assert_eq!(resolve("/ln/beef", &set), resolve("/ln/beef", &set));
    }

    #[test]
    fn missing_code_echoes_code() {
        let set = MappingSet::new();

        assert_eq!(resolve("/ln/ffff", &set), Resolution::NotFound("ffff".into()));
        assert_eq!(resolve("/ln/FFFF", &set), Resolution::NotFound("ffff".into()));
    }

    #[test]
    fn no_implicit_zero_padding() {
        let set = mappings(&[("04ac", "https://x")]);

        assert_eq!(resolve("/ln/4ac", &set), Resolution::NotFound("4ac".into()));
        assert_eq!(resolve("/ln/04ac", &set), redirect("https://x"));
    }

    #[test]
    fn short_codes_match_literally() {
        let set = mappings(&[("4ac", "https://short"), ("04ac", "https://padded")]);

        assert_eq!(resolve("/ln/4ac", &set), redirect("https://short"));
        assert_eq!(resolve("/ln/04ac", &set), redirect("https://padded"));
    }

    #[test]
    fn invalid_paths() {
        let set = mappings(&[("a1b2", "https://x")]);

        for path in [
            "/ln/zzzz",
            "/ln/",
            "/ln",
            "/ln/a1b2c",
            "/ln/a1b2/",
            "/LN/a1b2",
            "/a1b2",
            "/ln/a1b2?x=1",
            "/ln//a1b",
            "",
        ] {
            assert_eq!(resolve(path, &set), Resolution::Invalid, "path {path:?}");
        }
    }

    #[test]
    fn parse_path_extracts_code() {
        assert_eq!(parse_path("/ln/AbC").unwrap().as_str(), "abc");
        assert!(parse_path("/agent").is_none());
    }
}

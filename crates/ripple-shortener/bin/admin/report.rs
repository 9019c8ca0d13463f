use ripple_core::MappingSet;
use ripple_shortener::Shortened;

/// Text printed after a successful `add`.
pub fn added(shortened: &Shortened) -> String {
    format!(
        "Added: {} -> {}\nShort URL: {}\n",
        shortened.code, shortened.url, shortened.path
    )
}

/// One `<code> -> <url>` line per mapping, in code order.
pub fn listing(mappings: &MappingSet) -> String {
    mappings
        .iter()
        .map(|(code, url)| format!("{} -> {}\n", code, url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ripple_core::ShortCode;

    #[test]
    fn added_reports_code_and_short_path() {
        let code = ShortCode::new("a1b2").unwrap();
        let shortened = Shortened {
            path: code.to_path(),
            code,
            url: "https://www.google.com".to_string(),
        };

        assert_eq!(
            added(&shortened),
            "Added: a1b2 -> https://www.google.com\nShort URL: /ln/a1b2\n"
        );
    }

    #[test]
    fn listing_is_in_code_order() {
        let mut mappings = MappingSet::new();
        mappings
            .insert(ShortCode::new("ffff").unwrap(), "https://b")
            .unwrap();
        mappings
            .insert(ShortCode::new("04ac").unwrap(), "https://a")
            .unwrap();

        assert_eq!(listing(&mappings), "04ac -> https://a\nffff -> https://b\n");
    }

    #[test]
    fn listing_empty_table() {
        assert_eq!(listing(&MappingSet::new()), "");
    }
}

use bino_search::links::{WHATSAPP_ENDPOINT, build_links, whatsapp_link};
use reqwest::Url;

mod test_helpers {
    use super::*;

    /// Decodes the `text` parameter back out of a generated link.
    pub fn text_param(link: &str) -> String {
        let url = Url::parse(link).expect("link should be a valid URL");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs.len(), 1, "expected exactly one query parameter");
        assert_eq!(pairs[0].0, "text");
        pairs[0].1.clone()
    }
}

#[cfg(test)]
mod whatsapp_link_tests {
    use super::test_helpers::text_param;
    use super::*;

    #[test]
    fn test_points_at_fixed_number() {
        let link = whatsapp_link("hello");
        assert!(link.starts_with(&format!("{WHATSAPP_ENDPOINT}?text=")));
        let url = Url::parse(&link).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/919800081110");
    }

    #[test]
    fn test_reserved_characters_round_trip() {
        let cases = [
            "plumber near me",
            "fish & chips",
            "open now? yes",
            "a=b;c/d#e+f%g",
            "dosa in ಬೆಂಗಳೂರು",
            "café ☕ 24/7",
            "",
        ];
        for case in cases {
            assert_eq!(text_param(&whatsapp_link(case)), case, "case {case:?}");
        }
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let link = whatsapp_link("a&b?c#d");
        let query = link.split_once('?').unwrap().1;
        assert_eq!(query, "text=a%26b%3Fc%23d");
    }

    #[test]
    fn test_non_ascii_is_percent_encoded_utf8() {
        let link = whatsapp_link("é");
        assert!(link.ends_with("text=%C3%A9"));
        assert!(link.is_ascii());
    }

    #[test]
    fn test_build_links_pairs_query_and_link() {
        let links = build_links(vec![
            "plumber Koramangala urgent".to_string(),
            "cheap electrician HSR Layout".to_string(),
        ]);
        assert_eq!(links.len(), 2);
        for link in &links {
            assert_eq!(text_param(&link.link), link.query);
        }
        assert_eq!(links[1].query, "cheap electrician HSR Layout");
    }
}

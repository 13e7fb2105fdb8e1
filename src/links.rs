use url::form_urlencoded;

/// Bino's WhatsApp number; every suggestion opens a chat with it.
pub const WHATSAPP_ENDPOINT: &str = "https://wa.me/919800081110";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLink {
    pub query: String,
    pub link: String,
}

/// Deep link that opens the chat with `variant` pre-filled as the message.
pub fn whatsapp_link(variant: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(variant.as_bytes()).collect();
    format!("{WHATSAPP_ENDPOINT}?text={encoded}")
}

pub fn build_links(variants: Vec<String>) -> Vec<ResultLink> {
    variants
        .into_iter()
        .map(|query| {
            let link = whatsapp_link(&query);
            ResultLink { query, link }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaces_become_plus() {
        assert_eq!(
            whatsapp_link("plumber near me"),
            "https://wa.me/919800081110?text=plumber+near+me"
        );
    }

    #[test]
    fn test_build_links_keeps_order() {
        let links = build_links(vec!["b".to_string(), "a".to_string()]);
        let queries: Vec<&str> = links.iter().map(|l| l.query.as_str()).collect();
        assert_eq!(queries, vec!["b", "a"]);
        assert_eq!(links[0].link, "https://wa.me/919800081110?text=b");
    }
}

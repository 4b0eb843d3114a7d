/// Element id targeted by an in-page link, if any.
///
/// `#` alone (the usual placeholder href) targets nothing.
pub fn anchor_target(href: &str) -> Option<&str> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() || fragment.chars().any(char::is_whitespace) {
        return None;
    }
    Some(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fragment_is_an_id() {
        assert_eq!(anchor_target("#complaints"), Some("complaints"));
        assert_eq!(anchor_target("#section-2"), Some("section-2"));
    }

    #[test]
    fn placeholder_and_external_links_target_nothing() {
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/dashboard#top"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("#two words"), None);
    }
}

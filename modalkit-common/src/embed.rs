//! Embed URLs and iframe markup for published modals

/// URL of the stand-alone embed page for a published config
pub fn embed_url(public_url: &str, id: &str) -> String {
    format!("{}/embed/{}", public_url.trim_end_matches('/'), id)
}

/// Markup a site owner pastes into their page
pub fn iframe_markup(embed_url: &str) -> String {
    format!(
        r#"<iframe src="{embed_url}" width="100%" height="100%" frameborder="0"></iframe>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_embed_url_without_double_slash() {
        assert_eq!(
            embed_url("https://modals.example.com/", "abc"),
            "https://modals.example.com/embed/abc"
        );
        assert_eq!(
            embed_url("http://localhost:8080", "abc"),
            "http://localhost:8080/embed/abc"
        );
    }

    #[test]
    fn iframe_points_at_url() {
        assert_eq!(
            iframe_markup("https://x.test/embed/1"),
            r#"<iframe src="https://x.test/embed/1" width="100%" height="100%" frameborder="0"></iframe>"#
        );
    }
}

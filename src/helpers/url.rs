//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/about") // -> "https://aiblaze.com/about"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Full URL of a post's page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    let encoded = utf8_percent_encode(slug, SEGMENT).to_string();
    full_url_for(config, &config.post_path(&encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(full_url_for(&config, "/"), "https://example.com/");
        assert_eq!(full_url_for(&config, "/about"), "https://example.com/about");
        assert_eq!(full_url_for(&config, "blogs"), "https://example.com/blogs");
    }

    #[test]
    fn test_post_url() {
        let config = test_config();
        assert_eq!(
            post_url(&config, "ai-tools-2025"),
            "https://example.com/blog/ai-tools-2025"
        );
        assert_eq!(
            post_url(&config, "a b/c"),
            "https://example.com/blog/a%20b%2Fc"
        );
    }
}

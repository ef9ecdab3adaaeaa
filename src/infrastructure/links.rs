// src/infrastructure/links.rs
//! Canonical link building for articles and user pages.

use crate::config::AppConfig;
use crate::domain::article::ArticleUrlId;

pub fn remove_trailing_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Site-relative article path.
pub fn article_path(url_id: &ArticleUrlId) -> String {
    format!("/p/{url_id}")
}

/// Link to an article, absolute and sub-qualified when addressing
/// another sub. Local development has no subdomain routing, so links
/// stay relative there.
pub fn article_link(
    config: &AppConfig,
    url_id: &ArticleUrlId,
    sub_override: Option<&str>,
) -> String {
    let path = article_path(url_id);
    match sub_override {
        Some(sub) if !config.is_localhost() => format!(
            "{}://{}.{}{}",
            config.platform_scheme(),
            sub,
            config.platform_host(),
            path
        ),
        _ => path,
    }
}

pub fn user_page_link(username: &str) -> String {
    format!("/u/{username}")
}

//! Site Configuration
//!
//! Fixed page layout, fragment locations and widget timings.

/// Static configuration shared by every page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Sidebar fragment, resolved against the current document
    pub sidebar_url: String,
    /// Header fragment, resolved against the current document
    pub header_url: String,
    /// Placeholder element id for the sidebar
    pub sidebar_container: String,
    /// Placeholder element id for the header
    pub header_container: String,
    /// Default/home route of the application
    pub home_page: String,
    /// Landing page (login/signup)
    pub landing_page: String,
    /// Pages whose header shows the search form instead of a quote
    pub search_pages: Vec<String>,
    /// External search endpoint; the encoded query is appended
    pub search_endpoint: String,
    /// How long a toast stays visible (ms)
    pub toast_ms: u32,
    /// Delay between showing the modal and starting its transition (ms)
    pub modal_show_delay_ms: u32,
    /// Delay between starting the close transition and hiding the modal (ms)
    pub modal_hide_delay_ms: u32,
    /// Delay before the demo bot answers (ms)
    pub chat_reply_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sidebar_url: "./_sidebar.html".to_string(),
            header_url: "./_header.html".to_string(),
            sidebar_container: "sidebar-container".to_string(),
            header_container: "header-container".to_string(),
            home_page: "dashboard.html".to_string(),
            landing_page: "index.html".to_string(),
            search_pages: vec!["dashboard.html".to_string(), "courses.html".to_string()],
            search_endpoint: "https://www.youtube.com/results?search_query=".to_string(),
            toast_ms: 3000,
            modal_show_delay_ms: 10,
            modal_hide_delay_ms: 300,
            chat_reply_delay_ms: 1200,
        }
    }
}

impl SiteConfig {
    /// Whether the header on `page` shows the search form
    pub fn shows_search(&self, page: &str) -> bool {
        self.search_pages.iter().any(|p| p == page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fragment_urls_are_relative() {
        let config = SiteConfig::default();
        assert_eq!(config.sidebar_url, "./_sidebar.html");
        assert_eq!(config.header_url, "./_header.html");
    }

    #[test]
    fn test_shows_search() {
        let config = SiteConfig::default();
        assert!(config.shows_search("dashboard.html"));
        assert!(config.shows_search("courses.html"));
        assert!(!config.shows_search("settings.html"));
    }
}

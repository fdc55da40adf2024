use popup_logging::popup_info;

/// Seam to the surrounding environment the popup runs in.
pub trait HostEnvironment {
    /// The active page's URL, captured once when the popup opens.
    fn active_page_url(&self) -> Option<String>;
    /// Opens `url` outside the popup.
    fn open_external(&self, url: &str);
}

/// Command-line host: the page URL comes from the arguments and external
/// navigation is surfaced on the terminal.
pub struct CliHost {
    page_url: Option<String>,
}

impl CliHost {
    pub fn new(page_url: Option<String>) -> Self {
        Self { page_url }
    }
}

impl HostEnvironment for CliHost {
    fn active_page_url(&self) -> Option<String> {
        self.page_url.clone()
    }

    fn open_external(&self, url: &str) {
        popup_info!("open_external {}", url);
        println!("Open in your browser: {url}");
    }
}

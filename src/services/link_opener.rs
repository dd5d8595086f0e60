//! Opens result links in the default system browser.
//! The state keeps the open callback injectable so tests can record opens.

pub struct BrowserOpener;

impl BrowserOpener {
    pub fn open_link(&self, url: &str) {
        if let Err(e) = webbrowser::open(url) {
            tracing::warn!("could not open {} in the browser: {}", url, e);
        }
    }
}

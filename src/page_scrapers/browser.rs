use std::{ffi::OsStr, sync::Arc};

use anyhow::Context;
use headless_chrome::{Browser, LaunchOptions, Tab};

use crate::config::ScrapeConfig;


/// Something that can turn a URL into rendered page source.
pub(crate) trait PageFetcher {
    /// Loads `url` and returns its html once the page is considered ready.
    ///
    /// Returns Err if the page could not be loaded or never became ready. Callers
    /// are expected to give up on that page only.
    fn fetch(&self, url: &str) -> anyhow::Result<String>;
}


/// A single headless Chrome tab, reused for every page of a run.
///
/// The browser process is killed when the session is dropped, so every exit path
/// releases it. [`BrowserSession::close`] additionally closes the tab politely.
pub(crate) struct BrowserSession {
    tab: Arc<Tab>,
    config: ScrapeConfig,
    // Held so the browser process lives as long as the session
    _browser: Browser
}


impl BrowserSession {
    pub(crate) fn launch(config: &ScrapeConfig) -> anyhow::Result<Self> {
        let args = [
            OsStr::new("--disable-blink-features=AutomationControlled"),
            OsStr::new("--disable-dev-shm-usage"),
        ];
        let options = LaunchOptions::default_builder()
            .headless(config.headless)
            .sandbox(false)
            .args(args.to_vec())
            .build()
            .map_err(|e| anyhow::anyhow!("Invalid browser launch options: {e}"))?;

        let browser = Browser::new(options).context("Failed to launch Chrome. Is it installed?")?;
        let tab = browser.new_tab()?;
        tab.set_user_agent(&config.user_agent, None, None)?;
        tracing::debug!("Browser session started");

        Ok(Self { tab, config: config.clone(), _browser: browser })
    }

    pub(crate) fn close(self) {
        if let Err(e) = self.tab.close(false) {
            tracing::debug!("Failed to close tab: {e}");
        }
        tracing::debug!("Browser session closed");
    }
}


impl PageFetcher for BrowserSession {
    fn fetch(&self, url: &str) -> anyhow::Result<String> {
        tracing::debug!("Loading {url}");
        self.tab
            .navigate_to(url)?
            .wait_until_navigated()
            .with_context(|| format!("Failed to navigate to {url}"))?;

        std::thread::sleep(self.config.settle_delay());

        self.tab
            .wait_for_element_with_custom_timeout(&self.config.ready_selector, self.config.ready_timeout())
            .with_context(|| format!("{url} did not become ready within {:?}", self.config.ready_timeout()))?;

        let html = self.tab.get_content()?;
        tracing::debug!("Loaded {} bytes from {url}", html.len());
        Ok(html)
    }
}

use anyhow::{Context, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::Duration;

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .window_size(Some((1280, 900)))
            .build()
            .context("failed to build launch options")?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        self.tab.reload(false, None)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    /// Current `value` of a form control.
    pub fn input_value(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let result = element.call_js_fn("function() { return this.value; }", vec![], false)?;
        let value = result
            .value
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        Ok(value)
    }

    /// Evaluate a script in the page and return its string result.
    pub fn eval_string(&self, script: &str) -> Result<String> {
        let result = self.tab.evaluate(script, false)?;
        Ok(result
            .value
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default())
    }

    /// Give hydration and event handlers time to settle.
    pub fn settle(&self) {
        std::thread::sleep(Duration::from_millis(500));
    }
}

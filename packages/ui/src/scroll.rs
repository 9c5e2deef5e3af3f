//! Smooth scrolling to home-page sections and the scroll spy that feeds the
//! header and the booking widget.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use serde::Deserialize;

/// Header compacts past this many pixels of scroll.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Flat offset used by in-page call-to-action buttons, whatever the target.
pub const CTA_SCROLL_OFFSET: f64 = 100.0;

/// Home-page anchors reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Problem,
    Solution,
    Impact,
    Offer,
}

impl Section {
    /// Header order.
    pub const ALL: [Section; 4] = [
        Section::Problem,
        Section::Solution,
        Section::Impact,
        Section::Offer,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Problem => "fonctionnalités",
            Section::Solution => "pourquoi-nous",
            Section::Impact => "process",
            Section::Offer => "pricing",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Section::Problem => "nav.problem",
            Section::Solution => "nav.solution",
            Section::Impact => "nav.impact",
            Section::Offer => "nav.offer",
        }
    }

    /// Pixels kept above the section under the fixed header. Negative values
    /// scroll past the section top.
    pub fn scroll_offset(self) -> f64 {
        match self {
            Section::Impact => -40.0,
            Section::Offer => -60.0,
            _ => 100.0,
        }
    }
}

/// Absolute scroll position that brings `section` under the header.
pub fn scroll_target(section: Section, element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - section.scroll_offset()
}

/// Absolute scroll position for a call-to-action jump to any section.
pub fn anchor_target(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - CTA_SCROLL_OFFSET
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionRect {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// Viewport snapshot sent by the browser on scroll and resize.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ScrollReport {
    pub scroll_y: f64,
    pub viewport_height: f64,
    #[serde(default)]
    pub sections: Vec<SectionRect>,
}

impl ScrollReport {
    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > SCROLLED_THRESHOLD
    }

    fn rect(&self, section: Section) -> Option<&SectionRect> {
        self.sections.iter().find(|rect| rect.id == section.id())
    }

    /// Section overlapping most of the band between 15% and 50% of the
    /// viewport height.
    pub fn active_section(&self) -> Option<Section> {
        let band_top = self.viewport_height * 0.15;
        let band_bottom = self.viewport_height * 0.5;

        Section::ALL
            .into_iter()
            .filter_map(|section| {
                let rect = self.rect(section)?;
                let overlap = rect.bottom.min(band_bottom) - rect.top.max(band_top);
                (overlap > 0.0).then_some((section, overlap))
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(section, _)| section)
    }

    /// Whether any part of `section` is inside the viewport.
    pub fn is_visible(&self, section: Section) -> bool {
        self.rect(section)
            .is_some_and(|rect| rect.top < self.viewport_height && rect.bottom > 0.0)
    }
}

/// Provide `Signal<ScrollReport>` fed by a window scroll listener.
#[component]
pub fn ScrollProvider(children: Element) -> Element {
    let mut report = use_signal(ScrollReport::default);
    use_context_provider(|| report);

    use_future(move || async move {
        let mut watcher = document::eval(&watch_script());
        while let Ok(next) = watcher.recv::<ScrollReport>().await {
            if next != *report.peek() {
                report.set(next);
            }
        }
        tracing::debug!("scroll: watcher closed");
    });

    rsx! { {children} }
}

pub fn use_scroll_report() -> Signal<ScrollReport> {
    use_context::<Signal<ScrollReport>>()
}

fn watch_script() -> String {
    let ids: Vec<String> = Section::ALL
        .iter()
        .map(|section| format!("\"{}\"", section.id()))
        .collect();
    format!(
        r#"
        const ids = [{ids}];
        let queued = false;
        function report() {{
          queued = false;
          const sections = [];
          for (const id of ids) {{
            const el = document.getElementById(id);
            if (!el) continue;
            const r = el.getBoundingClientRect();
            sections.push({{ id, top: r.top, bottom: r.bottom }});
          }}
          dioxus.send({{ scroll_y: window.scrollY, viewport_height: window.innerHeight, sections }});
        }}
        function schedule() {{
          if (queued) return;
          queued = true;
          requestAnimationFrame(report);
        }}
        window.addEventListener("scroll", schedule, {{ passive: true }});
        window.addEventListener("resize", schedule);
        new MutationObserver(schedule).observe(document.body, {{ childList: true, subtree: true }});
        report();
        await new Promise(() => {{}});
        "#,
        ids = ids.join(", ")
    )
}

/// Smooth-scroll to `section` with its header offset if it is rendered;
/// otherwise do nothing.
pub fn scroll_to_section(section: Section) {
    scroll_to_rendered(section, |top, page_y| scroll_target(section, top, page_y));
}

/// Smooth-scroll to `section` with the flat call-to-action offset.
pub fn scroll_to_anchor(section: Section) {
    scroll_to_rendered(section, anchor_target);
}

fn scroll_to_rendered(section: Section, target: impl Fn(f64, f64) -> f64) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(element) = window
            .document()
            .and_then(|doc| doc.get_element_by_id(section.id()))
        else {
            tracing::debug!("scroll: section {} not rendered", section.id());
            return;
        };
        let top = element.get_bounding_client_rect().top();
        let page_y = window.scroll_y().unwrap_or(0.0);
        smooth_scroll_to(&window, target(top, page_y));
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (section, target);
    }
}

/// Scroll to `section` once the current render has been committed, so a
/// section on a view that is about to mount can be found.
pub fn scroll_to_section_after_render(section: Section) {
    spawn(async move {
        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(0).await;
        scroll_to_section(section);
    });
}

pub fn scroll_to_top(smooth: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if smooth {
                smooth_scroll_to(&window, 0.0);
            } else {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = smooth;
    }
}

#[cfg(target_arch = "wasm32")]
fn smooth_scroll_to(window: &web_sys::Window, top: f64) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

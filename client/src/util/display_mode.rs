//! Display-mode detection and responsive padding.
//!
//! Distinguishes the installed-PWA presentation from a mobile browser tab
//! and a regular desktop browser, then maps the mode to container padding
//! classes. Detection requires a browser environment; native builds fall
//! back to the desktop mode.

#[cfg(test)]
#[path = "display_mode_test.rs"]
mod display_mode_test;

/// Viewport widths below this count as a mobile browser.
const MOBILE_WIDTH_PX: f64 = 768.0;

/// How the app is currently being presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Installed PWA (`display-mode: standalone`).
    Standalone,
    /// Browser tab on a narrow viewport.
    MobileBrowser,
    /// Regular desktop browser tab.
    #[default]
    Browser,
}

/// Whether a viewport width falls in the mobile range.
#[must_use]
pub fn is_mobile_width(width_px: f64) -> bool {
    width_px < MOBILE_WIDTH_PX
}

/// Classify a display mode from the standalone media query and viewport
/// width. Standalone wins regardless of width: an installed PWA controls
/// its own chrome.
#[must_use]
pub fn classify(standalone: bool, width_px: f64) -> DisplayMode {
    if standalone {
        DisplayMode::Standalone
    } else if is_mobile_width(width_px) {
        DisplayMode::MobileBrowser
    } else {
        DisplayMode::Browser
    }
}

/// Container padding class for a display mode. Standalone gets extra top
/// padding to clear the status bar; mobile browsers get tighter gutters.
#[must_use]
pub fn pad_class(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Standalone => "page-container--pad-standalone",
        DisplayMode::MobileBrowser => "page-container--pad-mobile",
        DisplayMode::Browser => "page-container--pad-desktop",
    }
}

/// Detect the current display mode from the browser environment.
pub fn detect() -> DisplayMode {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return DisplayMode::Browser;
        };

        let standalone = window
            .match_media("(display-mode: standalone)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());

        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(MOBILE_WIDTH_PX);

        classify(standalone, width)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        DisplayMode::Browser
    }
}

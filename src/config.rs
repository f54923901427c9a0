//! Site-wide constants: the DOM contract, the works document location and
//! the timing knobs shared by the browser controllers.

/// Relative path of the works document served next to the pages.
pub const WORKS_URL: &str = "./works.json";

/// Quiet period before a burst of resize events reinitialises the field.
pub const RESIZE_DEBOUNCE_MS: u32 = 120;

/// Time the preloader gets to fade out before it is detached.
pub const PRELOADER_FADE_MS: u32 = 500;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Query parameter carrying the zero-based work position on the detail page.
pub const WORK_PARAM: &str = "i";

/// Element identifiers the pages are expected to carry.
pub mod ids {
    pub const CANVAS: &str = "bgCanvas";
    pub const PRELOADER: &str = "preloader";
    pub const TYPED: &str = "typed";
    pub const WORKS_GRID: &str = "worksGrid";

    pub const WORK_TITLE: &str = "workTitle";
    pub const WORK_DESC: &str = "workDesc";
    pub const MAIN_IMG: &str = "mainImg";
    pub const THUMBS: &str = "thumbs";

    pub const LIGHTBOX: &str = "lightbox";
    pub const LIGHTBOX_IMG: &str = "lbImg";
    pub const LIGHTBOX_CLOSE: &str = "lbClose";
    pub const LIGHTBOX_PREV: &str = "lbPrev";
    pub const LIGHTBOX_NEXT: &str = "lbNext";
    pub const ZOOM: &str = "zoomBtn";
}

/// Class names toggled by the controllers.
pub mod classes {
    pub const ACTIVE: &str = "active";
    pub const OPEN: &str = "open";
    pub const HIDE: &str = "hide";
    pub const THUMB: &str = "thumb";
    pub const WORK_THUMB: &str = "work-thumb";
}

/// Runtime knobs grouped so controllers take them by reference instead of
/// reaching for the constants directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub works_url: String,
    pub resize_debounce_ms: u32,
    pub preloader_fade_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            works_url: WORKS_URL.to_string(),
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            preloader_fade_ms: PRELOADER_FADE_MS,
        }
    }
}

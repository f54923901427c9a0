//! Image gallery with a lightbox, modelled as a transition table.
//!
//! `Gallery::apply` maps `(phase, action)` to a new phase plus an `Effect`
//! describing what the page has to repaint. Nothing in here touches the
//! DOM, so the browser controller only translates events into actions and
//! effects into element updates.

/// Wrap any integer position onto `0..len`.
///
/// `len` must be non-zero.
pub fn wrap_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Browsing,
    Lightbox,
}

/// Keys the lightbox listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Jump to an absolute position (thumbnail click).
    Select(i64),
    /// Move relative to the current image (prev/next buttons).
    Advance(i64),
    Open,
    Close,
    Key(Key),
}

/// Repaint request produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Show `index` in the main view, mark its thumbnail active and, when
    /// `lightbox` is set, swap the enlarged image as well.
    Show { index: usize, lightbox: bool },
    OpenLightbox { index: usize },
    CloseLightbox,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    images: Vec<String>,
    current: usize,
    phase: Phase,
}

impl Gallery {
    /// Returns `None` for an empty image list; a gallery always has
    /// something to show.
    pub fn new(images: Vec<String>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self {
            images,
            current: 0,
            phase: Phase::Browsing,
        })
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.current]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Lightbox
    }

    /// Whether the thumbnail at `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    pub fn set_current(&mut self, index: i64) -> usize {
        self.current = wrap_index(index, self.images.len());
        self.current
    }

    pub fn apply(&mut self, action: Action) -> Effect {
        match (self.phase, action) {
            (_, Action::Select(index)) => self.show(index),
            (_, Action::Advance(delta)) => self.show(self.offset(delta)),
            (Phase::Browsing, Action::Open) => {
                self.phase = Phase::Lightbox;
                Effect::OpenLightbox {
                    index: self.current,
                }
            }
            (Phase::Lightbox, Action::Close | Action::Key(Key::Escape)) => {
                self.phase = Phase::Browsing;
                Effect::CloseLightbox
            }
            // ArrowLeft steps forward and ArrowRight steps back, the
            // reverse of the on-screen prev/next buttons.
            (Phase::Lightbox, Action::Key(Key::ArrowLeft)) => self.show(self.offset(1)),
            (Phase::Lightbox, Action::Key(Key::ArrowRight)) => self.show(self.offset(-1)),
            (Phase::Lightbox, Action::Open)
            | (Phase::Browsing, Action::Close)
            | (Phase::Browsing, Action::Key(_))
            | (Phase::Lightbox, Action::Key(Key::Other)) => Effect::None,
        }
    }

    // Reduce the delta first so `current + delta` cannot overflow.
    fn offset(&self, delta: i64) -> i64 {
        self.current as i64 + delta.rem_euclid(self.images.len() as i64)
    }

    fn show(&mut self, index: i64) -> Effect {
        let index = self.set_current(index);
        Effect::Show {
            index,
            lightbox: self.is_open(),
        }
    }
}

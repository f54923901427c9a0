//! Typewriter effect for the hero line.
//!
//! [`Typewriter::tick`] returns the text to display next and how long to
//! wait before the following tick, so the browser side only has to own a
//! timer. Markup (`<tag ...>`) and entities (`&name;`) inside the strings
//! are revealed in one step so partial output never shows half a tag.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypedConfig {
    pub strings: Vec<String>,
    pub type_speed_ms: u32,
    pub back_speed_ms: u32,
    pub back_delay_ms: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub smart_backspace: bool,
}

impl Default for TypedConfig {
    fn default() -> Self {
        Self {
            strings: Vec::new(),
            type_speed_ms: 40,
            back_speed_ms: 22,
            back_delay_ms: 1100,
            looped: true,
            smart_backspace: true,
        }
    }
}

impl TypedConfig {
    /// Accepts either a bare JSON array of strings or a full config object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(strings) => Ok(Self {
                strings,
                ..Self::default()
            }),
            Err(_) => serde_json::from_str(raw),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Typing,
    Holding,
    Deleting,
    Done,
}

/// What to show now and when to tick again. `next_in_ms` is `None` once a
/// non-looping sequence has finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub text: String,
    pub next_in_ms: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypedConfig,
    index: usize,
    /// Byte offset into the current string.
    shown: usize,
    mode: Mode,
}

impl Typewriter {
    /// `None` when there is nothing to type.
    pub fn new(config: TypedConfig) -> Option<Self> {
        if config.strings.is_empty() {
            return None;
        }
        Some(Self {
            config,
            index: 0,
            shown: 0,
            mode: Mode::Typing,
        })
    }

    fn current(&self) -> &str {
        &self.config.strings[self.index]
    }

    fn next_index(&self) -> Option<usize> {
        let next = self.index + 1;
        if next < self.config.strings.len() {
            Some(next)
        } else if self.config.looped {
            Some(0)
        } else {
            None
        }
    }

    /// How far backspacing should go before switching to the next string.
    /// Only the following string in the list counts; wrapping around to the
    /// first one always clears the line.
    fn keep_prefix(&self) -> usize {
        if !self.config.smart_backspace {
            return 0;
        }
        let Some(next) = self.config.strings.get(self.index + 1) else {
            return 0;
        };
        let common = common_prefix(self.current(), next);
        // never stop inside a tag or entity
        let mut at = 0;
        while at < common {
            let step = token_end(self.current(), at);
            if step > common {
                break;
            }
            at = step;
        }
        at
    }

    pub fn tick(&mut self) -> Tick {
        let next_in_ms = match self.mode {
            Mode::Typing => {
                let len = self.current().len();
                if self.shown < len {
                    self.shown = token_end(self.current(), self.shown);
                }
                if self.shown >= len {
                    if self.next_index().is_none() {
                        self.mode = Mode::Done;
                        None
                    } else {
                        self.mode = Mode::Holding;
                        Some(self.config.back_delay_ms)
                    }
                } else {
                    Some(self.config.type_speed_ms)
                }
            }
            Mode::Holding => {
                self.mode = Mode::Deleting;
                self.delete_step()
            }
            Mode::Deleting => self.delete_step(),
            Mode::Done => None,
        };
        Tick {
            text: self.current()[..self.shown].to_string(),
            next_in_ms,
        }
    }

    fn delete_step(&mut self) -> Option<u32> {
        let keep = self.keep_prefix();
        if self.shown > keep {
            self.shown = token_start(self.current(), self.shown).max(keep);
        }
        if self.shown <= keep {
            if let Some(next) = self.next_index() {
                self.index = next;
                self.shown = keep.min(self.current().len());
            }
            self.mode = Mode::Typing;
            Some(self.config.type_speed_ms)
        } else {
            Some(self.config.back_speed_ms)
        }
    }
}

fn common_prefix(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .take_while(|((_, ca), cb)| ca == cb)
        .map(|((i, ca), _)| i + ca.len_utf8())
        .last()
        .unwrap_or(0)
}

/// Byte offset just past the token starting at `at`.
fn token_end(s: &str, at: usize) -> usize {
    let rest = &s[at..];
    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return at;
    };
    let closer = match first {
        '<' => Some('>'),
        '&' => Some(';'),
        _ => None,
    };
    if let Some(closer) = closer {
        if let Some(end) = rest.find(closer) {
            return at + end + closer.len_utf8();
        }
    }
    at + first.len_utf8()
}

/// Byte offset where the token ending at `end` begins.
fn token_start(s: &str, end: usize) -> usize {
    let head = &s[..end];
    let Some(last) = head.chars().next_back() else {
        return 0;
    };
    let opener = match last {
        '>' => Some('<'),
        ';' => Some('&'),
        _ => None,
    };
    if let Some(opener) = opener {
        if let Some(start) = head.rfind(opener) {
            if token_end(s, start) == end {
                return start;
            }
        }
    }
    end - last.len_utf8()
}

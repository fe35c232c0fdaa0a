use crate::color::{cursor_color_for_css, theme_default_cursor};
use crate::spring::Point;
use crate::state::Theme;

pub const TEXT_BEARING_TAGS: [&str; 10] = ["p", "h1", "h2", "h3", "h4", "h5", "h6", "a", "span", "li"];

pub fn text_bearing_selector() -> String {
    TEXT_BEARING_TAGS.join(", ")
}

pub fn is_text_bearing(tag: &str) -> bool {
    TEXT_BEARING_TAGS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(tag))
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextHit {
    pub color: String,
    pub left: f64,
    pub width: f64,
}

/// Pointer position relative to the element's horizontal centre, in
/// `[-0.5, 0.5]`.
pub fn horizontal_offset(x: f64, left: f64, width: f64) -> f64 {
    if width.is_nan() || width <= 0.0 || !x.is_finite() {
        return 0.0;
    }
    ((x - left) / width).clamp(0.0, 1.0) - 0.5
}

#[derive(Clone, Debug, PartialEq)]
pub enum TargetKind {
    Plain { color: &'static str },
    Text { color: &'static str, offset: f64 },
}

impl TargetKind {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    pub fn cursor_color(&self) -> &'static str {
        match self {
            Self::Plain { color } | Self::Text { color, .. } => color,
        }
    }

    pub fn offset(&self) -> f64 {
        match self {
            Self::Plain { .. } => 0.0,
            Self::Text { offset, .. } => *offset,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub target: TargetKind,
}

impl PointerSample {
    pub fn classify(x: f64, y: f64, hit: Option<&TextHit>, theme: Theme) -> Self {
        let target = match hit {
            Some(hit) => TargetKind::Text {
                color: cursor_color_for_css(&hit.color, theme),
                offset: horizontal_offset(x, hit.left, hit.width),
            },
            None => TargetKind::Plain {
                color: theme_default_cursor(theme),
            },
        };

        Self { x, y, target }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Holds at most one unprocessed value. Submitting replaces whatever is
/// pending; nothing is queued or replayed.
#[derive(Debug)]
pub struct FrameSlot<T> {
    pending: Option<T>,
    replaced: u64,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self {
            pending: None,
            replaced: 0,
        }
    }
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the slot was empty and a frame must be requested.
    pub fn submit(&mut self, value: T) -> bool {
        let was_empty = self.pending.is_none();
        if !was_empty {
            self.replaced += 1;
        }
        self.pending = Some(value);
        was_empty
    }

    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn replaced(&self) -> u64 {
        self.replaced
    }
}

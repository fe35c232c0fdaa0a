use crate::constants::TYPEWRITER_MIN_INTERVAL_MS;

const NBSP: &str = "\u{00A0}";

/// Timing for revealing `total` characters over a duration, one per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterPlan {
    pub total: usize,
    pub interval_ms: u32,
    pub start_delay_ms: u32,
}

impl TypewriterPlan {
    pub fn new(text: &str, duration_sec: f64, start_delay_sec: f64) -> Self {
        let total = text.chars().count();
        let per_char = duration_sec.max(0.0) * 1000.0 / total.max(1) as f64;

        Self {
            total,
            interval_ms: (per_char.round() as u32).max(TYPEWRITER_MIN_INTERVAL_MS),
            start_delay_ms: (start_delay_sec.max(0.0) * 1000.0).round() as u32,
        }
    }

    pub fn advance(&self, count: usize) -> usize {
        (count + 1).min(self.total)
    }

    pub fn is_complete(&self, count: usize) -> bool {
        count >= self.total
    }

    /// Whether any timer has to run at all.
    pub fn needs_ticks(&self) -> bool {
        self.total > 0
    }
}

/// The first `count` characters, or a non-breaking space so the line keeps
/// its height before anything is typed.
pub fn visible_prefix(text: &str, count: usize) -> String {
    if count == 0 {
        return NBSP.to_string();
    }
    text.chars().take(count).collect()
}

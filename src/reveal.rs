//! One-shot radial reveal played when the theme toggle is clicked.

use crate::constants::{REVEAL_DIAMETER_VMAX, REVEAL_DURATION_SEC};
use crate::spring::Point;

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    // Newton first, bisection when the slope is too flat to trust.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return t;
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..64 {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < 1e-7 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    pub fn apply(&self, progress: f64) -> f64 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        Self::sample(self.y1, self.y2, self.solve_t(x))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealProgress {
    Running { diameter_vmax: f64 },
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeReveal {
    origin: Point,
    elapsed: f64,
}

impl ThemeReveal {
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            elapsed: 0.0,
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn progress(&self) -> f64 {
        (self.elapsed / REVEAL_DURATION_SEC).clamp(0.0, 1.0)
    }

    pub fn diameter_vmax(&self) -> f64 {
        EASE_IN_OUT.apply(self.progress()) * REVEAL_DIAMETER_VMAX
    }

    pub fn advance(&mut self, dt: f64) -> RevealProgress {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        if self.elapsed >= REVEAL_DURATION_SEC {
            RevealProgress::Finished
        } else {
            RevealProgress::Running {
                diameter_vmax: self.diameter_vmax(),
            }
        }
    }
}

use crate::constants::{
    TRAIL_BASE_DAMPING, TRAIL_BASE_SIZE_PX, TRAIL_BASE_STIFFNESS, TRAIL_COUNT,
    TRAIL_DAMPING_STEP, TRAIL_HUE_SPAN_DEG, TRAIL_SIZE_STEP_PX, TRAIL_STIFFNESS_STEP,
};
use crate::spring::{Point, Spring2, SpringConfig};

/// One dot of the rainbow trail. Parameters are fixed by its index; only the
/// spring state moves.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailSegment {
    index: usize,
    size: f64,
    hue: f64,
    spring: Spring2,
}

impl TrailSegment {
    pub fn new(index: usize) -> Self {
        let i = index as f64;
        let config = SpringConfig::new(
            TRAIL_BASE_STIFFNESS - TRAIL_STIFFNESS_STEP * i,
            TRAIL_BASE_DAMPING + TRAIL_DAMPING_STEP * i,
        );

        Self {
            index,
            size: TRAIL_BASE_SIZE_PX - TRAIL_SIZE_STEP_PX * i,
            hue: i * (TRAIL_HUE_SPAN_DEG / TRAIL_COUNT as f64),
            spring: Spring2::new(config, Point::default()),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn config(&self) -> SpringConfig {
        self.spring.config()
    }

    pub fn color(&self) -> String {
        format!("hsl({}, 100%, 50%)", self.hue)
    }

    pub fn center(&self) -> Point {
        self.spring.position()
    }

    /// Top-left corner to paint at, so every dot is centred on its spring.
    pub fn draw_origin(&self) -> Point {
        let half = self.size / 2.0;
        self.center().offset(-half, -half)
    }

    fn step(&mut self, pointer: Point, dt: f64) {
        self.spring.step(pointer, dt);
    }

    fn jump_to(&mut self, pointer: Point) {
        self.spring.jump_to(pointer);
    }

    fn is_settled(&self, pointer: Point) -> bool {
        self.spring.is_settled(pointer)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    segments: Vec<TrailSegment>,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

impl Trail {
    pub fn new() -> Self {
        Self {
            segments: (0..TRAIL_COUNT).map(TrailSegment::new).collect(),
        }
    }

    pub fn segments(&self) -> &[TrailSegment] {
        &self.segments
    }

    /// Every segment chases the raw pointer, not its neighbour.
    pub fn step(&mut self, pointer: Point, dt: f64) {
        for segment in &mut self.segments {
            segment.step(pointer, dt);
        }
    }

    pub fn jump_to(&mut self, pointer: Point) {
        for segment in &mut self.segments {
            segment.jump_to(pointer);
        }
    }

    pub fn is_settled(&self, pointer: Point) -> bool {
        self.segments.iter().all(|segment| segment.is_settled(pointer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_thirty_segments() {
        let trail = Trail::new();
        assert_eq!(trail.segments().len(), 30);
        for (expected, segment) in trail.segments().iter().enumerate() {
            assert_eq!(segment.index(), expected);
        }
    }

    #[test]
    fn parameters_are_monotonic() {
        let trail = Trail::new();
        for pair in trail.segments().windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(b.config().stiffness < a.config().stiffness);
            assert!(b.config().damping > a.config().damping);
            assert!(b.size() < a.size());
            assert!(b.size() > 0.0);
        }
    }

    #[test]
    fn endpoints_match_formula() {
        let trail = Trail::new();
        let first = &trail.segments()[0];
        let last = &trail.segments()[29];

        assert_eq!(first.config().stiffness, 1000.0);
        assert_eq!(first.config().damping, 50.0);
        assert_eq!(first.size(), 24.0);
        assert_eq!(first.color(), "hsl(0, 100%, 50%)");

        assert_eq!(last.config().stiffness, 420.0);
        assert_eq!(last.config().damping, 79.0);
        assert!((last.size() - 21.1).abs() < 1e-9);
        assert!((last.hue() - 348.0).abs() < 1e-9);
        assert_eq!(last.config().mass, 1.0);
    }

    #[test]
    fn later_segments_lag_behind() {
        let mut trail = Trail::new();
        let pointer = Point::new(400.0, 0.0);

        for _ in 0..6 {
            trail.step(pointer, 1.0 / 60.0);
        }

        let head = trail.segments()[0].center().x;
        let tail = trail.segments()[29].center().x;
        assert!(head > tail, "head {head} tail {tail}");
    }

    #[test]
    fn draw_origin_subtracts_half_size() {
        let mut trail = Trail::new();
        trail.jump_to(Point::new(100.0, 50.0));

        let segment = &trail.segments()[10];
        let origin = segment.draw_origin();
        assert_eq!(origin.x, 100.0 - segment.size() / 2.0);
        assert_eq!(origin.y, 50.0 - segment.size() / 2.0);
    }
}

use crate::constants::{BLOB_DAMPING, BLOB_STIFFNESS};
use crate::spring::{Point, Spring2, SpringConfig};
use crate::trail::Trail;

pub const BLOB_SPRING: SpringConfig = SpringConfig::new(BLOB_STIFFNESS, BLOB_DAMPING);

/// All 31 interpolators behind the cursor overlay. They read the same pointer
/// sample each frame and integrate independently.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorRig {
    trail: Trail,
    blob: Spring2,
    primed: bool,
}

impl Default for CursorRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorRig {
    pub fn new() -> Self {
        Self {
            trail: Trail::new(),
            blob: Spring2::new(BLOB_SPRING, Point::default()),
            primed: false,
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn blob_origin(&self) -> Point {
        self.blob.position()
    }

    pub fn is_primed(&self) -> bool {
        self.primed
    }

    fn blob_target(pointer: Point, blob_size: f64) -> Point {
        let half = blob_size / 2.0;
        pointer.offset(-half, -half)
    }

    /// Advances every spring by `dt` and reports whether anything still needs
    /// repainting. The first call places everything on the pointer so nothing
    /// sweeps in from the viewport corner.
    pub fn step(&mut self, pointer: Point, blob_size: f64, dt: f64) -> bool {
        let blob_target = Self::blob_target(pointer, blob_size);

        if !self.primed {
            self.trail.jump_to(pointer);
            self.blob.jump_to(blob_target);
            self.primed = true;
            return true;
        }

        let was_settled = self.is_settled(pointer, blob_size);
        self.trail.step(pointer, dt);
        self.blob.step(blob_target, dt);
        !was_settled
    }

    pub fn is_settled(&self, pointer: Point, blob_size: f64) -> bool {
        self.primed
            && self.trail.is_settled(pointer)
            && self.blob.is_settled(Self::blob_target(pointer, blob_size))
    }
}

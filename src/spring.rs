use crate::constants::{
    SPRING_MAX_FRAME_SEC, SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA, SPRING_REST_SPEED,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    pub const fn with_mass(self, mass: f64) -> Self {
        Self { mass, ..self }
    }

    fn acceleration(&self, displacement: f64, velocity: f64) -> f64 {
        (self.stiffness * displacement - self.damping * velocity) / self.mass
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    position: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, position: f64) -> Self {
        Self {
            config,
            position,
            velocity: 0.0,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn jump_to(&mut self, value: f64) {
        self.position = value;
        self.velocity = 0.0;
    }

    // Long frames are clamped, then split into equal sub-steps.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        if !dt.is_finite() || dt <= 0.0 || !target.is_finite() {
            return self.position;
        }

        let dt = dt.min(SPRING_MAX_FRAME_SEC);
        let substeps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0);
        let h = dt / substeps;

        for _ in 0..substeps as u32 {
            self.integrate(target, h);
        }

        self.position
    }

    // Semi-implicit Euler: velocity first, then position with the new velocity.
    fn integrate(&mut self, target: f64, h: f64) {
        let acceleration = self
            .config
            .acceleration(target - self.position, self.velocity);
        self.velocity += acceleration * h;
        self.position += self.velocity * h;
    }

    pub fn is_settled(&self, target: f64) -> bool {
        (target - self.position).abs() < SPRING_REST_DELTA
            && self.velocity.abs() < SPRING_REST_SPEED
    }
}

/// Two uncoupled springs sharing one configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring2 {
    x: Spring,
    y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, origin: Point) -> Self {
        Self {
            x: Spring::new(config, origin.x),
            y: Spring::new(config, origin.y),
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.x.config()
    }

    pub fn position(&self) -> Point {
        Point::new(self.x.position(), self.y.position())
    }

    pub fn jump_to(&mut self, point: Point) {
        self.x.jump_to(point.x);
        self.y.jump_to(point.y);
    }

    pub fn step(&mut self, target: Point, dt: f64) -> Point {
        Point::new(self.x.step(target.x, dt), self.y.step(target.y, dt))
    }

    pub fn is_settled(&self, target: Point) -> bool {
        self.x.is_settled(target.x) && self.y.is_settled(target.y)
    }
}

// Cursor, trail and reveal tuning. Everything here is fixed at compile time.

// Trail
pub const TRAIL_COUNT: usize = 30;
pub const TRAIL_BASE_STIFFNESS: f64 = 1000.0;
pub const TRAIL_STIFFNESS_STEP: f64 = 20.0;
pub const TRAIL_BASE_DAMPING: f64 = 50.0;
pub const TRAIL_DAMPING_STEP: f64 = 1.0;
pub const TRAIL_BASE_SIZE_PX: f64 = 24.0;
pub const TRAIL_SIZE_STEP_PX: f64 = 0.1;
pub const TRAIL_HUE_SPAN_DEG: f64 = 360.0;

// Blob cursor
pub const BLOB_STIFFNESS: f64 = 600.0;
pub const BLOB_DAMPING: f64 = 40.0;
pub const BLOB_IDLE_SIZE_PX: f64 = 32.0;
pub const BLOB_HOVER_SIZE_PX: f64 = 120.0;
pub const BLOB_STRETCH_X: f64 = 0.35;
pub const BLOB_SQUASH_Y: f64 = 0.25;
pub const BLOB_MIN_SCALE_Y: f64 = 0.85;

// Contrast sampling
pub const LUMINANCE_THRESHOLD: f64 = 0.6;
pub const CURSOR_ON_LIGHT: &str = "#000000";
pub const CURSOR_ON_DARK: &str = "#ffffff";

// Accent ("hover-work") colours per theme
pub const ACCENT_DARK: &str = "#ff9500";
pub const ACCENT_LIGHT: &str = "#303EF7";

// Spring integration
pub const SPRING_MAX_SUBSTEP_SEC: f64 = 1.0 / 240.0;
pub const SPRING_MAX_FRAME_SEC: f64 = 0.064;
pub const SPRING_REST_DELTA: f64 = 0.01;
pub const SPRING_REST_SPEED: f64 = 0.01;

// Theme reveal
pub const REVEAL_DURATION_SEC: f64 = 0.8;
pub const REVEAL_DIAMETER_VMAX: f64 = 300.0;

// Typewriter
pub const TYPEWRITER_MIN_INTERVAL_MS: u32 = 20;

// Header switches to its compact style past this scroll offset
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Number of particles in the field (fixed for the field's lifetime)
pub const PARTICLE_COUNT: usize = 50;

// ============================================
// Particle Physics Parameters
// ============================================

/// Pointer attraction only acts within this distance (pixels)
pub const ATTRACTION_RADIUS: f32 = 200.0;

/// Peak attraction impulse, scaled down linearly with distance
pub const ATTRACTION_STRENGTH: f32 = 0.3;

/// Per-tick velocity damping factor
pub const FRICTION: f32 = 0.98;

/// Spawn velocity components are uniform in [-SPAWN_SPEED, SPAWN_SPEED)
pub const SPAWN_SPEED: f32 = 0.5;

/// Spawn radius range (pixels)
pub const MIN_RADIUS: f32 = 0.5;
pub const MAX_RADIUS: f32 = 2.0;

/// Spawn opacity range
pub const MIN_OPACITY: f32 = 0.1;
pub const MAX_OPACITY: f32 = 0.6;

/// Probability that a particle reacts to the pointer
pub const ATTRACT_PROBABILITY: f64 = 0.3;

// ============================================
// Connection Lines
// ============================================

/// Lines are drawn between particles closer than this (pixels)
pub const CONNECTION_RADIUS: f32 = 150.0;

/// Only every Nth particle initiates connection lines.
/// Bounds the line pass at O(n^2 / N) instead of O(n^2).
pub const CONNECTION_STRIDE: usize = 3;

/// Base alpha for connection lines, faded linearly with distance
pub const CONNECTION_ALPHA: f32 = 0.1;

/// Stroke width for connection lines (pixels)
pub const CONNECTION_LINE_WIDTH: f32 = 0.5;

// ============================================
// Palette
// ============================================

/// Ember palette (#FD4E1A, #FEB52C, #FF6B35)
pub const PALETTE: [[f32; 3]; 3] = [
    [0.992, 0.306, 0.102],
    [0.996, 0.710, 0.173],
    [1.000, 0.420, 0.208],
];

// ============================================
// Page Interactions
// ============================================

/// Launch countdown length shown by the demo window
pub const LAUNCH_OFFSET_DAYS: u64 = 90;

/// Simulated latency of the stubbed subscription backend (ms)
pub const SUBMIT_LATENCY_MS: u64 = 800;

/// Parallax offset per layer is (layer + 1) * this many pixels
pub const PARALLAX_STRENGTH_STEP: f32 = 20.0;

/// Number of parallax-driven glow layers in the demo
pub const PARALLAX_LAYER_COUNT: usize = 3;

/// Visibility ratio at which a hidden element is revealed
pub const REVEAL_THRESHOLD: f32 = 0.1;

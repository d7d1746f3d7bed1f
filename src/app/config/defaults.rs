// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Motion**: Playback speed and scrub smoothing bounds

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Default speed multiplier for time-based animations.
pub const DEFAULT_TIME_SCALE: f32 = 1.0;

/// Slowest allowed animation speed.
pub const MIN_TIME_SCALE: f32 = 0.25;

/// Fastest allowed animation speed.
pub const MAX_TIME_SCALE: f32 = 4.0;

/// Default catch-up time of scrubbed animations (in milliseconds).
pub const DEFAULT_SCRUB_LAG_MS: u32 = 1000;

/// Maximum catch-up time of scrubbed animations (in milliseconds).
/// Zero disables smoothing.
pub const MAX_SCRUB_LAG_MS: u32 = 3000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TIME_SCALE > 0.0);
    assert!(MIN_TIME_SCALE <= DEFAULT_TIME_SCALE);
    assert!(MAX_TIME_SCALE >= DEFAULT_TIME_SCALE);

    assert!(DEFAULT_SCRUB_LAG_MS <= MAX_SCRUB_LAG_MS);
};

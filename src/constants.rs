//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the rendering/export defaults.

use std::time::Duration;

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "QR Studio";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "qrstudio";

/// Side length of the square raster, in pixels.
///
/// Early revisions shipped 300; treat this as configuration, never as a
/// literal at use sites.
pub const DEFAULT_SIZE_PIXELS: u32 = 400;

/// Default foreground (module) color.
pub const DEFAULT_FOREGROUND: &str = "#000000";

/// Default background color.
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// Base name substituted when filename sanitization leaves nothing usable.
pub const DEFAULT_EXPORT_BASE_NAME: &str = "qr-code";

/// How long the transient "copied" indicators stay up after a copy action.
pub const COPIED_FLAG_DURATION: Duration = Duration::from_millis(2000);

/// Center-logo overlay diameter as a percentage of the raster side.
///
/// Lowered from an earlier 25% so that, paired with level-H error
/// correction, enough scannable pattern survives outside the overlay.
pub const CENTER_OVERLAY_PERCENT: u32 = 20;

/// Padding (px) between the overlay clip and the filled backing plate.
pub const BACKING_PLATE_PADDING: u32 = 8;

/// Padding (px) between the overlay clip and the separator ring.
pub const SEPARATOR_RING_PADDING: u32 = 6;

/// Stroke width (px) of the separator ring.
pub const SEPARATOR_RING_WIDTH: u32 = 2;

/// Quiet-zone border around the module matrix, in modules.
pub const QUIET_ZONE_MODULES: u32 = 4;

//! Display environment capability.
//!
//! Everything the detector knows about the device comes through the
//! [`DisplayEnvironment`] trait: screen geometry, viewport size, orientation
//! signal, pixel ratio, identification string, and a resize notification
//! stream. Detection logic is a pure function of a snapshot of these values.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────┐  subscribe_resize()  ┌────────────────────┐
//! │   DisplayEnvironment   │ ───────────────────► │  ScreenDetector    │
//! │  (browser, simulated)  │                      │  (pipeline task)   │
//! │                        │ ◄─────────────────── │                    │
//! └────────────────────────┘   geometry queries   └────────────────────┘
//! ```
//!
//! [`SimulatedEnvironment`] is a scriptable in-memory implementation used by
//! tests and the CLI. [`EnvironmentProfile`] describes its initial values and
//! can be loaded from an INI file.

mod profile;
mod simulated;
mod source;

pub use profile::{iphone_user_agent, EnvironmentProfile, ProfileError, DESKTOP_USER_AGENT};
pub use simulated::SimulatedEnvironment;
pub use source::{ResizeEvent, ResizeSource, ResizeSubscription, Unsubscribe};

use serde::Serialize;

/// Screen geometry in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScreenGeometry {
    pub avail_width: u32,
    pub avail_height: u32,
    pub width: u32,
    pub height: u32,
}

impl ScreenGeometry {
    /// Geometry where the available area equals the full screen.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            avail_width: width,
            avail_height: height,
            width,
            height,
        }
    }
}

/// Viewport inner size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Viewport {
    pub inner_width: u32,
    pub inner_height: u32,
}

impl Viewport {
    pub fn new(inner_width: u32, inner_height: u32) -> Self {
        Self {
            inner_width,
            inner_height,
        }
    }
}

/// Source of screen metrics and resize notifications.
///
/// Queries must be cheap and side-effect free; the detector calls them on
/// every accessor invocation.
pub trait DisplayEnvironment: Send + Sync + 'static {
    /// Current screen geometry.
    fn screen_geometry(&self) -> ScreenGeometry;

    /// Current viewport inner size.
    fn viewport(&self) -> Viewport;

    /// Orientation angle, or `None` when the environment gives no signal.
    fn orientation(&self) -> Option<i32>;

    /// Physical-to-logical pixel ratio.
    fn device_pixel_ratio(&self) -> f64;

    /// Device/browser identification string.
    fn user_agent(&self) -> String;

    /// Subscribe to viewport resize notifications.
    ///
    /// Dropping the returned subscription unsubscribes.
    fn subscribe_resize(&self) -> ResizeSubscription;
}

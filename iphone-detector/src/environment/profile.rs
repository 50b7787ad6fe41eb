//! Environment profiles.
//!
//! A profile is a full description of what a display environment reports.
//! Profiles seed a [`SimulatedEnvironment`](super::SimulatedEnvironment) and
//! can be stored as INI files:
//!
//! ```ini
//! [screen]
//! width = 390
//! height = 844
//! avail_width = 390
//! avail_height = 844
//!
//! [viewport]
//! inner_width = 390
//! inner_height = 778
//!
//! [device]
//! pixel_ratio = 3
//! orientation = 0
//! user_agent = Mozilla/5.0 (iPhone; CPU iPhone OS 14_2 like Mac OS X) Mobile/15E148
//! ```
//!
//! `avail_width`/`avail_height` default to the full screen size and
//! `orientation` may be omitted for "no signal".
//!
//! Values are trimmed on load, so leading or trailing whitespace in
//! `user_agent` does not survive a save/load cycle. Every other character,
//! including `;`, `#`, `=`, `\` and quotes, is kept.

use std::path::Path;
use std::str::FromStr;

use ini::{Ini, Properties};
use thiserror::Error;

use super::{ScreenGeometry, Viewport};
use crate::device::{signature, DeviceModel};
use crate::screen::LANDSCAPE_ANGLE;

const SCREEN_SECTION: &str = "screen";
const VIEWPORT_SECTION: &str = "viewport";
const DEVICE_SECTION: &str = "device";

/// Identification string used by [`EnvironmentProfile::default`].
pub const DESKTOP_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:109.0) Gecko/20100101 Firefox/115.0";

/// Errors loading or saving a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    /// I/O error reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid INI.
    #[error("Failed to parse profile: {0}")]
    Parse(String),

    /// A required key is absent.
    #[error("Missing key '{key}' in [{section}]")]
    MissingKey { section: String, key: String },

    /// A key holds a value of the wrong type.
    #[error("Invalid value for '{key}' in [{section}]: {value}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

/// Everything a display environment reports, at rest.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentProfile {
    pub geometry: ScreenGeometry,
    pub viewport: Viewport,
    pub orientation: Option<i32>,
    pub device_pixel_ratio: f64,
    pub user_agent: String,
}

impl Default for EnvironmentProfile {
    /// A 1920×1080 desktop browser with no orientation signal.
    fn default() -> Self {
        Self {
            geometry: ScreenGeometry {
                avail_width: 1920,
                avail_height: 1050,
                width: 1920,
                height: 1080,
            },
            viewport: Viewport::new(1920, 960),
            orientation: None,
            device_pixel_ratio: 1.0,
            user_agent: DESKTOP_USER_AGENT.to_string(),
        }
    }
}

/// Safari user agent for an iPhone on the given OS major version.
pub fn iphone_user_agent(os_major: u32) -> String {
    format!(
        "Mozilla/5.0 (iPhone; CPU iPhone OS {os_major}_0 like Mac OS X) \
         AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{os_major}.0 \
         Mobile/15E148 Safari/604.1"
    )
}

impl EnvironmentProfile {
    /// Portrait, full-chrome profile matching a table model.
    pub fn for_model(model: DeviceModel) -> Self {
        let sig = signature(model);
        Self {
            geometry: ScreenGeometry::full(sig.logical_width, sig.logical_height),
            viewport: Viewport::new(sig.logical_width, sig.inner_height_portrait),
            orientation: None,
            device_pixel_ratio: sig.device_pixel_ratio,
            user_agent: iphone_user_agent(sig.os_version),
        }
    }

    /// Landscape, full-chrome profile matching a table model.
    ///
    /// Screen geometry keeps its portrait values, as iOS reports them.
    pub fn for_model_landscape(model: DeviceModel) -> Self {
        let sig = signature(model);
        Self {
            viewport: Viewport::new(sig.logical_height, sig.inner_height_landscape),
            orientation: Some(LANDSCAPE_ANGLE),
            ..Self::for_model(model)
        }
    }

    /// Replace the viewport inner height.
    pub fn with_inner_height(mut self, inner_height: u32) -> Self {
        self.viewport.inner_height = inner_height;
        self
    }

    /// Replace the orientation signal.
    pub fn with_orientation(mut self, orientation: Option<i32>) -> Self {
        self.orientation = orientation;
        self
    }

    /// Replace the identification string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load a profile from an INI file.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }

    /// Save the profile as an INI file.
    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        self.to_ini().write_to_file(path)?;
        Ok(())
    }

    fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();
        ini.with_section(Some(SCREEN_SECTION))
            .set("width", self.geometry.width.to_string())
            .set("height", self.geometry.height.to_string())
            .set("avail_width", self.geometry.avail_width.to_string())
            .set("avail_height", self.geometry.avail_height.to_string());
        ini.with_section(Some(VIEWPORT_SECTION))
            .set("inner_width", self.viewport.inner_width.to_string())
            .set("inner_height", self.viewport.inner_height.to_string());
        ini.with_section(Some(DEVICE_SECTION))
            .set("pixel_ratio", self.device_pixel_ratio.to_string())
            .set("user_agent", self.user_agent.clone());
        if let Some(angle) = self.orientation {
            ini.with_section(Some(DEVICE_SECTION))
                .set("orientation", angle.to_string());
        }
        ini
    }
}

impl FromStr for EnvironmentProfile {
    type Err = ProfileError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        let ini = Ini::load_from_str(content).map_err(|e| ProfileError::Parse(e.to_string()))?;

        let screen = Section::new(&ini, SCREEN_SECTION);
        let width = screen.required("width")?;
        let height = screen.required("height")?;
        let geometry = ScreenGeometry {
            avail_width: screen.optional("avail_width")?.unwrap_or(width),
            avail_height: screen.optional("avail_height")?.unwrap_or(height),
            width,
            height,
        };

        let viewport = Section::new(&ini, VIEWPORT_SECTION);
        let viewport = Viewport::new(
            viewport.required("inner_width")?,
            viewport.required("inner_height")?,
        );

        let device = Section::new(&ini, DEVICE_SECTION);
        Ok(Self {
            geometry,
            viewport,
            orientation: device.optional("orientation")?,
            device_pixel_ratio: device.required("pixel_ratio")?,
            user_agent: device.required("user_agent")?,
        })
    }
}

/// Typed accessor over one INI section.
struct Section<'a> {
    name: &'static str,
    props: Option<&'a Properties>,
}

impl<'a> Section<'a> {
    fn new(ini: &'a Ini, name: &'static str) -> Self {
        Self {
            name,
            props: ini.section(Some(name)),
        }
    }

    fn optional<T: FromStr>(&self, key: &str) -> Result<Option<T>, ProfileError> {
        let Some(raw) = self.props.and_then(|p| p.get(key)) else {
            return Ok(None);
        };
        raw.trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ProfileError::InvalidValue {
                section: self.name.to_string(),
                key: key.to_string(),
                value: raw.to_string(),
            })
    }

    fn required<T: FromStr>(&self, key: &str) -> Result<T, ProfileError> {
        self.optional(key)?.ok_or_else(|| ProfileError::MissingKey {
            section: self.name.to_string(),
            key: key.to_string(),
        })
    }
}

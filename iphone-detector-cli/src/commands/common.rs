//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use clap::Args;
use iphone_detector::environment::{EnvironmentProfile, ScreenGeometry};
use iphone_detector::DeviceModel;
use tracing::debug;

use crate::error::CliError;

/// File name of the default profile under the config directory.
pub const DEFAULT_PROFILE_FILE: &str = "profile.ini";

/// Directory name under the user config directory.
pub const CONFIG_DIR_NAME: &str = "iphone-detector";

/// Default profile location, e.g. `~/.config/iphone-detector/profile.ini`.
pub fn default_profile_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(DEFAULT_PROFILE_FILE))
}

/// Arguments describing the display environment to classify.
///
/// The base profile comes from `--profile`, else `--model`, else the default
/// profile file if present, else a desktop browser. Individual flags then
/// override the base.
#[derive(Debug, Clone, Default, Args)]
pub struct EnvironmentArgs {
    /// INI profile describing the environment
    #[arg(long, conflicts_with = "model")]
    pub profile: Option<PathBuf>,

    /// Start from a known model's fingerprint (e.g. XII, XI_Pro_Max)
    #[arg(long)]
    pub model: Option<DeviceModel>,

    /// Use the landscape variant of --model
    #[arg(long, requires = "model")]
    pub landscape: bool,

    /// Screen width in CSS pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Screen height in CSS pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Available screen width (defaults to --width)
    #[arg(long)]
    pub avail_width: Option<u32>,

    /// Available screen height (defaults to --height)
    #[arg(long)]
    pub avail_height: Option<u32>,

    /// Viewport inner width
    #[arg(long)]
    pub inner_width: Option<u32>,

    /// Viewport inner height
    #[arg(long)]
    pub inner_height: Option<u32>,

    /// Orientation angle (0, 90, -90, 180)
    #[arg(long, allow_hyphen_values = true)]
    pub orientation: Option<i32>,

    /// Device pixel ratio
    #[arg(long)]
    pub dpr: Option<f64>,

    /// Identification (user agent) string
    #[arg(long)]
    pub user_agent: Option<String>,
}

impl EnvironmentArgs {
    /// Build the environment profile these arguments describe.
    pub fn resolve(&self) -> Result<EnvironmentProfile, CliError> {
        let base = self.base_profile()?;
        Ok(self.apply_overrides(base))
    }

    fn base_profile(&self) -> Result<EnvironmentProfile, CliError> {
        if let Some(path) = &self.profile {
            debug!(path = %path.display(), "Loading environment profile");
            return Ok(EnvironmentProfile::load(path)?);
        }

        if let Some(model) = self.model {
            return Ok(if self.landscape {
                EnvironmentProfile::for_model_landscape(model)
            } else {
                EnvironmentProfile::for_model(model)
            });
        }

        match default_profile_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "Loading default environment profile");
                Ok(EnvironmentProfile::load(&path)?)
            }
            _ => Ok(EnvironmentProfile::default()),
        }
    }

    fn apply_overrides(&self, mut profile: EnvironmentProfile) -> EnvironmentProfile {
        let geometry = profile.geometry;
        let width = self.width.unwrap_or(geometry.width);
        let height = self.height.unwrap_or(geometry.height);
        profile.geometry = ScreenGeometry {
            avail_width: self
                .avail_width
                .or(self.width)
                .unwrap_or(geometry.avail_width),
            avail_height: self
                .avail_height
                .or(self.height)
                .unwrap_or(geometry.avail_height),
            width,
            height,
        };

        if let Some(inner_width) = self.inner_width {
            profile.viewport.inner_width = inner_width;
        }
        if let Some(inner_height) = self.inner_height {
            profile.viewport.inner_height = inner_height;
        }
        if self.orientation.is_some() {
            profile.orientation = self.orientation;
        }
        if let Some(dpr) = self.dpr {
            profile.device_pixel_ratio = dpr;
        }
        if let Some(user_agent) = &self.user_agent {
            profile.user_agent = user_agent.clone();
        }
        profile
    }
}

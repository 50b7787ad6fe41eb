//! Detection report.

use serde::Serialize;

use crate::device::DeviceModel;
use crate::environment::Viewport;
use crate::screen::ScreenState;
use crate::user_agent::OsVersion;

/// Everything the detector knows at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionReport {
    pub is_mobile: bool,
    pub is_iphone: bool,
    pub os_version: Option<OsVersion>,
    pub device_pixel_ratio: f64,
    /// Matching models in table order; several entries mean the match is ambiguous.
    pub models: Vec<DeviceModel>,
    pub chrome_expanded: bool,
    pub viewport: Viewport,
    pub screen: ScreenState,
}

impl DetectionReport {
    /// Display names of the matching models joined with `" or "`.
    pub fn model_names(&self) -> String {
        self.models
            .iter()
            .map(DeviceModel::display_name)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

//! Synchronous device classification.

use std::sync::Arc;

use tracing::trace;

use super::matching::{filter_signatures, MatchCriteria};
use super::report::DetectionReport;
use crate::device::{all_signatures, DeviceModel, DeviceSignature};
use crate::environment::DisplayEnvironment;
use crate::error::Result;
use crate::screen::ScreenState;
use crate::user_agent::{self, OsVersion};

/// Classifies the device behind a display environment.
///
/// Every query reads the environment afresh; nothing is cached.
#[derive(Debug)]
pub struct DeviceClassifier<E: DisplayEnvironment> {
    env: Arc<E>,
}

impl<E: DisplayEnvironment> Clone for DeviceClassifier<E> {
    fn clone(&self) -> Self {
        Self {
            env: Arc::clone(&self.env),
        }
    }
}

impl<E: DisplayEnvironment> DeviceClassifier<E> {
    pub fn new(env: Arc<E>) -> Self {
        Self { env }
    }

    /// The environment being classified.
    pub fn environment(&self) -> &Arc<E> {
        &self.env
    }

    /// Whether the identification string carries a `Mobile` token.
    pub fn is_mobile(&self) -> bool {
        user_agent::is_mobile(&self.env.user_agent())
    }

    /// Whether the identification string carries an `iPhone` token.
    pub fn is_iphone(&self) -> bool {
        user_agent::is_iphone(&self.env.user_agent())
    }

    /// Full OS version; `None` for non-iPhones.
    ///
    /// # Errors
    ///
    /// [`DetectError::MissingOsVersion`](crate::error::DetectError::MissingOsVersion)
    /// when an iPhone identification string carries no version.
    pub fn os_version_full(&self) -> Result<Option<OsVersion>> {
        user_agent::parse_os_version(&self.env.user_agent())
    }

    /// OS major version; `None` for non-iPhones.
    pub fn os_version(&self) -> Result<Option<u32>> {
        Ok(self.os_version_full()?.map(|v| v.major))
    }

    /// Pixel ratio, as reported.
    pub fn device_pixel_ratio(&self) -> f64 {
        self.env.device_pixel_ratio()
    }

    /// Current screen geometry and orientation.
    pub fn current_screen_state(&self) -> ScreenState {
        ScreenState::new(self.env.screen_geometry(), self.env.orientation())
    }

    /// Signatures matching the environment, in table order.
    ///
    /// Empty unless the device is both mobile and an iPhone.
    pub fn matching_signatures(&self) -> Result<Vec<&'static DeviceSignature>> {
        if !self.is_mobile() || !self.is_iphone() {
            return Ok(Vec::new());
        }
        let Some(os_major) = self.os_version()? else {
            return Ok(Vec::new());
        };

        let geometry = self.env.screen_geometry();
        let criteria = MatchCriteria {
            screen_width: geometry.width,
            screen_height: geometry.height,
            os_major,
            device_pixel_ratio: self.device_pixel_ratio(),
        };

        let matches: Vec<_> = filter_signatures(all_signatures(), criteria).collect();
        trace!(?criteria, matches = matches.len(), "Matched signatures");
        Ok(matches)
    }

    /// Ids of the matching models, in table order.
    pub fn matching_models(&self) -> Result<Vec<DeviceModel>> {
        Ok(self
            .matching_signatures()?
            .into_iter()
            .map(|sig| sig.id)
            .collect())
    }

    /// Whether the browser chrome is collapsed ("expanded" content area).
    ///
    /// True when some matching model's expanded inner height for the current
    /// orientation equals the viewport's inner height. Portrait uses the
    /// portrait field; any other state uses the landscape field.
    pub fn is_chrome_expanded(&self) -> Result<bool> {
        let portrait = self.current_screen_state().is_portrait;
        let inner_height = self.env.viewport().inner_height;

        Ok(self
            .matching_signatures()?
            .iter()
            .any(|sig| sig.is_expanded_at(portrait, inner_height)))
    }

    /// Snapshot of every query.
    pub fn report(&self) -> Result<DetectionReport> {
        Ok(DetectionReport {
            is_mobile: self.is_mobile(),
            is_iphone: self.is_iphone(),
            os_version: self.os_version_full()?,
            device_pixel_ratio: self.device_pixel_ratio(),
            models: self.matching_models()?,
            chrome_expanded: self.is_chrome_expanded()?,
            viewport: self.env.viewport(),
            screen: self.current_screen_state(),
        })
    }
}

//! Device identifiers and signature rows.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Known iPhone models.
///
/// The string id of each variant (see [`DeviceModel::id`]) is the stable key
/// used in reports; suffixes like `_14` mark a second capture of the same
/// hardware on a newer OS release.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceModel {
    #[serde(rename = "XII")]
    XII,
    #[serde(rename = "XI_Pro_Max_14")]
    XIProMax14,
    #[serde(rename = "XI_Pro_Max")]
    XIProMax,
    #[serde(rename = "XI_Pro")]
    XIPro,
    #[serde(rename = "XI")]
    XI,
    #[serde(rename = "XI_14")]
    XI14,
    #[serde(rename = "XR")]
    XR,
    #[serde(rename = "XS_Max")]
    XSMax,
    #[serde(rename = "XS")]
    XS,
    #[serde(rename = "XS_13")]
    XS13,
    #[serde(rename = "X")]
    X,
}

impl DeviceModel {
    /// Every model, in table order.
    pub const ALL: [DeviceModel; 11] = [
        DeviceModel::XII,
        DeviceModel::XIProMax14,
        DeviceModel::XIProMax,
        DeviceModel::XIPro,
        DeviceModel::XI,
        DeviceModel::XI14,
        DeviceModel::XR,
        DeviceModel::XSMax,
        DeviceModel::XS,
        DeviceModel::XS13,
        DeviceModel::X,
    ];

    /// Stable string id, e.g. `"XI_Pro_Max_14"`.
    pub fn id(&self) -> &'static str {
        match self {
            DeviceModel::XII => "XII",
            DeviceModel::XIProMax14 => "XI_Pro_Max_14",
            DeviceModel::XIProMax => "XI_Pro_Max",
            DeviceModel::XIPro => "XI_Pro",
            DeviceModel::XI => "XI",
            DeviceModel::XI14 => "XI_14",
            DeviceModel::XR => "XR",
            DeviceModel::XSMax => "XS_Max",
            DeviceModel::XS => "XS",
            DeviceModel::XS13 => "XS_13",
            DeviceModel::X => "X",
        }
    }

    /// Human-readable name: the id with underscores replaced by spaces.
    pub fn display_name(&self) -> String {
        self.id().replace('_', " ")
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown model id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown device model: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for DeviceModel {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeviceModel::ALL
            .iter()
            .copied()
            .find(|model| model.id() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}

/// Screen fingerprint of one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSignature {
    /// Model this row describes (unique across the table).
    pub id: DeviceModel,

    /// Logical width in CSS pixels, portrait.
    pub logical_width: u32,

    /// Logical height in CSS pixels, portrait.
    pub logical_height: u32,

    /// Viewport inner height in portrait with full browser chrome.
    pub inner_height_portrait: u32,

    /// Viewport inner height in landscape with full browser chrome.
    pub inner_height_landscape: u32,

    /// Viewport inner height in portrait with collapsed chrome.
    pub inner_height_portrait_expanded: Option<u32>,

    /// Viewport inner height in landscape with collapsed chrome.
    pub inner_height_landscape_expanded: Option<u32>,

    /// Physical-to-logical pixel ratio.
    pub device_pixel_ratio: f64,

    /// OS major version the row was captured on.
    pub os_version: u32,
}

impl DeviceSignature {
    /// Whether the logical size matches `width`×`height` in either rotation.
    pub fn matches_geometry(&self, width: u32, height: u32) -> bool {
        (self.logical_width == width && self.logical_height == height)
            || (self.logical_width == height && self.logical_height == width)
    }

    /// Expanded-chrome inner height for the given orientation.
    pub fn expanded_inner_height(&self, portrait: bool) -> Option<u32> {
        if portrait {
            self.inner_height_portrait_expanded
        } else {
            self.inner_height_landscape_expanded
        }
    }

    /// Whether `inner_height` is this model's collapsed-chrome height for the
    /// orientation. Never true when the row has no value for it.
    pub fn is_expanded_at(&self, portrait: bool, inner_height: u32) -> bool {
        self.expanded_inner_height(portrait) == Some(inner_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrips_through_from_str() {
        for model in DeviceModel::ALL {
            assert_eq!(model.id().parse::<DeviceModel>(), Ok(model));
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_and_wrong_case() {
        assert!("XIII".parse::<DeviceModel>().is_err());
        assert!("xi_pro".parse::<DeviceModel>().is_err());
    }

    #[test]
    fn test_display_name_replaces_underscores() {
        assert_eq!(DeviceModel::XIProMax14.display_name(), "XI Pro Max 14");
        assert_eq!(DeviceModel::XII.display_name(), "XII");
    }

    #[test]
    fn test_serializes_as_id() {
        let json = serde_json::to_string(&DeviceModel::XSMax).unwrap();
        assert_eq!(json, "\"XS_Max\"");
    }

    fn signature_without_landscape_expansion() -> DeviceSignature {
        DeviceSignature {
            id: DeviceModel::X,
            logical_width: 375,
            logical_height: 812,
            inner_height_portrait: 748,
            inner_height_landscape: 375,
            inner_height_portrait_expanded: Some(635),
            inner_height_landscape_expanded: None,
            device_pixel_ratio: 3.0,
            os_version: 11,
        }
    }

    #[test]
    fn test_missing_expanded_height_never_matches() {
        let sig = signature_without_landscape_expansion();
        for inner_height in [0, 325, 375, 635, 748, 812, u32::MAX] {
            assert!(!sig.is_expanded_at(false, inner_height));
        }
        assert!(sig.is_expanded_at(true, 635));
        assert!(!sig.is_expanded_at(true, 748));
    }
}

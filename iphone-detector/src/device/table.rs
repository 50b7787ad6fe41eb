//! The static signature table.

use super::model::{DeviceModel, DeviceSignature};

/// Builds a row where both orientations have expanded-chrome heights.
const fn row(
    id: DeviceModel,
    (logical_width, logical_height): (u32, u32),
    (inner_height_portrait, inner_height_landscape): (u32, u32),
    (portrait_expanded, landscape_expanded): (u32, u32),
    device_pixel_ratio: f64,
    os_version: u32,
) -> DeviceSignature {
    DeviceSignature {
        id,
        logical_width,
        logical_height,
        inner_height_portrait,
        inner_height_landscape,
        inner_height_portrait_expanded: Some(portrait_expanded),
        inner_height_landscape_expanded: Some(landscape_expanded),
        device_pixel_ratio,
        os_version,
    }
}

static SIGNATURES: [DeviceSignature; 11] = [
    row(DeviceModel::XII, (390, 844), (778, 390), (664, 340), 3.0, 14),
    row(DeviceModel::XIProMax14, (414, 896), (833, 414), (719, 364), 3.0, 14),
    row(DeviceModel::XIProMax, (414, 896), (832, 414), (719, 364), 3.0, 13),
    row(DeviceModel::XIPro, (375, 812), (749, 375), (635, 325), 3.0, 13),
    row(DeviceModel::XI, (414, 896), (833, 414), (719, 364), 2.0, 13),
    row(DeviceModel::XI14, (414, 896), (829, 414), (715, 364), 2.0, 14),
    row(DeviceModel::XR, (414, 896), (833, 414), (719, 364), 2.0, 12),
    row(DeviceModel::XSMax, (414, 896), (832, 414), (719, 364), 3.0, 12),
    row(DeviceModel::XS, (375, 812), (748, 375), (635, 325), 3.0, 12),
    row(DeviceModel::XS13, (375, 812), (749, 375), (635, 325), 3.0, 13),
    row(DeviceModel::X, (375, 812), (748, 375), (635, 325), 3.0, 11),
];

/// All known signatures, in table order.
pub fn all_signatures() -> &'static [DeviceSignature] {
    &SIGNATURES
}

/// Signature row for `model`.
pub fn signature(model: DeviceModel) -> &'static DeviceSignature {
    // Rows are declared in variant order.
    &SIGNATURES[model as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_eleven_rows() {
        assert_eq!(all_signatures().len(), 11);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = all_signatures().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), all_signatures().len());
    }

    #[test]
    fn test_table_order_matches_model_order() {
        let ids: Vec<_> = all_signatures().iter().map(|s| s.id).collect();
        assert_eq!(ids, DeviceModel::ALL.to_vec());
    }

    #[test]
    fn test_signature_lookup() {
        for model in DeviceModel::ALL {
            assert_eq!(signature(model).id, model);
        }
    }

    #[test]
    fn test_same_chassis_differs_by_os_only() {
        let xi = signature(DeviceModel::XI);
        let xi_14 = signature(DeviceModel::XI14);
        assert_eq!(
            (xi.logical_width, xi.logical_height),
            (xi_14.logical_width, xi_14.logical_height)
        );
        assert_eq!(xi.device_pixel_ratio, xi_14.device_pixel_ratio);
        assert_ne!(xi.os_version, xi_14.os_version);
        assert_ne!(xi.inner_height_portrait, xi_14.inner_height_portrait);
    }

    #[test]
    fn test_matches_geometry_either_rotation() {
        let xii = signature(DeviceModel::XII);
        assert!(xii.matches_geometry(390, 844));
        assert!(xii.matches_geometry(844, 390));
        assert!(!xii.matches_geometry(390, 390));
        assert!(!xii.matches_geometry(414, 896));
    }
}

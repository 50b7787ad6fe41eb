//! Text rendering of detection reports.

use iphone_detector::device::all_signatures;
use iphone_detector::DetectionReport;

/// Device line: `This iPhone XI or XR` / `This not iPhone`.
pub fn name_line(report: &DetectionReport) -> String {
    if report.is_iphone {
        format!("This iPhone {}", report.model_names())
    } else {
        "This not iPhone".to_string()
    }
}

pub fn orientation_line(report: &DetectionReport) -> String {
    let orientation = if report.screen.is_portrait {
        "portrait"
    } else {
        "landscape"
    };
    format!("Orientation: {}", orientation)
}

/// Viewport size line, e.g. `390x 778`.
pub fn size_line(report: &DetectionReport) -> String {
    format!(
        "{}x {}",
        report.viewport.inner_width, report.viewport.inner_height
    )
}

pub fn os_line(report: &DetectionReport) -> String {
    match (report.is_iphone, report.os_version) {
        (true, Some(version)) => format!("Os ver: {}", version.major),
        _ => "no Iphone".to_string(),
    }
}

pub fn chrome_line(report: &DetectionReport) -> String {
    if report.chrome_expanded {
        "Chrome: expanded".to_string()
    } else {
        "Chrome: full".to_string()
    }
}

/// Full multi-line report.
pub fn render_report(report: &DetectionReport) -> String {
    [
        name_line(report),
        orientation_line(report),
        size_line(report),
        os_line(report),
        chrome_line(report),
    ]
    .join("\n")
}

/// Table of every known signature.
pub fn render_models() -> String {
    let mut out = format!(
        "{:<14} {:>9} {:>7} {:>7} {:>9} {:>9} {:>4} {:>3}\n",
        "MODEL", "SCREEN", "INNER-P", "INNER-L", "EXPAND-P", "EXPAND-L", "DPR", "OS"
    );
    for sig in all_signatures() {
        let optional = |v: Option<u32>| v.map_or_else(|| "-".to_string(), |v| v.to_string());
        out.push_str(&format!(
            "{:<14} {:>9} {:>7} {:>7} {:>9} {:>9} {:>4} {:>3}\n",
            sig.id.id(),
            format!("{}x{}", sig.logical_width, sig.logical_height),
            sig.inner_height_portrait,
            sig.inner_height_landscape,
            optional(sig.inner_height_portrait_expanded),
            optional(sig.inner_height_landscape_expanded),
            sig.device_pixel_ratio,
            sig.os_version,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use iphone_detector::{
        DeviceClassifier, DeviceModel, EnvironmentProfile, SimulatedEnvironment,
    };

    fn report(profile: EnvironmentProfile) -> DetectionReport {
        DeviceClassifier::new(Arc::new(SimulatedEnvironment::new(profile)))
            .report()
            .unwrap()
    }

    #[test]
    fn test_render_iphone_report() {
        let text = render_report(&report(EnvironmentProfile::for_model(DeviceModel::XII)));
        assert_eq!(
            text,
            "This iPhone XII\nOrientation: portrait\n390x 778\nOs ver: 14\nChrome: full"
        );
    }

    #[test]
    fn test_render_ambiguous_names() {
        let r = report(EnvironmentProfile::for_model(DeviceModel::XIPro));
        assert_eq!(name_line(&r), "This iPhone XI Pro or XS 13");
    }

    #[test]
    fn test_render_desktop_report() {
        let r = report(EnvironmentProfile::default());
        assert_eq!(name_line(&r), "This not iPhone");
        assert_eq!(os_line(&r), "no Iphone");
    }

    #[test]
    fn test_render_landscape_expanded() {
        let r = report(
            EnvironmentProfile::for_model_landscape(DeviceModel::XSMax).with_inner_height(364),
        );
        assert_eq!(orientation_line(&r), "Orientation: landscape");
        assert_eq!(chrome_line(&r), "Chrome: expanded");
    }

    #[test]
    fn test_render_models_lists_every_row() {
        let table = render_models();
        assert_eq!(table.lines().count(), 12);
        assert!(table.contains("XI_Pro_Max_14"));
        assert!(table.contains("390x844"));
    }
}

//! One-shot detection report.

use std::sync::Arc;

use iphone_detector::{DeviceClassifier, SimulatedEnvironment};

use super::common::EnvironmentArgs;
use crate::error::CliError;
use crate::render::render_report;

/// Classify the described environment and print the report.
pub fn run(args: &EnvironmentArgs, json: bool) -> Result<(), CliError> {
    let profile = args.resolve()?;
    let classifier = DeviceClassifier::new(Arc::new(SimulatedEnvironment::new(profile)));
    let report = classifier.report()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }
    Ok(())
}

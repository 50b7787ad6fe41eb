//! Environment profile export.

use std::path::PathBuf;

use super::common::{default_profile_path, EnvironmentArgs};
use crate::error::CliError;

/// Resolve the described environment and save it as an INI profile.
///
/// Writes to `output`, or to the default profile location when omitted.
pub fn run(args: &EnvironmentArgs, output: Option<PathBuf>) -> Result<(), CliError> {
    let path = output.or_else(default_profile_path).ok_or_else(|| {
        CliError::Config(
            "No config directory available. Use --output to choose a file".to_string(),
        )
    })?;

    let profile = args.resolve()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    profile.save(&path)?;

    println!("Saved environment profile to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use iphone_detector::{DeviceModel, EnvironmentProfile};
    use tempfile::TempDir;

    #[test]
    fn test_saves_to_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("xs.ini");
        let args = EnvironmentArgs {
            model: Some(DeviceModel::XS),
            ..Default::default()
        };

        run(&args, Some(path.clone())).unwrap();

        let saved = EnvironmentProfile::load(&path).unwrap();
        assert_eq!(saved, EnvironmentProfile::for_model(DeviceModel::XS));
    }
}

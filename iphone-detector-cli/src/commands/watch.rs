//! Interactive watch mode.
//!
//! Starts a screen detector on a simulated environment and reads resize
//! commands from stdin, one per line:
//!
//! ```text
//! <width> <height> <inner_width> <inner_height> [orientation]
//! ```
//!
//! The report is rendered once at startup and again every time the detector
//! publishes a new screen state. Blank lines and lines starting with `#` are
//! ignored. Input ends on EOF or Ctrl-C.

use std::sync::Arc;
use std::time::Duration;

use iphone_detector::environment::{ScreenGeometry, Viewport};
use iphone_detector::{DetectorConfig, ScreenDetector, SimulatedEnvironment};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::common::EnvironmentArgs;
use crate::error::CliError;
use crate::render::render_report;

/// One parsed stdin line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeCommand {
    pub geometry: ScreenGeometry,
    pub viewport: Viewport,
    pub orientation: Option<i32>,
}

/// Parse a resize line. `Ok(None)` for blank and comment lines.
pub fn parse_resize_line(line: &str) -> Result<Option<ResizeCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    if !(4..=5).contains(&fields.len()) {
        return Err(format!(
            "expected 4 or 5 fields, got {}: '{}'",
            fields.len(),
            line
        ));
    }

    let number = |index: usize| -> Result<u32, String> {
        fields[index]
            .parse::<u32>()
            .map_err(|_| format!("invalid number '{}'", fields[index]))
    };
    let orientation = fields
        .get(4)
        .map(|raw| {
            raw.parse::<i32>()
                .map_err(|_| format!("invalid orientation '{}'", raw))
        })
        .transpose()?;

    Ok(Some(ResizeCommand {
        geometry: ScreenGeometry::full(number(0)?, number(1)?),
        viewport: Viewport::new(number(2)?, number(3)?),
        orientation,
    }))
}

fn print_current(detector: &ScreenDetector<SimulatedEnvironment>) {
    match detector.report() {
        Ok(report) => println!("{}\n", render_report(&report)),
        Err(e) => println!("{}\n", CliError::from(e)),
    }
}

/// Run watch mode until stdin closes or Ctrl-C.
pub fn run(args: &EnvironmentArgs, quiet_window_ms: u64) -> Result<(), CliError> {
    let profile = args.resolve()?;
    let config = DetectorConfig::default().with_quiet_window(Duration::from_millis(quiet_window_ms));

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;

    let cancel = CancellationToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .map_err(|e| CliError::Runtime(format!("Failed to install Ctrl-C handler: {}", e)))?;

    let result = runtime.block_on(watch(SimulatedEnvironment::new(profile), config, cancel));
    // The stdin reader may still be parked on a blocking thread.
    runtime.shutdown_background();
    result
}

async fn watch(
    env: SimulatedEnvironment,
    config: DetectorConfig,
    cancel: CancellationToken,
) -> Result<(), CliError> {
    let env = Arc::new(env);
    let quiet_window = config.quiet_window;
    let mut detector = ScreenDetector::start(Arc::clone(&env), config);
    let mut states = detector.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print_current(&detector);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Interrupted");
                break;
            }

            state = states.next() => {
                if state.is_none() {
                    break;
                }
                print_current(&detector);
            }

            line = lines.next_line() => {
                let Some(line) = line? else {
                    // Let a pending quiet window settle before exiting.
                    let settle = async {
                        while states.next().await.is_some() {
                            print_current(&detector);
                        }
                    };
                    let _ = tokio::time::timeout(quiet_window * 2, settle).await;
                    break;
                };
                match parse_resize_line(&line) {
                    Ok(Some(cmd)) => env.resize(cmd.geometry, cmd.viewport, cmd.orientation),
                    Ok(None) => {}
                    Err(e) => warn!("Ignoring input line: {}", e),
                }
            }
        }
    }

    detector.shutdown();
    Ok(())
}

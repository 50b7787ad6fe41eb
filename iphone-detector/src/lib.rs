//! iPhone Detector - identify the iPhone model behind a display environment
//!
//! This library matches live screen metrics (logical size, pixel ratio, OS
//! version from the user agent) against a table of known iPhone signatures,
//! and republishes screen state whenever the viewport settles after a resize.
//!
//! # Modules
//!
//! - [`device`]: static signature table
//! - [`environment`]: display environment capability and a simulated one
//! - [`user_agent`]: mobile/iPhone classification and OS version parsing
//! - [`screen`]: screen state and orientation
//! - [`detector`]: classification queries and the publishing pipeline

pub mod config;
pub mod detector;
pub mod device;
pub mod environment;
pub mod error;
pub mod logging;
pub mod screen;
pub mod user_agent;

pub use config::DetectorConfig;
pub use detector::{DetectionReport, DeviceClassifier, ScreenDetector, ScreenStateStream};
pub use device::{DeviceModel, DeviceSignature};
pub use environment::{DisplayEnvironment, EnvironmentProfile, SimulatedEnvironment};
pub use error::DetectError;
pub use screen::ScreenState;

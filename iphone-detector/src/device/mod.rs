//! Device signature table.
//!
//! A fixed reference dataset describing the screen fingerprint of every
//! supported iPhone model: logical size, viewport heights with and without
//! collapsed browser chrome, pixel ratio and the OS major version the
//! measurements were captured on.
//!
//! Several models share a chassis (414×896 or 375×812) and differ only by
//! pixel ratio or OS version, because browser chrome height changes between
//! OS releases on identical hardware.
//!
//! # Example
//!
//! ```
//! use iphone_detector::device::{all_signatures, DeviceModel};
//!
//! let xii = all_signatures()
//!     .iter()
//!     .find(|s| s.id == DeviceModel::XII)
//!     .unwrap();
//! assert_eq!((xii.logical_width, xii.logical_height), (390, 844));
//! ```

mod model;
mod table;

pub use model::{DeviceModel, DeviceSignature, UnknownModel};
pub use table::{all_signatures, signature};

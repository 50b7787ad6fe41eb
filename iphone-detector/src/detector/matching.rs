//! Signature matching.
//!
//! A signature survives when all three predicates hold:
//!
//! 1. its logical size equals the screen size in either rotation,
//! 2. its OS major version equals the parsed one,
//! 3. its pixel ratio equals the reported one.
//!
//! Survivors keep table order. More than one survivor is a legitimate,
//! ambiguous result and is reported as is.

use crate::device::DeviceSignature;

/// Values a signature is matched against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCriteria {
    pub screen_width: u32,
    pub screen_height: u32,
    pub os_major: u32,
    pub device_pixel_ratio: f64,
}

impl MatchCriteria {
    /// Whether `signature` satisfies every predicate.
    pub fn matches(&self, signature: &DeviceSignature) -> bool {
        signature.matches_geometry(self.screen_width, self.screen_height)
            && signature.os_version == self.os_major
            && signature.device_pixel_ratio == self.device_pixel_ratio
    }
}

/// Signatures in `table` matching `criteria`, in table order.
pub fn filter_signatures<'a>(
    table: &'a [DeviceSignature],
    criteria: MatchCriteria,
) -> impl Iterator<Item = &'a DeviceSignature> + 'a {
    table.iter().filter(move |sig| criteria.matches(sig))
}

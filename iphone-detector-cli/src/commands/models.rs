//! Signature table listing.

use crate::error::CliError;
use crate::render::render_models;

/// Print every known device signature.
pub fn run() -> Result<(), CliError> {
    print!("{}", render_models());
    Ok(())
}

//! Init command implementation.

use crate::adapters::BaseDirSource;
use crate::domain::AppError;

/// Output is only the variant's confirmation line, if it has one.
pub fn run_init(source: BaseDirSource) -> Result<(), AppError> {
    crate::app::api::initialize(source)?;
    Ok(())
}

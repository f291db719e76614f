use crate::adapters::BaseDirSource;
use crate::domain::AppError;

use super::OutputFormat;

pub fn run_show(source: BaseDirSource, format: OutputFormat) -> Result<(), AppError> {
    let report = crate::app::api::layout_report(source)?;
    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }
    Ok(())
}

use crate::adapters::BaseDirSource;
use crate::domain::{AppError, Category};

pub fn run_path(source: BaseDirSource, category: &str, name: &str) -> Result<(), AppError> {
    let category: Category = category.parse()?;
    let path = crate::app::api::resolve_path(source, category, name)?;
    println!("{}", path.display());
    Ok(())
}

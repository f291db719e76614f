pub mod model;
pub mod parse;
pub mod paths;

pub use model::{LayoutConfig, LayoutSection};
pub use parse::parse_config_content;

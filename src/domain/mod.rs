pub mod category;
pub mod config;
pub mod error;
pub mod layout;
pub mod variant;

pub use category::Category;
pub use config::{LayoutConfig, LayoutSection};
pub use error::AppError;
pub use layout::ProjectLayout;
pub use variant::{LayoutVariant, STARTUP_CONFIRMATION};

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod pagination;
pub mod types;

pub use config::Settings;
pub use errors::AppError;
pub use pagination::{Page, PageRequest, PaginationError, Paginator, paginate};

pub mod clock;
pub mod config;
pub mod error;
pub mod items;
pub mod observability;
pub mod output;

pub use config::Config;
pub use error::AppError;

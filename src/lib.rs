pub mod aggregate;
pub mod config;
pub mod driver;
pub mod error;
pub mod logging;
pub mod properties;
pub mod split;
pub mod text;

pub use error::ReportError;

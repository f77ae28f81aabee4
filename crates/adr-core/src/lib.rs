pub mod analyze;
pub mod collect;
pub mod config;
pub mod error;
pub mod io;
pub mod paths;
pub mod schema;
pub mod store;
pub mod template;
pub mod validate;

pub use error::{AdrError, Result};

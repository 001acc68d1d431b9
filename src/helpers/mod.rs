//! Helper functions shared by the loader, stores and generators

mod date;
mod url;

pub use date::*;
pub use url::*;

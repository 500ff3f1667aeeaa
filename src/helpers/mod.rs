//! Helper functions for building URLs and displaying dates

mod date;
mod url;

pub use date::*;
pub use url::*;

//! Configuration module

mod site;

pub use site::HighlightConfig;
pub use site::ReadingConfig;
pub use site::SiteConfig;

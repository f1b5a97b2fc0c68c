pub mod downloader;
pub mod resolver;

pub use downloader::{download, WriteMode};
pub use resolver::resolve;

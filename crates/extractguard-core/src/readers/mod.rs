mod config;
mod reader;

pub use config::{HeaderMode, ReaderConfig, ReaderConfigBuilder};
pub use reader::read_extract;

pub mod cleaner;
pub mod encoder;
pub mod features;
pub mod loader;
pub mod merger;
pub mod pipeline;
pub mod report;
pub mod storage;

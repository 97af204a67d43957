pub mod config;
pub mod dataset;
pub mod error;
pub mod labels;
pub mod snapshot;

pub use config::Config;
pub use dataset::Dataset;
pub use error::*;
pub use snapshot::*;

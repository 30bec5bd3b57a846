//! Dataset construction and access.

mod builder;
#[allow(clippy::module_inception)]
mod dataset;

pub use builder::DatasetBuilder;
pub use dataset::Dataset;

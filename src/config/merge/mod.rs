//! Config composition: default values and source precedence.

pub mod policy;
pub mod service;

pub use service::MergeService;

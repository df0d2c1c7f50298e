//! Volume-flow proxies: CMF

pub mod cmf;

pub use cmf::*;

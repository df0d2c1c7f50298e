pub mod registry;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use registry::*;

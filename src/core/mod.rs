//! Core application primitives (task pool, runtime, output)

pub mod output;
pub mod pool;
pub mod runtime;

pub use output::*;
pub use pool::*;
pub use runtime::*;

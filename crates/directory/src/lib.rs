pub mod model;
pub mod query;
#[cfg(not(target_arch = "wasm32"))]
pub mod seed;

pub use model::*;
pub use query::*;

pub mod draft;
pub mod store;
pub mod wizard;

pub use draft::*;
pub use store::*;
pub use wizard::*;

pub mod markers;
pub mod session;
pub mod settings;
pub mod spin;
pub mod symbology;

pub use session::*;

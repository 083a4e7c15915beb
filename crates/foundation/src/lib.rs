pub mod math;

// Foundation crate: small, well-tested primitives only.

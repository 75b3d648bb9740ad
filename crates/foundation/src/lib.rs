pub mod color;
pub mod geo;

// Foundation crate: small, well-tested primitives only.
pub use color::*;
pub use geo::*;

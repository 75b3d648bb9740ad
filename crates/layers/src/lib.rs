pub mod boundary;
pub mod classify;
pub mod compositor;
pub mod frame;
pub mod labels;
pub mod layer;
pub mod legend;
pub mod overlay;
pub mod points;
pub mod variables;

pub use compositor::*;
pub use layer::*;

mod factory;
pub mod layers;
mod sequential;

pub use factory::{LayerFactory, LayerKind};
pub use sequential::Sequential;

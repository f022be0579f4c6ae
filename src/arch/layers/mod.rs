mod activation;
mod batch_norm;
mod conv;
mod layer;
mod learnable;
mod linear;

pub use activation::Activation;
pub use batch_norm::BatchNorm;
pub use conv::{Conv, Conv1d, Conv2d, Conv3d};
pub use layer::Layer;
pub use learnable::Learnable;
pub use linear::Linear;

mod constant;
mod fan;
mod initializer;
mod method;
mod nonlinearity;
mod orthogonal;
mod random;

pub use constant::{constant, ones, zeros};
pub use fan::{FanMode, fan_in_and_out};
pub use initializer::{DEFAULT_GAIN, WeightInit, initialize_weights, reset_parameters};
pub use method::InitMethod;
pub use nonlinearity::Nonlinearity;
pub use orthogonal::orthogonal;
pub use random::{
    Kaiming, kaiming_normal, kaiming_uniform, normal, uniform, xavier_normal, xavier_uniform,
};

use fan::fan;

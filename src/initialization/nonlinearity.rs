use serde::{Deserialize, Serialize};

/// The nonlinearity following a layer, used to pick the recommended gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nonlinearity {
    Linear,
    Conv1d,
    Conv2d,
    Conv3d,
    Sigmoid,
    Tanh,
    #[serde(rename = "relu")]
    ReLU,
    #[serde(rename = "leaky_relu")]
    LeakyReLU,
    Selu,
}

impl Nonlinearity {
    /// Returns the recommended gain for this nonlinearity.
    ///
    /// # Arguments
    /// * `negative_slope` - The slope of the negative part, only used by `LeakyReLU`.
    ///
    /// # Returns
    /// The scaling factor to apply to the standard deviation.
    pub fn gain(&self, negative_slope: f32) -> f32 {
        match self {
            Self::Linear | Self::Conv1d | Self::Conv2d | Self::Conv3d | Self::Sigmoid => 1.,
            Self::Tanh => 5. / 3.,
            Self::ReLU => 2f32.sqrt(),
            Self::LeakyReLU => (2. / (1. + negative_slope * negative_slope)).sqrt(),
            Self::Selu => 3. / 4.,
        }
    }
}

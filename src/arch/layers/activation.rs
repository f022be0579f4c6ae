use serde::{Deserialize, Serialize};

use crate::initialization::Nonlinearity;

/// A parameter-free activation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    #[serde(rename = "relu")]
    ReLU,
    Sigmoid,
    Tanh,
}

impl Activation {
    /// Returns the nonlinearity this activation applies, to pick gains for the layer before it.
    pub fn nonlinearity(&self) -> Nonlinearity {
        match self {
            Self::ReLU => Nonlinearity::ReLU,
            Self::Sigmoid => Nonlinearity::Sigmoid,
            Self::Tanh => Nonlinearity::Tanh,
        }
    }
}

use ndarray::Array1;

use crate::initialization::{ones, zeros};

const DEFAULT_EPS: f32 = 1e-5;
const DEFAULT_MOMENTUM: f32 = 0.1;

/// A batch normalization layer.
///
/// It owns an affine `weight` and `bias` but is not one of the layers the weight initializer
/// acts upon, its parameters keep their own defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchNorm {
    weight: Array1<f32>,
    bias: Array1<f32>,
    running_mean: Array1<f32>,
    running_var: Array1<f32>,
    eps: f32,
    momentum: f32,
}

impl BatchNorm {
    /// Creates a new `BatchNorm` over `num_features` channels.
    pub fn new(num_features: usize) -> Self {
        Self {
            weight: Array1::ones(num_features),
            bias: Array1::zeros(num_features),
            running_mean: Array1::zeros(num_features),
            running_var: Array1::ones(num_features),
            eps: DEFAULT_EPS,
            momentum: DEFAULT_MOMENTUM,
        }
    }

    pub fn num_features(&self) -> usize {
        self.weight.len()
    }

    pub fn weight(&self) -> &Array1<f32> {
        &self.weight
    }

    pub fn weight_mut(&mut self) -> &mut Array1<f32> {
        &mut self.weight
    }

    pub fn bias(&self) -> &Array1<f32> {
        &self.bias
    }

    pub fn running_mean(&self) -> &Array1<f32> {
        &self.running_mean
    }

    pub fn running_var(&self) -> &Array1<f32> {
        &self.running_var
    }

    pub fn eps(&self) -> f32 {
        self.eps
    }

    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    /// Returns the amount of learnable parameters of this layer.
    pub fn size(&self) -> usize {
        self.weight.len() + self.bias.len()
    }

    /// Restores the affine parameters and the running statistics to their defaults.
    pub fn reset_parameters(&mut self) {
        ones(&mut self.weight);
        zeros(&mut self.bias);
        zeros(&mut self.running_mean);
        ones(&mut self.running_var);
    }
}

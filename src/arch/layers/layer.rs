use rand::Rng;

use super::{Activation, BatchNorm, Conv1d, Conv2d, Conv3d, Learnable, Linear};
use crate::{Result, arch::Sequential, initialization};

/// A node of the model tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Linear(Linear),
    Conv1d(Conv1d),
    Conv2d(Conv2d),
    Conv3d(Conv3d),
    BatchNorm(BatchNorm),
    Activation(Activation),
    Sequential(Sequential),
}
use Layer::*;

impl Layer {
    pub fn linear(dim_in: usize, dim_out: usize, bias: bool) -> Self {
        Self::Linear(Linear::new(dim_in, dim_out, bias))
    }

    pub fn conv1d(channels_in: usize, channels_out: usize, kernel: usize, bias: bool) -> Self {
        Self::Conv1d(Conv1d::new(channels_in, channels_out, kernel, bias))
    }

    pub fn conv2d(
        channels_in: usize,
        channels_out: usize,
        kernel: (usize, usize),
        bias: bool,
    ) -> Self {
        Self::Conv2d(Conv2d::new(channels_in, channels_out, kernel, bias))
    }

    pub fn conv3d(
        channels_in: usize,
        channels_out: usize,
        kernel: (usize, usize, usize),
        bias: bool,
    ) -> Self {
        Self::Conv3d(Conv3d::new(channels_in, channels_out, kernel, bias))
    }

    pub fn batch_norm(num_features: usize) -> Self {
        Self::BatchNorm(BatchNorm::new(num_features))
    }

    pub fn activation(activation: Activation) -> Self {
        Self::Activation(activation)
    }

    pub fn sequential<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Layer>,
    {
        Self::Sequential(Sequential::new(layers))
    }

    /// Returns the name of this layer's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Linear(_) => "linear",
            Conv1d(_) => "conv1d",
            Conv2d(_) => "conv2d",
            Conv3d(_) => "conv3d",
            BatchNorm(_) => "batch_norm",
            Activation(_) => "activation",
            Sequential(_) => "sequential",
        }
    }

    /// Gives access to the weight and bias of the layers whose weights can be initialized:
    /// fully-connected and 1-D, 2-D and 3-D convolutions.
    ///
    /// # Returns
    /// `None` for any other kind of layer.
    pub fn learnable(&self) -> Option<&dyn Learnable> {
        match self {
            Linear(l) => Some(l),
            Conv1d(l) => Some(l),
            Conv2d(l) => Some(l),
            Conv3d(l) => Some(l),
            BatchNorm(_) | Activation(_) | Sequential(_) => None,
        }
    }

    /// Mutable counterpart of `Layer::learnable`.
    pub fn learnable_mut(&mut self) -> Option<&mut dyn Learnable> {
        match self {
            Linear(l) => Some(l),
            Conv1d(l) => Some(l),
            Conv2d(l) => Some(l),
            Conv3d(l) => Some(l),
            BatchNorm(_) | Activation(_) | Sequential(_) => None,
        }
    }

    /// Returns the amount of parameters of this layer, including nested layers.
    pub fn size(&self) -> usize {
        match self {
            BatchNorm(l) => l.size(),
            Activation(_) => 0,
            Sequential(l) => l.size(),
            _ => self.learnable().map_or(0, |l| l.size()),
        }
    }

    /// Calls `f` on every layer of the subtree rooted at this one, children before their parent.
    ///
    /// # Returns
    /// The first error returned by `f`, if any.
    pub fn apply<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&mut Layer) -> Result<()>,
    {
        self.visit(&mut f)
    }

    pub(crate) fn visit<F>(&mut self, f: &mut F) -> Result<()>
    where
        F: FnMut(&mut Layer) -> Result<()>,
    {
        if let Sequential(seq) = self {
            seq.visit(f)?;
        }

        f(self)
    }

    /// Restores the default parameters of this layer and its children.
    ///
    /// Weights follow Kaiming uniform with a negative slope of `sqrt(5)` and biases are drawn
    /// from `[-1/sqrt(fan_in), 1/sqrt(fan_in)]`.
    pub fn reset_parameters<R>(&mut self, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        self.apply(|layer| match layer {
            BatchNorm(bn) => {
                bn.reset_parameters();
                Ok(())
            }
            _ => match layer.learnable_mut() {
                Some(params) => initialization::reset_parameters(params, &mut *rng),
                None => Ok(()),
            },
        })
    }
}

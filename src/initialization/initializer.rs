use log::{debug, trace};
use rand::Rng;

use super::{
    FanMode, InitMethod, Kaiming, Nonlinearity, fan_in_and_out, kaiming_normal, kaiming_uniform,
    normal, orthogonal, uniform, xavier_uniform, zeros,
};
use crate::{
    Result,
    arch::layers::{Layer, Learnable},
};

/// The gain used when none is given.
pub const DEFAULT_GAIN: f32 = 0.02;

/// Initializes the weights of a layer with the given method and zeroes its bias.
///
/// Only fully-connected and convolution layers are initialized, any other layer is left
/// untouched, so this can be applied to every layer of a model tree.
///
/// # Arguments
/// * `layer` - The layer to initialize.
/// * `method` - The scheme used for the weights.
/// * `gain` - The scaling factor, its meaning depends on `method` and it is unused by
///   `InitMethod::Kaiming`.
/// * `rng` - A random number generator.
///
/// # Returns
/// An error if the distribution can't be built from `gain` (e.g. a negative gain for
/// `InitMethod::Normal`), in which case neither the weight nor the bias are modified.
pub fn initialize_weights<R>(
    layer: &mut Layer,
    method: InitMethod,
    gain: f32,
    rng: &mut R,
) -> Result<()>
where
    R: Rng + ?Sized,
{
    let kind = layer.kind();
    let Some(params) = layer.learnable_mut() else {
        trace!(layer = kind; "skipping layer without initializable weights");
        return Ok(());
    };

    let mut weight = params.weight_mut();
    match method {
        InitMethod::Xavier => xavier_uniform(&mut weight, gain, rng)?,
        InitMethod::Kaiming => kaiming_normal(&mut weight, Kaiming::default(), rng)?,
        InitMethod::Orthogonal => orthogonal(&mut weight, gain, rng)?,
        InitMethod::Normal => normal(&mut weight, 0., gain, rng)?,
        InitMethod::Uniform => uniform(&mut weight, -gain, gain, rng)?,
    }

    if let Some(mut bias) = params.bias_mut() {
        zeros(&mut bias);
    }

    debug!(layer = kind, method:% = method, gain = gain; "initialized layer");
    Ok(())
}

/// Restores the framework default parameters of a learnable layer: Kaiming uniform weights
/// with a negative slope of `sqrt(5)` and a bias drawn from `[-1/sqrt(fan_in), 1/sqrt(fan_in)]`.
pub fn reset_parameters<L, R>(params: &mut L, rng: &mut R) -> Result<()>
where
    L: Learnable + ?Sized,
    R: Rng + ?Sized,
{
    let kaiming = Kaiming {
        a: 5f32.sqrt(),
        mode: FanMode::FanIn,
        nonlinearity: Nonlinearity::LeakyReLU,
    };

    let mut weight = params.weight_mut();
    kaiming_uniform(&mut weight, kaiming, rng)?;
    let (fan_in, _) = fan_in_and_out(weight.shape())?;

    if let Some(mut bias) = params.bias_mut() {
        if fan_in > 0 {
            let bound = 1. / (fan_in as f32).sqrt();
            uniform(&mut bias, -bound, bound, rng)?;
        }
    }

    Ok(())
}

/// A weight initialization scheme together with its gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightInit {
    method: InitMethod,
    gain: f32,
}

impl WeightInit {
    /// Creates a new `WeightInit` with the default gain.
    pub fn new(method: InitMethod) -> Self {
        Self {
            method,
            gain: DEFAULT_GAIN,
        }
    }

    /// Replaces the gain.
    pub fn with_gain(mut self, gain: f32) -> Self {
        self.gain = gain;
        self
    }

    pub fn method(&self) -> InitMethod {
        self.method
    }

    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// Initializes a single layer, see `initialize_weights`.
    pub fn initialize<R>(&self, layer: &mut Layer, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        initialize_weights(layer, self.method, self.gain, rng)
    }
}

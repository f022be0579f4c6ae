use serde::{Deserialize, Serialize};

use crate::{InitErr, Result};

/// Which side of the connections to scale the variance by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FanMode {
    /// Preserves the magnitude of the variance in the forward pass.
    #[default]
    FanIn,
    /// Preserves the magnitude of the variance in the backward pass.
    FanOut,
}

/// Computes the number of input and output connections of a weight tensor.
///
/// The tensor is expected in the `(out, in, *kernel)` layout, the kernel dimensions
/// (if any) multiply both fans.
///
/// # Arguments
/// * `shape` - The shape of the weight tensor.
///
/// # Returns
/// The `(fan_in, fan_out)` pair or an error if the tensor has less than 2 dimensions.
pub fn fan_in_and_out(shape: &[usize]) -> Result<(usize, usize)> {
    if shape.len() < 2 {
        return Err(InitErr::UnsupportedShape {
            what: "fan computation",
            dims: shape.len(),
        });
    }

    let receptive_field: usize = shape[2..].iter().product();
    let fan_in = shape[1] * receptive_field;
    let fan_out = shape[0] * receptive_field;

    Ok((fan_in, fan_out))
}

/// Picks the fan selected by `mode`.
pub(super) fn fan(shape: &[usize], mode: FanMode) -> Result<usize> {
    let (fan_in, fan_out) = fan_in_and_out(shape)?;

    Ok(match mode {
        FanMode::FanIn => fan_in,
        FanMode::FanOut => fan_out,
    })
}

use ndarray::{
    Array, Array1, ArrayView1, ArrayViewD, ArrayViewMut1, ArrayViewMutD, Dimension, Ix3, Ix4,
    Ix5, ShapeBuilder,
};

use super::Learnable;

/// A convolution layer whose weight has dimension `D`, laid out as
/// `(channels_out, channels_in, *kernel)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Conv<D: Dimension> {
    weight: Array<f32, D>,
    bias: Option<Array1<f32>>,
}

/// A 1-D convolution, the weight is `(out, in, k)`.
pub type Conv1d = Conv<Ix3>;

/// A 2-D convolution, the weight is `(out, in, kh, kw)`.
pub type Conv2d = Conv<Ix4>;

/// A 3-D convolution, the weight is `(out, in, kd, kh, kw)`.
pub type Conv3d = Conv<Ix5>;

impl<D: Dimension> Conv<D> {
    fn zeroed<Sh>(shape: Sh, channels_out: usize, bias: bool) -> Self
    where
        Sh: ShapeBuilder<Dim = D>,
    {
        Self {
            weight: Array::zeros(shape),
            bias: bias.then(|| Array1::zeros(channels_out)),
        }
    }

    /// Returns the `(channels_in, channels_out)` pair of this layer.
    pub fn channels(&self) -> (usize, usize) {
        let shape = self.weight.shape();
        (shape[1], shape[0])
    }

    /// Returns the size of the kernel along each spatial dimension.
    pub fn kernel(&self) -> &[usize] {
        &self.weight.shape()[2..]
    }
}

impl Conv1d {
    /// Creates a new `Conv1d` layer with zeroed parameters.
    ///
    /// # Arguments
    /// * `channels_in` - The amount of input channels.
    /// * `channels_out` - The amount of output channels.
    /// * `kernel` - The length of the kernel.
    /// * `bias` - Whether the layer has a bias.
    pub fn new(channels_in: usize, channels_out: usize, kernel: usize, bias: bool) -> Self {
        Self::zeroed((channels_out, channels_in, kernel), channels_out, bias)
    }
}

impl Conv2d {
    /// Creates a new `Conv2d` layer with zeroed parameters.
    ///
    /// # Arguments
    /// * `channels_in` - The amount of input channels.
    /// * `channels_out` - The amount of output channels.
    /// * `kernel` - The `(height, width)` of the kernel.
    /// * `bias` - Whether the layer has a bias.
    pub fn new(
        channels_in: usize,
        channels_out: usize,
        kernel: (usize, usize),
        bias: bool,
    ) -> Self {
        let (kh, kw) = kernel;
        Self::zeroed((channels_out, channels_in, kh, kw), channels_out, bias)
    }
}

impl Conv3d {
    /// Creates a new `Conv3d` layer with zeroed parameters.
    ///
    /// # Arguments
    /// * `channels_in` - The amount of input channels.
    /// * `channels_out` - The amount of output channels.
    /// * `kernel` - The `(depth, height, width)` of the kernel.
    /// * `bias` - Whether the layer has a bias.
    pub fn new(
        channels_in: usize,
        channels_out: usize,
        kernel: (usize, usize, usize),
        bias: bool,
    ) -> Self {
        let (kd, kh, kw) = kernel;
        Self::zeroed(
            (channels_out, channels_in, kd, kh, kw),
            channels_out,
            bias,
        )
    }
}

impl<D: Dimension> Learnable for Conv<D> {
    fn weight(&self) -> ArrayViewD<'_, f32> {
        self.weight.view().into_dyn()
    }

    fn weight_mut(&mut self) -> ArrayViewMutD<'_, f32> {
        self.weight.view_mut().into_dyn()
    }

    fn bias(&self) -> Option<ArrayView1<'_, f32>> {
        self.bias.as_ref().map(|b| b.view())
    }

    fn bias_mut(&mut self) -> Option<ArrayViewMut1<'_, f32>> {
        self.bias.as_mut().map(|b| b.view_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conv1d_layout() {
        let conv = Conv1d::new(2, 4, 7, true);

        assert_eq!(conv.weight().shape(), &[4, 2, 7]);
        assert_eq!(conv.channels(), (2, 4));
        assert_eq!(conv.kernel(), &[7]);
        assert_eq!(conv.size(), 4 * 2 * 7 + 4);
    }

    #[test]
    fn conv2d_layout() {
        let conv = Conv2d::new(8, 16, (3, 3), true);

        assert_eq!(conv.weight().shape(), &[16, 8, 3, 3]);
        assert_eq!(conv.bias().unwrap().len(), 16);
    }

    #[test]
    fn conv3d_layout() {
        let conv = Conv3d::new(1, 2, (3, 4, 5), false);

        assert_eq!(conv.weight().shape(), &[2, 1, 3, 4, 5]);
        assert_eq!(conv.kernel(), &[3, 4, 5]);
        assert!(conv.bias().is_none());
    }
}

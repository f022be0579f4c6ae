use ndarray::{Array1, Array2, ArrayView1, ArrayViewD, ArrayViewMut1, ArrayViewMutD};

use super::Learnable;

/// A fully-connected layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Linear {
    weight: Array2<f32>,
    bias: Option<Array1<f32>>,
}

impl Linear {
    /// Creates a new `Linear` layer with zeroed parameters.
    ///
    /// # Arguments
    /// * `dim_in` - The amount of input features.
    /// * `dim_out` - The amount of output features.
    /// * `bias` - Whether the layer has a bias.
    ///
    /// # Returns
    /// A new `Linear` instance with a `(dim_out, dim_in)` weight.
    pub fn new(dim_in: usize, dim_out: usize, bias: bool) -> Self {
        Self {
            weight: Array2::zeros((dim_out, dim_in)),
            bias: bias.then(|| Array1::zeros(dim_out)),
        }
    }

    /// Returns the `(dim_in, dim_out)` pair of this layer.
    pub fn dim(&self) -> (usize, usize) {
        let (dim_out, dim_in) = self.weight.dim();
        (dim_in, dim_out)
    }
}

impl Learnable for Linear {
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
    fn layout() {
        let linear = Linear::new(3, 5, true);

        assert_eq!(linear.dim(), (3, 5));
        assert_eq!(linear.weight().shape(), &[5, 3]);
        assert_eq!(linear.bias().unwrap().len(), 5);
        assert_eq!(linear.size(), 20);
    }

    #[test]
    fn without_bias() {
        let mut linear = Linear::new(3, 5, false);

        assert!(linear.bias().is_none());
        assert!(linear.bias_mut().is_none());
        assert_eq!(linear.size(), 15);
    }
}

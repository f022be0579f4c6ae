use ndarray::{ArrayView1, ArrayViewD, ArrayViewMut1, ArrayViewMutD};

/// The capability shared by the layers whose weights can be initialized: a weight tensor in
/// the `(out, in, *kernel)` layout and an optional bias of length `out`.
pub trait Learnable {
    /// Returns a view of the weight tensor.
    fn weight(&self) -> ArrayViewD<'_, f32>;

    /// Returns a mutable view of the weight tensor.
    fn weight_mut(&mut self) -> ArrayViewMutD<'_, f32>;

    /// Returns a view of the bias, if the layer has one.
    fn bias(&self) -> Option<ArrayView1<'_, f32>>;

    /// Returns a mutable view of the bias, if the layer has one.
    fn bias_mut(&mut self) -> Option<ArrayViewMut1<'_, f32>>;

    /// Returns the amount of parameters of this layer.
    fn size(&self) -> usize {
        self.weight().len() + self.bias().map_or(0, |b| b.len())
    }
}

use super::layers::Layer;

/// The kind of layer a `LayerFactory` builds, with its kernel when it is a convolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Linear,
    Conv1d(usize),
    Conv2d((usize, usize)),
    Conv3d((usize, usize, usize)),
}

/// Builds layers with some of their constructor arguments bound ahead of time.
///
/// The kind of layer, its kernel and whether it has a bias are fixed when the factory is
/// created, the amount of input and output features (or channels) is given on each build.
///
/// ```
/// use module_init::arch::{LayerFactory, layers::Layer};
///
/// let conv3x3 = LayerFactory::conv2d((3, 3)).with_bias(false);
/// let layers: Vec<Layer> = [(3, 16), (16, 32)]
///     .into_iter()
///     .map(|(c_in, c_out)| conv3x3.build(c_in, c_out))
///     .collect();
///
/// assert_eq!(layers[1].size(), 32 * 16 * 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerFactory {
    kind: LayerKind,
    bias: bool,
}

impl LayerFactory {
    /// Creates a factory for the given kind of layer, with bias.
    pub fn new(kind: LayerKind) -> Self {
        Self { kind, bias: true }
    }

    pub fn linear() -> Self {
        Self::new(LayerKind::Linear)
    }

    pub fn conv1d(kernel: usize) -> Self {
        Self::new(LayerKind::Conv1d(kernel))
    }

    pub fn conv2d(kernel: (usize, usize)) -> Self {
        Self::new(LayerKind::Conv2d(kernel))
    }

    pub fn conv3d(kernel: (usize, usize, usize)) -> Self {
        Self::new(LayerKind::Conv3d(kernel))
    }

    /// Sets whether the built layers have a bias.
    pub fn with_bias(mut self, bias: bool) -> Self {
        self.bias = bias;
        self
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn bias(&self) -> bool {
        self.bias
    }

    /// Builds a new layer with zeroed parameters.
    ///
    /// # Arguments
    /// * `input` - The amount of input features or channels.
    /// * `output` - The amount of output features or channels.
    ///
    /// # Returns
    /// A new layer of the bound kind.
    pub fn build(&self, input: usize, output: usize) -> Layer {
        match self.kind {
            LayerKind::Linear => Layer::linear(input, output, self.bias),
            LayerKind::Conv1d(kernel) => Layer::conv1d(input, output, kernel, self.bias),
            LayerKind::Conv2d(kernel) => Layer::conv2d(input, output, kernel, self.bias),
            LayerKind::Conv3d(kernel) => Layer::conv3d(input, output, kernel, self.bias),
        }
    }

    /// Turns the factory into a plain constructor closure.
    pub fn into_fn(self) -> impl Fn(usize, usize) -> Layer + Clone {
        move |input, output| self.build(input, output)
    }
}

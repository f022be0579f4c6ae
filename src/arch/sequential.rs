use super::layers::Layer;
use crate::Result;

/// A sequential container of layers, the root of a model tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequential {
    layers: Vec<Layer>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of.
    ///
    /// # Returns
    /// A new `Sequential` instance.
    pub fn new<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Layer>,
    {
        Self {
            layers: layers.into_iter().collect(),
        }
    }

    /// Appends a layer at the end.
    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Returns the amount of parameters of every layer in the tree.
    pub fn size(&self) -> usize {
        self.layers.iter().map(|layer| layer.size()).sum()
    }

    /// Calls `f` on every layer of the tree, children before their parent. The sequential
    /// itself is not a layer and is not visited.
    ///
    /// # Arguments
    /// * `f` - The function to call on every layer.
    ///
    /// # Returns
    /// The first error returned by `f`, the remaining layers are not visited.
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
        for layer in self.layers.iter_mut() {
            layer.visit(f)?;
        }

        Ok(())
    }
}

impl FromIterator<Layer> for Sequential {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        Self::new(iter)
    }
}

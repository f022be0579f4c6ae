use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    Result,
    arch::{LayerFactory, Sequential, layers::Layer},
    config::{LayerSpec, SessionSpec},
    initialization::WeightInit,
};

/// A model together with the initialization it went through and the rng used for it.
pub struct Session {
    model: Sequential,
    init: WeightInit,
    rng: StdRng,
}

impl Session {
    pub fn model(&self) -> &Sequential {
        &self.model
    }

    pub fn init(&self) -> WeightInit {
        self.init
    }

    pub fn into_model(self) -> Sequential {
        self.model
    }

    /// Initializes every layer of the model again, drawing from the session's rng.
    pub fn initialize(&mut self) -> Result<()> {
        let init = self.init;
        let rng = &mut self.rng;
        self.model.apply(|layer| init.initialize(layer, &mut *rng))
    }
}

/// Builds sessions out of their specification.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    built_count: usize,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the model of the spec and initializes all of its layers.
    ///
    /// # Args
    /// * `spec` - The specification of the session.
    ///
    /// # Returns
    /// A new, initialized session or an error if encountered.
    pub fn build(&mut self, spec: SessionSpec) -> Result<Session> {
        let id = self.generate_id();
        let model: Sequential = spec.model.iter().map(|spec| self.resolve_layer(spec)).collect();
        debug!(session = id, layers = model.len(), params = model.size(); "built model");

        let mut session = Session {
            model,
            init: spec.init.into(),
            rng: self.generate_rng(spec.seed),
        };
        session.initialize()?;

        info!(
            session = id,
            method:% = session.init.method(),
            gain = session.init.gain();
            "initialized model"
        );
        Ok(session)
    }

    /// Generates a random number generator given (or not) a seed.
    ///
    /// # Args
    /// * `seed` - An optional seed for the rng.
    ///
    /// # Returns
    /// A seeded rng, or one seeded from the OS if no seed is given.
    fn generate_rng(&self, seed: Option<u64>) -> StdRng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Generates a new incremental id for the session being created.
    fn generate_id(&mut self) -> usize {
        self.built_count += 1;
        self.built_count - 1
    }

    /// Resolves the layer of a spec, recursively for sequential containers.
    fn resolve_layer(&self, spec: &LayerSpec) -> Layer {
        match *spec {
            LayerSpec::Linear {
                dim_in,
                dim_out,
                bias,
            } => LayerFactory::linear().with_bias(bias).build(dim_in, dim_out),
            LayerSpec::Conv1d {
                channels_in,
                channels_out,
                kernel,
                bias,
            } => LayerFactory::conv1d(kernel)
                .with_bias(bias)
                .build(channels_in, channels_out),
            LayerSpec::Conv2d {
                channels_in,
                channels_out,
                kernel,
                bias,
            } => LayerFactory::conv2d(kernel)
                .with_bias(bias)
                .build(channels_in, channels_out),
            LayerSpec::Conv3d {
                channels_in,
                channels_out,
                kernel,
                bias,
            } => LayerFactory::conv3d(kernel)
                .with_bias(bias)
                .build(channels_in, channels_out),
            LayerSpec::BatchNorm { num_features } => Layer::batch_norm(num_features),
            LayerSpec::Activation { kind } => Layer::activation(kind),
            LayerSpec::Sequential { ref layers } => {
                Layer::sequential(layers.iter().map(|spec| self.resolve_layer(spec)))
            }
        }
    }
}

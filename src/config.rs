use serde::{Deserialize, Serialize};

use crate::{
    Result,
    arch::layers::Activation,
    initialization::{DEFAULT_GAIN, InitMethod, WeightInit},
};

fn default_bias() -> bool {
    true
}

fn default_gain() -> f32 {
    DEFAULT_GAIN
}

/// The specification of a `Layer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerSpec {
    Linear {
        dim_in: usize,
        dim_out: usize,
        #[serde(default = "default_bias")]
        bias: bool,
    },
    Conv1d {
        channels_in: usize,
        channels_out: usize,
        kernel: usize,
        #[serde(default = "default_bias")]
        bias: bool,
    },
    Conv2d {
        channels_in: usize,
        channels_out: usize,
        kernel: (usize, usize),
        #[serde(default = "default_bias")]
        bias: bool,
    },
    Conv3d {
        channels_in: usize,
        channels_out: usize,
        kernel: (usize, usize, usize),
        #[serde(default = "default_bias")]
        bias: bool,
    },
    BatchNorm {
        num_features: usize,
    },
    Activation {
        kind: Activation,
    },
    Sequential {
        layers: Vec<LayerSpec>,
    },
}

/// The specification of a `WeightInit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitSpec {
    pub method: InitMethod,
    #[serde(default = "default_gain")]
    pub gain: f32,
}

impl From<InitSpec> for WeightInit {
    fn from(spec: InitSpec) -> Self {
        WeightInit::new(spec.method).with_gain(spec.gain)
    }
}

/// The specification of a whole initialization session: the model, how to initialize it and
/// an optional seed for reproducibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSpec {
    pub model: Vec<LayerSpec>,
    pub init: InitSpec,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SessionSpec {
    /// Parses a session specification from JSON.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InitErr;

    #[test]
    fn defaults() {
        let raw = r#"{
            "model": [
                { "linear": { "dim_in": 4, "dim_out": 2 } },
                { "conv2d": { "channels_in": 3, "channels_out": 8, "kernel": [3, 3], "bias": false } }
            ],
            "init": { "method": "xavier" }
        }"#;

        let spec = SessionSpec::from_json(raw).unwrap();

        assert_eq!(spec.seed, None);
        assert_eq!(spec.init.gain, DEFAULT_GAIN);
        assert_eq!(
            spec.model,
            vec![
                LayerSpec::Linear {
                    dim_in: 4,
                    dim_out: 2,
                    bias: true
                },
                LayerSpec::Conv2d {
                    channels_in: 3,
                    channels_out: 8,
                    kernel: (3, 3),
                    bias: false
                },
            ]
        );
    }

    #[test]
    fn nested_and_parameter_free_layers() {
        let raw = r#"{
            "model": [
                { "sequential": { "layers": [
                    { "batch_norm": { "num_features": 8 } },
                    { "activation": { "kind": "relu" } }
                ] } }
            ],
            "init": { "method": "orthogonal", "gain": 1.0 },
            "seed": 7
        }"#;

        let spec = SessionSpec::from_json(raw).unwrap();

        assert_eq!(spec.seed, Some(7));
        assert_eq!(WeightInit::from(spec.init), WeightInit::new(InitMethod::Orthogonal).with_gain(1.));
        assert_eq!(
            spec.model[0],
            LayerSpec::Sequential {
                layers: vec![
                    LayerSpec::BatchNorm { num_features: 8 },
                    LayerSpec::Activation {
                        kind: Activation::ReLU
                    },
                ]
            }
        );
    }

    #[test]
    fn unknown_method() {
        let raw = r#"{ "model": [], "init": { "method": "lecun" } }"#;
        let err = SessionSpec::from_json(raw).unwrap_err();
        assert!(matches!(err, InitErr::Spec(_)));
    }
}

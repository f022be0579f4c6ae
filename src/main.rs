use std::{env, fs};

use log::info;

use module_init::{
    InitErr, Result,
    arch::layers::Layer,
    builder::ModelBuilder,
    config::SessionSpec,
};

const SESSION_VAR: &str = "SESSION";

fn main() -> Result<()> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .or_else(|| env::var(SESSION_VAR).ok())
        .ok_or_else(|| {
            InitErr::Spec(format!(
                "missing session file, pass it as the first argument or set {SESSION_VAR}"
            ))
        })?;

    let raw = fs::read_to_string(&path)?;
    let spec = SessionSpec::from_json(&raw)?;
    info!("loaded session spec from {path}");

    let session = ModelBuilder::new().build(spec)?;
    report(session.model().layers(), 0);
    info!("initialized {} parameters", session.model().size());

    Ok(())
}

/// Logs the statistics of the weights of every initialized layer.
fn report(layers: &[Layer], depth: usize) {
    for layer in layers {
        let indent = "  ".repeat(depth);

        if let Layer::Sequential(seq) = layer {
            info!("{indent}sequential");
            report(seq.layers(), depth + 1);
            continue;
        }

        let Some(params) = layer.learnable() else {
            info!("{indent}{}", layer.kind());
            continue;
        };

        let weight = params.weight();
        let mean = weight.mean().unwrap_or(0.);
        let std = weight.std(0.);
        let min = weight.fold(f32::INFINITY, |m, &w| m.min(w));
        let max = weight.fold(f32::NEG_INFINITY, |m, &w| m.max(w));

        info!(
            "{indent}{} {:?}: mean={mean:.5} std={std:.5} min={min:.5} max={max:.5} bias={}",
            layer.kind(),
            weight.shape(),
            params.bias().is_some(),
        );
    }
}

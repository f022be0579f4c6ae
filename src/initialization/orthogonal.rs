use log::warn;
use ndarray::{Array2, ArrayBase, DataMut, Dimension};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::{InitErr, Result};

/// Fills the tensor with a (semi-)orthogonal matrix scaled by `gain`.
///
/// The tensor is seen as a `(rows, cols)` matrix where `rows` is its first dimension and the
/// remaining ones are flattened into `cols`. A standard normal matrix is sampled and
/// orthonormalized, so that the rows of the result are orthonormal when `rows <= cols` and
/// the columns otherwise.
///
/// # Arguments
/// * `tensor` - The tensor to initialize.
/// * `gain` - The scaling factor.
/// * `rng` - A random number generator.
///
/// # Returns
/// An error if the tensor has less than 2 dimensions.
pub fn orthogonal<S, D, R>(tensor: &mut ArrayBase<S, D>, gain: f32, rng: &mut R) -> Result<()>
where
    S: DataMut<Elem = f32>,
    D: Dimension,
    R: Rng + ?Sized,
{
    let dims = tensor.ndim();
    if dims < 2 {
        return Err(InitErr::UnsupportedShape {
            what: "orthogonal initialization",
            dims,
        });
    }

    if tensor.is_empty() {
        warn!(scheme = "orthogonal"; "initializing a zero-element tensor is a no-op");
        return Ok(());
    }

    let rows = tensor.shape()[0];
    let cols = tensor.len() / rows;

    // Factor the tall orientation so that there are never more columns than rows.
    let tall = (rows.max(cols), rows.min(cols));
    let mut q = Array2::<f64>::from_shape_simple_fn(tall, || StandardNormal.sample(&mut *rng));
    orthonormalize_columns(&mut q)?;

    let q = if rows < cols { q.reversed_axes() } else { q };
    let gain = f64::from(gain);
    tensor
        .iter_mut()
        .zip(q.iter())
        .for_each(|(w, &v)| *w = (gain * v) as f32);

    Ok(())
}

/// Orthonormalizes the columns of `q` in place using modified Gram-Schmidt with a second
/// projection pass.
///
/// Equivalent to the `Q` factor of a QR decomposition whose `R` has a positive diagonal.
fn orthonormalize_columns(q: &mut Array2<f64>) -> Result<()> {
    for j in 0..q.ncols() {
        for _ in 0..2 {
            for k in 0..j {
                let proj = q.column(k).dot(&q.column(j));
                let qk = q.column(k).to_owned();
                q.column_mut(j).scaled_add(-proj, &qk);
            }
        }

        let norm = q.column(j).dot(&q.column(j)).sqrt();
        if !norm.is_normal() {
            return Err(InitErr::InvalidDistribution(format!(
                "sampled matrix is rank deficient at column {j}"
            )));
        }

        q.column_mut(j).mapv_inplace(|v| v / norm);
    }

    Ok(())
}

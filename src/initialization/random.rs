use log::warn;
use ndarray::{ArrayBase, Data, DataMut, Dimension};
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};

use super::{FanMode, Nonlinearity, fan, fan_in_and_out};
use crate::Result;

/// The parameters of the Kaiming/He initialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kaiming {
    /// The negative slope of the rectifier, only used with `LeakyReLU`.
    pub a: f32,
    /// The fan used to scale the standard deviation.
    pub mode: FanMode,
    /// The nonlinearity following the layer.
    pub nonlinearity: Nonlinearity,
}

impl Default for Kaiming {
    fn default() -> Self {
        Self {
            a: 0.,
            mode: FanMode::FanIn,
            nonlinearity: Nonlinearity::ReLU,
        }
    }
}

impl Kaiming {
    /// Computes the standard deviation for a tensor of the given shape.
    fn std_dev(&self, shape: &[usize]) -> Result<f32> {
        let fan = fan(shape, self.mode)?;
        Ok(self.nonlinearity.gain(self.a) / (fan as f32).sqrt())
    }
}

/// Overwrites every element of `tensor` with a sample of `distribution`.
fn fill<S, D, T, R>(tensor: &mut ArrayBase<S, D>, distribution: T, rng: &mut R)
where
    S: DataMut<Elem = f32>,
    D: Dimension,
    T: Distribution<f32>,
    R: Rng + ?Sized,
{
    tensor.map_inplace(|w| *w = distribution.sample(&mut *rng));
}

/// Whether the tensor has no elements, in which case fan based schemes are skipped.
fn is_zero_element<S, D>(tensor: &ArrayBase<S, D>, what: &'static str) -> bool
where
    S: Data<Elem = f32>,
    D: Dimension,
{
    if tensor.is_empty() {
        warn!(scheme = what; "initializing a zero-element tensor is a no-op");
        return true;
    }

    false
}

/// Fills the tensor with values drawn uniformly from `[low, high]`.
///
/// # Arguments
/// * `tensor` - The tensor to initialize.
/// * `low` - The inclusive lower limit.
/// * `high` - The inclusive upper limit.
/// * `rng` - A random number generator.
///
/// # Returns
/// An error if the range is invalid (low > high or not finite).
pub fn uniform<S, D, R>(
    tensor: &mut ArrayBase<S, D>,
    low: f32,
    high: f32,
    rng: &mut R,
) -> Result<()>
where
    S: DataMut<Elem = f32>,
    D: Dimension,
    R: Rng + ?Sized,
{
    let distribution = Uniform::new_inclusive(low, high)?;
    fill(tensor, distribution, rng);
    Ok(())
}

/// Fills the tensor with values drawn from a normal distribution.
///
/// # Arguments
/// * `tensor` - The tensor to initialize.
/// * `mean` - The mean of the distribution.
/// * `std_dev` - The standard deviation of the distribution.
/// * `rng` - A random number generator.
///
/// # Returns
/// An error if `std_dev` is negative or not finite.
pub fn normal<S, D, R>(
    tensor: &mut ArrayBase<S, D>,
    mean: f32,
    std_dev: f32,
    rng: &mut R,
) -> Result<()>
where
    S: DataMut<Elem = f32>,
    D: Dimension,
    R: Rng + ?Sized,
{
    let distribution = Normal::new(mean, std_dev)?;
    fill(tensor, distribution, rng);
    Ok(())
}

/// Xavier/Glorot uniform initialization, values are drawn from `[-a, a]` where
/// `a = gain * sqrt(6 / (fan_in + fan_out))`.
///
/// # Returns
/// An error if the tensor has less than 2 dimensions or the computed range is invalid.
pub fn xavier_uniform<S, D, R>(
    tensor: &mut ArrayBase<S, D>,
    gain: f32,
    rng: &mut R,
) -> Result<()>
where
    S: DataMut<Elem = f32>,
    D: Dimension,
    R: Rng + ?Sized,
{
    let (fan_in, fan_out) = fan_in_and_out(tensor.shape())?;
    if is_zero_element(tensor, "xavier_uniform") {
        return Ok(());
    }

    let a = gain * (6. / (fan_in + fan_out) as f32).sqrt();
    uniform(tensor, -a, a, rng)
}

/// Xavier/Glorot normal initialization, values are drawn from `N(0, std²)` where
/// `std = gain * sqrt(2 / (fan_in + fan_out))`.
///
/// # Returns
/// An error if the tensor has less than 2 dimensions or the computed deviation is invalid.
pub fn xavier_normal<S, D, R>(
    tensor: &mut ArrayBase<S, D>,
    gain: f32,
    rng: &mut R,
) -> Result<()>
where
    S: DataMut<Elem = f32>,
    D: Dimension,
    R: Rng + ?Sized,
{
    let (fan_in, fan_out) = fan_in_and_out(tensor.shape())?;
    if is_zero_element(tensor, "xavier_normal") {
        return Ok(());
    }

    let std_dev = gain * (2. / (fan_in + fan_out) as f32).sqrt();
    normal(tensor, 0., std_dev, rng)
}

/// Kaiming/He uniform initialization, values are drawn from `[-bound, bound]` where
/// `bound = sqrt(3) * gain / sqrt(fan)`.
pub fn kaiming_uniform<S, D, R>(
    tensor: &mut ArrayBase<S, D>,
    kaiming: Kaiming,
    rng: &mut R,
) -> Result<()>
where
    S: DataMut<Elem = f32>,
    D: Dimension,
    R: Rng + ?Sized,
{
    if is_zero_element(tensor, "kaiming_uniform") {
        return Ok(());
    }

    let bound = 3f32.sqrt() * kaiming.std_dev(tensor.shape())?;
    uniform(tensor, -bound, bound, rng)
}

/// Kaiming/He normal initialization, values are drawn from `N(0, std²)` where
/// `std = gain / sqrt(fan)`.
pub fn kaiming_normal<S, D, R>(
    tensor: &mut ArrayBase<S, D>,
    kaiming: Kaiming,
    rng: &mut R,
) -> Result<()>
where
    S: DataMut<Elem = f32>,
    D: Dimension,
    R: Rng + ?Sized,
{
    if is_zero_element(tensor, "kaiming_normal") {
        return Ok(());
    }

    let std_dev = kaiming.std_dev(tensor.shape())?;
    normal(tensor, 0., std_dev, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InitErr;
    use ndarray::{Array1, Array2, Array4};
    use rand::{SeedableRng, rngs::StdRng};

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn sample_std(values: &[f32]) -> f32 {
        let n = values.len() as f32;
        let mean = values.iter().sum::<f32>() / n;
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n).sqrt()
    }

    #[test]
    fn uniform_within_bounds() {
        let mut rng = seeded_rng();
        let mut t = Array2::<f32>::zeros((20, 30));

        uniform(&mut t, -0.5, 0.25, &mut rng).unwrap();
        assert!(t.iter().all(|&w| (-0.5..=0.25).contains(&w)));
    }

    #[test]
    fn uniform_degenerate_range() {
        let mut rng = seeded_rng();
        let mut t = Array1::<f32>::ones(8);

        uniform(&mut t, 0., 0., &mut rng).unwrap();
        assert!(t.iter().all(|&w| w == 0.));
    }

    #[test]
    fn uniform_inverted_range() {
        let mut rng = seeded_rng();
        let mut t = Array1::<f32>::ones(8);

        let err = uniform(&mut t, 1., -1., &mut rng).unwrap_err();
        assert!(matches!(err, InitErr::InvalidDistribution(_)));
        assert!(t.iter().all(|&w| w == 1.));
    }

    #[test]
    fn normal_negative_std() {
        let mut rng = seeded_rng();
        let mut t = Array1::<f32>::zeros(4);

        assert!(normal(&mut t, 0., -1., &mut rng).is_err());
    }

    #[test]
    fn normal_statistics() {
        let mut rng = seeded_rng();
        let mut t = Array1::<f32>::zeros(20_000);

        normal(&mut t, 1., 0.5, &mut rng).unwrap();
        let values = t.to_vec();
        let mean = values.iter().sum::<f32>() / values.len() as f32;

        assert!((mean - 1.).abs() < 0.02);
        assert!((sample_std(&values) - 0.5).abs() < 0.02);
    }

    #[test]
    fn xavier_uniform_bound() {
        let mut rng = seeded_rng();
        let mut t = Array4::<f32>::zeros((16, 8, 3, 3));

        xavier_uniform(&mut t, 2., &mut rng).unwrap();
        let a = 2. * (6f32 / (72 + 144) as f32).sqrt();
        assert!(t.iter().all(|&w| w.abs() <= a));
        assert!(t.iter().any(|&w| w.abs() > a / 2.));
    }

    #[test]
    fn xavier_normal_statistics() {
        let mut rng = seeded_rng();
        let mut t = Array2::<f32>::zeros((100, 300));

        xavier_normal(&mut t, 1., &mut rng).unwrap();
        let expected = (2f32 / 400.).sqrt();
        assert!((sample_std(&t.iter().copied().collect::<Vec<f32>>()) - expected).abs() < expected * 0.05);
    }

    #[test]
    fn kaiming_normal_statistics() {
        let mut rng = seeded_rng();
        let mut t = Array2::<f32>::zeros((200, 50));

        kaiming_normal(&mut t, Kaiming::default(), &mut rng).unwrap();
        let expected = (2f32 / 50.).sqrt();
        assert!((sample_std(&t.iter().copied().collect::<Vec<f32>>()) - expected).abs() < expected * 0.05);
    }

    #[test]
    fn kaiming_uniform_fan_out() {
        let mut rng = seeded_rng();
        let mut t = Array2::<f32>::zeros((4, 100));
        let kaiming = Kaiming {
            mode: FanMode::FanOut,
            ..Default::default()
        };

        kaiming_uniform(&mut t, kaiming, &mut rng).unwrap();
        let bound = 3f32.sqrt() * 2f32.sqrt() / 2.;
        assert!(t.iter().all(|&w| w.abs() <= bound));
    }

    #[test]
    fn zero_element_tensor_is_untouched() {
        let mut rng = seeded_rng();
        let mut t = Array2::<f32>::zeros((0, 5));

        kaiming_normal(&mut t, Kaiming::default(), &mut rng).unwrap();
        xavier_uniform(&mut t, 1., &mut rng).unwrap();
        assert!(t.is_empty());
    }

    #[test]
    fn fan_schemes_reject_vectors() {
        let mut rng = seeded_rng();
        let mut t = Array1::<f32>::zeros(5);

        assert!(xavier_uniform(&mut t, 1., &mut rng).is_err());
        assert!(kaiming_normal(&mut t, Kaiming::default(), &mut rng).is_err());
    }

    #[test]
    fn same_seed_same_values() {
        let mut a = Array2::<f32>::zeros((3, 3));
        let mut b = Array2::<f32>::zeros((3, 3));

        normal(&mut a, 0., 1., &mut seeded_rng()).unwrap();
        normal(&mut b, 0., 1., &mut seeded_rng()).unwrap();
        assert_eq!(a, b);
    }
}

use ndarray::{ArrayBase, DataMut, Dimension};

/// Sets every element of the tensor to the same value.
///
/// # Arguments
/// * `tensor` - The tensor to overwrite.
/// * `value` - The value to always write.
pub fn constant<S, D>(tensor: &mut ArrayBase<S, D>, value: f32)
where
    S: DataMut<Elem = f32>,
    D: Dimension,
{
    tensor.fill(value);
}

/// Sets every element of the tensor to zero.
pub fn zeros<S, D>(tensor: &mut ArrayBase<S, D>)
where
    S: DataMut<Elem = f32>,
    D: Dimension,
{
    constant(tensor, 0.);
}

/// Sets every element of the tensor to one.
pub fn ones<S, D>(tensor: &mut ArrayBase<S, D>)
where
    S: DataMut<Elem = f32>,
    D: Dimension,
{
    constant(tensor, 1.);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array3};

    #[test]
    fn empty() {
        let mut t = Array1::<f32>::zeros(0);
        constant(&mut t, 1.);
        assert!(t.is_empty());
    }

    #[test]
    fn exact() {
        let mut t = Array3::<f32>::ones((2, 3, 4));
        constant(&mut t, -3.5);
        assert!(t.iter().all(|&w| w == -3.5));
    }

    #[test]
    fn zeros_and_ones() {
        let mut t = Array1::from(vec![0.3, -1., f32::NAN]);

        zeros(&mut t);
        assert_eq!(t, Array1::from(vec![0.; 3]));

        ones(&mut t);
        assert_eq!(t, Array1::from(vec![1.; 3]));
    }
}

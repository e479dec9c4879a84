//! Dense N-dimensional array storage.

use std::fmt;

use thiserror::Error;

/// Errors from array construction.
#[derive(Debug, Clone, Error)]
pub enum ArrayError {
    /// Shape and data length disagree.
    #[error("shape {shape:?} implies {expected} elements, got {got}")]
    ShapeMismatch {
        /// Requested shape.
        shape: Vec<usize>,
        /// Element count the shape implies.
        expected: usize,
        /// Element count actually provided.
        got: usize,
    },
}

/// A dense row-major N-dimensional array of `f64` samples.
///
/// This is deliberately minimal storage for elementwise kernels and image
/// conversion. Shape is immutable after construction; element data can be
/// mutated in place, which is how backends that transform arrays without
/// reallocating write their output.
///
/// # Example
///
/// ```
/// use lattice_core::NdArray;
///
/// let a = NdArray::new(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let doubled = a.map(|x| x * 2.0);
/// assert_eq!(doubled.data(), &[2.0, 4.0, 6.0, 8.0]);
/// assert_eq!(doubled.shape(), a.shape());
/// ```
#[derive(Clone, PartialEq)]
pub struct NdArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl NdArray {
    /// Creates an array from a shape and row-major data.
    ///
    /// Fails if the data length does not match the element count the shape
    /// implies.
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> Result<Self, ArrayError> {
        let expected = shape.iter().product::<usize>();
        if data.len() != expected {
            return Err(ArrayError::ShapeMismatch {
                shape,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates a zero-filled array of the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let len = shape.iter().product();
        Self {
            shape,
            data: vec![0.0; len],
        }
    }

    /// Creates a 1-D array from raw data.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// The array shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major element data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major element data.
    ///
    /// The shape is fixed, so in-place writes cannot break the shape/data
    /// invariant.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Applies `f` to every element, producing a same-shape array.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            shape: self.shape.clone(),
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }
}

impl fmt::Debug for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NdArray")
            .field("shape", &self.shape)
            .field("len", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        let err = NdArray::new(vec![2, 2], vec![1.0, 2.0, 3.0]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("4"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_zeros() {
        let a = NdArray::zeros(vec![2, 3]);
        assert_eq!(a.len(), 6);
        assert!(a.data().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_from_vec_is_one_dimensional() {
        let a = NdArray::from_vec(vec![1.0, 2.0]);
        assert_eq!(a.shape(), &[2]);
    }

    #[test]
    fn test_map_preserves_shape() {
        let a = NdArray::new(vec![3, 1], vec![1.0, 2.0, 3.0]).unwrap();
        let b = a.map(|x| -x);
        assert_eq!(b.shape(), &[3, 1]);
        assert_eq!(b.data(), &[-1.0, -2.0, -3.0]);
    }

    #[test]
    fn test_data_mut_in_place() {
        let mut a = NdArray::from_vec(vec![1.0, 4.0]);
        for x in a.data_mut() {
            *x = x.sqrt();
        }
        assert_eq!(a.data(), &[1.0, 2.0]);
    }
}

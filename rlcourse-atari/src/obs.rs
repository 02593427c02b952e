//! Frame observations.
use anyhow::Result;
use ndarray::{ArrayD, IxDyn, Zip};
use rlcourse_core::Obs;
use std::fmt::Debug;

/// Element-wise maximum of two observations of the same shape.
///
/// Used for max-pooling over consecutive frames, which removes the flickering
/// of sprites drawn only on every other frame.
pub trait MaxPool {
    /// Returns the element-wise maximum of `self` and `other`.
    fn max_pool(&self, other: &Self) -> Self;
}

/// An image frame, or any other fixed-shape array.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<T>(ArrayD<T>);

impl<T> Frame<T> {
    /// Creates a frame of the given shape from a flat buffer in row-major order.
    pub fn from_shape_vec(shape: &[usize], buf: Vec<T>) -> Result<Self> {
        Ok(Self(ArrayD::from_shape_vec(IxDyn(shape), buf)?))
    }

    /// Returns the underlying array.
    pub fn array(&self) -> &ArrayD<T> {
        &self.0
    }

    pub fn into_array(self) -> ArrayD<T> {
        self.0
    }

    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }
}

impl<T> From<ArrayD<T>> for Frame<T> {
    fn from(array: ArrayD<T>) -> Self {
        Self(array)
    }
}

impl<T: Clone + Debug> Obs for Frame<T> {}

impl<T: Copy + PartialOrd> MaxPool for Frame<T> {
    /// # Panics
    ///
    /// Panics if the shapes of the two frames differ.
    fn max_pool(&self, other: &Self) -> Self {
        Self(
            Zip::from(&self.0)
                .and(&other.0)
                .map_collect(|&a, &b| if b > a { b } else { a }),
        )
    }
}

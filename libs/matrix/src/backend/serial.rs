//! Serial host backend.

use super::{check_lengths, ElementwiseAddBackend};
use crate::{element::Element, errors::BackendError};

/// Adds on the calling thread, one element after the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SerialBackend;

impl ElementwiseAddBackend for SerialBackend {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn elementwise_add<T: Element>(&self, lhs: &[T], rhs: &[T], out: &mut [T], count: usize) -> Result<(), BackendError> {
        check_lengths(lhs, rhs, out, count)?;
        add_slices(lhs, rhs, out);
        Ok(())
    }
}

/// Elementwise sum of equally sized slices.
pub(crate) fn add_slices<T: Element>(lhs: &[T], rhs: &[T], out: &mut [T]) {
    for (dst, (left, right)) in out.iter_mut().zip(lhs.iter().zip(rhs)) {
        *dst = left.sum(*right);
    }
}

//! Helpers shared by the integration tests.

use matrix_lib::{Element, Matrix};
use once_cell::sync::Lazy;

static LOGGER_INIT: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
});

/// Installs the test subscriber once per test binary.
pub fn init_logger() {
    Lazy::force(&LOGGER_INIT);
}

/// Lossless widening used to compare entries of any element kind.
pub trait AsF64: Element {
    fn as_f64(self) -> f64;
}

impl AsF64 for i32 {
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl AsF64 for f32 {
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl AsF64 for f64 {
    fn as_f64(self) -> f64 {
        self
    }
}

/// Asserts same shape and entries equal within `tolerance`.
pub fn assert_close<T: AsF64>(left: &Matrix<T>, right: &Matrix<T>, tolerance: f64) {
    assert_eq!(left.shape(), right.shape(), "shapes differ");
    for (k, (l, r)) in left.data().iter().zip(right.data()).enumerate() {
        let diff = (l.as_f64() - r.as_f64()).abs();
        assert!(diff <= tolerance, "entry {k} differs: {l} vs {r}");
    }
}

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Bit pattern of the runtime tolerance as an `f64`; `0` means "not set".
/// Unlike a set-once cell, [`set_tolerance`] may be called any number of
/// times and every later comparison sees the new value.
static TOLERANCE_BITS: AtomicU64 = AtomicU64::new(0);

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Tolerance the crate starts with: `MATHNETICS_TOLERANCE` at build time if it
/// parses as the active `Real`, otherwise the precision dependent default.
fn initial_tolerance() -> Real {
    if let Some(environment_variable) = option_env!("MATHNETICS_TOLERANCE") {
        if let Ok(value) = Real::from_str(environment_variable) {
            return value.max(Real::EPSILON);
        }
    }
    default_tolerance()
}

/// Returns the current process-wide tolerance.
///
/// Every equality, zero and singularity test in the crate goes through this
/// value (via [`Tolerance::current`]) unless an explicit [`Tolerance`] is passed.
pub fn tolerance() -> Real {
    match TOLERANCE_BITS.load(Ordering::Relaxed) {
        0 => initial_tolerance(),
        bits => f64::from_bits(bits) as Real,
    }
}

/// Replaces the process-wide tolerance. Values below `Real::EPSILON` are clamped.
pub fn set_tolerance(value: Real) {
    let value = value.max(Real::EPSILON) as f64;
    tracing::debug!(tolerance = value, "process-wide tolerance changed");
    TOLERANCE_BITS.store(value.to_bits(), Ordering::Relaxed);
}

/// Restores the build-time (or default) tolerance.
pub fn reset_tolerance() {
    TOLERANCE_BITS.store(0, Ordering::Relaxed);
}

/// A numeric-tolerance context.
///
/// The plain kernel operations read [`Tolerance::current`]; the `*_with`
/// variants take one of these explicitly so a caller can run a computation
/// under its own epsilon without touching the global.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(Real);

impl Tolerance {
    /// Snapshot of the process-wide tolerance.
    pub fn current() -> Self {
        Tolerance(tolerance())
    }

    pub fn new(epsilon: Real) -> Self {
        Tolerance(epsilon.max(Real::EPSILON))
    }

    #[inline]
    pub const fn value(self) -> Real {
        self.0
    }

    /// `|x| <= epsilon`
    #[inline]
    pub fn is_zero(self, x: Real) -> bool {
        x.abs() <= self.0
    }

    #[inline]
    pub fn approx_eq(self, a: Real, b: Real) -> bool {
        (a - b).abs() <= self.0
    }

    /// Returns `target` if `x` is within epsilon of it, `x` otherwise.
    #[inline]
    pub fn snap(self, x: Real, target: Real) -> Real {
        if self.approx_eq(x, target) { target } else { x }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::current()
    }
}

// Pi
/// Archimedes' constant (π)
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Archimedes' constant (π)
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
#[cfg(feature = "f32")]
pub const FRAC_PI_2: Real = core::f32::consts::FRAC_PI_2;
/// π/2
#[cfg(feature = "f64")]
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// The full circle constant (τ)
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

/// The golden ratio, `(1 + √5) / 2`; also the limit of the ratio of successive
/// Fibonacci numbers.
pub const PHI: Real = 1.618_033_988_749_895;

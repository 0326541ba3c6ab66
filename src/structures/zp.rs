use core::fmt;

use crate::error::{Error, Result};
use crate::structures::poly::Poly;
use crate::utils::{is_prime, mod_inverse};

/// The prime field Z/pZ, acting as the context every polynomial belongs to.
///
/// Scalars are plain `u64` representatives in `[0, p)`. A `PrimeField` is
/// constructed once per characteristic; polynomials borrow it, so switching
/// to another characteristic means building a new `PrimeField`, and values
/// tied to the old one cannot outlive it.
///
/// # Example
///
/// ```
/// use gfcalc::PrimeField;
///
/// let f7 = PrimeField::new(7).unwrap();
/// assert_eq!(f7.mul(3, 5), 1);
/// assert_eq!(f7.inverse(3), Some(5));
/// assert!(PrimeField::new(8).is_err());
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Validate `p` and build the context.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` unless `p` is a prime (in particular `p > 1`).
    pub fn new(p: u64) -> Result<Self> {
        if p > u32::MAX as u64 {
            // products of two residues must fit in u64 for Horner and convolution
            return Err(Error::invalid(format!(
                "characteristic {} exceeds the supported range",
                p
            )));
        }
        if !is_prime(p) {
            return Err(Error::invalid(format!("characteristic {} is not prime", p)));
        }
        log::debug!("prime field F_{} ready", p);
        Ok(Self { p })
    }

    /// The characteristic `p`.
    pub const fn characteristic(&self) -> u64 {
        self.p
    }

    /// Canonical representative of a signed integer.
    #[inline]
    pub fn reduce(&self, value: i64) -> u64 {
        value.rem_euclid(self.p as i64) as u64
    }

    #[inline]
    pub fn add(&self, a: u64, b: u64) -> u64 {
        let s = a + b;
        if s >= self.p {
            s - self.p
        } else {
            s
        }
    }

    #[inline]
    pub fn sub(&self, a: u64, b: u64) -> u64 {
        if a >= b {
            a - b
        } else {
            a + self.p - b
        }
    }

    #[inline]
    pub fn neg(&self, a: u64) -> u64 {
        if a == 0 {
            0
        } else {
            self.p - a
        }
    }

    #[inline]
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        (a * b) % self.p
    }

    /// Compute `a^exp` using square-and-multiply.
    pub fn pow(&self, a: u64, exp: u64) -> u64 {
        let mut base = a % self.p;
        let mut result = 1 % self.p;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = self.mul(result, base);
            }
            base = self.mul(base, base);
            e >>= 1;
        }
        result
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn inverse(&self, a: u64) -> Option<u64> {
        mod_inverse(a % self.p, self.p)
    }

    /// Iterate over every element `0, 1, ..., p - 1`.
    pub fn elements(&self) -> impl Iterator<Item = u64> {
        0..self.p
    }

    /// Build a polynomial from coefficients in ascending order of degree.
    ///
    /// Shorthand for [`Poly::new`].
    pub fn poly(&self, coeffs: &[i64]) -> Poly<'_> {
        Poly::new(self, coeffs)
    }

    /// The constant polynomial `c`.
    pub fn constant(&self, c: i64) -> Poly<'_> {
        Poly::constant(self, c)
    }

    /// The polynomial `x`.
    pub fn x(&self) -> Poly<'_> {
        Poly::x(self)
    }
}

impl fmt::Debug for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F_{}", self.p)
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

//! Polynomials over Z/pZ, Rabin irreducibility and primitivity tests, and
//! GF(p^n) arithmetic through discrete-log tables.
//!
//! A [`PrimeField`] is the context every polynomial borrows; a
//! [`GaloisField`] built from a primitive quotient is the context every
//! [`FieldElement`] borrows.
//!
//! ```
//! use gfcalc::{is_irreducible, GaloisField, PrimeField};
//!
//! let f2 = PrimeField::new(2).unwrap();
//! let q = f2.poly(&[1, 1, 0, 1]); // x^3 + x + 1
//! assert!(is_irreducible(&q).unwrap().verdict);
//!
//! let gf8 = GaloisField::install(&q).unwrap();
//! let a = gf8.generator();
//! assert_eq!(a.pow(7).unwrap(), gf8.one());
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod structures;
pub mod utils;

pub use cancel::CancellationToken;
pub use config::FieldConfig;
pub use error::{Error, Result};

pub use structures::euclid::{ext_euclid_algo, gcd, Bezout};
pub use structures::factors::{linear_factors, FactorList};
pub use structures::gf;
pub use structures::gf::{FieldElement, FieldSlot, GaloisField};
pub use structures::irreducible::{is_irreducible, xqpower, IrreducibilityReport, Reason};
#[cfg(feature = "rand")]
pub use structures::primitive::{random_irreducible, random_primitive};
pub use structures::primitive::{find_primitive, group_order, is_primitive};
#[cfg(feature = "serde")]
pub use structures::poly::PolyData;
pub use structures::poly::Poly;
pub use structures::value::Value;
pub use structures::zp::PrimeField;
pub use utils::{is_prime, prime_divisors};

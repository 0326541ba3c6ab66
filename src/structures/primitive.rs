//! Primitive polynomials: irreducible polynomials whose root generates the
//! whole multiplicative group of GF(p^n).

use crate::structures::irreducible::is_irreducible;
use crate::structures::poly::Poly;
use crate::structures::zp::PrimeField;
use crate::utils::{checked_pow, is_prime, prime_divisors};

#[cfg(feature = "rand")]
use crate::error::{Error, Result};

/// `p^n - 1`, or `None` if it does not fit in a `u64`.
pub fn group_order(p: u64, n: usize) -> Option<u64> {
    checked_pow(p, n).map(|q| q - 1)
}

/// Check if a polynomial is primitive.
///
/// A polynomial f of degree n >= 2 over F_p is primitive if it is
/// irreducible and `x` has multiplicative order exactly `p^n - 1` modulo f.
/// The order is checked by ruling out `x^((p^n - 1)/q) = 1` for each prime
/// `q | p^n - 1`; when `p^n - 1` is itself prime there is nothing to rule out.
///
/// Constants and linear polynomials are never primitive. If `p^n - 1`
/// overflows `u64` the answer is `false`.
///
/// Factoring `p^n - 1` uses Pollard's rho, so the test stays fast for
/// every order that fits in a `u64`; the dominant cost is then the
/// `O(n)` modular exponentiations of degree-`n` polynomials.
///
/// # Example
///
/// ```
/// use gfcalc::{is_primitive, PrimeField};
///
/// let f2 = PrimeField::new(2).unwrap();
///
/// // x^4 + x + 1 is primitive
/// assert!(is_primitive(&f2.poly(&[1, 1, 0, 0, 1])));
///
/// // x^4 + x^3 + x^2 + x + 1 is irreducible but x has order 5
/// assert!(!is_primitive(&f2.poly(&[1, 1, 1, 1, 1])));
/// ```
pub fn is_primitive(poly: &Poly<'_>) -> bool {
    let n = match poly.deg() {
        Some(d) if d >= 2 => d,
        _ => return false,
    };

    let p = poly.characteristic();
    let order = match group_order(p, n) {
        Some(o) => o,
        None => {
            log::warn!("{}^{} - 1 overflows u64; treating {} as not primitive", p, n, poly);
            return false;
        }
    };

    match is_irreducible(poly) {
        Ok(report) if report.verdict => {}
        _ => return false,
    }

    if is_prime(order) {
        return true;
    }

    let f = poly.monic();
    let x = poly.field().x();
    for q in prime_divisors(order) {
        match x.powmod(order / q, &f) {
            Ok(r) if !r.is_one() => {}
            _ => return false,
        }
    }
    true
}

/// Find the smallest monic primitive polynomial of the given degree.
///
/// Candidates are visited in the crate's polynomial order (coefficients
/// from the highest power down), so the result is deterministic. Returns
/// `None` for degrees below 2 or when the group order overflows.
///
/// # Example
///
/// ```
/// use gfcalc::{find_primitive, PrimeField};
///
/// let f2 = PrimeField::new(2).unwrap();
/// let f = find_primitive(&f2, 3).unwrap();
/// assert_eq!(f.to_string(), "x^3 + x + 1");
/// ```
pub fn find_primitive(field: &PrimeField, degree: usize) -> Option<Poly<'_>> {
    if degree < 2 || group_order(field.characteristic(), degree).is_none() {
        return None;
    }

    let p = field.characteristic();
    let mut lower = vec![0u64; degree];
    loop {
        let mut coeffs = lower.clone();
        coeffs.push(1);
        let candidate = Poly::from_residues(field, coeffs);
        if is_primitive(&candidate) {
            log::debug!("first primitive of degree {} over {}: {}", degree, field, candidate);
            return Some(candidate);
        }

        // odometer over the lower coefficients, constant term fastest
        let mut i = 0;
        loop {
            if i == degree {
                return None;
            }
            lower[i] += 1;
            if lower[i] < p {
                break;
            }
            lower[i] = 0;
            i += 1;
        }
    }
}

#[cfg(feature = "rand")]
fn random_monic<'p, R: rand::Rng>(rng: &mut R, field: &'p PrimeField, degree: usize) -> Poly<'p> {
    let p = field.characteristic();
    let mut coeffs: Vec<u64> = (0..degree).map(|_| rng.gen_range(0..p)).collect();
    coeffs.push(1);
    Poly::from_residues(field, coeffs)
}

/// Generate a random monic irreducible polynomial of the given degree.
///
/// Uses rejection sampling: about one in `degree` monic polynomials is
/// irreducible.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `degree` is 0.
#[cfg(feature = "rand")]
pub fn random_irreducible<'p, R: rand::Rng>(
    rng: &mut R,
    field: &'p PrimeField,
    degree: usize,
) -> Result<Poly<'p>> {
    if degree == 0 {
        return Err(Error::invalid("degree must be positive"));
    }
    loop {
        let f = random_monic(rng, field, degree);
        if is_irreducible(&f)?.verdict {
            return Ok(f);
        }
    }
}

/// Generate a random monic primitive polynomial of the given degree.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `degree < 2` or `p^degree - 1`
/// does not fit in a `u64`.
#[cfg(feature = "rand")]
pub fn random_primitive<'p, R: rand::Rng>(
    rng: &mut R,
    field: &'p PrimeField,
    degree: usize,
) -> Result<Poly<'p>> {
    if degree < 2 {
        return Err(Error::invalid(format!(
            "primitive polynomials have degree at least 2, got {}",
            degree
        )));
    }
    if group_order(field.characteristic(), degree).is_none() {
        return Err(Error::invalid(format!(
            "{}^{} - 1 does not fit in 64 bits",
            field.characteristic(),
            degree
        )));
    }
    loop {
        let f = random_monic(rng, field, degree);
        if is_primitive(&f) {
            return Ok(f);
        }
    }
}

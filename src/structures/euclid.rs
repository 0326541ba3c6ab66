//! Extended Euclidean algorithm on polynomials over Z/pZ.

use crate::error::{Error, Result};
use crate::structures::poly::Poly;

/// Greatest common divisor together with its Bézout coefficients:
/// `gcd == u * a + v * b`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bezout<'p> {
    pub gcd: Poly<'p>,
    pub u: Poly<'p>,
    pub v: Poly<'p>,
}

impl<'p> Bezout<'p> {
    /// Check `gcd == u * a + v * b`.
    pub fn holds_for(&self, a: &Poly<'p>, b: &Poly<'p>) -> bool {
        self.gcd == &(&self.u * a) + &(&self.v * b)
    }
}

/// Extended Euclidean algorithm.
///
/// Edge cases are resolved before the recurrence starts:
///
/// * `a == 0` gives `(b, 0, 1)` and `b == 0` gives `(a, 1, 0)`, so the gcd
///   is returned as-is rather than monic;
/// * a nonzero constant `a` gives `(1, a^-1, 0)`, a nonzero constant `b`
///   gives `(1, 0, b^-1)`.
///
/// Otherwise the remainder sequence runs until the first zero remainder,
/// and the last nonzero remainder and its coefficients are scaled so that
/// the gcd is monic.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if `a` and `b` live over different
/// characteristics.
///
/// # Example
///
/// ```
/// use gfcalc::{ext_euclid_algo, PrimeField};
///
/// let f7 = PrimeField::new(7).unwrap();
/// let a = f7.poly(&[-1, 0, 1]); // x^2 - 1
/// let b = f7.poly(&[1, 1]);     // x + 1
///
/// let bz = ext_euclid_algo(&a, &b).unwrap();
/// assert_eq!(bz.gcd, b);
/// assert!(bz.holds_for(&a, &b));
/// ```
pub fn ext_euclid_algo<'p>(a: &Poly<'p>, b: &Poly<'p>) -> Result<Bezout<'p>> {
    a.check_same_field(b)?;
    let field = a.field();

    if a.is_zero() {
        return Ok(Bezout {
            gcd: b.clone(),
            u: Poly::zero(field),
            v: Poly::one(field),
        });
    }
    if b.is_zero() {
        return Ok(Bezout {
            gcd: a.clone(),
            u: Poly::one(field),
            v: Poly::zero(field),
        });
    }
    if a.degree() == 0 {
        let inv = leading_inverse(a)?;
        return Ok(Bezout {
            gcd: Poly::one(field),
            u: Poly::constant(field, inv as i64),
            v: Poly::zero(field),
        });
    }
    if b.degree() == 0 {
        let inv = leading_inverse(b)?;
        return Ok(Bezout {
            gcd: Poly::one(field),
            u: Poly::zero(field),
            v: Poly::constant(field, inv as i64),
        });
    }

    let (mut r0, mut r1) = (a.clone(), b.clone());
    let (mut s0, mut s1) = (Poly::one(field), Poly::zero(field));
    let (mut t0, mut t1) = (Poly::zero(field), Poly::one(field));

    // each step strictly lowers deg(r1), so this ends within min(deg a, deg b) + 1 rounds
    while !r1.is_zero() {
        let (q, r) = r0.eucdiv(&r1)?;
        let s = &s0 - &(&q * &s1);
        let t = &t0 - &(&q * &t1);
        r0 = core::mem::replace(&mut r1, r);
        s0 = core::mem::replace(&mut s1, s);
        t0 = core::mem::replace(&mut t1, t);
    }

    let lc_inv = leading_inverse(&r0)?;
    let scale = lc_inv as i64;
    Ok(Bezout {
        gcd: r0.scale(scale),
        u: s0.scale(scale),
        v: t0.scale(scale),
    })
}

/// Monic greatest common divisor; zero only when both inputs are zero.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` if the inputs live over different
/// characteristics.
pub fn gcd<'p>(a: &Poly<'p>, b: &Poly<'p>) -> Result<Poly<'p>> {
    Ok(ext_euclid_algo(a, b)?.gcd.monic())
}

fn leading_inverse(c: &Poly<'_>) -> Result<u64> {
    c.field()
        .inverse(c.leading_coeff())
        .ok_or(Error::DivisionByZero("inverse of a zero leading coefficient"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::zp::PrimeField;

    #[test]
    fn zero_operands() {
        let f = PrimeField::new(5).unwrap();
        let b = f.poly(&[2, 1]);

        let bz = ext_euclid_algo(&Poly::zero(&f), &b).unwrap();
        assert_eq!(bz.gcd, b);
        assert!(bz.u.is_zero());
        assert!(bz.v.is_one());

        let bz = ext_euclid_algo(&b, &Poly::zero(&f)).unwrap();
        assert_eq!(bz.gcd, b);
        assert!(bz.u.is_one());
        assert!(bz.v.is_zero());

        let bz = ext_euclid_algo(&Poly::zero(&f), &Poly::zero(&f)).unwrap();
        assert!(bz.gcd.is_zero());
    }

    #[test]
    fn constant_operands() {
        let f = PrimeField::new(5).unwrap();
        let c = f.constant(3);
        let b = f.poly(&[1, 0, 1]);

        let bz = ext_euclid_algo(&c, &b).unwrap();
        assert!(bz.gcd.is_one());
        assert_eq!(bz.u, f.constant(2)); // 3 * 2 = 6 = 1
        assert!(bz.v.is_zero());
        assert!(bz.holds_for(&c, &b));

        let bz = ext_euclid_algo(&b, &c).unwrap();
        assert!(bz.gcd.is_one());
        assert!(bz.u.is_zero());
        assert_eq!(bz.v, f.constant(2));
        assert!(bz.holds_for(&b, &c));
    }

    #[test]
    fn common_factor_is_monic() {
        let f = PrimeField::new(7).unwrap();
        // a = 3(x + 1)(x + 2), b = 5(x + 1)(x + 4)
        let a = Poly::from_roots(&f, &[-1, -2]).scale(3);
        let b = Poly::from_roots(&f, &[-1, -4]).scale(5);

        let bz = ext_euclid_algo(&a, &b).unwrap();
        assert_eq!(bz.gcd, f.poly(&[1, 1]));
        assert!(bz.gcd.is_monic());
        assert!(bz.holds_for(&a, &b));
    }

    #[test]
    fn coprime_inputs() {
        let f = PrimeField::new(2).unwrap();
        let a = f.poly(&[1, 1, 0, 1]); // x^3 + x + 1
        let b = f.poly(&[1, 1, 1]); // x^2 + x + 1
        let bz = ext_euclid_algo(&a, &b).unwrap();
        assert!(bz.gcd.is_one());
        assert!(bz.holds_for(&a, &b));
    }

    #[test]
    fn divisor_case() {
        let f = PrimeField::new(11).unwrap();
        let b = f.poly(&[3, 0, 2]);
        let a = &b * &f.poly(&[5, 7, 1]);
        let bz = ext_euclid_algo(&a, &b).unwrap();
        assert_eq!(bz.gcd, b.monic());
        assert!(bz.holds_for(&a, &b));
    }

    #[test]
    fn gcd_is_monic_and_symmetric() {
        let f = PrimeField::new(13).unwrap();
        let a = Poly::from_roots(&f, &[1, 2, 3]).scale(4);
        let b = Poly::from_roots(&f, &[2, 3, 9]).scale(7);
        let g = gcd(&a, &b).unwrap();
        assert_eq!(g, Poly::from_roots(&f, &[2, 3]));
        assert_eq!(gcd(&b, &a).unwrap(), g);
        // zero operand: the other one, made monic
        assert_eq!(gcd(&a, &Poly::zero(&f)).unwrap(), a.monic());
    }

    #[test]
    fn mixed_fields_rejected() {
        let f5 = PrimeField::new(5).unwrap();
        let f7 = PrimeField::new(7).unwrap();
        assert!(matches!(
            ext_euclid_algo(&f5.poly(&[1, 1]), &f7.poly(&[1, 1])),
            Err(Error::InvalidArgument(_))
        ));
    }
}

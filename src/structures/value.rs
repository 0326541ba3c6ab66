//! A polynomial or a field element, for callers that keep both side by side.

use core::fmt;

use crate::error::{Error, Result};
use crate::structures::gf::FieldElement;
use crate::structures::poly::Poly;

/// Either kind of value the engine computes with.
///
/// Arithmetic on two `Value`s matches both variants explicitly: two
/// polynomials combine as polynomials, two elements as field elements, and
/// anything else is rejected.
///
/// # Example
///
/// ```
/// use gfcalc::{GaloisField, PrimeField, Value};
///
/// let f2 = PrimeField::new(2).unwrap();
/// let gf8 = GaloisField::install(&f2.poly(&[1, 1, 0, 1])).unwrap();
///
/// let p = Value::from(f2.poly(&[1, 1]));
/// let e = Value::from(gf8.generator());
/// assert!(p.add(&p).is_ok());
/// assert!(p.add(&e).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value<'f> {
    Poly(Poly<'f>),
    Element(FieldElement<'f>),
}

impl<'f> Value<'f> {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Poly(_) => "polynomial",
            Value::Element(_) => "field element",
        }
    }

    pub fn add(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Value::Poly(a), Value::Poly(b)) => {
                a.check_same_field(b)?;
                Ok(Value::Poly(a + b))
            }
            (Value::Element(a), Value::Element(b)) => {
                same_field(a, b)?;
                Ok(Value::Element(a + b))
            }
            _ => Err(mixed("add", self, rhs)),
        }
    }

    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Value::Poly(a), Value::Poly(b)) => {
                a.check_same_field(b)?;
                Ok(Value::Poly(a - b))
            }
            (Value::Element(a), Value::Element(b)) => {
                same_field(a, b)?;
                Ok(Value::Element(a - b))
            }
            _ => Err(mixed("subtract", self, rhs)),
        }
    }

    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        match (self, rhs) {
            (Value::Poly(a), Value::Poly(b)) => {
                a.check_same_field(b)?;
                Ok(Value::Poly(a * b))
            }
            (Value::Element(a), Value::Element(b)) => {
                same_field(a, b)?;
                Ok(Value::Element(a * b))
            }
            _ => Err(mixed("multiply", self, rhs)),
        }
    }
}

fn same_field(a: &FieldElement<'_>, b: &FieldElement<'_>) -> Result<()> {
    if a.same_field(b) {
        Ok(())
    } else {
        Err(Error::invalid("field elements belong to different fields"))
    }
}

fn mixed(op: &str, a: &Value<'_>, b: &Value<'_>) -> Error {
    Error::invalid(format!("cannot {} a {} and a {}", op, a.kind(), b.kind()))
}

impl<'f> From<Poly<'f>> for Value<'f> {
    fn from(p: Poly<'f>) -> Self {
        Value::Poly(p)
    }
}

impl<'f> From<FieldElement<'f>> for Value<'f> {
    fn from(e: FieldElement<'f>) -> Self {
        Value::Element(e)
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Poly(p) => write!(f, "{}", p),
            Value::Element(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::gf::GaloisField;
    use crate::structures::zp::PrimeField;

    #[test]
    fn same_kinds_combine() {
        let f2 = PrimeField::new(2).unwrap();
        let gf = GaloisField::install(&f2.poly(&[1, 1, 1])).unwrap();

        let a = Value::from(f2.poly(&[1, 1]));
        let b = Value::from(f2.poly(&[0, 1]));
        assert_eq!(a.add(&b).unwrap(), Value::Poly(f2.poly(&[1])));
        assert_eq!(a.mul(&b).unwrap(), Value::Poly(f2.poly(&[0, 1, 1])));

        let g = Value::from(gf.generator());
        assert_eq!(g.mul(&g).unwrap(), Value::Element(gf.generator().pow(2).unwrap()));
        assert!(g.sub(&g).unwrap().to_string() == "0");
    }

    #[test]
    fn mixing_is_rejected() {
        let f2 = PrimeField::new(2).unwrap();
        let gf = GaloisField::install(&f2.poly(&[1, 1, 1])).unwrap();
        let p = Value::from(f2.x());
        let e = Value::from(gf.generator());

        let err = p.mul(&e).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: cannot multiply a polynomial and a field element"
        );
        assert!(e.sub(&p).is_err());
    }

    #[test]
    fn different_characteristics_are_rejected() {
        let f2 = PrimeField::new(2).unwrap();
        let f3 = PrimeField::new(3).unwrap();
        let a = Value::from(f2.x());
        let b = Value::from(f3.x());
        assert!(a.add(&b).is_err());
    }
}

//! Factor lists: distinct monic factors with multiplicities and a scalar.

use std::collections::BTreeMap;

use core::fmt;

use crate::error::{Error, Result};
use crate::structures::poly::Poly;
use crate::structures::zp::PrimeField;

/// A product `c * f1^m1 * f2^m2 * ...` of distinct monic non-constant
/// factors `fi` with positive multiplicities and a leading scalar `c` in
/// `[1, p)`.
///
/// Factors are kept in the polynomial order (degree, then coefficients
/// from the highest power down), so iteration and display are deterministic.
///
/// # Example
///
/// ```
/// use gfcalc::{FactorList, PrimeField};
///
/// let f5 = PrimeField::new(5).unwrap();
/// let mut fl = FactorList::new(&f5);
/// fl.insert(f5.poly(&[1, 1]), 1).unwrap();
/// fl.insert(f5.poly(&[2, 2]), 2).unwrap(); // 2(x + 1), merges
///
/// assert_eq!(fl.len(), 1);
/// assert_eq!(fl.multiplicity(&f5.poly(&[1, 1])), 3);
/// assert_eq!(fl.leading(), 4);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FactorList<'p> {
    field: &'p PrimeField,
    leading: u64,
    factors: BTreeMap<Poly<'p>, u64>,
}

impl<'p> FactorList<'p> {
    /// The empty product, equal to `1`.
    pub fn new(field: &'p PrimeField) -> Self {
        Self {
            field,
            leading: 1,
            factors: BTreeMap::new(),
        }
    }

    /// Empty list with a given leading scalar.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the scalar reduces to zero.
    pub fn with_leading(field: &'p PrimeField, leading: i64) -> Result<Self> {
        let leading = field.reduce(leading);
        if leading == 0 {
            return Err(Error::invalid("leading scalar of a factor list must be nonzero"));
        }
        Ok(Self {
            field,
            leading,
            factors: BTreeMap::new(),
        })
    }

    pub fn field(&self) -> &'p PrimeField {
        self.field
    }

    /// The leading scalar in `[1, p)`.
    pub fn leading(&self) -> u64 {
        self.leading
    }

    /// Number of distinct factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Multiplicity of `factor` after making it monic, `0` if absent.
    pub fn multiplicity(&self, factor: &Poly<'p>) -> u64 {
        self.factors.get(&factor.monic()).copied().unwrap_or(0)
    }

    /// Add `factor^mult` to the product.
    ///
    /// The factor is made monic and its leading coefficient (raised to
    /// `mult`) folds into the scalar. Inserting an existing factor adds to
    /// its multiplicity. `mult == 0` leaves the list unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a constant factor or one over
    /// another characteristic.
    pub fn insert(&mut self, factor: Poly<'p>, mult: u64) -> Result<()> {
        if factor.degree() < 1 {
            return Err(Error::invalid(format!(
                "factor {} is constant; fold it into the leading scalar",
                factor
            )));
        }
        if factor.characteristic() != self.field.characteristic() {
            return Err(Error::invalid(format!(
                "factor {} is not over {}",
                factor, self.field
            )));
        }
        if mult == 0 {
            return Ok(());
        }

        let lc = factor.leading_coeff();
        self.leading = self.field.mul(self.leading, self.field.pow(lc, mult));
        *self.factors.entry(factor.monic()).or_insert(0) += mult;
        Ok(())
    }

    /// The list of the n-th power: multiplicities times `n`, scalar to the n.
    pub fn pow(&self, n: u64) -> Self {
        let factors = if n == 0 {
            BTreeMap::new()
        } else {
            self.factors
                .iter()
                .map(|(f, &m)| (f.clone(), m * n))
                .collect()
        };
        Self {
            field: self.field,
            leading: self.field.pow(self.leading, n),
            factors,
        }
    }

    /// Multiply everything back together.
    pub fn product(&self) -> Poly<'p> {
        let mut total = Poly::constant(self.field, self.leading as i64);
        for (f, &m) in &self.factors {
            for _ in 0..m {
                total = &total * f;
            }
        }
        total
    }

    /// Iterate over `(factor, multiplicity)` in polynomial order.
    pub fn iter(&self) -> impl Iterator<Item = (&Poly<'p>, u64)> + '_ {
        self.factors.iter().map(|(f, &m)| (f, m))
    }
}

impl fmt::Debug for FactorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.leading)?;
        for (factor, m) in self.iter() {
            if m == 1 {
                write!(f, " * ({})", factor)?;
            } else {
                write!(f, " * ({})^{}", factor, m)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for FactorList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Split off every linear factor `x - r` for roots `r` in `[0, p)`.
///
/// Returns the linear factors with their multiplicities, and the cofactor
/// (monic, no roots left) such that `poly == factors.product() * cofactor`.
/// The cofactor is not factored further.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` for the zero polynomial.
///
/// # Example
///
/// ```
/// use gfcalc::{linear_factors, PrimeField};
///
/// let f7 = PrimeField::new(7).unwrap();
/// // 3 (x - 2)^2 (x^2 + 1)
/// let p = f7.poly(&[4, -4, 1]) * f7.poly(&[1, 0, 1]) * f7.constant(3);
///
/// let (fl, rest) = linear_factors(&p).unwrap();
/// assert_eq!(fl.multiplicity(&f7.poly(&[-2, 1])), 2);
/// assert_eq!(rest, f7.poly(&[1, 0, 1]));
/// assert_eq!(fl.product() * rest, p);
/// ```
pub fn linear_factors<'p>(poly: &Poly<'p>) -> Result<(FactorList<'p>, Poly<'p>)> {
    if poly.is_zero() {
        return Err(Error::invalid("the zero polynomial has no factorization"));
    }

    let field = poly.field();
    let mut list = FactorList::with_leading(field, poly.leading_coeff() as i64)?;
    let mut rest = poly.monic();

    for r in field.elements() {
        if rest.degree() < 1 {
            break;
        }
        let linear = Poly::new(field, &[-(r as i64), 1]);
        let mut mult = 0;
        while rest.degree() >= 1 && rest.evaluate(r as i64) == 0 {
            let (q, _) = rest.eucdiv(&linear)?;
            rest = q;
            mult += 1;
        }
        list.insert(linear, mult)?;
    }

    log::trace!("{} splits as {} times {}", poly, list, rest);
    Ok((list, rest))
}

//! Irreducibility over Z/pZ: cheap structural checks first, then Rabin's test.
//!
//! Checks run in a fixed order and the first one that decides wins:
//!
//! 1. constants are never irreducible;
//! 2. linear polynomials always are;
//! 3. a root in `[0, p)` means a linear factor;
//! 4. a quadratic or cubic without roots is irreducible;
//! 5. `gcd(f, f')` of positive degree means a repeated factor;
//! 6. Rabin: `f` of degree `n` is irreducible iff `gcd(f, x^(p^(n/q)) - x) = 1`
//!    for every prime `q | n` and `f | x^(p^n) - x`.

use core::fmt;

use crate::error::Result;
use crate::structures::euclid::gcd;
use crate::structures::poly::Poly;
use crate::utils::prime_divisors;

/// Why a polynomial was classified the way it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reason<'p> {
    /// Degree 0, or the zero polynomial.
    Constant,
    /// Degree 1.
    Linear,
    /// Every root in `[0, p)`. When `gcd(f, f')` has positive degree the
    /// repeated factor (after taking p-th roots) is reported alongside.
    HasRoots {
        roots: Vec<u64>,
        repeated_factor: Option<Poly<'p>>,
    },
    /// Degree 2 or 3 with no roots.
    NoLinearFactors { degree: usize },
    /// `gcd(f, f')` reduced by p-th roots.
    RepeatedFactor(Poly<'p>),
    /// `gcd(f, x^(p^k) - x)` has positive degree.
    NotCoprime { k: usize, gcd: Poly<'p> },
    /// `x^(p^n) mod f != x`.
    NotDivisor { p: u64, n: usize },
    RabinPassed,
}

impl fmt::Display for Reason<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Constant => write!(f, "Constant"),
            Reason::Linear => write!(f, "Linear"),
            Reason::HasRoots {
                roots,
                repeated_factor,
            } => {
                let list = roots
                    .iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                if roots.len() == 1 {
                    write!(f, "Has root {}", list)?;
                } else {
                    write!(f, "Has roots {}", list)?;
                }
                if let Some(g) = repeated_factor {
                    write!(f, "; Repeated factor: {}", g)?;
                }
                Ok(())
            }
            Reason::NoLinearFactors { degree: 2 } => write!(f, "Quadratic with no linear factors"),
            Reason::NoLinearFactors { .. } => write!(f, "Cubic with no linear factors"),
            Reason::RepeatedFactor(g) => write!(f, "Repeated factor: {}", g),
            Reason::NotCoprime { k, gcd } => write!(
                f,
                "Rabin's test failed -- not coprime to x^({}^{}) - x, gcd = {}",
                gcd.characteristic(),
                k,
                gcd
            ),
            Reason::NotDivisor { p, n } => write!(
                f,
                "Rabin's test failed -- not a factor of x^({}^{}) - x",
                p, n
            ),
            Reason::RabinPassed => write!(f, "Rabin's test passed"),
        }
    }
}

/// Verdict of [`is_irreducible`] with the reason that decided it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IrreducibilityReport<'p> {
    pub verdict: bool,
    pub reason: Reason<'p>,
}

impl IrreducibilityReport<'_> {
    /// `"irreducible"` or `"NOT irreducible"`.
    pub fn verdict_statement(&self) -> &'static str {
        if self.verdict {
            "irreducible"
        } else {
            "NOT irreducible"
        }
    }
}

impl fmt::Display for IrreducibilityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.verdict_statement(), self.reason)
    }
}

/// Compute `x^(p^k) mod f` by `k` successive p-th powerings.
///
/// The exponent `p^k` itself is never formed, so `k` may be far beyond what
/// fits in a machine word.
///
/// # Errors
///
/// `Error::DivisionByZero` for `f == 0`, `Error::Arithmetic` for a nonzero
/// constant `f`.
///
/// # Example
///
/// ```
/// use gfcalc::{xqpower, PrimeField};
///
/// let f2 = PrimeField::new(2).unwrap();
/// let f = f2.poly(&[1, 1, 0, 1]); // x^3 + x + 1
///
/// // x^8 = x in GF(8)
/// assert_eq!(xqpower(3, &f).unwrap(), f2.x());
/// ```
pub fn xqpower<'p>(k: usize, f: &Poly<'p>) -> Result<Poly<'p>> {
    let p = f.characteristic();
    let mut result = f.field().x().modulo(f)?;
    for _ in 0..k {
        result = result.powmod(p, f)?;
    }
    Ok(result)
}

/// Classify `poly` as irreducible or not, with the reason.
///
/// The input is left untouched; Rabin's test runs on a monic copy.
///
/// # Errors
///
/// Only propagates failures of the underlying arithmetic, which cannot
/// occur for a polynomial that reaches Rabin's test.
///
/// # Example
///
/// ```
/// use gfcalc::{is_irreducible, PrimeField};
///
/// let f5 = PrimeField::new(5).unwrap();
/// let report = is_irreducible(&f5.poly(&[1, 0, 1])).unwrap(); // x^2 + 1
/// assert!(!report.verdict);
/// assert_eq!(report.to_string(), "NOT irreducible (Has roots 2, 3)");
/// ```
pub fn is_irreducible<'p>(poly: &Poly<'p>) -> Result<IrreducibilityReport<'p>> {
    let report = classify(poly)?;
    log::debug!("{} is {}", poly, report);
    Ok(report)
}

fn classify<'p>(poly: &Poly<'p>) -> Result<IrreducibilityReport<'p>> {
    let decided = |verdict, reason| Ok(IrreducibilityReport { verdict, reason });

    let degree = match poly.deg() {
        None | Some(0) => return decided(false, Reason::Constant),
        Some(1) => return decided(true, Reason::Linear),
        Some(d) => d,
    };

    let field = poly.field();
    let roots: Vec<u64> = field
        .elements()
        .filter(|&a| poly.evaluate(a as i64) == 0)
        .collect();
    if !roots.is_empty() {
        let repeated_factor = repeated_factor(poly)?;
        return decided(
            false,
            Reason::HasRoots {
                roots,
                repeated_factor,
            },
        );
    }

    if degree <= 3 {
        return decided(true, Reason::NoLinearFactors { degree });
    }

    if let Some(g) = repeated_factor(poly)? {
        return decided(false, Reason::RepeatedFactor(g));
    }

    let f = poly.monic();
    let x = field.x();
    for q in prime_divisors(degree as u64) {
        let k = degree / q as usize;
        let h = &xqpower(k, &f)? - &x;
        let g = gcd(&f, &h)?;
        if g.degree() > 0 {
            return decided(false, Reason::NotCoprime { k, gcd: g });
        }
    }

    if (&xqpower(degree, &f)? - &x).is_zero() {
        decided(true, Reason::RabinPassed)
    } else {
        decided(
            false,
            Reason::NotDivisor {
                p: field.characteristic(),
                n: degree,
            },
        )
    }
}

/// `gcd(f, f')` when it has positive degree, with p-th roots taken while
/// it remains a perfect p-th power.
fn repeated_factor<'p>(poly: &Poly<'p>) -> Result<Option<Poly<'p>>> {
    let mut g = gcd(poly, &poly.derivative(1))?;
    if g.degree() <= 0 {
        return Ok(None);
    }
    while let Some(root) = g.pth_root() {
        if root.degree() >= g.degree() {
            break;
        }
        g = root;
    }
    Ok(Some(g))
}

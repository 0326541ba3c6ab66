//! GF(p^n) through a discrete-logarithm table.
//!
//! This module provides:
//! - `GaloisField`, a primitive quotient together with its power table
//!   `x^k mod q` and the reverse index from element to exponent
//! - `FieldSlot`, the single replaceable cell holding the installed field
//! - `FieldElement`, a reduced polynomial with its cached discrete log
//!
//! Elements are packed into integers `sum c_i p^i < p^n`, so both tables
//! are dense vectors and every lookup is O(1).

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::cancel::CancellationToken;
use crate::config::FieldConfig;
use crate::error::{Error, Result};
use crate::structures::poly::{times_x_mod, Poly};
use crate::structures::primitive::{group_order, is_primitive};
use crate::structures::zp::PrimeField;
use crate::utils::gcd;

/// Reverse-index marker for the zero element.
const NO_LOG: u64 = u64::MAX;

// ============================================================================
// GaloisField
// ============================================================================

/// The field GF(p^n) = Z/pZ[x] / (q) for a primitive quotient `q` of degree n >= 2.
///
/// Holds the monic quotient, the table of the `p^n - 1` powers of `x` and
/// the reverse index. Everything is computed once by [`GaloisField::install`]
/// and never changes afterwards.
///
/// # Example
///
/// ```
/// use gfcalc::{GaloisField, PrimeField};
///
/// let f2 = PrimeField::new(2).unwrap();
/// let gf8 = GaloisField::install(&f2.poly(&[1, 1, 0, 1])).unwrap(); // x^3 + x + 1
///
/// assert_eq!(gf8.order(), 7);
/// let x = gf8.generator();
/// assert_eq!((&(&x * &x) * &x).value(), &f2.poly(&[1, 1])); // x^3 = x + 1
/// ```
pub struct GaloisField<'p> {
    quotient: Poly<'p>,
    degree: usize,
    order: u64,
    exp: Vec<u64>,
    log: Vec<u64>,
}

impl<'p> GaloisField<'p> {
    /// Build the field with the default [`FieldConfig`] and no cancellation.
    ///
    /// # Errors
    ///
    /// See [`GaloisField::install_with`].
    pub fn install(quotient: &Poly<'p>) -> Result<Self> {
        Self::install_with(quotient, &FieldConfig::default(), &CancellationToken::new())
    }

    /// Validate `quotient` and build the power table and reverse index.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidArgument` if `quotient` is not primitive of degree
    ///   at least 2, or if `p^n - 1` exceeds `config.max_table_size`.
    /// - `Error::Cancelled` if `token` is cancelled while the tables are built.
    pub fn install_with(
        quotient: &Poly<'p>,
        config: &FieldConfig,
        token: &CancellationToken,
    ) -> Result<Self> {
        let field = quotient.field();
        let p = field.characteristic();

        let degree = match quotient.deg() {
            Some(d) if d >= 2 => d,
            _ => {
                return Err(Error::invalid(format!(
                    "quotient {} must have degree at least 2",
                    quotient
                )))
            }
        };
        let order = group_order(p, degree).ok_or_else(|| {
            Error::invalid(format!("{}^{} - 1 does not fit in 64 bits", p, degree))
        })?;
        if order > config.max_table_size {
            return Err(Error::invalid(format!(
                "GF({}^{}) needs {} table entries, limit is {}",
                p, degree, order, config.max_table_size
            )));
        }
        let size = usize::try_from(order + 1).map_err(|_| {
            Error::invalid(format!("GF({}^{}) is too large to index", p, degree))
        })?;
        if !is_primitive(quotient) {
            return Err(Error::invalid(format!("{} is not primitive", quotient)));
        }

        let quotient = quotient.monic();
        log::debug!(
            "installing GF({}^{}) mod {}: {} table entries",
            p,
            degree,
            quotient,
            order
        );

        let exp = build_powers(&quotient, degree, order, config, token)?;
        let log = build_log_index(&exp, size, config, token)?;

        log::debug!("GF({}^{}) ready", p, degree);
        Ok(Self {
            quotient,
            degree,
            order,
            exp,
            log,
        })
    }

    /// The monic primitive quotient.
    pub fn quotient(&self) -> &Poly<'p> {
        &self.quotient
    }

    pub fn prime_field(&self) -> &'p PrimeField {
        self.quotient.field()
    }

    pub fn characteristic(&self) -> u64 {
        self.quotient.characteristic()
    }

    /// Extension degree `n`.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Order of the multiplicative group, `p^n - 1`; also the table length.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Number of field elements, `p^n`.
    pub fn size(&self) -> u64 {
        self.order + 1
    }

    /// `x^k mod q`, with `k` taken modulo the group order.
    pub fn table_poly(&self, k: u64) -> Poly<'p> {
        self.unpack(self.exp[(k % self.order) as usize])
    }

    /// The power table in order: `1, x, x^2, ..., x^(p^n - 2)`.
    pub fn powers(&self) -> impl Iterator<Item = Poly<'p>> + '_ {
        self.exp.iter().map(move |&v| self.unpack(v))
    }

    /// Discrete log of an already reduced polynomial.
    fn lookup(&self, reduced: &Poly<'_>) -> Option<u64> {
        let packed = pack(self.characteristic(), reduced.coefficients());
        match self.log[packed as usize] {
            NO_LOG => None,
            k => Some(k),
        }
    }

    fn unpack(&self, mut v: u64) -> Poly<'p> {
        let p = self.characteristic();
        let mut coeffs = Vec::with_capacity(self.degree);
        for _ in 0..self.degree {
            coeffs.push(v % p);
            v /= p;
        }
        Poly::from_residues(self.prime_field(), coeffs)
    }

    fn wrap<'f>(&'f self, reduced: Poly<'p>) -> FieldElement<'f> {
        let log = self.lookup(&reduced);
        FieldElement {
            field: self,
            value: reduced,
            log,
        }
    }

    fn from_log<'f>(&'f self, k: u64) -> FieldElement<'f> {
        let k = k % self.order;
        FieldElement {
            field: self,
            value: self.table_poly(k),
            log: Some(k),
        }
    }

    /// Reduce `poly` modulo the quotient and wrap it as an element.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `poly` has another characteristic.
    pub fn element<'f>(&'f self, poly: &Poly<'_>) -> Result<FieldElement<'f>> {
        if poly.characteristic() != self.characteristic() {
            return Err(Error::invalid(format!(
                "{} is over F_{}, the field has characteristic {}",
                poly,
                poly.characteristic(),
                self.characteristic()
            )));
        }
        let local = Poly::from_residues(self.prime_field(), poly.coefficients().to_vec());
        let reduced = local.modulo(&self.quotient)?;
        Ok(self.wrap(reduced))
    }

    /// Element from raw coefficients in ascending order.
    ///
    /// # Errors
    ///
    /// Only propagates reduction failures, which cannot occur for an
    /// installed quotient.
    pub fn element_from_coeffs<'f>(&'f self, coeffs: &[i64]) -> Result<FieldElement<'f>> {
        let reduced = Poly::new(self.prime_field(), coeffs).modulo(&self.quotient)?;
        Ok(self.wrap(reduced))
    }

    /// The constant `c mod p` as an element.
    pub fn element_from_int(&self, c: i64) -> FieldElement<'_> {
        self.wrap(Poly::constant(self.prime_field(), c))
    }

    pub fn zero(&self) -> FieldElement<'_> {
        self.wrap(Poly::zero(self.prime_field()))
    }

    pub fn one(&self) -> FieldElement<'_> {
        self.from_log(0)
    }

    /// The class of `x`, which generates the multiplicative group.
    pub fn generator(&self) -> FieldElement<'_> {
        self.from_log(1)
    }
}

impl fmt::Debug for GaloisField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GF({}^{}) mod {}",
            self.characteristic(),
            self.degree,
            self.quotient
        )
    }
}

impl fmt::Display for GaloisField<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Base-p packing of coefficients in ascending order.
fn pack(p: u64, coeffs: &[u64]) -> u64 {
    coeffs.iter().rev().fold(0, |acc, &c| acc * p + c)
}

/// Packed `x^k mod q` for `k` in `start..end`, seeded by `x^start mod q`.
fn power_run(
    quotient: &Poly<'_>,
    degree: usize,
    start: u64,
    end: u64,
    interval: usize,
    token: &CancellationToken,
) -> Result<Vec<u64>> {
    let field = quotient.field();
    let p = field.characteristic();
    let lower = &quotient.coefficients()[..degree];

    let seed = field.x().powmod(start, quotient)?;
    let mut residue = vec![0u64; degree];
    residue[..seed.coefficients().len()].copy_from_slice(seed.coefficients());

    let interval = interval.max(1) as u64;
    let mut out = Vec::with_capacity((end - start) as usize);
    for k in start..end {
        if (k - start) % interval == 0 && token.is_cancelled() {
            log::debug!("power table cancelled at entry {}", k);
            return Err(Error::Cancelled);
        }
        out.push(pack(p, &residue));
        times_x_mod(field, &mut residue, lower);
    }
    log::trace!("power table entries {}..{} done", start, end);
    Ok(out)
}

#[cfg(not(feature = "parallel"))]
fn build_powers(
    quotient: &Poly<'_>,
    degree: usize,
    order: u64,
    config: &FieldConfig,
    token: &CancellationToken,
) -> Result<Vec<u64>> {
    power_run(quotient, degree, 0, order, config.cancel_check_interval, token)
}

/// Split the table into chunks, each seeded independently by `powmod`.
#[cfg(feature = "parallel")]
fn build_powers(
    quotient: &Poly<'_>,
    degree: usize,
    order: u64,
    config: &FieldConfig,
    token: &CancellationToken,
) -> Result<Vec<u64>> {
    use rayon::prelude::*;

    let chunk = config.parallel_chunk.max(1);
    let starts: Vec<u64> = (0..order).step_by(chunk).collect();
    let runs = starts
        .into_par_iter()
        .map(|start| {
            let end = (start + chunk as u64).min(order);
            power_run(
                quotient,
                degree,
                start,
                end,
                config.cancel_check_interval,
                token,
            )
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(runs.concat())
}

fn build_log_index(
    exp: &[u64],
    size: usize,
    config: &FieldConfig,
    token: &CancellationToken,
) -> Result<Vec<u64>> {
    let interval = config.cancel_check_interval.max(1);
    let mut log = vec![NO_LOG; size];
    for (k, &v) in exp.iter().enumerate() {
        if k % interval == 0 && token.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let slot = &mut log[v as usize];
        // a primitive quotient never repeats an entry
        debug_assert!(*slot == NO_LOG, "power table repeats: x^{} = x^{}", k, *slot);
        *slot = k as u64;
    }
    Ok(log)
}

// ============================================================================
// FieldSlot
// ============================================================================

/// The single replaceable field definition.
///
/// Installing builds the complete new field before replacing the old one,
/// so a failed installation leaves the slot as it was. Elements borrow the
/// installed field, which means the slot cannot be reinstalled while any of
/// them is alive:
///
/// ```compile_fail
/// use gfcalc::{FieldSlot, PrimeField};
///
/// let f2 = PrimeField::new(2).unwrap();
/// let q = f2.poly(&[1, 1, 0, 1]);
/// let mut slot = FieldSlot::new();
/// slot.install(&q).unwrap();
///
/// let a = slot.field().unwrap().generator();
/// slot.install(&q).unwrap(); // `slot` is still borrowed by `a`
/// println!("{}", a);
/// ```
#[derive(Debug, Default)]
pub struct FieldSlot<'p> {
    current: Option<GaloisField<'p>>,
}

impl<'p> FieldSlot<'p> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Install a new field, replacing the previous one on success.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::{FieldSlot, PrimeField};
    ///
    /// let f2 = PrimeField::new(2).unwrap();
    /// let mut slot = FieldSlot::new();
    ///
    /// slot.install(&f2.poly(&[1, 1, 1])).unwrap();
    /// assert_eq!(slot.field().unwrap().size(), 4);
    ///
    /// // x^2 + 1 = (x + 1)^2 is rejected and GF(4) stays installed
    /// assert!(slot.install(&f2.poly(&[1, 0, 1])).is_err());
    /// assert_eq!(slot.field().unwrap().size(), 4);
    /// ```
    pub fn install(&mut self, quotient: &Poly<'p>) -> Result<&GaloisField<'p>> {
        self.install_with(quotient, &FieldConfig::default(), &CancellationToken::new())
    }

    pub fn install_with(
        &mut self,
        quotient: &Poly<'p>,
        config: &FieldConfig,
        token: &CancellationToken,
    ) -> Result<&GaloisField<'p>> {
        let field = GaloisField::install_with(quotient, config, token)?;
        let installed: &GaloisField<'p> = self.current.insert(field);
        Ok(installed)
    }

    /// The installed field.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if nothing is installed.
    pub fn field(&self) -> Result<&GaloisField<'p>> {
        self.current
            .as_ref()
            .ok_or_else(|| Error::invalid("no field is installed"))
    }

    pub fn is_installed(&self) -> bool {
        self.current.is_some()
    }

    /// Drop the installed field.
    pub fn clear(&mut self) {
        self.current = None;
    }
}

// ============================================================================
// FieldElement
// ============================================================================

/// An element of an installed [`GaloisField`]: a polynomial reduced modulo
/// the quotient and its discrete log (`None` for zero).
///
/// `*`, `/` and [`pow`](FieldElement::pow) only touch the logs. Mixing
/// elements of different fields panics.
#[derive(Clone)]
pub struct FieldElement<'f> {
    field: &'f GaloisField<'f>,
    value: Poly<'f>,
    log: Option<u64>,
}

impl<'f> FieldElement<'f> {
    pub fn field(&self) -> &'f GaloisField<'f> {
        self.field
    }

    /// The reduced representative, of degree below `n`.
    pub fn value(&self) -> &Poly<'f> {
        &self.value
    }

    /// `k` with `x^k == self`, `None` for zero.
    pub fn discrete_log(&self) -> Option<u64> {
        self.log
    }

    pub fn is_zero(&self) -> bool {
        self.log.is_none()
    }

    pub fn is_one(&self) -> bool {
        self.log == Some(0)
    }

    /// Multiplicative order, `None` for zero.
    pub fn order(&self) -> Option<u64> {
        let n = self.field.order;
        self.log.map(|k| n / gcd(n, k))
    }

    /// Whether this element generates the multiplicative group.
    pub fn is_generator(&self) -> bool {
        self.order() == Some(self.field.order)
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn inverse(&self) -> Option<Self> {
        let n = self.field.order;
        self.log.map(|k| self.field.from_log((n - k) % n))
    }

    /// Raise to an integer power; negative exponents invert first.
    ///
    /// The zero element short-circuits: every power of zero, including
    /// `0^0` and negative powers, is zero.
    ///
    /// # Errors
    ///
    /// Never fails for an element of an installed field.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::{GaloisField, PrimeField};
    ///
    /// let f3 = PrimeField::new(3).unwrap();
    /// let gf9 = GaloisField::install(&f3.poly(&[2, 1, 1])).unwrap();
    /// let g = gf9.generator();
    ///
    /// assert!(g.pow(8).unwrap().is_one());
    /// assert_eq!(g.pow(-1).unwrap(), g.inverse().unwrap());
    /// ```
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        match self.log {
            Some(k) => {
                let n = self.field.order as i128;
                let e = (k as i128 * exponent as i128).rem_euclid(n);
                Ok(self.field.from_log(e as u64))
            }
            None => Ok(self.clone()),
        }
    }

    /// Division that reports a zero divisor instead of panicking.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.assert_same_field(rhs);
        let b = rhs
            .log
            .ok_or(Error::DivisionByZero("division by the zero field element"))?;
        match self.log {
            Some(a) => {
                let n = self.field.order as u128;
                let k = (a as u128 + n - b as u128) % n;
                Ok(self.field.from_log(k as u64))
            }
            None => Ok(self.clone()),
        }
    }

    /// Whether both elements belong to the same installed field.
    pub fn same_field(&self, other: &Self) -> bool {
        core::ptr::eq(self.field, other.field) || self.field.quotient == other.field.quotient
    }

    /// Assert that two elements belong to the same field.
    ///
    /// Panics otherwise, in both debug and release builds.
    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.same_field(other),
            "field elements must belong to the same field"
        );
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        // degrees stay below n, so the sum is already reduced
        self.field.wrap(&self.value + &rhs.value)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        self.field.wrap(&self.value - &rhs.value)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        match (self.log, rhs.log) {
            (Some(a), Some(b)) => {
                let n = self.field.order as u128;
                self.field.from_log(((a as u128 + b as u128) % n) as u64)
            }
            _ => self.field.zero(),
        }
    }
}

impl<'f> Add for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(&rhs)
    }
}

impl<'f> Add<&FieldElement<'f>> for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn add(self, rhs: &FieldElement<'f>) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl<'f> Add for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl<'f> Sub for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(&rhs)
    }
}

impl<'f> Sub<&FieldElement<'f>> for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn sub(self, rhs: &FieldElement<'f>) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl<'f> Sub for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl<'f> Neg for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'f> Neg for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn neg(self) -> Self::Output {
        self.field.wrap(-&self.value)
    }
}

impl<'f> Mul for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(&rhs)
    }
}

impl<'f> Mul<&FieldElement<'f>> for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn mul(self, rhs: &FieldElement<'f>) -> Self::Output {
        self.mul_ref(rhs)
    }
}

impl<'f> Mul for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(rhs)
    }
}

impl<'f> Div for FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("division by zero")
    }
}

impl<'f> Div for &FieldElement<'f> {
    type Output = FieldElement<'f>;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).expect("division by zero")
    }
}

impl PartialEq for FieldElement<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other) && self.value == other.value
    }
}

impl Eq for FieldElement<'_> {}

impl fmt::Debug for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.to_string_with_var("a"))
    }
}

impl fmt::Display for FieldElement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f2() -> PrimeField {
        PrimeField::new(2).unwrap()
    }

    #[test]
    fn gf8_example() {
        let f = f2();
        let gf = GaloisField::install(&f.poly(&[1, 1, 0, 1])).unwrap();
        assert_eq!(gf.order(), 7);
        assert_eq!(gf.size(), 8);
        assert_eq!(gf.degree(), 3);
        assert_eq!(gf.powers().count(), 7);

        let one = gf.element_from_int(1);
        let x = gf.element(&f.x()).unwrap();
        assert_eq!(&one * &x, x);

        let x3 = &(&x * &x) * &x;
        assert_eq!(x3.value(), &f.poly(&[1, 1]));
        assert_eq!(x3.discrete_log(), Some(3));
    }

    #[test]
    fn table_entries_are_distinct_and_multiplicative() {
        let f3 = PrimeField::new(3).unwrap();
        let q = f3.poly(&[2, 1, 1]);
        let gf = GaloisField::install(&q).unwrap();
        let n = gf.order();
        let table: Vec<_> = gf.powers().collect();
        assert_eq!(table.len() as u64, n);
        assert!(table[0].is_one());

        let mut seen = std::collections::HashSet::new();
        for entry in &table {
            assert!(entry.degree() < 2);
            assert!(seen.insert(entry.clone()));
        }

        for i in 0..n {
            for j in 0..n {
                let lhs = gf.table_poly((i + j) % n);
                let rhs = (&table[i as usize] * &table[j as usize]).modulo(&q).unwrap();
                assert_eq!(lhs, rhs);
            }
        }
    }

    #[test]
    fn install_rejects_non_primitive() {
        let f = f2();
        // irreducible, x has order 5
        let err = GaloisField::install(&f.poly(&[1, 1, 1, 1, 1])).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        // reducible
        assert!(GaloisField::install(&f.poly(&[1, 0, 1])).is_err());
        // too small
        assert!(GaloisField::install(&f.poly(&[1, 1])).is_err());
        assert!(GaloisField::install(&f.constant(1)).is_err());
    }

    #[test]
    fn install_respects_table_limit() {
        let f = f2();
        let config = FieldConfig::default().with_max_table_size(100);
        let q = f.poly(&[1, 0, 0, 1, 0, 0, 0, 1]); // x^7 + x^3 + 1, order 127
        let err = GaloisField::install_with(&q, &config, &CancellationToken::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        let roomy = FieldConfig::default().with_max_table_size(127);
        assert!(GaloisField::install_with(&q, &roomy, &CancellationToken::new()).is_ok());
    }

    #[test]
    fn log_index_inverts_power_table() {
        let f3 = PrimeField::new(3).unwrap();
        let gf = GaloisField::install(&f3.poly(&[1, 2, 0, 1])).unwrap(); // x^3 + 2x + 1
        assert_eq!(gf.log[0], NO_LOG);
        for (k, &v) in gf.exp.iter().enumerate() {
            assert_eq!(gf.log[v as usize], k as u64);
        }
        assert_eq!(gf.log.iter().filter(|&&l| l == NO_LOG).count(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "power table repeats")]
    fn repeated_power_entry_is_a_bug() {
        // x^2 + 1 over F_3: x has order 4, so x^4 = 1 repeats in an 8-entry run
        let f3 = PrimeField::new(3).unwrap();
        let q = f3.poly(&[1, 0, 1]);
        let token = CancellationToken::new();
        let exp = power_run(&q, 2, 0, 8, 4096, &token).unwrap();
        let _ = build_log_index(&exp, 9, &FieldConfig::default(), &token);
    }

    #[test]
    fn install_observes_cancellation() {
        let f = f2();
        let token = CancellationToken::new();
        token.cancel();
        let err = GaloisField::install_with(
            &f.poly(&[1, 1, 0, 0, 1]),
            &FieldConfig::default(),
            &token,
        )
        .unwrap_err();
        assert_eq!(err, Error::Cancelled);
    }

    #[test]
    fn non_monic_quotient_is_stored_monic() {
        let f3 = PrimeField::new(3).unwrap();
        let gf = GaloisField::install(&f3.poly(&[1, 2, 2])).unwrap();
        assert_eq!(gf.quotient(), &f3.poly(&[2, 1, 1]));
    }

    #[test]
    fn element_reduces_input() {
        let f = f2();
        let gf = GaloisField::install(&f.poly(&[1, 1, 0, 1])).unwrap();
        let e = gf.element(&f.poly(&[0, 0, 0, 0, 1])).unwrap(); // x^4 = x^2 + x
        assert_eq!(e.value(), &f.poly(&[0, 1, 1]));
        assert_eq!(e.discrete_log(), Some(4));
        assert_eq!(gf.element_from_coeffs(&[1, 1, 0, 1]).unwrap(), gf.zero());
        assert_eq!(gf.element_from_int(3), gf.one());
    }

    #[test]
    fn element_rejects_foreign_characteristic() {
        let f = f2();
        let f3 = PrimeField::new(3).unwrap();
        let gf = GaloisField::install(&f.poly(&[1, 1, 0, 1])).unwrap();
        assert!(matches!(
            gf.element(&f3.poly(&[1, 1])),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_has_no_log() {
        let f = f2();
        let gf = GaloisField::install(&f.poly(&[1, 1, 1])).unwrap();
        let z = gf.zero();
        assert!(z.is_zero());
        assert_eq!(z.discrete_log(), None);
        assert_eq!(z.order(), None);
        assert!(z.inverse().is_none());
        assert_eq!(&z * &gf.generator(), z);
        assert_eq!(z.pow(3).unwrap(), z);
    }

    #[test]
    fn every_power_of_zero_is_zero() {
        let f = f2();
        let gf = GaloisField::install(&f.poly(&[1, 1, 0, 1])).unwrap();
        let z = gf.zero();
        for k in [-2, -1, 0, 1, 3, 7] {
            let r = z.pow(k).unwrap();
            assert!(r.is_zero(), "0^{} = {}", k, r);
            assert_eq!(r.discrete_log(), None);
        }
    }

    #[test]
    fn add_sub_neg() {
        let f5 = PrimeField::new(5).unwrap();
        let gf = GaloisField::install(&f5.poly(&[2, 1, 1])).unwrap(); // x^2 + x + 2
        let a = gf.element_from_coeffs(&[3, 4]).unwrap();
        let b = gf.element_from_coeffs(&[4, 2]).unwrap();
        let s = &a + &b;
        assert_eq!(s.value(), &f5.poly(&[2, 1]));
        assert_eq!(&s - &b, a);
        assert!((&a + &(-&a)).is_zero());
        assert_eq!(s.discrete_log(), gf.element(s.value()).unwrap().discrete_log());
    }

    #[test]
    fn division_and_inverse() {
        let f5 = PrimeField::new(5).unwrap();
        let gf = GaloisField::install(&f5.poly(&[2, 1, 1])).unwrap();
        let a = gf.element_from_coeffs(&[1, 3]).unwrap();
        let b = gf.element_from_coeffs(&[2, 1]).unwrap();
        let q = a.checked_div(&b).unwrap();
        assert_eq!(&q * &b, a);
        assert_eq!(&a / &a, gf.one());
        assert!(matches!(
            a.checked_div(&gf.zero()),
            Err(Error::DivisionByZero(_))
        ));
        assert!(gf.zero().checked_div(&a).unwrap().is_zero());

        let inv = b.inverse().unwrap();
        assert!((&b * &inv).is_one());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn div_operator_panics_on_zero() {
        let f = f2();
        let gf = GaloisField::install(&f.poly(&[1, 1, 1])).unwrap();
        let _ = gf.one() / gf.zero();
    }

    #[test]
    fn powers_and_orders() {
        let f = f2();
        let gf = GaloisField::install(&f.poly(&[1, 1, 0, 0, 1])).unwrap(); // GF(16)
        let g = gf.generator();
        assert!(g.is_generator());
        assert_eq!(g.pow(15).unwrap(), gf.one());
        assert_eq!(g.pow(-3).unwrap(), g.pow(12).unwrap());
        assert_eq!(g.pow(0).unwrap(), gf.one());

        let g3 = g.pow(3).unwrap();
        assert_eq!(g3.order(), Some(5));
        assert!(!g3.is_generator());
        assert_eq!(gf.one().order(), Some(1));

        // power agrees with repeated multiplication
        let mut acc = gf.one();
        for k in 0..20 {
            assert_eq!(acc, g.pow(k).unwrap());
            acc = &acc * &g;
        }
    }

    #[test]
    fn elements_of_different_fields_are_unequal() {
        let f = f2();
        let gf_a = GaloisField::install(&f.poly(&[1, 1, 0, 1])).unwrap();
        let gf_b = GaloisField::install(&f.poly(&[1, 0, 1, 1])).unwrap();
        assert_ne!(gf_a.generator(), gf_b.generator());
        let gf_a2 = GaloisField::install(&f.poly(&[1, 1, 0, 1])).unwrap();
        assert_eq!(gf_a.generator(), gf_a2.generator());
    }

    #[test]
    #[should_panic(expected = "same field")]
    fn mixing_fields_panics() {
        let f = f2();
        let gf_a = GaloisField::install(&f.poly(&[1, 1, 0, 1])).unwrap();
        let gf_b = GaloisField::install(&f.poly(&[1, 0, 1, 1])).unwrap();
        let _ = gf_a.generator() * gf_b.generator();
    }

    #[test]
    fn slot_keeps_previous_field_on_failure() {
        let f = f2();
        let mut slot = FieldSlot::new();
        assert!(!slot.is_installed());
        assert!(slot.field().is_err());

        slot.install(&f.poly(&[1, 1, 0, 1])).unwrap();
        assert!(slot.install(&f.poly(&[1, 1, 1, 1, 1])).is_err());
        assert_eq!(slot.field().unwrap().quotient(), &f.poly(&[1, 1, 0, 1]));

        slot.install(&f.poly(&[1, 1, 0, 0, 1])).unwrap();
        assert_eq!(slot.field().unwrap().order(), 15);

        let token = CancellationToken::new();
        token.cancel();
        let cancelled = slot.install_with(&f.poly(&[1, 1, 1]), &FieldConfig::default(), &token);
        assert_eq!(cancelled.unwrap_err(), Error::Cancelled);
        assert_eq!(slot.field().unwrap().order(), 15);

        slot.clear();
        assert!(!slot.is_installed());
    }

    #[test]
    fn small_chunks_build_the_same_table() {
        let f3 = PrimeField::new(3).unwrap();
        let q = f3.poly(&[1, 2, 0, 1]); // x^3 + 2x + 1, primitive over F_3
        let config = FieldConfig::default()
            .with_parallel_chunk(5)
            .with_cancel_check_interval(3);
        let chunked = GaloisField::install_with(&q, &config, &CancellationToken::new()).unwrap();
        let plain = GaloisField::install(&q).unwrap();
        assert!(chunked.powers().eq(plain.powers()));
    }

    #[test]
    fn display() {
        let f = f2();
        let gf = GaloisField::install(&f.poly(&[1, 1, 0, 1])).unwrap();
        assert_eq!(gf.to_string(), "GF(2^3) mod x^3 + x + 1");
        assert_eq!(gf.element_from_coeffs(&[1, 0, 1]).unwrap().to_string(), "a^2 + 1");
    }
}

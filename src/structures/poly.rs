use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::{Error, Result};
use crate::structures::zp::PrimeField;

/// Polynomial over a prime field Z/pZ.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`, always in `[0, p)`.
///
/// The representation is canonical: there are no trailing zero
/// coefficients, and the zero polynomial is stored as the single
/// coefficient `[0]` with degree `-1`.
///
/// A `Poly` borrows the [`PrimeField`] it was built from, so it cannot
/// outlive its characteristic. Combining polynomials over different
/// characteristics panics in the operators and returns
/// `Error::InvalidArgument` in the fallible methods.
#[derive(Clone)]
pub struct Poly<'p> {
    field: &'p PrimeField,
    coeffs: Vec<u64>,
}

impl<'p> Poly<'p> {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`. Coefficients are reduced
    /// into `[0, p)` (negative values included) and trailing zeros are removed.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::{Poly, PrimeField};
    ///
    /// let f7 = PrimeField::new(7).unwrap();
    ///
    /// // 3 - x + x^2 + 0x^3
    /// let p = Poly::new(&f7, &[3, -1, 1, 0]);
    /// assert_eq!(p.degree(), 2);
    /// assert_eq!(p.coefficients(), &[3, 6, 1]);
    /// ```
    pub fn new(field: &'p PrimeField, coeffs: &[i64]) -> Self {
        Self {
            field,
            coeffs: Self::normalize(field, coeffs),
        }
    }

    /// Canonical coefficient list of a raw integer list.
    ///
    /// Normalizing an already normalized list is a no-op.
    pub fn normalize(field: &PrimeField, coeffs: &[i64]) -> Vec<u64> {
        let mut reduced: Vec<u64> = coeffs.iter().map(|&c| field.reduce(c)).collect();
        Self::trim(&mut reduced);
        reduced
    }

    /// Build from residues already in `[0, p)`.
    pub(crate) fn from_residues(field: &'p PrimeField, mut coeffs: Vec<u64>) -> Self {
        debug_assert!(coeffs.iter().all(|&c| c < field.characteristic()));
        Self::trim(&mut coeffs);
        Self { field, coeffs }
    }

    /// Remove trailing zero coefficients, keeping `[0]` for zero.
    fn trim(coeffs: &mut Vec<u64>) {
        while coeffs.len() > 1 && coeffs.last() == Some(&0) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            coeffs.push(0);
        }
    }

    /// Create the zero polynomial.
    pub fn zero(field: &'p PrimeField) -> Self {
        Self {
            field,
            coeffs: vec![0],
        }
    }

    /// Create the constant polynomial `1`.
    pub fn one(field: &'p PrimeField) -> Self {
        Self {
            field,
            coeffs: vec![1],
        }
    }

    /// Create a constant polynomial.
    pub fn constant(field: &'p PrimeField, c: i64) -> Self {
        Self {
            field,
            coeffs: vec![field.reduce(c)],
        }
    }

    /// Create the polynomial `x`.
    pub fn x(field: &'p PrimeField) -> Self {
        Self {
            field,
            coeffs: vec![0, 1],
        }
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::{Poly, PrimeField};
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    /// let m = Poly::monomial(&f17, 3, 2); // 3x^2
    /// assert_eq!(m.degree(), 2);
    /// assert_eq!(m.evaluate(2), 12);
    /// ```
    pub fn monomial(field: &'p PrimeField, c: i64, n: usize) -> Self {
        let c = field.reduce(c);
        if c == 0 {
            return Self::zero(field);
        }
        let mut coeffs = vec![0; n + 1];
        coeffs[n] = c;
        Self { field, coeffs }
    }

    /// Create a polynomial from its roots: `(x - r1)(x - r2)...(x - rn)`.
    pub fn from_roots(field: &'p PrimeField, roots: &[i64]) -> Self {
        roots.iter().fold(Self::one(field), |acc, &root| {
            acc * Self::new(field, &[-root, 1])
        })
    }

    /// Sum of a sequence of polynomials; the empty sum is zero.
    pub fn sum_of<I>(field: &'p PrimeField, polys: I) -> Self
    where
        I: IntoIterator<Item = Poly<'p>>,
    {
        polys.into_iter().fold(Self::zero(field), |acc, p| acc + p)
    }

    /// Product of a sequence of polynomials; the empty product is one.
    pub fn product_of<I>(field: &'p PrimeField, polys: I) -> Self
    where
        I: IntoIterator<Item = Poly<'p>>,
    {
        polys.into_iter().fold(Self::one(field), |acc, p| acc * p)
    }

    /// Linear combination `sum(weights[i] * polys[i])`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the slices differ in length or a
    /// polynomial belongs to another characteristic.
    pub fn lincomb(field: &'p PrimeField, weights: &[i64], polys: &[Poly<'p>]) -> Result<Self> {
        if weights.len() != polys.len() {
            return Err(Error::invalid(format!(
                "linear combination needs one weight per polynomial ({} weights, {} polynomials)",
                weights.len(),
                polys.len()
            )));
        }
        let mut total = Self::zero(field);
        for (&w, p) in weights.iter().zip(polys) {
            total.check_same_field(p)?;
            total = total + p.scale(w);
        }
        Ok(total)
    }

    /// The prime field this polynomial lives over.
    pub fn field(&self) -> &'p PrimeField {
        self.field
    }

    /// The characteristic `p`.
    pub fn characteristic(&self) -> u64 {
        self.field.characteristic()
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs == [0]
    }

    /// Check if this is the constant polynomial `1`.
    pub fn is_one(&self) -> bool {
        self.coeffs == [1]
    }

    /// Degree of the polynomial, `-1` for the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::PrimeField;
    ///
    /// let f5 = PrimeField::new(5).unwrap();
    /// assert_eq!(f5.poly(&[1, 2, 3]).degree(), 2);
    /// assert_eq!(f5.poly(&[4]).degree(), 0);
    /// assert_eq!(f5.poly(&[5, 10]).degree(), -1);
    /// ```
    pub fn degree(&self) -> isize {
        if self.is_zero() {
            -1
        } else {
            (self.coeffs.len() - 1) as isize
        }
    }

    /// Degree as `Option<usize>`, `None` for the zero polynomial.
    pub fn deg(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    /// Leading coefficient, `0` for the zero polynomial.
    pub fn leading_coeff(&self) -> u64 {
        *self.coeffs.last().unwrap_or(&0)
    }

    /// Whether the leading coefficient is 1.
    pub fn is_monic(&self) -> bool {
        self.leading_coeff() == 1
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> u64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Get a slice of all coefficients in ascending order.
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::PrimeField;
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// // p(x) = 1 + 2x + 3x^2, p(2) = 17 = 0
    /// let p = f17.poly(&[1, 2, 3]);
    /// assert_eq!(p.evaluate(2), 0);
    /// assert_eq!(p.evaluate(1), 6);
    /// ```
    pub fn evaluate(&self, point: i64) -> u64 {
        let f = self.field;
        let x = f.reduce(point);
        self.coeffs
            .iter()
            .rev()
            .fold(0, |acc, &c| f.add(f.mul(acc, x), c))
    }

    /// Multiply every coefficient by a scalar.
    pub fn scale(&self, scalar: i64) -> Self {
        let f = self.field;
        let s = f.reduce(scalar);
        Self::from_residues(f, self.coeffs.iter().map(|&c| f.mul(c, s)).collect())
    }

    /// Make the polynomial monic (leading coefficient = 1).
    ///
    /// The zero polynomial is returned unchanged.
    pub fn monic(&self) -> Self {
        match self.field.inverse(self.leading_coeff()) {
            Some(inv) => self.scale(inv as i64),
            None => self.clone(),
        }
    }

    /// Raise to a non-negative power by repeated squaring.
    ///
    /// `exponent == 0` yields `1`, including for the zero polynomial.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for negative exponents.
    pub fn power(&self, exponent: i64) -> Result<Self> {
        if exponent < 0 {
            return Err(Error::invalid(format!(
                "polynomial exponent must be non-negative, got {}",
                exponent
            )));
        }

        let mut base = self.clone();
        let mut result = Self::one(self.field);
        let mut e = exponent as u64;

        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        Ok(result)
    }

    /// Formal derivative applied `order` times.
    ///
    /// The derivative of `a_n x^n + ... + a_1 x + a_0` is
    /// `n*a_n x^{n-1} + ... + a_1`, with `n*a_n` taken mod p.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::PrimeField;
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// // f(x) = x^3 + 2x^2 + 3x + 4, f'(x) = 3x^2 + 4x + 3, f''(x) = 6x + 4
    /// let f = f17.poly(&[4, 3, 2, 1]);
    /// assert_eq!(f.derivative(1), f17.poly(&[3, 4, 3]));
    /// assert_eq!(f.derivative(2), f17.poly(&[4, 6]));
    /// assert!(f.derivative(4).is_zero());
    /// ```
    pub fn derivative(&self, order: usize) -> Self {
        let f = self.field;
        let mut current = self.clone();
        for _ in 0..order {
            if current.degree() <= 0 {
                return Self::zero(f);
            }
            let coeffs = current
                .coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, &c)| f.mul(c, i as u64 % f.characteristic()))
                .collect();
            current = Self::from_residues(f, coeffs);
        }
        current
    }

    /// If every exponent with a nonzero coefficient is a multiple of p,
    /// return `g` with `g^p == self`.
    ///
    /// Over Z/pZ every scalar is its own p-th root, so `g` simply collects
    /// the coefficients at indices `0, p, 2p, ...`.
    pub fn pth_root(&self) -> Option<Self> {
        let p = self.characteristic() as usize;
        if self
            .coeffs
            .iter()
            .enumerate()
            .any(|(i, &c)| c != 0 && i % p != 0)
        {
            return None;
        }
        let coeffs = self.coeffs.iter().step_by(p).copied().collect();
        Some(Self::from_residues(self.field, coeffs))
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and
    /// `deg(r) < deg(divisor)`. Dividing by a nonzero constant is scaling
    /// by its inverse with a zero remainder.
    ///
    /// # Errors
    ///
    /// Returns `Error::DivisionByZero` if the divisor is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::PrimeField;
    ///
    /// let f17 = PrimeField::new(17).unwrap();
    ///
    /// // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
    /// let dividend = f17.poly(&[1, 2, 1]);
    /// let divisor = f17.poly(&[1, 1]);
    /// let (q, r) = dividend.eucdiv(&divisor).unwrap();
    ///
    /// assert_eq!(q, divisor);
    /// assert!(r.is_zero());
    /// ```
    pub fn eucdiv(&self, divisor: &Self) -> Result<(Self, Self)> {
        self.check_same_field(divisor)?;
        if divisor.is_zero() {
            return Err(Error::DivisionByZero("division by the zero polynomial"));
        }

        let f = self.field;
        if self.degree() < divisor.degree() {
            return Ok((Self::zero(f), self.clone()));
        }

        let divisor_deg = divisor.coeffs.len() - 1;
        let lc_inv = f
            .inverse(divisor.leading_coeff())
            .ok_or(Error::DivisionByZero("leading coefficient is not invertible"))?;
        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![0; self.coeffs.len() - divisor_deg];

        for i in (divisor_deg..remainder.len()).rev() {
            let rem_lc = remainder[i];
            if rem_lc == 0 {
                continue;
            }
            let coeff = f.mul(rem_lc, lc_inv);
            let shift = i - divisor_deg;
            quotient[shift] = coeff;

            // remainder -= coeff * x^shift * divisor
            for (j, &d) in divisor.coeffs.iter().enumerate() {
                remainder[j + shift] = f.sub(remainder[j + shift], f.mul(coeff, d));
            }
        }

        Ok((Self::from_residues(f, quotient), Self::from_residues(f, remainder)))
    }

    /// Reduce modulo `modulus`.
    ///
    /// Walks the residues `x^i mod modulus` for `i = 0..=deg(self)`, each
    /// obtained from the previous one by a multiplication by `x` and at most
    /// one subtraction of the monic modulus, and returns their combination
    /// weighted by the coefficients of `self`. Reducing modulo a linear
    /// polynomial yields the value at its root.
    ///
    /// # Errors
    ///
    /// Returns `Error::DivisionByZero` for a zero modulus and
    /// `Error::Arithmetic` for a nonzero constant modulus.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::PrimeField;
    ///
    /// let f2 = PrimeField::new(2).unwrap();
    /// let q = f2.poly(&[1, 1, 0, 1]); // x^3 + x + 1
    /// let x3 = f2.poly(&[0, 0, 0, 1]);
    /// assert_eq!(x3.modulo(&q).unwrap(), f2.poly(&[1, 1])); // x + 1
    /// ```
    pub fn modulo(&self, modulus: &Self) -> Result<Self> {
        self.check_same_field(modulus)?;
        if modulus.is_zero() {
            return Err(Error::DivisionByZero("reduction modulo the zero polynomial"));
        }
        if modulus.degree() == 0 {
            return Err(Error::Arithmetic(format!(
                "cannot reduce modulo the constant polynomial {}",
                modulus
            )));
        }

        let f = self.field;
        let m = modulus.monic();
        let n = m.coeffs.len() - 1;
        if self.coeffs.len() <= n {
            return Ok(self.clone());
        }

        let mut residue = vec![0u64; n];
        residue[0] = 1;
        let mut acc = vec![0u64; n];

        for (i, &c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                times_x_mod(f, &mut residue, &m.coeffs[..n]);
            }
            if c != 0 {
                for (a, &r) in acc.iter_mut().zip(&residue) {
                    *a = f.add(*a, f.mul(c, r));
                }
            }
        }

        Ok(Self::from_residues(f, acc))
    }

    /// Compute `self^exp mod modulus` using repeated squaring, reducing
    /// after every product.
    ///
    /// # Errors
    ///
    /// Returns `Error::DivisionByZero` if `modulus` is zero.
    pub fn powmod(&self, exp: u64, modulus: &Self) -> Result<Self> {
        let reduce = |p: &Self| p.eucdiv(modulus).map(|(_, r)| r);

        let mut base = reduce(self)?;
        let mut result = reduce(&Self::one(self.field))?;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = reduce(&(&result * &base))?;
            }
            e >>= 1;
            if e > 0 {
                base = reduce(&(&base * &base))?;
            }
        }

        Ok(result)
    }

    /// Render with a custom variable name, highest degree first.
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::PrimeField;
    ///
    /// let f5 = PrimeField::new(5).unwrap();
    /// let p = f5.poly(&[2, 0, 3, 1]);
    /// assert_eq!(p.to_string(), "x^3 + 3x^2 + 2");
    /// assert_eq!(p.to_string_with_var("a"), "a^3 + 3a^2 + 2");
    /// ```
    pub fn to_string_with_var(&self, var: &str) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let mut terms = Vec::new();
        for (i, &c) in self.coeffs.iter().enumerate().rev() {
            if c == 0 {
                continue;
            }
            let term = match (i, c) {
                (0, _) => format!("{}", c),
                (1, 1) => var.to_string(),
                (1, _) => format!("{}{}", c, var),
                (_, 1) => format!("{}^{}", var, i),
                _ => format!("{}{}^{}", c, var, i),
            };
            terms.push(term);
        }
        terms.join(" + ")
    }

    /// Whether both polynomials are over the same characteristic.
    pub fn same_field(&self, other: &Self) -> bool {
        core::ptr::eq(self.field, other.field) || self.field == other.field
    }

    pub(crate) fn check_same_field(&self, other: &Self) -> Result<()> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(Error::invalid(format!(
                "polynomials over {} and {} cannot be combined",
                self.field, other.field
            )))
        }
    }

    /// Assert that two polynomials share a characteristic.
    ///
    /// Panics otherwise, in both debug and release builds.
    fn assert_same_field(&self, other: &Self) {
        assert!(
            self.same_field(other),
            "polynomials must be over the same prime field"
        );
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        let f = self.field;
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| f.add(self.coeff(i), rhs.coeff(i))).collect();
        Self::from_residues(f, coeffs)
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        let f = self.field;
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len).map(|i| f.sub(self.coeff(i), rhs.coeff(i))).collect();
        Self::from_residues(f, coeffs)
    }

    /// Schoolbook O(n*m) convolution.
    fn mul_ref(&self, rhs: &Self) -> Self {
        self.assert_same_field(rhs);
        let f = self.field;
        if self.is_zero() || rhs.is_zero() {
            return Self::zero(f);
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![0u64; n + m - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = f.add(coeffs[i + j], f.mul(a, b));
            }
        }

        Self::from_residues(f, coeffs)
    }
}

/// `residue <- residue * x mod m` for a monic `m` of degree
/// `n == residue.len()`, given by its `n` lower coefficients.
pub(crate) fn times_x_mod(field: &PrimeField, residue: &mut [u64], monic_lower: &[u64]) {
    let n = residue.len();
    let top = residue[n - 1];
    residue.copy_within(0..n - 1, 1);
    residue[0] = 0;
    if top != 0 {
        for (r, &mc) in residue.iter_mut().zip(monic_lower) {
            *r = field.sub(*r, field.mul(top, mc));
        }
    }
}

/* ---- Arithmetic operators ---- */

impl<'p> Add for Poly<'p> {
    type Output = Poly<'p>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(&rhs)
    }
}

impl<'p> Add<&Poly<'p>> for Poly<'p> {
    type Output = Poly<'p>;

    fn add(self, rhs: &Poly<'p>) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl<'p> Add for &Poly<'p> {
    type Output = Poly<'p>;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_ref(rhs)
    }
}

impl<'p> Neg for Poly<'p> {
    type Output = Poly<'p>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<'p> Neg for &Poly<'p> {
    type Output = Poly<'p>;

    fn neg(self) -> Self::Output {
        let f = self.field;
        Poly::from_residues(f, self.coeffs.iter().map(|&c| f.neg(c)).collect())
    }
}

impl<'p> Sub for Poly<'p> {
    type Output = Poly<'p>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(&rhs)
    }
}

impl<'p> Sub<&Poly<'p>> for Poly<'p> {
    type Output = Poly<'p>;

    fn sub(self, rhs: &Poly<'p>) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl<'p> Sub for &Poly<'p> {
    type Output = Poly<'p>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub_ref(rhs)
    }
}

impl<'p> Mul for Poly<'p> {
    type Output = Poly<'p>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(&rhs)
    }
}

impl<'p> Mul<&Poly<'p>> for Poly<'p> {
    type Output = Poly<'p>;

    fn mul(self, rhs: &Poly<'p>) -> Self::Output {
        self.mul_ref(rhs)
    }
}

impl<'p> Mul for &Poly<'p> {
    type Output = Poly<'p>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_ref(rhs)
    }
}

/* ---- Equality, ordering, hashing ---- */

impl PartialEq for Poly<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.characteristic() == other.characteristic() && self.coeffs == other.coeffs
    }
}

impl Eq for Poly<'_> {}

impl Hash for Poly<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.characteristic().hash(state);
        self.coeffs.hash(state);
    }
}

/// Degree first, then coefficients from the highest power down.
///
/// Only used to give factor lists a deterministic order; the
/// characteristic breaks ties so the order agrees with `Eq`.
impl Ord for Poly<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.degree()
            .cmp(&other.degree())
            .then_with(|| self.coeffs.iter().rev().cmp(other.coeffs.iter().rev()))
            .then_with(|| self.characteristic().cmp(&other.characteristic()))
    }
}

impl PartialOrd for Poly<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Poly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_var("x"))
    }
}

impl fmt::Display for Poly<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Serialize a polynomial as its coefficient list.
///
/// `Poly` implements `Serialize` but not `Deserialize`, since a polynomial
/// cannot exist without its `PrimeField`. Use [`PolyData`] for round trips.
#[cfg(feature = "serde")]
impl serde::Serialize for Poly<'_> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.coeffs.serialize(serializer)
    }
}

/// A self-contained serializable polynomial: characteristic plus coefficients.
///
/// # Example
///
/// ```
/// use gfcalc::{PolyData, PrimeField};
///
/// let f7 = PrimeField::new(7).unwrap();
/// let p = f7.poly(&[3, 0, 1]);
///
/// let data = PolyData::from_poly(&p);
/// let q = data.to_poly(&f7).unwrap();
/// assert_eq!(p, q);
/// ```
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PolyData {
    /// Characteristic the coefficients are reduced by.
    pub p: u64,
    /// Coefficients in ascending order of degree.
    pub coeffs: Vec<u64>,
}

#[cfg(feature = "serde")]
impl PolyData {
    pub fn from_poly(poly: &Poly<'_>) -> Self {
        Self {
            p: poly.characteristic(),
            coeffs: poly.coeffs.clone(),
        }
    }

    /// Rebuild the polynomial inside `field`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `field` has another characteristic.
    pub fn to_poly<'p>(&self, field: &'p PrimeField) -> Result<Poly<'p>> {
        if field.characteristic() != self.p {
            return Err(Error::invalid(format!(
                "serialized polynomial is over F_{}, not {}",
                self.p, field
            )));
        }
        let coeffs = self.coeffs.iter().map(|&c| c % self.p).collect();
        Ok(Poly::from_residues(field, coeffs))
    }
}

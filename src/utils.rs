//! Integer helpers used by the characteristic check, Rabin's test and the
//! primitivity test.
//!
//! Primality and factoring must stay fast for group orders `p^n - 1` close
//! to `2^64`, hence Miller-Rabin and Pollard's rho instead of trial division.

/// Deterministic Miller-Rabin witnesses; together they decide every `u64`.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Primes used for trial division before falling back to Pollard's rho.
const SMALL_PRIMES: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Check if `n` is a prime number.
///
/// Deterministic Miller-Rabin over a fixed witness set, exact for every
/// `u64`. Runs in `O(log n)` multiplications, so it is cheap even for
/// group orders near `2^64`.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &q in &WITNESSES {
        if n % q == 0 {
            return n == q;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    'witness: for &a in &WITNESSES {
        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n - 1 {
            continue;
        }
        for _ in 1..s {
            x = mul_mod(x, x, n);
            if x == n - 1 {
                continue 'witness;
            }
        }
        return false;
    }
    true
}

/// A nontrivial factor of the odd composite `n` by Pollard's rho with
/// Floyd cycle detection, retrying with a new constant when the cycle
/// closes on `n` itself.
fn pollard_rho(n: u64) -> u64 {
    let step = |x: u64, c: u64| ((x as u128 * x as u128 + c as u128) % n as u128) as u64;
    let mut c = 1;
    loop {
        let (mut x, mut y, mut d) = (2u64, 2u64, 1u64);
        while d == 1 {
            x = step(x, c);
            y = step(step(y, c), c);
            d = gcd(x.abs_diff(y), n);
        }
        if d != n {
            return d;
        }
        c += 1;
    }
}

fn split_into(n: u64, primes: &mut Vec<u64>) {
    if n == 1 {
        return;
    }
    if is_prime(n) {
        primes.push(n);
        return;
    }
    let d = pollard_rho(n);
    split_into(d, primes);
    split_into(n / d, primes);
}

/// Distinct prime divisors of `n` in increasing order.
///
/// Small primes are divided out first; whatever remains is split with
/// Pollard's rho, so the cost grows with the fourth root of the second
/// largest prime factor rather than the square root of `n`.
/// Multiplicities are not reported. `prime_divisors(1)` and
/// `prime_divisors(0)` are empty.
pub fn prime_divisors(mut n: u64) -> Vec<u64> {
    let mut primes = Vec::new();
    if n < 2 {
        return primes;
    }
    for &q in &SMALL_PRIMES {
        if n % q == 0 {
            primes.push(q);
            while n % q == 0 {
                n /= q;
            }
        }
    }
    split_into(n, &mut primes);
    primes.sort_unstable();
    primes.dedup();
    primes
}

/// Greatest common divisor of two integers.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Returns `(g, x, y)` such that `g = gcd(a, b)` and `a*x + b*y = g`.
fn egcd(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x1, y1) = egcd(b, a % b);
        (g, y1, x1 - (a / b) * y1)
    }
}

/// Inverse of `a` modulo `m`, or `None` when `gcd(a, m) != 1`.
pub fn mod_inverse(a: u64, m: u64) -> Option<u64> {
    if m < 2 {
        return None;
    }
    let m_i = m as i128;
    let (g, x, _) = egcd((a % m) as i128, m_i);
    if g != 1 {
        return None;
    }
    Some(x.rem_euclid(m_i) as u64)
}

/// `base^exp`, or `None` on `u64` overflow.
pub fn checked_pow(base: u64, exp: usize) -> Option<u64> {
    let mut result: u64 = 1;
    for _ in 0..exp {
        result = result.checked_mul(base)?;
    }
    Some(result)
}

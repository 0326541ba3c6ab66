//! A tour of gfcalc: polynomial arithmetic over F_p, irreducibility and
//! primitivity, and arithmetic in GF(p^n).
//!
//! Run with: RUST_LOG=debug cargo run --example walkthrough

use env_logger::Env;
use log::info;

use gfcalc::{
    ext_euclid_algo, find_primitive, is_irreducible, is_primitive, linear_factors, xqpower,
    FieldSlot, PrimeField, Result, Value,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    polynomial_arithmetic()?;
    irreducibility()?;
    galois_field()?;
    Ok(())
}

fn polynomial_arithmetic() -> Result<()> {
    println!("--- Polynomials over F_7 ---\n");
    let f7 = PrimeField::new(7)?;

    let a = f7.poly(&[1, 2, 3]); // 3x^2 + 2x + 1
    let b = f7.poly(&[-1, 1]); // x - 1
    println!("a = {}", a);
    println!("b = {}", b);
    println!("a + b = {}", &a + &b);
    println!("a * b = {}", &a * &b);
    println!("a' = {}", a.derivative(1));
    println!("a(3) = {}", a.evaluate(3));

    let (q, r) = a.eucdiv(&b)?;
    println!("a = ({}) * b + {}", q, r);
    println!("a^10 mod b = {}", a.powmod(10, &b)?);

    let bz = ext_euclid_algo(&a, &f7.poly(&[0, 0, 1]))?;
    println!("gcd(a, x^2) = {} = ({})a + ({})x^2", bz.gcd, bz.u, bz.v);

    let p = f7.poly(&[4, -4, 1]) * f7.poly(&[1, 0, 1]) * f7.constant(3);
    let (factors, rest) = linear_factors(&p)?;
    println!("{} = {} * ({})\n", p, factors, rest);
    Ok(())
}

fn irreducibility() -> Result<()> {
    println!("--- Irreducibility ---\n");

    let f2 = PrimeField::new(2)?;
    let f5 = PrimeField::new(5)?;
    let candidates = [
        f2.poly(&[1, 1, 0, 1]),
        f2.poly(&[0, 0, 1]),
        f2.poly(&[1, 0, 1, 0, 1]),
        f2.poly(&[1, 1, 0, 0, 1]),
        f5.poly(&[1, 0, 1]),
        f5.poly(&[2, 1, 1]),
        f5.poly(&[1, 0, 0, 0, 1]),
    ];
    for poly in &candidates {
        let report = is_irreducible(poly)?;
        println!("{} over {}: {}", poly, poly.field(), report);
        if report.verdict {
            println!("  primitive: {}", is_primitive(poly));
        }
    }

    let q = f2.poly(&[1, 1, 0, 1]);
    println!("x^(2^3) mod ({}) = {}", q, xqpower(3, &q)?);

    let f3 = PrimeField::new(3)?;
    for degree in 2..=4 {
        if let Some(q) = find_primitive(&f3, degree) {
            info!("smallest primitive of degree {} over {}: {}", degree, f3, q);
        }
    }
    println!();
    Ok(())
}

fn galois_field() -> Result<()> {
    println!("--- GF(2^3) ---\n");

    let f2 = PrimeField::new(2)?;
    let mut slot = FieldSlot::new();

    // x^2 + 1 is not irreducible, the slot stays empty
    if let Err(e) = slot.install(&f2.poly(&[1, 0, 1])) {
        println!("rejected x^2 + 1: {}", e);
    }

    let gf8 = slot.install(&f2.poly(&[1, 1, 0, 1]))?;
    println!("installed {:?}", gf8);
    for (k, power) in gf8.powers().enumerate() {
        println!("  a^{} = {}", k, power.to_string_with_var("a"));
    }

    let a = gf8.generator();
    let b = gf8.element_from_coeffs(&[1, 1])?; // a + 1
    println!("(a) * (a + 1) = {}", &a * &b);
    println!("(a) / (a + 1) = {}", a.checked_div(&b)?);
    println!("(a + 1)^-1 = {}", b.pow(-1)?);
    println!("log_a(a + 1) = {:?}", b.discrete_log());

    if let Err(e) = gf8.zero().checked_div(&gf8.zero()) {
        println!("0 / 0: {}", e);
    }

    let mixed = Value::from(f2.x()).mul(&Value::from(a));
    if let Err(e) = mixed {
        println!("x * a: {}", e);
    }
    Ok(())
}

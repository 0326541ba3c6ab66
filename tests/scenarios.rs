//! End-to-end scenarios: from raw coefficients through the irreducibility
//! and primitivity checks to arithmetic in the installed field.

use gfcalc::{
    ext_euclid_algo, is_irreducible, is_primitive, Error, FieldSlot, PrimeField, Reason, Value,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn gf8_multiplication_table() {
    init_logging();
    let f2 = PrimeField::new(2).unwrap();
    let q = f2.poly(&[1, 1, 0, 1]);
    assert!(is_primitive(&q));

    let mut slot = FieldSlot::new();
    let gf8 = slot.install(&q).unwrap();
    assert_eq!(gf8.order(), 7);

    let one = gf8.element_from_int(1);
    let x = gf8.element_from_coeffs(&[0, 1]).unwrap();
    assert_eq!(&one * &x, x);
    let cube = &(&x * &x) * &x;
    assert_eq!(cube.value(), &f2.poly(&[1, 1]));
    assert_eq!(cube.to_string(), "a + 1");
    assert_eq!(cube.discrete_log(), Some(3));
}

#[test]
fn quadratic_reasons() {
    let f7 = PrimeField::new(7).unwrap();
    // 3 = -4 is a square mod 7, so x^2 + 3 = (x - 2)(x - 5)
    let report = is_irreducible(&f7.poly(&[3, 0, 1])).unwrap();
    assert!(!report.verdict);
    assert_eq!(report.reason.to_string(), "Has roots 2, 5");

    // 5 is not a square mod 7
    let report = is_irreducible(&f7.poly(&[2, 0, 1])).unwrap();
    assert!(report.verdict);
    assert_eq!(report.reason, Reason::NoLinearFactors { degree: 2 });
    assert_eq!(
        report.to_string(),
        "irreducible (Quadratic with no linear factors)"
    );

    let f5 = PrimeField::new(5).unwrap();
    let report = is_irreducible(&f5.poly(&[2, 0, 1])).unwrap();
    assert!(report.verdict);
    let report = is_irreducible(&f5.poly(&[1, 0, 1])).unwrap();
    assert!(report.reason.to_string().contains("2"));
}

#[test]
fn square_over_gf2_reports_its_root_factor() {
    let f2 = PrimeField::new(2).unwrap();
    let report = is_irreducible(&f2.poly(&[0, 0, 1])).unwrap();
    assert!(!report.verdict);
    assert_eq!(
        report.reason.to_string(),
        "Has root 0; Repeated factor: x"
    );
}

#[test]
fn non_primitive_quotient_is_refused() {
    let f2 = PrimeField::new(2).unwrap();
    let mut slot = FieldSlot::new();

    // irreducible but x has order 5 in GF(16)
    let q = f2.poly(&[1, 1, 1, 1, 1]);
    assert!(is_irreducible(&q).unwrap().verdict);
    assert!(matches!(slot.install(&q), Err(Error::InvalidArgument(_))));
    assert!(!slot.is_installed());

    assert!(slot.install(&f2.poly(&[1, 1, 0, 0, 1])).is_ok());
    assert_eq!(slot.field().unwrap().size(), 16);
}

#[test]
fn changing_characteristic_means_a_new_context() {
    let f3 = PrimeField::new(3).unwrap();
    let f5 = PrimeField::new(5).unwrap();

    let a = Value::from(f3.poly(&[1, 1]));
    let b = Value::from(f5.poly(&[1, 1]));
    assert!(a.add(&b).is_err());
    assert!(ext_euclid_algo(&f3.x(), &f3.poly(&[1, 1])).is_ok());

    let mut slot = FieldSlot::new();
    let gf9 = slot.install(&f3.poly(&[2, 1, 1])).unwrap();
    assert!(gf9.element(&f5.x()).is_err());
}

#[test]
fn zero_element_has_no_log_and_absorbs_powers() {
    let f3 = PrimeField::new(3).unwrap();
    let mut slot = FieldSlot::new();
    let gf9 = slot.install(&f3.poly(&[2, 1, 1])).unwrap();

    let zero = gf9.element_from_coeffs(&[3, 6]).unwrap();
    assert!(zero.is_zero());
    assert_eq!(zero.discrete_log(), None);
    assert!(matches!(
        gf9.one().checked_div(&zero),
        Err(Error::DivisionByZero(_))
    ));
    for k in [-2, 0, 3] {
        assert!(zero.pow(k).unwrap().is_zero());
    }
}

// ============================================================================
// Basic Usage Example
// ============================================================================

use numvec::prelude::*;

fn main() -> Result<(), VectorError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Numeric Vector Example ===\n");

    let a = NumericVector::from([1.0, 2.0, 3.0]);
    let b = NumericVector::from([4.0, 5.0, 6.0]);
    println!("a = {}", a);
    println!("b = {}", b);

    println!("\na + b   = {}", a.checked_add(&b)?);
    println!("b - a   = {}", b.checked_sub(&a)?);
    println!("a * 3   = {}", a.scale(3.0));
    println!("b / 2   = {}", b.checked_div(2.0)?);
    println!("a . b   = {}", a.dot(&b)?);
    println!("|a|     = {:.6}", a.norm());

    let c = cross_product(&a, &b)?;
    println!("a x b   = {}", c);
    println!("unit    = {}", normalize(&c)?);
    println!("angle   = {:.6} rad", angle_between(&a, &b)?);
    println!("dist    = {:.6}", distance(&a, &b)?);

    println!("\n=== Resizing ===");
    let mut v = NumericVector::from([10, 20, 30]);
    println!("start   = {}", v);
    v.resize_with_value(5, 7);
    println!("grown   = {}", v);
    v.resize(2);
    println!("shrunk  = {}", v);

    println!("\n=== Tolerance ===");
    let mut x = NumericVector::filled(3, 1.0);
    let mut y = NumericVector::filled(3, 1.0 + 1e-11);
    println!("x == y with tolerance {:e}: {}", x.tolerance(), x == y);
    x.set_tolerance(1e-15)?;
    y.set_tolerance(1e-15)?;
    println!("x == y with tolerance {:e}: {}", x.tolerance(), x == y);

    println!("\n=== Errors ===");
    if let Err(err) = a.checked_div(0.0) {
        println!("a / 0   -> {}", err);
    }
    if let Err(err) = v.get(10) {
        println!("v[10]   -> {}", err);
    }
    if let Err(err) = cross_product(&v, &v) {
        println!("v x v   -> {}", err);
    }

    Ok(())
}

// ============================================================================
// Basic Usage Example
// ============================================================================

use arbdec::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Arbdec Example ===\n");

    // Calculator with two fractional digits by default
    let math = BigMath::with_scale(2);
    println!("Default scale: {}\n", math.default_scale());

    println!("Addition and subtraction:");
    println!("  1.5 + 2.25        = {}", math.add("1.5", "2.25", None).unwrap());
    println!("  1.999 + 0 (s=2)   = {}", math.add("1.999", "0", None).unwrap());
    println!("  1 - 2.5           = {}", math.sub(1, "2.5", None).unwrap());

    println!("\nMultiplication and division:");
    println!("  1.05 * 1.05       = {}", math.mul("1.05", "1.05", None).unwrap());
    println!("  10 / 3 (s=4)      = {}", math.div(10, 3, Some(4)).unwrap());
    println!("  10 mod 3          = {}", math.modulo(10, 3).unwrap());

    println!("\nPowers and roots:");
    println!("  2 ^ 10            = {}", math.pow(2, 10, Some(0)).unwrap());
    println!("  2 ^ -2 (s=4)      = {}", math.pow(2, -2, Some(4)).unwrap());
    println!("  2 ^ 10 mod 7      = {}", math.pow_mod(2, 10, 7, Some(0)).unwrap());
    println!("  sqrt(2) (s=5)     = {}", math.sqrt(2, Some(5)).unwrap());

    println!("\nHeterogeneous inputs:");
    println!("  \"1.5e3\" * 2       = {}", math.mul("1.5e3", 2, Some(0)).unwrap());
    println!("  0.1f64 + \"0.2\"    = {}", math.add(0.1, "0.2", None).unwrap());

    println!("\nComparisons at a scale:");
    println!(
        "  comp(1.0001, 1.0002, s=3) = {}",
        math.comp("1.0001", "1.0002", Some(3)).unwrap()
    );

    println!("\nErrors are explicit:");
    println!("  10 / 0            -> {}", math.div(10, 0, None).unwrap_err());
    println!("  sqrt(-1)          -> {}", math.sqrt(-1, None).unwrap_err());

    // The previous default comes back when changing scale
    let old = math.set_scale(8);
    println!("\nRescaled from {} to {}:", old, math.default_scale());
    println!("  1 / 7             = {}", math.div(1, 7, None).unwrap());
}

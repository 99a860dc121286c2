//! Demonstrates dispersion regressograms on heteroscedastic data

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use scedastic_regressogram::{decile_regressogram, uniform_regressogram};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Synthetic sample: response noise grows with the predictor, the
    // textbook violation of the constant-variance assumption.
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let n = 500;
    let mut predictor = Vec::with_capacity(n);
    let mut response = Vec::with_capacity(n);
    for _ in 0..n {
        let x: f64 = rng.gen_range(0.0..10.0);
        let noise = Normal::new(0.0, 0.2 + 0.4 * x)?.sample(&mut rng);
        predictor.push(x);
        response.push(20.0 + 2.0 * x + noise);
    }

    println!("=== Uniform bins (Sturges) ===");
    let uniform = uniform_regressogram(&predictor, &response)?;
    println!("{uniform}");
    for (i, bin) in uniform.bins().iter().enumerate() {
        println!("  Bin {i}: {bin}");
    }

    println!("\n=== Decile bins ===");
    let deciles = decile_regressogram(&predictor, &response)?;
    println!("{deciles}");
    for (i, bin) in deciles.bins().iter().enumerate() {
        println!("  Bin {i}: {bin}");
    }

    // Rising dispersion from left to right is the heteroscedasticity
    // signature a residual plot would show.
    println!("\n=== Plot-ready points (midpoint, dispersion) ===");
    for (mid, disp) in deciles.finite_points() {
        println!("  ({mid:.2}, {disp:.4})");
    }

    Ok(())
}

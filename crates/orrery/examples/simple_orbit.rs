//! Binary orbit integration example
//!
//! Runs the built-in binary pair and reports conserved-quantity drift
//! and the stability index as the orbit progresses.
//!
//! Run with: cargo run --package orrery --example simple_orbit

use orrery::engine::Engine;
use orrery::presets;

fn main() {
    env_logger::init();

    println!("Binary Pair: Symplectic Euler Integration\n");
    println!("{}", "=".repeat(60));

    let preset = presets::binary_pair();
    let mut engine = Engine::from_preset(&preset, 42);

    println!("\nInitial system:");
    for body in engine.bodies() {
        println!(
            "  {}: mass={:.0}, pos=({:.1}, {:.1}), radius={:.2}",
            body.name, body.mass, body.position.x, body.position.y, body.radius
        );
    }

    let dt = 0.01;
    let report_every = 1000;

    println!(
        "\n{:>8} {:>12} {:>14} {:>12} {:>10}",
        "time", "energy", "dE (%)", "dL (%)", "stability"
    );

    for step in 1..=10_000 {
        engine.update(dt);
        if step % report_every == 0 {
            let diag = engine.diagnostics();
            println!(
                "{:>8.1} {:>12.4} {:>14.6e} {:>12.2e} {:>10.4}",
                engine.time(),
                diag.energy,
                diag.energy_drift,
                diag.angular_momentum_drift,
                diag.stability
            );
        }
    }

    let diag = engine.diagnostics();
    println!("\nFinal state after {} steps:", engine.steps());
    println!("  Energy drift:           {:.6e} %", diag.energy_drift);
    println!(
        "  Angular momentum drift: {:.6e} %",
        diag.angular_momentum_drift
    );
    println!("  Barycenter drift:       {:.6e}", diag.com_drift);
    println!("  Chaos level:            {:.4}", diag.chaos_level);
    println!("  Stability index:        {:.4}", diag.stability);
    println!(
        "  Periodicity flag:       {}",
        if diag.periodic { "raised" } else { "clear" }
    );
}

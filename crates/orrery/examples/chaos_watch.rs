//! Shadow trajectory divergence example
//!
//! Loads the inner system, then disturbs it mid-run by dropping a new
//! body in, and watches the chaos level climb as the shadow trajectory
//! diverges from the main one.
//!
//! Run with: cargo run --package orrery --example chaos_watch

use nalgebra::Point2;
use orrery::engine::Engine;
use orrery::presets;

fn main() {
    env_logger::init();

    println!("Shadow Trajectory: Chaos Estimation\n");
    println!("{}", "=".repeat(60));

    let preset = presets::inner_system();
    let mut engine = Engine::from_preset(&preset, 99);

    println!(
        "\nLoaded \"{}\" with {} bodies.",
        preset.name,
        engine.bodies().len()
    );

    let dt = 0.01;

    println!("\n{:>8} {:>12} {:>10}", "time", "chaos", "stability");
    for step in 1..=20_000 {
        engine.update(dt);
        if step == 10_000 {
            let id = engine.insert_body(Point2::new(170.0, 0.0));
            println!(
                "  -- dropped {:?} into the gap between orbiters --",
                engine.get_body(id).map(|b| b.name.as_str()).unwrap_or("?")
            );
        }
        if step % 2_000 == 0 {
            let diag = engine.diagnostics();
            println!(
                "{:>8.1} {:>12.6} {:>10.4}",
                engine.time(),
                diag.chaos_level,
                diag.stability
            );
        }
    }

    let diag = engine.diagnostics();
    println!("\nFinal chaos level:     {:.4}", diag.chaos_level);
    println!("Final stability index: {:.4}", diag.stability);
}

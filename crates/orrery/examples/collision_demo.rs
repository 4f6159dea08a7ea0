//! Collision merge example
//!
//! Drives two bodies head-on until they overlap and merge, then reports
//! the surviving body, the explosion effect, and the re-captured
//! diagnostics baseline.
//!
//! Run with: cargo run --package orrery --example collision_demo

use orrery::engine::Engine;
use orrery::presets;

fn main() {
    env_logger::init();

    println!("Collision Course: Merge and Supernova Impulse\n");
    println!("{}", "=".repeat(60));

    let preset = presets::collision_course();
    let mut engine = Engine::from_preset(&preset, 7);

    println!("\nInitial system:");
    for body in engine.bodies() {
        println!(
            "  {}: mass={:.0}, pos=({:.1}, {:.1}), vel=({:.1}, {:.1}), radius={:.2}",
            body.name,
            body.mass,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.radius
        );
    }

    let dt = 0.01;
    let mut merge_step = None;

    for step in 1..=5_000 {
        engine.update(dt);
        if engine.bodies().len() == 1 {
            merge_step = Some(step);
            break;
        }
    }

    match merge_step {
        Some(step) => {
            let survivor = &engine.bodies()[0];
            println!("\nMerge at step {} (t = {:.2}):", step, engine.time());
            println!("  Survivor:  {}", survivor.name);
            println!("  Mass:      {:.1}", survivor.mass);
            println!("  Radius:    {:.2}", survivor.radius);
            println!(
                "  Velocity:  ({:.3}, {:.3})",
                survivor.velocity.x, survivor.velocity.y
            );
            for effect in engine.effects() {
                println!(
                    "  Explosion at ({:.1}, {:.1}) with {} particles",
                    effect.position.x,
                    effect.position.y,
                    effect.particles().len()
                );
            }
            let diag = engine.diagnostics();
            println!("\nDiagnostics re-baselined after the merge:");
            println!("  Energy drift:    {:.1} %", diag.energy_drift);
            println!("  Stability index: {:.4}", diag.stability);
        }
        None => println!("\nNo merge occurred; bodies never overlapped."),
    }
}

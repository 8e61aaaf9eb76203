//! Print a turntable view plan with the alternating visit order.
//!
//! Run with: cargo run --example turntable_plan

use anyhow::Result;
use roomtex::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let opts = TurntableOptions {
        count: 8,
        base_theta: 60.0,
        radius: 1.25,
        alternate: true,
        ..Default::default()
    };
    let mut sampler = TurntableSampler::new(&opts);

    println!("turntable pass: {} views", sampler.len());
    for (step, record) in sampler.pass().enumerate() {
        let ViewRecord::Angular(view) = record else {
            continue;
        };
        println!(
            "step {step}: {:?} at theta {:.1}°, phi {:.1}°, radius {:.2}",
            view.direction,
            view.theta.to_degrees(),
            view.phi.to_degrees(),
            view.radius,
        );
    }

    Ok(())
}

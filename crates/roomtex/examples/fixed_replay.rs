//! Replay a synthetic cubemap capture.
//!
//! Writes a pair of calibration tables into a temp directory (two capture
//! positions, six face quaternions), then replays them as
//! world-from-camera transform batches.
//!
//! Run with: cargo run --example fixed_replay

use std::fs;

use anyhow::Result;
use roomtex::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let dir = tempfile::tempdir()?;
    let translation_path = dir.path().join("cam_translations.txt");
    let rotation_path = dir.path().join("cubemap_rotations.txt");

    fs::write(&translation_path, "0.0 0.0 1.6\n1.2 -0.4 1.6\n")?;
    // Six cubemap faces: identity, quarter turns about y, half turn, and
    // the up/down faces as quarter turns about x.
    fs::write(
        &rotation_path,
        concat!(
            "0.0 0.0 0.0 1.0\n",
            "0.0 0.707107 0.0 0.707107\n",
            "0.0 1.0 0.0 0.0\n",
            "0.0 -0.707107 0.0 0.707107\n",
            "0.707107 0.0 0.0 0.707107\n",
            "-0.707107 0.0 0.0 0.707107\n",
        ),
    )?;

    let mut sampler = FixedPoseSampler::from_files(&translation_path, &rotation_path)?;
    println!(
        "replaying {} positions x {} faces",
        sampler.len(),
        sampler.rotations_per_position()
    );

    for index in 0..sampler.len() {
        let ViewRecord::Transforms(batch) = sampler.sample(index) else {
            continue;
        };
        let first = &batch[0];
        println!(
            "position {index}: {} transforms, translation ({:.2}, {:.2}, {:.2})",
            batch.len(),
            first[(0, 3)],
            first[(1, 3)],
            first[(2, 3)],
        );
    }

    Ok(())
}

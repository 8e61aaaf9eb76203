use std::{error::Error, fs, path::Path};

use clap::Parser;
use roomtex_views::{SamplerConfig, ViewRecord, ViewSampler};
use serde::Serialize;

/// View-plan CLI for panoramic room texturing.
#[derive(Debug, Parser)]
#[command(author, version, about = "Generate a camera view plan from a sampler config")]
struct Args {
    /// Path to a JSON file containing a SamplerConfig.
    #[arg(long)]
    input: String,

    /// Optional path for the JSON report. Prints to stdout if omitted.
    #[arg(long)]
    output: Option<String>,
}

/// One full pass of the configured sampler.
#[derive(Debug, Serialize)]
struct ViewPlanReport {
    num_views: usize,
    records: Vec<ViewRecord>,
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let value = serde_json::from_str(&data)?;
    Ok(value)
}

fn run_plan(input_path: &str) -> Result<String, Box<dyn Error>> {
    let config: SamplerConfig = load_json_file(Path::new(input_path))?;
    let mut sampler = config.build()?;

    let records: Vec<ViewRecord> = (0..sampler.len()).map(|index| sampler.sample(index)).collect();
    let report = ViewPlanReport {
        num_views: records.len(),
        records,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn main() {
    env_logger::init();
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let json = run_plan(&args.input)?;
    match args.output {
        Some(path) => fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}

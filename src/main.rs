use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use episode_dq::algorithm::pipeline::{QualityPipeline, generate_summary};
use episode_dq::algorithm::quality::QualityRules;
use episode_dq::utils::arrow::{
    record_schema, records_from_batches, scored_partition_to_batch, weights_to_batch,
};
use episode_dq::utils::io::{read_parquet, write_parquet};
use episode_dq::utils::logging::{create_spinner, finish_progress_bar};
use episode_dq::{EpisodeRecord, MaternityRecord, PipelineConfig};

/// Record layout of the input files
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// General hospital episodes
    Episode,
    /// Maternity episodes with per-baby detail
    Maternity,
}

/// Command-line arguments for episode-dq
#[derive(Parser, Debug)]
#[command(name = "episode-dq")]
#[command(about = "Score the data quality of pre-cleaned hospital episode records")]
#[command(version)]
struct Args {
    /// Record layout of the input files
    #[arg(short, long, value_enum)]
    variant: Variant,

    /// Partition input as YEAR=PATH; repeat for several years
    #[arg(short, long = "input", required = true, value_parser = parse_partition_input)]
    inputs: Vec<(i32, PathBuf)>,

    /// Directory for scored and weight parquet files
    #[arg(short, long)]
    output: PathBuf,

    /// JSON pipeline configuration
    #[arg(short, long, env = "EPISODE_DQ_CONFIG")]
    config: Option<PathBuf>,

    /// Worker threads (overrides the configuration file)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Draw progress bars
    #[arg(long)]
    progress: bool,
}

fn parse_partition_input(value: &str) -> std::result::Result<(i32, PathBuf), String> {
    let (year, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected YEAR=PATH, got '{value}'"))?;
    let year = year
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid partition year '{year}': {e}"))?;
    Ok((year, PathBuf::from(path)))
}

fn load_config(args: &Args) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }
    if args.progress {
        config = config.with_progress(true);
    }
    config.validate()?;
    Ok(config)
}

fn load_partition<R>(path: &Path) -> Result<Vec<R>>
where
    R: QualityRules + DeserializeOwned,
{
    let spinner = create_spinner(&format!("Reading {}", path.display()));
    let schema = record_schema::<R>();
    let batches = read_parquet(path, Some(&schema))
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records = records_from_batches::<R>(&batches)
        .with_context(|| format!("Failed to decode {} records from {}", R::VARIANT, path.display()))?;
    finish_progress_bar(
        &spinner,
        Some(&format!("Read {} records from {}", records.len(), path.display())),
    );
    Ok(records)
}

fn run<R>(args: &Args, config: PipelineConfig) -> Result<()>
where
    R: QualityRules + Serialize + DeserializeOwned,
{
    let mut partitions: BTreeMap<i32, Vec<R>> = BTreeMap::new();
    for (year, path) in &args.inputs {
        let records = load_partition::<R>(path)?;
        info!("Loaded {} records for partition {year}", records.len());
        partitions.entry(*year).or_default().extend(records);
    }

    let pipeline = QualityPipeline::<R>::new(config)?;
    let output = pipeline.run(partitions)?;

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    for (year, partition) in &output.scored {
        let scored = scored_partition_to_batch(partition)?;
        write_parquet(&args.output.join(format!("scored_{year}.parquet")), &scored)?;

        let weights = weights_to_batch(&partition.weights)?;
        write_parquet(&args.output.join(format!("weights_{year}.parquet")), &weights)?;
    }

    for condition in &output.conditions {
        warn!("Partition skipped: {condition}");
    }
    info!("{}", generate_summary(R::VARIANT, &output.summaries()));
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    info!(
        "Scoring {} partitions of {:?} records into {}",
        args.inputs.len(),
        args.variant,
        args.output.display()
    );

    match args.variant {
        Variant::Episode => run::<EpisodeRecord>(&args, config),
        Variant::Maternity => run::<MaternityRecord>(&args, config),
    }
}

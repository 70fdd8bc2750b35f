use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, LevelFilter};

use std_outlier_detector::csv_input::{read_csv, stdout_writer, write_row_labels, write_table};
use std_outlier_detector::{CentralTendency, DetectorConfig, OutlierDetector, StdDetector};

/// Flag cells of a numeric CSV whose z-score exceeds a threshold
#[derive(Parser)]
#[command(name = "std-detect")]
#[command(about = "Z-score outlier detection over the columns of a CSV file")]
struct Cli {
    /// CSV file with one numeric feature per column
    input: PathBuf,

    /// |z| threshold above which a cell is an outlier
    #[arg(short, long, default_value_t = DetectorConfig::DEFAULT_K)]
    k: f64,

    /// Location statistic the z-score is measured from
    #[arg(short, long, value_enum, default_value = "mean")]
    central_tendency: CenterArg,

    /// Write z-scores instead of labels
    #[arg(long, conflicts_with = "per_row")]
    scores: bool,

    /// Write one label per row (-1 if any feature is an outlier)
    #[arg(long)]
    per_row: bool,

    /// The first line is data, not column names
    #[arg(long)]
    no_header: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CenterArg {
    Mean,
    Median,
}

impl From<CenterArg> for CentralTendency {
    fn from(arg: CenterArg) -> Self {
        match arg {
            CenterArg::Mean => CentralTendency::Mean,
            CenterArg::Median => CentralTendency::Median,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let now = Instant::now();
    let table = read_csv(&cli.input, !cli.no_header)
        .with_context(|| format!("Something went wrong reading csv {}", cli.input.display()))?;
    info!(
        "read {} rows x {} columns from {}",
        table.data.nrows(),
        table.data.ncols(),
        cli.input.display()
    );

    let config = DetectorConfig::new(cli.k, cli.central_tendency.into());
    let mut detector = StdDetector::from_config(&config)?;
    let headers = table.headers.as_deref();
    let mut writer = stdout_writer();

    if cli.scores {
        let scores = detector.fit(table.data.view())?.decision_function(table.data.view())?;
        write_table(&mut writer, headers, scores.view())?;
    } else {
        let labels = detector.fit_predict(table.data.view())?;
        if cli.per_row {
            write_row_labels(&mut writer, &labels)?;
        } else {
            write_table(&mut writer, headers, labels.view())?;
        }
    }

    info!("Elapsed: {:.2?}", now.elapsed());
    Ok(())
}

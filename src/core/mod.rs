//! Benchmark orchestration: configuration, system information, trial
//! execution and result reporting.

use std::fs;
use std::io::{self, Error, ErrorKind};
use std::path::Path;

use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::segmentation::segment_coins;
use crate::stats::{StatsSummary, TrialRunner};
use crate::ui::report;

// ============================================================================
// CONFIGURATION STRUCTURES
// ============================================================================

/// Default number of timed trials.
pub const DEFAULT_TRIAL_COUNT: usize = 1000;

/// Default input image, relative to the working directory.
pub const DEFAULT_IMAGE_PATH: &str = "water_coins.jpg";

/// Optional settings file read from the working directory.
const SETTINGS_PATH: &str = "benchsettings.json";

const RUN_TIMES_PATH: &str = "run_times.csv";
const SUMMARY_PATH: &str = "results.json";

#[derive(Debug, Deserialize, Serialize)]
pub struct BenchmarkParameters {
    #[serde(rename = "TrialCount", deserialize_with = "validate_trial_count")]
    pub trial_count: usize,
    #[serde(rename = "ImagePath", deserialize_with = "validate_image_path")]
    pub image_path: String,
}

impl Default for BenchmarkParameters {
    fn default() -> Self {
        Self {
            trial_count: DEFAULT_TRIAL_COUNT,
            image_path: DEFAULT_IMAGE_PATH.to_string(),
        }
    }
}

fn validate_trial_count<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    usize::try_from(value)
        .map_err(|_| serde::de::Error::custom("TrialCount must be non-negative"))
}

fn validate_image_path<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        Err(serde::de::Error::custom("ImagePath must not be empty"))
    } else {
        Ok(value)
    }
}

/// Load settings from the given path, falling back to the defaults when the
/// file does not exist. A present but malformed file is a fatal error.
fn load_parameters(path: &Path) -> io::Result<BenchmarkParameters> {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).map_err(|e| {
            Error::new(
                ErrorKind::InvalidData,
                format!("invalid settings file {}: {}", path.display(), e),
            )
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(BenchmarkParameters::default()),
        Err(e) => Err(e),
    }
}

// ============================================================================
// SYSTEM INFORMATION
// ============================================================================

fn print_system_info() {
    report::print_section("System Information");

    let info = os_info::get();
    println!("▸ OS: {} {}", info.os_type(), info.version());
    println!("▸ CPU: {}", cpu_brand());

    let sys = sysinfo::System::new_all();
    println!("▸ Logical CPUs: {}", sys.cpus().len());
    println!(
        "▸ Total memory: {:.1} GiB",
        sys.total_memory() as f64 / (1024.0 * 1024.0 * 1024.0)
    );
    println!();
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn cpu_brand() -> String {
    raw_cpuid::CpuId::new()
        .get_processor_brand_string()
        .map(|brand| brand.as_str().trim().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
fn cpu_brand() -> String {
    let sys = sysinfo::System::new_all();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

// ============================================================================
// IMAGE LOADING
// ============================================================================

/// Load the input image, failing with a diagnostic that names the path.
fn load_image(path: &str) -> io::Result<RgbImage> {
    let image = image::open(path).map_err(|e| {
        Error::new(
            ErrorKind::InvalidData,
            format!("Failed to read image {}: {}", path, e),
        )
    })?;
    Ok(image.to_rgb8())
}

// ============================================================================
// BENCHMARK DRIVER
// ============================================================================

pub fn run_benchmark() -> io::Result<()> {
    report::print_banner("Coin Segmentation Benchmark");

    print_system_info();

    let parameters = load_parameters(Path::new(SETTINGS_PATH))?;

    report::print_section("Benchmark Parameters");
    println!("▸ Trials: {}", parameters.trial_count);
    println!("▸ Image: {}", parameters.image_path);
    println!();

    let image = load_image(&parameters.image_path)?;
    println!(
        "Loaded {} ({}x{} px)\n",
        parameters.image_path,
        image.width(),
        image.height()
    );

    let runner = TrialRunner::new(parameters.trial_count);
    let pb = ProgressBar::new(parameters.trial_count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} trials {wide_msg}")
            .unwrap()
            .progress_chars("##-"),
    );
    let run_times = runner.run_observed(|| segment_coins(&image), |_| pb.inc(1));
    pb.finish_with_message("done");

    let summary = StatsSummary::from_samples(&run_times);

    println!();
    report::print_results(&summary);
    println!();
    println!("{}", report::summary_table(&summary, run_times.len()));

    // Exports are best-effort; the console report above is the contract.
    if let Err(e) = save_run_times(&run_times, Path::new(RUN_TIMES_PATH)) {
        eprintln!("⚠️ Failed to save {}: {}", RUN_TIMES_PATH, e);
    }
    if let Err(e) = save_summary(&summary, run_times.len(), Path::new(SUMMARY_PATH)) {
        eprintln!("⚠️ Failed to save {}: {}", SUMMARY_PATH, e);
    }

    Ok(())
}

// ============================================================================
// RESULT EXPORT
// ============================================================================

fn save_run_times(run_times: &[f64], path: &Path) -> io::Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer
        .write_record(["trial", "duration_us"])
        .map_err(csv_error)?;
    for (i, t) in run_times.iter().enumerate() {
        writer
            .write_record([i.to_string(), format!("{:.2}", t)])
            .map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_error(e: csv::Error) -> Error {
    Error::new(ErrorKind::Other, e)
}

#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    trials: usize,
    unit: &'static str,
    #[serde(flatten)]
    summary: &'a StatsSummary,
}

fn save_summary(summary: &StatsSummary, trials: usize, path: &Path) -> io::Result<()> {
    let record = SummaryRecord {
        trials,
        unit: "microseconds",
        summary,
    };
    fs::write(path, serde_json::to_string_pretty(&record)?)
}

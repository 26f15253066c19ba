use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use coinpair::config::PipelineConfig;

/// Finds coin-like blobs in two photographs of the same set of objects and
/// writes each matched pair side by side for visual inspection.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// First input photograph
    file1: PathBuf,

    /// Second input photograph; omit it to just dump crops of the first
    file2: Option<PathBuf>,

    /// Output directory (defaults to the local timestamp)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Invert the mask after thresholding, for objects shot on a light background
    #[arg(short = 'l', long)]
    light_background: bool,

    /// Also write the binary masks (th1.jpg / th2.jpg) into the output directory
    #[arg(long)]
    debug_masks: bool,

    /// Discard regions whose width or height does not exceed this many pixels
    #[arg(long, default_value_t = 50)]
    min_region_size: u32,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let config = PipelineConfig {
        min_region_size: cli.min_region_size,
        light_background: cli.light_background,
        debug_masks: cli.debug_masks,
        output_dir: cli.output,
        ..PipelineConfig::default()
    };

    match coinpair::run(&cli.file1, cli.file2.as_deref(), &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "Dataset Statistics")]
#[command(version = "0.1.0")]
pub struct Args {
    /// Directory containing one magnitude CSV file per track.
    #[arg(long)]
    pub data_dir: PathBuf,

    /// Output file for the per-bin mean/std table.
    #[arg(long, default_value = "scaler.csv")]
    pub output: PathBuf,

    /// FFT size used to compute the spectrograms.
    #[arg(long, default_value_t = 4096)]
    pub nfft: usize,

    /// Audio sample rate in Hz.
    #[arg(long, default_value_t = 44100)]
    pub sample_rate: u32,

    /// Maximum model bandwidth in Hz.
    #[arg(long, default_value_t = 16000.0)]
    pub bandwidth: f32,
}

mod args;
mod tracks;

use args::Args;
use candle_core::{Device, Tensor};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use unmix::frequency::bandwidth_to_max_bin;
use unmix::statistics::StreamingStats;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let track_paths = tracks::find_tracks(&args.data_dir)?;
    if track_paths.is_empty() {
        return Err(format!("No track files found in {}", args.data_dir.display()).into());
    }
    log::info!("Found {} tracks", track_paths.len());

    let bins = args.nfft / 2 + 1;
    let device = Device::Cpu;
    let mut stats = StreamingStats::new();

    let progress = ProgressBar::new(track_paths.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] {eta_precise} | {msg}")?,
    );
    progress.set_message("Computing dataset statistics");

    for path in &track_paths {
        let file = File::open(path)?;
        let frames = tracks::read_frames(BufReader::new(file))?;

        if frames.is_empty() {
            log::warn!("Skipping empty track {}", path.display());
            progress.inc(1);
            continue;
        }
        if frames[0].len() != bins {
            return Err(format!(
                "Track {} has {} bins per frame, expected {} for nfft {}",
                path.display(),
                frames[0].len(),
                bins,
                args.nfft
            )
            .into());
        }

        let num_frames = frames.len();
        let flat: Vec<f32> = frames.into_iter().flatten().collect();
        let magnitudes = Tensor::from_vec(flat, (num_frames, bins), &device)?;
        stats.update_spectrogram(&magnitudes)?;

        progress.inc(1);
    }
    progress.finish();

    let (mean, std) = stats.finalize()?;

    let max_bin = bandwidth_to_max_bin(args.sample_rate, args.nfft, args.bandwidth)?;
    log::info!(
        "Model input capped at bin {} of {} ({} Hz bandwidth)",
        max_bin,
        bins,
        args.bandwidth
    );

    let file = File::create(&args.output)?;
    tracks::write_stats(&mut BufWriter::new(file), &mean, &std)?;
    log::info!("Statistics written to {}", args.output.display());

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::init(LevelFilter::Info, Config::default())?;

    Ok(args)
}

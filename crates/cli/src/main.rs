use std::path::PathBuf;
use std::process;

use clap::Parser;

use imgseq_core::capture::args::SourceOptions;
use imgseq_core::capture::sequence::ImageSequence;

/// Sequential image-set reader: enumerates images, pairs them with
/// bounding-box annotations and serves them one frame at a time.
#[derive(Parser)]
#[command(name = "imgseq")]
struct Cli {
    /// Write each frame's grayscale image to this directory as <stem>_gray.png.
    #[arg(long)]
    gray_dir: Option<PathBuf>,

    /// Stop after this many frames.
    #[arg(long)]
    limit: Option<usize>,

    /// Source arguments: -f <file> (repeatable), -fdir <dir>, -bboxdir <dir>,
    /// -root/-inroot <prefix>, -fx/-fy/-cx/-cy <value>.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    source_args: Vec<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut arguments = cli.source_args;
    let options = SourceOptions::parse(&mut arguments);
    if !arguments.is_empty() {
        log::debug!("arguments left for downstream consumers: {arguments:?}");
    }

    let mut sequence = ImageSequence::from_options(options)?;
    log::info!("opened sequence with {} image(s)", sequence.len());

    if let Some(dir) = &cli.gray_dir {
        std::fs::create_dir_all(dir)?;
    }

    let limit = cli.limit.unwrap_or(usize::MAX);
    let total = sequence.len();
    let mut served = 0usize;

    while served < limit {
        let Some(frame) = sequence.next_frame().cloned() else {
            break;
        };
        served += 1;

        let k = frame.intrinsics();
        log::info!(
            "frame {}/{} {}: {}x{} fx={:.1} fy={:.1} cx={:.1} cy={:.1} boxes={} progress={:.2}",
            sequence.frame_num(),
            total,
            frame.name(),
            frame.width(),
            frame.height(),
            k.fx,
            k.fy,
            k.cx,
            k.cy,
            sequence.bounding_boxes().len(),
            sequence.progress(),
        );

        if frame.is_empty() {
            continue;
        }
        if let Some(dir) = &cli.gray_dir {
            let out = dir.join(format!("{}_gray.png", frame.name()));
            frame.gray().save(&out)?;
        }
    }

    Ok(())
}

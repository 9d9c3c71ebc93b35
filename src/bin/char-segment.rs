use clap::Parser;
use glyphkit::cli::SegmentArgs;
use glyphkit::segment::Segmenter;
use glyphkit::{logging, SegmentParams};

fn main() -> anyhow::Result<()> {
    let args = SegmentArgs::parse();
    logging::init(&args.log_level);

    tracing::info!("Starting char-segment v{}", env!("CARGO_PKG_VERSION"));

    let segmenter = Segmenter::new(SegmentParams::from(&args))?;
    let report = segmenter.segment_file(&args.input, &args.output)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Saved {} character images to {}",
            report.count,
            args.output.display()
        );
    }

    Ok(())
}

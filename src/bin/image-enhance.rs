use clap::Parser;
use glyphkit::cli::EnhanceArgs;
use glyphkit::{enhance, logging, EnhanceParams};

fn main() -> anyhow::Result<()> {
    let args = EnhanceArgs::parse();
    logging::init(&args.log_level);

    let params = EnhanceParams::from(&args);
    tracing::info!("Starting image-enhance v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Enhancing {} into {} (sharpen {}, contrast {}, denoise {})",
        args.input.display(),
        args.output.display(),
        params.sharpen,
        params.contrast,
        params.denoise
    );

    let report = enhance::process_folder(&args.input, &args.output, params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "All images processed: {} enhanced, {} failed",
            report.enhanced.len(),
            report.failed.len()
        );
    }

    Ok(())
}

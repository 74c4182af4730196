use bgstrip::image_pipeline::{BackgroundStripPipeline, PngCompression, StripConfig};
use bgstrip::logger;

use tracing::info;

const INPUT_PATH: &str = "pizza-logo.png";
const OUTPUT_PATH: &str = "pizza-logo-transparent.png";

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting bgstrip...");

    let config = StripConfig::builder()
        .compression(PngCompression::Fast)
        .build();
    let pipeline = BackgroundStripPipeline::new(config);

    info!("Background strip pipeline initialized");
    info!("Threshold: {}", pipeline.config().threshold);
    info!("Compression: {:?}", pipeline.config().compression);

    pipeline.convert_file(INPUT_PATH, OUTPUT_PATH)?;

    println!("Logo with transparent background created successfully!");

    Ok(())
}

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use facetint_core::detection::infrastructure::json_landmark_detector::JsonLandmarkDetector;
use facetint_core::geometry::RegionGeometryBuilder;
use facetint_core::io::domain::image_reader::ImageReader;
use facetint_core::io::domain::image_writer::ImageWriter;
use facetint_core::io::infrastructure::image_file_reader::ImageFileReader;
use facetint_core::io::infrastructure::image_file_writer::ImageFileWriter;
use facetint_core::pipeline::apply_makeup_use_case::ApplyMakeupUseCase;
use facetint_core::pipeline::makeup_request::{MakeupRequest, MakeupType};
use facetint_core::pipeline::pipeline_logger::StdoutPipelineLogger;
use facetint_core::shared::constants::IMAGE_EXTENSIONS;

/// Lip color and blush for face photographs, driven by precomputed landmarks.
#[derive(Parser, Debug)]
#[command(name = "facetint")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file; the format follows the extension.
    output: PathBuf,

    /// JSON file with the face landmarks for the input image.
    #[arg(long)]
    landmarks: PathBuf,

    /// Lip color: palette name, #hex, rgb(...) or rgba(...).
    #[arg(long)]
    lips_color: Option<String>,

    /// Lip color strength (0-100, clamped).
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    lips_intensity: i64,

    /// Blush color: palette name, #hex, rgb(...) or rgba(...).
    #[arg(long)]
    cheeks_color: Option<String>,

    /// Blush strength (0-100, clamped).
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    cheeks_intensity: i64,

    /// Products to apply: lips, cheeks or both.
    #[arg(long, default_value = "both")]
    makeup_type: String,
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
    validate(&cli)?;

    let request = build_request(&cli)?;
    let frame = ImageFileReader::new().read(&cli.input)?;
    log::info!(
        "Loaded {} ({}x{})",
        cli.input.display(),
        frame.width(),
        frame.height()
    );

    let detector = JsonLandmarkDetector::from_path(&cli.landmarks)?;
    let mut use_case = ApplyMakeupUseCase::new(
        Box::new(detector),
        RegionGeometryBuilder::new(),
        Box::new(StdoutPipelineLogger::new()),
    );

    let output = use_case
        .apply_makeup(Some(&frame), &request)
        .ok_or("Input image is empty")?;

    ImageFileWriter::new().write(&cli.output, &output)?;
    use_case.logger().summary();
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

fn build_request(cli: &Cli) -> Result<MakeupRequest, Box<dyn std::error::Error>> {
    let makeup_type: MakeupType = cli.makeup_type.parse()?;
    let request = MakeupRequest::new(
        cli.lips_color.as_deref(),
        cli.lips_intensity,
        cli.cheeks_color.as_deref(),
        cli.cheeks_intensity,
    );
    Ok(request.restricted_to(makeup_type))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !cli.landmarks.exists() {
        return Err(format!("Landmarks file not found: {}", cli.landmarks.display()).into());
    }
    if !is_image(&cli.output) {
        return Err(format!(
            "Output must be an image file ({}), got {}",
            IMAGE_EXTENSIONS.join(", "),
            cli.output.display()
        )
        .into());
    }
    cli.makeup_type.parse::<MakeupType>()?;
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

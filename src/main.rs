//! whatsup CLI — print the clockwise rotation that orients a scanned photo.

use std::path::PathBuf;

use clap::Parser;

use whatsup::{apply_rotation, DetectorProfile, OrientationSearch, SearchConfig, WhatsupError};

#[derive(Parser)]
#[command(name = "whatsup")]
#[command(about = "Print the clockwise rotation (0, 90, 180, or 270 degrees) that puts a scanned photo the right way up")]
#[command(version)]
struct Cli {
    /// Path to the input image.
    image: PathBuf,

    /// SeetaFace model file used as a detection profile, highest priority
    /// first (repeatable). With no models the brightness fallback decides.
    #[cfg(feature = "rustface")]
    #[arg(long = "model", value_name = "PATH")]
    models: Vec<PathBuf>,

    /// Also write a copy of the input rotated by the detected angle.
    #[arg(long, value_name = "PATH")]
    rotated: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn build_profiles(cli: &Cli) -> Result<Vec<DetectorProfile>, WhatsupError> {
    #[cfg(feature = "rustface")]
    {
        let mut profiles = Vec::with_capacity(cli.models.len());
        for path in &cli.models {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let detector = whatsup::SeetaFaceDetector::from_model_path(path)?;
            profiles.push(DetectorProfile::new(name, Box::new(detector)));
        }
        Ok(profiles)
    }
    #[cfg(not(feature = "rustface"))]
    {
        let _ = cli;
        Ok(Vec::new())
    }
}

fn run(cli: &Cli) -> Result<(), WhatsupError> {
    if !cli.image.is_file() {
        return Err(WhatsupError::InputNotFound(cli.image.display().to_string()));
    }

    let original = image::open(&cli.image).map_err(|e| WhatsupError::Decode(e.to_string()))?;
    if original.width() == 0 || original.height() == 0 {
        return Err(WhatsupError::ZeroDimensions);
    }
    tracing::debug!(
        width = original.width(),
        height = original.height(),
        "loaded {}",
        cli.image.display()
    );

    let profiles = build_profiles(cli)?;
    let rotation = OrientationSearch::new(profiles)
        .config(SearchConfig::default())
        .run(&original);

    println!("{rotation}");

    if let Some(out) = &cli.rotated {
        let corrected = apply_rotation(&original, rotation);
        corrected
            .save(out)
            .map_err(|e| WhatsupError::Encode(e.to_string()))?;
        tracing::debug!("rotated copy written to {}", out.display());
    }

    Ok(())
}

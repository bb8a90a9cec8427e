use camino::Utf8PathBuf;
use clap::Parser;
use color_eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ssim_index::configuration::{self, Configuration};
use ssim_index::report::{OutputFormat, Report};
use ssim_index::{compare_decoded, source};

/// Print the global SSIM index of two images.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Reference image (default: pic.jpg).
    reference: Option<Utf8PathBuf>,
    /// Candidate image (default: pic2.jpg).
    candidate: Option<Utf8PathBuf>,
    /// Report the pair as similar when the index is above this value.
    #[arg(short, long)]
    threshold: Option<f64>,
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
    #[arg(long)]
    dynamic_range: Option<f64>,
    #[arg(long)]
    k1: Option<f64>,
    #[arg(long)]
    k2: Option<f64>,
}

impl Args {
    fn apply(self, configuration: Configuration) -> Configuration {
        Configuration {
            reference: self.reference.unwrap_or(configuration.reference),
            candidate: self.candidate.unwrap_or(configuration.candidate),
            dynamic_range: self.dynamic_range.unwrap_or(configuration.dynamic_range),
            k1: self.k1.unwrap_or(configuration.k1),
            k2: self.k2.unwrap_or(configuration.k2),
            threshold: self.threshold.or(configuration.threshold),
            format: self.format.unwrap_or(configuration.format),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let args = Args::parse();
    let configuration = args.apply(configuration::load()?);
    info!(
        reference = %configuration.reference,
        candidate = %configuration.candidate,
        "comparing images"
    );

    let reference = source::open(&configuration.reference)?;
    let candidate = source::open(&configuration.candidate)?;
    for (path, image) in [
        (&configuration.reference, &reference),
        (&configuration.candidate, &candidate),
    ] {
        if source::is_degenerate(image) {
            warn!(%path, "image has at most one pixel, the index will not be finite");
        }
    }

    let ssim = compare_decoded(&reference, &candidate, &configuration.constants())?;
    let report = Report {
        reference: &configuration.reference,
        candidate: &configuration.candidate,
        ssim,
        similar: configuration.threshold.map(|threshold| ssim > threshold),
    };
    println!("{}", report.render(configuration.format)?);

    Ok(())
}

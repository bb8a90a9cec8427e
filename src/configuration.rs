use camino::Utf8PathBuf;
use color_eyre::Result;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment};
use serde::Deserialize;

use crate::image_processing::similarity::SsimConstants;
use crate::report::OutputFormat;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// The first image to compare.
    pub reference: Utf8PathBuf,
    /// The image compared against the reference.
    pub candidate: Utf8PathBuf,
    /// Maximum luminance value (L).
    pub dynamic_range: f64,
    pub k1: f64,
    pub k2: f64,
    /// Images scoring above this are reported as similar.
    pub threshold: Option<f64>,
    pub format: OutputFormat,
}

impl Default for Configuration {
    fn default() -> Self {
        let constants = SsimConstants::default();

        Self {
            reference: "pic.jpg".into(),
            candidate: "pic2.jpg".into(),
            dynamic_range: constants.dynamic_range(),
            k1: constants.k1(),
            k2: constants.k2(),
            threshold: None,
            format: OutputFormat::Text,
        }
    }
}

impl Configuration {
    pub fn constants(&self) -> SsimConstants {
        SsimConstants::new(self.dynamic_range, self.k1, self.k2)
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Configuration> {
    let settings = builder.build()?;
    settings.try_deserialize().map_err(From::from)
}

/// Values stay strings; serde parses the numeric fields, so a path such as
/// `SSIM_REFERENCE=2024` is still read as a path.
fn environment() -> Environment {
    Environment::with_prefix("SSIM")
}

/// Read `ssim.{toml,yaml,json,...}` if present, then `SSIM_*` environment variables.
pub fn load() -> Result<Configuration> {
    build(
        Config::builder()
            .add_source(config::File::with_name("ssim").required(false))
            .add_source(environment()),
    )
}

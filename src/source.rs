use camino::Utf8Path;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use image::{DynamicImage, GenericImageView};
use tracing::{info, instrument};

/// Open and decode an image file, guessing the format from its extension.
#[instrument]
pub fn open(path: &Utf8Path) -> Result<DynamicImage> {
    let image = image::open(path).wrap_err_with(|| format!("could not open image {path}"))?;
    let (width, height) = image.dimensions();
    info!(width, height, color = ?image.color(), "decoded image");

    Ok(image)
}

/// Images with at most one pixel divide by zero in every statistic.
pub fn is_degenerate<I: GenericImageView>(image: &I) -> bool {
    let (width, height) = image.dimensions();
    u64::from(width) * u64::from(height) <= 1
}

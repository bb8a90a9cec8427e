use image::DynamicImage;
use tracing::{debug, instrument};

use super::luminance::{LuminanceField, NativeDepth};
use super::statistics::{covariance, Statistics};
use crate::error::Result;

/// Stabilizing constants of the SSIM formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SsimConstants {
    dynamic_range: f64,
    k1: f64,
    k2: f64,
    c1: f64,
    c2: f64,
}

impl SsimConstants {
    pub fn new(dynamic_range: f64, k1: f64, k2: f64) -> Self {
        Self {
            dynamic_range,
            k1,
            k2,
            c1: (k1 * dynamic_range).powi(2),
            c2: (k2 * dynamic_range).powi(2),
        }
    }

    pub fn dynamic_range(&self) -> f64 {
        self.dynamic_range
    }

    pub fn k1(&self) -> f64 {
        self.k1
    }

    pub fn k2(&self) -> f64 {
        self.k2
    }

    pub fn c1(&self) -> f64 {
        self.c1
    }

    pub fn c2(&self) -> f64 {
        self.c2
    }
}

impl Default for SsimConstants {
    fn default() -> Self {
        Self::new(255.0, 0.01, 0.03)
    }
}

/// Compute the global Structural Similarity Index between two luminance fields.
///
/// The result is not clamped to `[-1, 1]`.
#[instrument(skip_all)]
pub fn similarity_index<A, B>(field_a: &A, field_b: &B, constants: &SsimConstants) -> Result<f64>
where
    A: LuminanceField + ?Sized,
    B: LuminanceField + ?Sized,
{
    let covariance = covariance(field_a, field_b)?;
    let a = Statistics::of(field_a);
    let b = Statistics::of(field_b);
    debug!(
        mean_a = a.mean,
        mean_b = b.mean,
        std_dev_a = a.standard_deviation,
        std_dev_b = b.standard_deviation,
        covariance,
        "luminance statistics"
    );

    let numerator = (2.0 * a.mean * b.mean + constants.c1) * (2.0 * covariance + constants.c2);
    let denominator = (a.mean * a.mean + b.mean * b.mean + constants.c1)
        * (a.variance() + b.variance() + constants.c2);
    let ssim_index = numerator / denominator;
    debug!(ssim_index, "computed similarity index");

    Ok(ssim_index)
}

/// [`similarity_index`] with `L = 255`, `K1 = 0.01`, `K2 = 0.03`.
pub fn ssim<A, B>(field_a: &A, field_b: &B) -> Result<f64>
where
    A: LuminanceField + ?Sized,
    B: LuminanceField + ?Sized,
{
    similarity_index(field_a, field_b, &SsimConstants::default())
}

pub fn is_similar<A, B>(
    field_a: &A,
    field_b: &B,
    constants: &SsimConstants,
    threshold: f64,
) -> Result<bool>
where
    A: LuminanceField + ?Sized,
    B: LuminanceField + ?Sized,
{
    let similarity = similarity_index(field_a, field_b, constants)?;
    Ok(similarity > threshold)
}

/// Score two decoded images, each read at its own channel depth.
pub fn compare_decoded(
    image_a: &DynamicImage,
    image_b: &DynamicImage,
    constants: &SsimConstants,
) -> Result<f64> {
    similarity_index(&NativeDepth(image_a), &NativeDepth(image_b), constants)
}

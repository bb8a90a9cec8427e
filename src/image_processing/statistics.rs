//! Mean, standard deviation and covariance of luminance fields.
//!
//! Every statistic divides by `W·H - 1`, mean included. This is the
//! convention the SSIM stabilizing constants are calibrated against and it
//! is kept as-is: a 1x1 image divides by zero and the resulting `inf`/`NaN`
//! is returned to the caller unchanged.
//!
//! Each statistic is a reduction over the pixels read on demand; nothing is
//! buffered between passes.

use super::luminance::{samples, same_dimensions, LuminanceField};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f64,
    pub standard_deviation: f64,
}

impl Statistics {
    pub fn of<F>(field: &F) -> Self
    where
        F: LuminanceField + ?Sized,
    {
        let mean = mean(field);
        let standard_deviation = (squared_deviations(field, mean) / denominator(field)).sqrt();

        Self {
            mean,
            standard_deviation,
        }
    }

    pub fn variance(&self) -> f64 {
        self.standard_deviation * self.standard_deviation
    }
}

fn denominator<F: LuminanceField + ?Sized>(field: &F) -> f64 {
    field.len() as f64 - 1.0
}

fn squared_deviations<F: LuminanceField + ?Sized>(field: &F, mean: f64) -> f64 {
    samples(field).map(|sample| (sample - mean).powi(2)).sum()
}

pub fn mean<F>(field: &F) -> f64
where
    F: LuminanceField + ?Sized,
{
    samples(field).sum::<f64>() / denominator(field)
}

pub fn variance<F>(field: &F) -> f64
where
    F: LuminanceField + ?Sized,
{
    squared_deviations(field, mean(field)) / denominator(field)
}

pub fn standard_deviation<F>(field: &F) -> f64
where
    F: LuminanceField + ?Sized,
{
    variance(field).sqrt()
}

/// Fails with [`Error::DimensionMismatch`] before reading any pixel when the
/// two images differ in size.
pub fn covariance<A, B>(field_a: &A, field_b: &B) -> Result<f64>
where
    A: LuminanceField + ?Sized,
    B: LuminanceField + ?Sized,
{
    check_dimensions(field_a, field_b)?;

    let (mean_a, mean_b) = (mean(field_a), mean(field_b));
    let sum: f64 = samples(field_a)
        .zip(samples(field_b))
        .map(|(a, b)| (a - mean_a) * (b - mean_b))
        .sum();

    Ok(sum / denominator(field_a))
}

pub(crate) fn check_dimensions<A, B>(field_a: &A, field_b: &B) -> Result<()>
where
    A: LuminanceField + ?Sized,
    B: LuminanceField + ?Sized,
{
    if !same_dimensions(field_a, field_b) {
        return Err(Error::DimensionMismatch {
            expected: field_a.dimensions(),
            actual: field_b.dimensions(),
        });
    }

    Ok(())
}

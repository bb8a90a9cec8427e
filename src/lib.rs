//! Global Structural Similarity (SSIM) index between two images.
//!
//! Both images are reduced to single-channel luminance, their means,
//! standard deviations and covariance are taken over the whole image and
//! combined with the usual SSIM formula. There is no sliding window.

pub mod configuration;
pub mod error;
pub mod image_processing;
pub mod report;
pub mod source;

pub use error::{Error, Result};
pub use image_processing::luminance::{Intensity, Luminance, LuminanceField, NativeDepth};
pub use image_processing::similarity::{
    compare_decoded, is_similar, similarity_index, ssim, SsimConstants,
};
pub use image_processing::statistics::{
    covariance, mean, standard_deviation, variance, Statistics,
};

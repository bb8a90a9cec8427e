pub mod luminance;
pub mod similarity;
pub mod statistics;

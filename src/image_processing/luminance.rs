use image::{DynamicImage, GenericImageView, Pixel};

/// A channel value that can be widened to the 16-bit color scale `[0, 0xffff]`.
pub trait Intensity: Copy {
    fn to_sixteen_bit(self) -> u32;
}

impl Intensity for u8 {
    fn to_sixteen_bit(self) -> u32 {
        u32::from(self) * 0x101
    }
}

impl Intensity for u16 {
    fn to_sixteen_bit(self) -> u32 {
        u32::from(self)
    }
}

impl Intensity for f32 {
    fn to_sixteen_bit(self) -> u32 {
        (f64::from(self.clamp(0.0, 1.0)) * 65535.0).round() as u32
    }
}

/// Single-channel brightness of a pixel on the 8-bit scale `[0, 255]`.
///
/// The pixel is viewed as RGBA, its red channel is premultiplied by alpha
/// in 16-bit space and the low byte is dropped. Gray pixels expand to equal
/// channels, so they are read as-is. No channel weighting or gamma
/// correction is applied.
pub trait Luminance {
    fn luminance(&self) -> f64;
}

impl<P> Luminance for P
where
    P: Pixel,
    P::Subpixel: Intensity,
{
    fn luminance(&self) -> f64 {
        let [red, _, _, alpha] = self.to_rgba().0;
        let red = red.to_sixteen_bit() * alpha.to_sixteen_bit() / 0xffff;
        f64::from(red >> 8)
    }
}

/// Read-only grid of luminance samples, computed on demand per pixel.
pub trait LuminanceField {
    fn dimensions(&self) -> (u32, u32);

    /// `x < width` and `y < height` must hold.
    fn luminance_at(&self, x: u32, y: u32) -> f64;

    fn len(&self) -> usize {
        let (width, height) = LuminanceField::dimensions(self);
        width as usize * height as usize
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I> LuminanceField for I
where
    I: GenericImageView,
    I::Pixel: Luminance,
{
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn luminance_at(&self, x: u32, y: u32) -> f64 {
        self.get_pixel(x, y).luminance()
    }
}

/// A decoded image read at its own channel depth.
///
/// `DynamicImage` itself only exposes an 8-bit `Rgba` view, which would
/// round 16-bit and float samples before the luminance is taken.
#[derive(Debug, Clone, Copy)]
pub struct NativeDepth<'a>(pub &'a DynamicImage);

impl LuminanceField for NativeDepth<'_> {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self.0)
    }

    fn luminance_at(&self, x: u32, y: u32) -> f64 {
        match self.0 {
            DynamicImage::ImageLuma8(image) => image.get_pixel(x, y).luminance(),
            DynamicImage::ImageLumaA8(image) => image.get_pixel(x, y).luminance(),
            DynamicImage::ImageRgb8(image) => image.get_pixel(x, y).luminance(),
            DynamicImage::ImageRgba8(image) => image.get_pixel(x, y).luminance(),
            DynamicImage::ImageLuma16(image) => image.get_pixel(x, y).luminance(),
            DynamicImage::ImageLumaA16(image) => image.get_pixel(x, y).luminance(),
            DynamicImage::ImageRgb16(image) => image.get_pixel(x, y).luminance(),
            DynamicImage::ImageRgba16(image) => image.get_pixel(x, y).luminance(),
            DynamicImage::ImageRgb32F(image) => image.get_pixel(x, y).luminance(),
            DynamicImage::ImageRgba32F(image) => image.get_pixel(x, y).luminance(),
            other => other.get_pixel(x, y).luminance(),
        }
    }
}

/// Row-major iterator over every sample of a field.
pub fn samples<F>(field: &F) -> impl Iterator<Item = f64> + '_
where
    F: LuminanceField + ?Sized,
{
    let (width, height) = field.dimensions();
    (0..height).flat_map(move |y| (0..width).map(move |x| field.luminance_at(x, y)))
}

pub fn same_dimensions<A, B>(a: &A, b: &B) -> bool
where
    A: LuminanceField + ?Sized,
    B: LuminanceField + ?Sized,
{
    a.dimensions() == b.dimensions()
}

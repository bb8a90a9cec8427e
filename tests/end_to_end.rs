use camino::Utf8PathBuf;
use image::{GrayImage, ImageBuffer, Luma, Rgb, RgbImage};
use ssim_index::{compare_decoded, source, ssim, Error, SsimConstants};

fn scratch_dir(test: &str) -> Utf8PathBuf {
    let dir = std::env::temp_dir().join(format!("ssim-index-{test}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    Utf8PathBuf::from_path_buf(dir).unwrap()
}

fn gray_square(value: u8) -> GrayImage {
    ImageBuffer::from_pixel(4, 4, Luma([value]))
}

#[test]
fn identical_files_score_one() {
    let dir = scratch_dir("identical");
    let (first, second) = (dir.join("a.png"), dir.join("b.png"));
    gray_square(128).save(&first).unwrap();
    gray_square(128).save(&second).unwrap();

    let a = source::open(&first).unwrap();
    let b = source::open(&second).unwrap();
    let score = compare_decoded(&a, &b, &SsimConstants::default()).unwrap();

    assert!((score - 1.0).abs() < 1e-9);

    std::fs::remove_dir_all(&dir).unwrap();
    assert!(!dir.exists());
}

#[test]
fn one_changed_corner_scores_between_zero_and_one() {
    let dir = scratch_dir("corner");
    let (first, second) = (dir.join("a.png"), dir.join("b.png"));
    let mut changed = gray_square(128);
    changed.put_pixel(0, 0, Luma([0]));
    gray_square(128).save(&first).unwrap();
    changed.save(&second).unwrap();

    let a = source::open(&first).unwrap();
    let b = source::open(&second).unwrap();
    let score = compare_decoded(&a, &b, &SsimConstants::default()).unwrap();

    assert!(score > 0.0);
    assert!(score < 1.0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn same_score_on_every_run() {
    let dir = scratch_dir("repeat");
    let path = dir.join("repeat.png");
    let image: RgbImage =
        ImageBuffer::from_fn(6, 5, |x, y| Rgb([(x * 40) as u8, (y * 50) as u8, 90]));
    image.save(&path).unwrap();

    let decoded = source::open(&path).unwrap();
    let reference = ssim(&image, &decoded.to_rgb8()).unwrap();
    let first = compare_decoded(&decoded, &decoded, &SsimConstants::default()).unwrap();
    let second = compare_decoded(&decoded, &decoded, &SsimConstants::default()).unwrap();

    assert_eq!(first, second);
    assert!((reference - 1.0).abs() < 1e-9);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn files_of_different_size_are_rejected() {
    let dir = scratch_dir("size");
    let (first, second) = (dir.join("a.png"), dir.join("b.png"));
    GrayImage::new(4, 4).save(&first).unwrap();
    GrayImage::new(4, 5).save(&second).unwrap();

    let a = source::open(&first).unwrap();
    let b = source::open(&second).unwrap();

    assert_eq!(
        compare_decoded(&a, &b, &SsimConstants::default()).unwrap_err(),
        Error::DimensionMismatch {
            expected: (4, 4),
            actual: (4, 5),
        }
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn undecodable_file_is_an_error() {
    let dir = scratch_dir("garbage");
    let path = dir.join("garbage.png");
    std::fs::write(&path, b"not an image").unwrap();

    assert!(source::open(&path).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

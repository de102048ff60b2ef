//! End-to-end tests: image files in, shares out, stacked overlay back.

use std::path::{Path, PathBuf};

use evc::{
    encode_files, encode_images, halftone, load_binary, stack, write_share, AlphaMode,
    EncodeOptions, EvcError, GrayscaleImage, PrepareOptions, TargetSize, Tone,
};
use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

/// A black square on white, the classic secret.
fn secret_image(size: u32) -> GrayImage {
    let lo = size / 4;
    let hi = size - size / 4;
    GrayImage::from_fn(size, size, |x, y| {
        if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
            Luma([0])
        } else {
            Luma([255])
        }
    })
}

/// A colour gradient cover that is not square.
fn cover_image() -> RgbImage {
    RgbImage::from_fn(48, 36, |x, y| Rgb([(x * 5) as u8, (y * 7) as u8, 128]))
}

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let secret = dir.join("secret.png");
    let cover = dir.join("cover.png");
    secret_image(32).save(&secret).unwrap();
    cover_image().save(&cover).unwrap();
    (secret, cover)
}

fn options(size: u32) -> EncodeOptions {
    EncodeOptions {
        prepare: PrepareOptions {
            size: TargetSize::new(size, size),
            ..PrepareOptions::default()
        },
        ..EncodeOptions::default()
    }
}

#[test]
fn test_files_to_shares() {
    let dir = tempdir().unwrap();
    let (secret, cover) = write_inputs(dir.path());

    let pair = encode_files(&secret, &cover, &options(32)).unwrap();

    assert_eq!(pair.dimensions(), (64, 64));
    assert_eq!(pair.first().dimensions(), pair.second().dimensions());
}

#[test]
fn test_default_size_is_256() {
    let dir = tempdir().unwrap();
    let (secret, cover) = write_inputs(dir.path());

    let pair = encode_files(&secret, &cover, &EncodeOptions::default()).unwrap();

    assert_eq!(pair.dimensions(), (512, 512));
}

#[test]
fn test_repeated_runs_identical() {
    let dir = tempdir().unwrap();
    let (secret, cover) = write_inputs(dir.path());

    let a = encode_files(&secret, &cover, &options(32)).unwrap();
    let b = encode_files(&secret, &cover, &options(32)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_stack_darker_inside_secret() {
    let secret = DynamicImage::ImageLuma8(secret_image(32));
    let cover = DynamicImage::ImageRgb8(cover_image());
    let pair = encode_images(&secret, &cover, &options(32)).unwrap();
    let stacked = pair.stack();

    // Source pixels 8..24 are black; count over share coordinates
    let mut inside = 0;
    let mut inside_black = 0;
    let mut outside = 0;
    let mut outside_black = 0;
    for y in 0..64 {
        for x in 0..64 {
            let black = stacked.get(x, y) == Some(Tone::Black);
            if (16..48).contains(&x) && (16..48).contains(&y) {
                inside += 1;
                inside_black += black as usize;
            } else {
                outside += 1;
                outside_black += black as usize;
            }
        }
    }

    assert_eq!(inside_black, inside);
    assert_eq!(outside_black * 2, outside);
}

#[test]
fn test_each_share_alone_is_half_black() {
    let secret = DynamicImage::ImageLuma8(secret_image(16));
    let cover = DynamicImage::ImageRgb8(cover_image());
    let pair = encode_images(&secret, &cover, &options(16)).unwrap();

    let total = 32 * 32;
    assert_eq!(pair.first().as_binary().black_count() * 2, total);
    assert_eq!(pair.second().as_binary().black_count() * 2, total);
}

#[test]
fn test_shares_roundtrip_through_disk() {
    let dir = tempdir().unwrap();
    let (secret, cover) = write_inputs(dir.path());
    let pair = encode_files(&secret, &cover, &options(16)).unwrap();

    let first = dir.path().join("share1.png");
    let second = dir.path().join("share2.png");
    write_share(pair.first(), &first, AlphaMode::TransparentWhite).unwrap();
    write_share(pair.second(), &second, AlphaMode::TransparentWhite).unwrap();

    let a = load_binary(&first, 128).unwrap();
    let b = load_binary(&second, 128).unwrap();

    assert_eq!(stack(&a, &b).unwrap(), pair.stack());
}

#[test]
fn test_missing_cover_is_load_error() {
    let dir = tempdir().unwrap();
    let (secret, _) = write_inputs(dir.path());

    let err = encode_files(&secret, &dir.path().join("absent.jpeg"), &options(8)).unwrap_err();

    match err {
        EvcError::ImageLoad { path, .. } => assert!(path.ends_with("absent.jpeg")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_one_pixel_pipeline() {
    let secret = GrayscaleImage::new(1, 1, vec![128]).unwrap();
    let cover = GrayscaleImage::new(1, 1, vec![127]).unwrap();

    let secret = halftone(&secret);
    let cover = halftone(&cover);
    assert_eq!(secret.samples(), vec![255]);
    assert_eq!(cover.samples(), vec![0]);

    // white secret, black cover: both shares carry the black pattern
    let pair = evc::generate_shares(&secret, &cover).unwrap();
    assert_eq!(pair.first().as_binary().samples(), vec![0, 255, 255, 0]);
    assert_eq!(pair.second().as_binary().samples(), vec![0, 255, 255, 0]);
}

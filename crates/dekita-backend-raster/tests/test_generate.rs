//! End-to-end tests for asset generation.
//!
//! These tests write real PNG files to temporary directories and decode them
//! again to check dimensions, pixels and byte-level determinism.

use dekita_backend_raster::compose::{generate_feature_graphic, generate_icon};
use dekita_backend_raster::png::{hash_png, read_rgb};
use dekita_backend_raster::ComposeError;
use dekita_spec::{BackendError, FeatureGraphicParams, FontSource, IconParams};

fn feature_params() -> FeatureGraphicParams {
    FeatureGraphicParams::default().with_font(FontSource::SystemDefault)
}

// ============================================================================
// Feature graphic
// ============================================================================

/// The written file decodes to a 1024x500 image with the gradient corners.
#[test]
fn test_feature_graphic_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assets").join("feature_graphic.png");

    let result = generate_feature_graphic(&feature_params(), &path).unwrap();
    assert_eq!((result.width, result.height), (1024, 500));
    assert_eq!(result.path, path);
    assert_eq!(std::fs::read(&path).unwrap(), result.png_data);
    assert_eq!(hash_png(&result.png_data), result.hash);

    let decoded = read_rgb(&path).unwrap();
    assert_eq!(decoded.dimensions(), (1024, 500));
    assert_eq!(decoded.get_rgb8(0, 0), Some([76, 175, 80]));
    assert_eq!(decoded.get_rgb8(0, 499), Some([119, 199, 119]));
}

/// A font path that does not exist still produces the asset.
#[test]
fn test_feature_graphic_with_missing_font() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fg.png");
    let params = FeatureGraphicParams::default()
        .with_font(FontSource::file(dir.path().join("missing.ttf")));

    let result = generate_feature_graphic(&params, &path).unwrap();
    assert_eq!((result.width, result.height), (1024, 500));
    assert!(path.exists());
}

/// Two runs with the same parameters write identical bytes.
#[test]
fn test_feature_graphic_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let a = generate_feature_graphic(&feature_params(), &dir.path().join("a.png")).unwrap();
    let b = generate_feature_graphic(&feature_params(), &dir.path().join("b.png")).unwrap();
    assert_eq!(a.hash, b.hash);
    assert_eq!(a.png_data, b.png_data);
}

// ============================================================================
// Icon
// ============================================================================

/// The written icon has the ring centres on the calendar top edge.
#[test]
fn test_icon_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");

    let result = generate_icon(&IconParams::default(), &path).unwrap();
    assert_eq!((result.width, result.height), (1024, 1024));

    let decoded = read_rgb(&path).unwrap();
    for x in [256, 512, 768] {
        assert_eq!(decoded.get_rgb8(x, 180), Some([0x2E, 0x7D, 0x32]));
    }
}

/// Generating over an existing file replaces it.
#[test]
fn test_icon_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.png");
    std::fs::write(&path, b"old").unwrap();

    generate_icon(&IconParams::default().with_size(512), &path).unwrap();
    assert_eq!(read_rgb(&path).unwrap().dimensions(), (512, 512));
}

/// An output path under a regular file cannot be written.
#[test]
fn test_unwritable_output_is_png_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, b"file, not a directory").unwrap();

    let err = generate_icon(&IconParams::default(), &blocker.join("icon.png")).unwrap_err();
    assert!(matches!(err, ComposeError::Png(_)));
    assert_eq!(err.code(), "RASTER_002");
}

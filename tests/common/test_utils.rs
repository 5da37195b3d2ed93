use blockform::StageConfig;

/// Wire up logging once so dropped-instance warnings show with
/// `-- --nocapture`.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small deterministic stage: 3 layers of unit cubes with a 0.5 gap.
pub(crate) fn test_config() -> StageConfig {
    StageConfig {
        layers: 3,
        base_size: 1.0,
        gap: 0.5,
        seed: Some(42),
        ..StageConfig::default()
    }
}

pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

/// A solid-color RGBA test image.
pub(crate) fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> image::DynamicImage {
    image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        width,
        height,
        image::Rgba(rgba),
    ))
}

/// Encode an image to PNG bytes, as an upload would deliver them.
pub(crate) fn encode_png(img: &image::DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("png encoding");
    bytes
}

use std::path::Path;

use image::{io::Reader, DynamicImage, GenericImageView, RgbImage};

use crate::error::TileifyError;

/// Opens and decodes the image at `path`.
/// The format is sniffed from the file contents, falling back to the extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<DynamicImage, TileifyError> {
    let path = path.as_ref();
    let image = Reader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| TileifyError::from_io(path.to_path_buf(), err))?
        .decode()
        .map_err(|err| TileifyError::from_image(path.to_path_buf(), err))?;
    let (width, height) = image.dimensions();
    log::info!(
        "loaded {} ({width}x{height}, {:?})",
        path.display(),
        image.color()
    );
    return Ok(image);
}

/// Converts any pixel format to 8 bit RGB.
///
/// Grayscale is replicated across the three channels and alpha is dropped,
/// not blended against a background. Palettes are already expanded by the
/// decoder. Images that are already 8 bit RGB are passed through untouched.
pub fn normalize(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => {
            log::debug!("converting {:?} to Rgb8", other.color());
            other.to_rgb8()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ErrorKind;
    use image::{GrayAlphaImage, GrayImage, LumaA, Rgb, Rgba, RgbaImage};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn rgb_passes_through() {
        let mut rgb = RgbImage::new(9, 5);
        for (x, y, px) in rgb.enumerate_pixels_mut() {
            *px = Rgb([x as u8, y as u8, (x * y) as u8]);
        }
        let normalized = normalize(DynamicImage::ImageRgb8(rgb.clone()));
        assert_eq!(normalized, rgb);
        assert_eq!(normalize(DynamicImage::ImageRgb8(normalized.clone())), rgb);
    }

    #[test]
    fn alpha_is_dropped() {
        let mut rgba = RgbaImage::new(2, 1);
        rgba.put_pixel(0, 0, Rgba([10, 20, 30, 0]));
        rgba.put_pixel(1, 0, Rgba([10, 20, 30, 255]));
        let rgb = normalize(DynamicImage::ImageRgba8(rgba));
        assert_eq!(rgb.dimensions(), (2, 1));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([10, 20, 30]));
        assert_eq!(rgb.get_pixel(1, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn gray_is_replicated() {
        let gray = GrayImage::from_pixel(3, 4, image::Luma([77]));
        let rgb = normalize(DynamicImage::ImageLuma8(gray));
        assert_eq!(rgb.dimensions(), (3, 4));
        assert!(rgb.pixels().all(|px| px == &Rgb([77, 77, 77])));

        let gray_alpha = GrayAlphaImage::from_pixel(1, 1, LumaA([200, 3]));
        let rgb = normalize(DynamicImage::ImageLumaA8(gray_alpha));
        assert_eq!(rgb.get_pixel(0, 0), &Rgb([200, 200, 200]));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("does_not_exist.png")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceNotFound);
    }

    #[test]
    fn load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["not_an_image.png", "not_an_image.txt"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"this is not an image").unwrap();
            let err = load(&path).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Decode, "{name}: {err}");
        }
    }

    #[test]
    fn load_truncated_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        let mut rng = StdRng::seed_from_u64(5);
        RgbImage::from_fn(64, 64, |_, _| Rgb(rng.gen())).save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

        let err = load(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode, "{err}");
    }

    #[test]
    fn load_png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.png");
        let rgba = RgbaImage::from_pixel(12, 20, Rgba([1, 2, 3, 128]));
        rgba.save(&path).unwrap();

        let image = load(&path).unwrap();
        assert_eq!(image.dimensions(), (12, 20));
        let rgb = normalize(image);
        assert!(rgb.pixels().all(|px| px == &Rgb([1, 2, 3])));
    }
}

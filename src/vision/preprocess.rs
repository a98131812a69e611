//! Image preprocessing
//!
//! Decodes a meal photo into the NCHW float tensor the model expects:
//! RGB, 224x224, ImageNet-normalized, batch of one.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageReader};
use tract_onnx::prelude::{tract_ndarray, Tensor};

use super::loader::INPUT_SIZE;
use crate::error::Result;

pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Load an image file and convert it to a model input tensor
///
/// The format is detected from the file contents, not its extension.
pub fn preprocess_image(path: &Path) -> Result<Tensor> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let (width, height) = img.dimensions();
    tracing::debug!("Decoded {} ({}x{})", path.display(), width, height);
    Ok(image_to_tensor(&img))
}

/// Convert a decoded image to a `[1, 3, 224, 224]` tensor
pub fn image_to_tensor(img: &DynamicImage) -> Tensor {
    let size = INPUT_SIZE as u32;
    let rgb = img.to_rgb8();
    let resized = image::imageops::resize(&rgb, size, size, FilterType::Triangle);

    tract_ndarray::Array4::from_shape_fn((1, 3, INPUT_SIZE, INPUT_SIZE), |(_, c, y, x)| {
        let value = resized.get_pixel(x as u32, y as u32)[c] as f32 / 255.0;
        (value - IMAGENET_MEAN[c]) / IMAGENET_STD[c]
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn write_test_image(dir: &Path, name: &str) -> std::path::PathBuf {
        let img = RgbImage::from_fn(320, 240, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_tensor_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), "meal.png");
        let tensor = preprocess_image(&path).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
    }

    #[test]
    fn test_preprocessing_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(dir.path(), "meal.png");
        let first = preprocess_image(&path).unwrap();
        let second = preprocess_image(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalization_constants() {
        let red = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 64, Rgb([255, 0, 0])));
        let tensor = image_to_tensor(&red);
        let view = tensor
            .to_array_view::<f32>()
            .unwrap()
            .into_dimensionality::<tract_ndarray::Ix4>()
            .unwrap();
        let r = view[(0, 0, 100, 100)];
        let g = view[(0, 1, 100, 100)];
        let b = view[(0, 2, 100, 100)];
        assert!((r - (1.0 - 0.485) / 0.229).abs() < 1e-4);
        assert!((g - (0.0 - 0.456) / 0.224).abs() < 1e-4);
        assert!((b - (0.0 - 0.406) / 0.225).abs() < 1e-4);
    }

    #[test]
    fn test_grayscale_is_expanded_to_three_channels() {
        let gray =
            DynamicImage::ImageLuma8(image::GrayImage::from_pixel(10, 10, image::Luma([128])));
        let tensor = image_to_tensor(&gray);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
    }

    #[test]
    fn test_format_detected_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let jpeg = dir.path().join("meal.jpg");
        RgbImage::from_pixel(32, 32, Rgb([200, 120, 40])).save(&jpeg).unwrap();

        let no_extension = dir.path().join("meal_upload");
        let wrong_extension = dir.path().join("meal.png");
        std::fs::copy(&jpeg, &no_extension).unwrap();
        std::fs::copy(&jpeg, &wrong_extension).unwrap();

        let expected = preprocess_image(&jpeg).unwrap();
        assert_eq!(preprocess_image(&no_extension).unwrap(), expected);
        assert_eq!(preprocess_image(&wrong_extension).unwrap(), expected);
    }

    #[test]
    fn test_undecodable_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "not an image").unwrap();
        assert!(preprocess_image(&path).is_err());
        assert!(preprocess_image(&dir.path().join("missing.jpg")).is_err());
    }
}

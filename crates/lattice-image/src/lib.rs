//! PNG load/save policy for lattice arrays.
//!
//! A thin format-conversion wrapper around the `image` crate: PNG files
//! decode into `[height, width, channels]` arrays with samples in `[0, 1]`,
//! and such arrays encode back to PNG with clamping and 8-bit quantization.
//! No resampling, no color management — the tensor side of the framework
//! never sees codec types.
//!
//! # Example
//!
//! ```no_run
//! use lattice_image::{load_png, save_png};
//!
//! let img = load_png("input.png")?;
//! let [h, w, c] = [img.shape()[0], img.shape()[1], img.shape()[2]];
//! println!("{h}x{w}, {c} channel(s)");
//!
//! save_png("copy.png", &img)?;
//! # Ok::<(), lattice_image::ImageIoError>(())
//! ```

use std::path::Path;

use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageFormat, ImageReader};
use thiserror::Error;

use lattice_core::{ArrayError, NdArray};

/// Errors from PNG load/save.
#[derive(Debug, Error)]
pub enum ImageIoError {
    /// Underlying codec error.
    #[error("image codec error: {0}")]
    Codec(#[from] image::ImageError),

    /// Filesystem error opening the file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Array construction failed.
    #[error("array error: {0}")]
    Array(#[from] ArrayError),

    /// Array shape is not encodable as an image.
    #[error(
        "cannot encode array with shape {shape:?}: expected [h, w] or [h, w, c] with 1-4 channels"
    )]
    UnsupportedShape {
        /// Offending shape.
        shape: Vec<usize>,
    },

    /// Channel index out of range.
    #[error("channel {channel} out of range for {channels}-channel image")]
    ChannelOutOfRange {
        /// Requested channel.
        channel: usize,
        /// Channels the array has.
        channels: usize,
    },
}

/// Loads a PNG file into a `[height, width, channels]` array.
///
/// Grayscale decodes to 1 channel, grayscale+alpha to 2, RGB to 3; anything
/// else decodes through RGBA to 4. Samples are normalized to `[0, 1]`.
pub fn load_png(path: impl AsRef<Path>) -> Result<NdArray, ImageIoError> {
    let img = ImageReader::open(path)?.decode()?;
    let (width, height) = img.dimensions();

    let (channels, raw) = match img {
        DynamicImage::ImageLuma8(buf) => (1, buf.into_raw()),
        DynamicImage::ImageLumaA8(buf) => (2, buf.into_raw()),
        DynamicImage::ImageRgb8(buf) => (3, buf.into_raw()),
        other => (4, other.to_rgba8().into_raw()),
    };

    let data = raw.into_iter().map(|b| f64::from(b) / 255.0).collect();
    Ok(NdArray::new(
        vec![height as usize, width as usize, channels],
        data,
    )?)
}

/// Saves an array as a PNG file.
///
/// Accepts `[h, w]` (grayscale) or `[h, w, c]` with 1, 2, 3 or 4 channels.
/// Samples are clamped to `[0, 1]` and quantized to 8 bits.
pub fn save_png(path: impl AsRef<Path>, array: &NdArray) -> Result<(), ImageIoError> {
    let (height, width, channels) = image_dims(array)?;
    let color = match channels {
        1 => ExtendedColorType::L8,
        2 => ExtendedColorType::La8,
        3 => ExtendedColorType::Rgb8,
        4 => ExtendedColorType::Rgba8,
        _ => {
            return Err(ImageIoError::UnsupportedShape {
                shape: array.shape().to_vec(),
            });
        }
    };

    let bytes: Vec<u8> = array
        .data()
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
        .collect();

    image::save_buffer_with_format(
        path.as_ref(),
        &bytes,
        width as u32,
        height as u32,
        color,
        ImageFormat::Png,
    )?;
    Ok(())
}

/// Extracts one color plane as a `[height, width]` array.
pub fn extract_channel(array: &NdArray, channel: usize) -> Result<NdArray, ImageIoError> {
    let (height, width, channels) = image_dims(array)?;
    if channel >= channels {
        return Err(ImageIoError::ChannelOutOfRange { channel, channels });
    }

    let data = array
        .data()
        .chunks(channels)
        .map(|pixel| pixel[channel])
        .collect();
    Ok(NdArray::new(vec![height, width], data)?)
}

/// Interprets a shape as `(height, width, channels)`.
fn image_dims(array: &NdArray) -> Result<(usize, usize, usize), ImageIoError> {
    match array.shape() {
        &[h, w] => Ok((h, w, 1)),
        &[h, w, c] if (1..=4).contains(&c) => Ok((h, w, c)),
        _ => Err(ImageIoError::UnsupportedShape {
            shape: array.shape().to_vec(),
        }),
    }
}

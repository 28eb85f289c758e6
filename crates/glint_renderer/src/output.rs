//! Writing finished images to disk.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{ImageBuffer, RenderError, RenderResult};

/// Save an image, picking the format from the file extension
/// (`.png` or `.ppm`).
pub fn save_image<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => save_png(image, path),
        "ppm" => save_ppm(image, path),
        _ => Err(RenderError::UnsupportedFormat(path.display().to_string())),
    }?;

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}

/// Save as an 8-bit RGB PNG.
pub fn save_png<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8()).ok_or(
        RenderError::InvalidSize {
            width: image.width,
            height: image.height,
        },
    )?;
    rgb.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Save as a plain-text (P3) PPM.
pub fn save_ppm<P: AsRef<Path>>(image: &ImageBuffer, path: P) -> RenderResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let [r, g, b] = image.get(x, y).to_rgb8();
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
    }

    writer.flush()?;
    Ok(())
}

//! Materializes a finished canvas and writes JSON reports.
//!
//! - `to_rgb_image`: convert a canvas into an `image::RgbImage`.
//! - `save_png`: write the canvas to a PNG, creating parent directories.
//! - `write_json_file`: pretty-print a serializable value to disk.

use crate::grid::Canvas;
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Converts the set cells of `canvas` into an RGB image buffer; unset cells
/// stay black. A completed canvas fills every pixel.
pub fn to_rgb_image(canvas: &Canvas) -> RgbImage {
    let layout = canvas.layout();
    let mut out = RgbImage::new(layout.width as u32, layout.height as u32);
    for (x, y, color) in canvas.pixels() {
        out.put_pixel(x as u32, y as u32, image::Rgb([color.r, color.g, color.b]));
    }
    out
}

/// Saves the canvas as a PNG at `path`.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    to_rgb_image(canvas)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serializes a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridLayout;
    use crate::types::Rgb;

    #[test]
    fn image_mirrors_canvas_contents() {
        let mut canvas = Canvas::new(GridLayout {
            width: 2,
            height: 2,
        });
        canvas.set(0, Rgb::new(10, 20, 30));
        canvas.set(3, Rgb::new(200, 100, 50));
        let img = to_rgb_image(&canvas);
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(img.get_pixel(1, 1).0, [200, 100, 50]);
        // unset cells render black
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0]);
    }
}

//! PNG snapshots of a rendered [`Raster`].
//!
//! Feature-gated behind `png` (default on) so WASM consumers can depend on
//! the runtime crate without pulling in the `image` crate.

use crate::raster::Raster;
use drift_engine_core::error::FieldError;
use std::path::Path;

/// Writes the raster's current pixels as a PNG image.
///
/// Returns `FieldError::Io` on encode or write failure.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), FieldError> {
    let img = image::RgbaImage::from_raw(raster.width(), raster.height(), raster.pixels().to_vec())
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drift_engine_core::color::Srgb;
    use drift_engine_core::surface::Surface;

    #[test]
    fn write_png_round_trip() {
        let mut raster = Raster::new(16, 16).unwrap();
        raster.clear(Srgb::BLACK);
        raster.fill_circle(8.0, 8.0, 3.0, Srgb::from_hex("#00d4ff").unwrap());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        write_png(&raster, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        assert_eq!(img.get_pixel(8, 8).0, [0x00, 0xd4, 0xff, 0xff]);
    }

    #[test]
    fn write_png_to_bad_path_reports_io_error() {
        let raster = Raster::new(4, 4).unwrap();
        let result = write_png(&raster, Path::new("/nonexistent-dir/frame.png"));
        assert!(matches!(result, Err(FieldError::Io(_))));
    }
}

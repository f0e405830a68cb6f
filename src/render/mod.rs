//! Rendering glue: raster, SVG and terminal output for a finished symbol.
//!
//! Kept deliberately flat (module pixel size, two colors, quiet zone);
//! styling beyond that is out of scope for this crate.

use crate::error::EncodeError;
use crate::models::QRCode;
use image::RgbaImage;
use rayon::prelude::*;

/// Raster rendering configuration, validated at construction
#[derive(Debug, Clone)]
pub struct RenderConfig {
    module_size: u32,
    quiet_zone: u32,
    dark: [u8; 4],
    light: [u8; 4],
}

impl RenderConfig {
    /// Create a config; `module_size` below one pixel is rejected
    pub fn new(module_size: u32, quiet_zone: u32) -> Result<Self, EncodeError> {
        if module_size < 1 {
            return Err(EncodeError::InvalidConfiguration {
                reason: "module size must be at least 1 pixel".to_string(),
            });
        }
        Ok(Self {
            module_size,
            quiet_zone,
            ..Self::default()
        })
    }

    /// Replace the dark/light RGBA colors
    pub fn with_colors(mut self, dark: [u8; 4], light: [u8; 4]) -> Self {
        self.dark = dark;
        self.light = light;
        self
    }

    /// Edge length in pixels of the rendered image for a symbol
    pub fn pixel_dimension(&self, qr: &QRCode) -> u32 {
        (qr.size() as u32 + 2 * self.quiet_zone) * self.module_size
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            module_size: 8,
            quiet_zone: 4,
            dark: [0, 0, 0, 255],
            light: [255, 255, 255, 255],
        }
    }
}

/// Render the symbol into an RGBA image, filling pixel rows in parallel
pub fn to_image(qr: &QRCode, config: &RenderConfig) -> RgbaImage {
    let dimension = config.pixel_dimension(qr);
    let mut image = RgbaImage::new(dimension, dimension);
    let module_size = config.module_size as usize;
    let quiet = config.quiet_zone as i64;
    let symbol_size = qr.size() as i64;
    let row_bytes = dimension as usize * 4;

    let buffer: &mut [u8] = &mut image;
    buffer
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(py, row)| {
            let module_y = (py / module_size) as i64 - quiet;
            for px in 0..dimension as usize {
                let module_x = (px / module_size) as i64 - quiet;
                let dark = module_x >= 0
                    && module_x < symbol_size
                    && module_y >= 0
                    && module_y < symbol_size
                    && qr.get(module_x as usize, module_y as usize);
                let color = if dark { &config.dark } else { &config.light };
                row[px * 4..px * 4 + 4].copy_from_slice(color);
            }
        });

    image
}

/// SVG document for the symbol, one unit per module plus the quiet zone.
/// Always uses Unix newlines regardless of platform.
pub fn to_svg_string(qr: &QRCode, quiet_zone: u32) -> String {
    let border = quiet_zone as usize;
    let dimension = qr.size() + 2 * border;
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
        dimension
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "\t<path d=\"";
    let mut first = true;
    for y in 0..qr.size() {
        for x in 0..qr.size() {
            if qr.get(x, y) {
                if !first {
                    result += " ";
                }
                first = false;
                result += &format!("M{},{}h1v1h-1z", x + border, y + border);
            }
        }
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    result
}

/// Terminal rendering: two characters per module, quiet zone included
pub fn to_ascii(qr: &QRCode, quiet_zone: u32) -> String {
    let border = quiet_zone as i64;
    let size = qr.size() as i64;
    let mut out = String::new();
    for y in -border..size + border {
        for x in -border..size + border {
            let dark = x >= 0 && x < size && y >= 0 && y < size && qr.get(x as usize, y as usize);
            out += if dark { "██" } else { "  " };
        }
        out += "\n";
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ECLevel, MaskPattern};

    fn sample() -> QRCode {
        crate::encode("RENDER TEST", ECLevel::L, MaskPattern::Pattern0).unwrap()
    }

    #[test]
    fn test_module_size_validated() {
        let err = RenderConfig::new(0, 4).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidConfiguration { .. }));
        assert!(RenderConfig::new(1, 0).is_ok());
    }

    #[test]
    fn test_image_dimensions() {
        let qr = sample();
        let config = RenderConfig::new(4, 2).unwrap();
        let image = to_image(&qr, &config);
        let expected = (qr.size() as u32 + 4) * 4;
        assert_eq!(image.width(), expected);
        assert_eq!(image.height(), expected);
        // top-left quiet zone pixel is light
        assert_eq!(image.get_pixel(0, 0).0, [255, 255, 255, 255]);
        // first finder module is dark
        assert_eq!(image.get_pixel(2 * 4, 2 * 4).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_svg_structure() {
        let qr = sample();
        let svg = to_svg_string(&qr, 4);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<path d=\"M"));
        assert!(svg.contains(&format!("viewBox=\"0 0 {0} {0}\"", qr.size() + 8)));
    }

    #[test]
    fn test_ascii_line_count() {
        let qr = sample();
        let art = to_ascii(&qr, 2);
        assert_eq!(art.lines().count(), qr.size() + 4);
    }
}

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ImageEncoder, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::Error;

/// Parses an SVG source once and renders it at any number of target sizes.
pub struct Rasterizer {
    tree: usvg::Tree,
}

impl Rasterizer {
    pub fn open(path: &Path) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::MissingInput(path.to_path_buf()));
        }
        let data = std::fs::read(path).map_err(|e| Error::Render(e.to_string()))?;
        let tree = usvg::Tree::from_data(&data, &usvg::Options::default())
            .map_err(|e| Error::Render(e.to_string()))?;
        Ok(Rasterizer { tree })
    }

    /// Renders the source at exactly `width`x`height`. Each axis scales
    /// independently, so non-square targets stretch the source.
    pub fn rasterize(&self, width: u32, height: u32) -> Result<RgbaImage, Error> {
        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Error::Render(format!("cannot allocate a {}x{} pixmap", width, height))
        })?;
        let size = self.tree.size();
        let transform = tiny_skia::Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        // tiny-skia keeps pixels premultiplied; the PNG wants straight alpha.
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for px in pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        RgbaImage::from_raw(width, height, data)
            .ok_or_else(|| Error::Render("pixel buffer size mismatch".into()))
    }

    /// Rasterizes and writes a PNG at maximal lossless compression,
    /// overwriting any existing file at `path`.
    pub fn write_png(&self, path: &Path, width: u32, height: u32) -> Result<(), Error> {
        let image = self.rasterize(width, height)?;
        let file = File::create(path).map_err(|e| Error::Write {
            path: path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?;
        let encoder = PngEncoder::new_with_quality(
            BufWriter::new(file),
            CompressionType::Best,
            FilterType::Adaptive,
        );
        encoder
            .write_image(
                image.as_raw(),
                width,
                height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| Error::Write {
                path: path.to_path_buf(),
                source: e,
            })
    }
}

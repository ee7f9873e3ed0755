//! Rasterizes a single SVG icon into the fixed set of PNG logo assets
//! required for MSIX packaging.

mod error;
mod rasterize;

pub use error::Error;
pub use rasterize::Rasterizer;

use std::path::Path;

/// One output target: file name plus required pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
}

impl AssetSpec {
    const fn new(name: &'static str, width: u32, height: u32) -> Self {
        AssetSpec {
            name,
            width,
            height,
        }
    }
}

/// The logo assets MSIX packaging expects, in the order they are produced.
pub const ASSETS: [AssetSpec; 5] = [
    AssetSpec::new("StoreLogo.png", 50, 50),
    AssetSpec::new("Square44x44Logo.png", 44, 44),
    AssetSpec::new("Square150x150Logo.png", 150, 150),
    AssetSpec::new("Wide310x150Logo.png", 310, 150),
    AssetSpec::new("SplashScreen.png", 620, 300),
];

/// Renders every entry of [`ASSETS`] from `source` into `out_dir`,
/// overwriting existing files of the same name. The source is parsed once
/// and reused for all targets; the first failure aborts the run.
pub fn generate_all(source: &Path, out_dir: &Path) -> Result<(), Error> {
    let rasterizer = Rasterizer::open(source)?;
    for asset in &ASSETS {
        println!(
            "  Creating {} ({}x{})...",
            asset.name, asset.width, asset.height
        );
        rasterizer.write_png(&out_dir.join(asset.name), asset.width, asset.height)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn asset_table_has_five_unique_entries() {
        let names: HashSet<_> = ASSETS.iter().map(|a| a.name).collect();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn asset_dimensions_are_positive() {
        for asset in &ASSETS {
            assert!(asset.width > 0 && asset.height > 0, "{}", asset.name);
        }
    }

    #[test]
    fn wide_targets_match_packaging_requirements() {
        let wide = ASSETS.iter().find(|a| a.name == "Wide310x150Logo.png");
        assert_eq!(wide.map(|a| (a.width, a.height)), Some((310, 150)));
        let splash = ASSETS.iter().find(|a| a.name == "SplashScreen.png");
        assert_eq!(splash.map(|a| (a.width, a.height)), Some((620, 300)));
    }
}

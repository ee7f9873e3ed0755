use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("source icon not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("failed to render the icon: {0}")]
    Render(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

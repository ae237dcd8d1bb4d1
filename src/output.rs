//! PNG and record file output

use image::imageops::FilterType;
use image::RgbaImage;
use std::io;
use std::path::{Path, PathBuf};

use crate::record::{RecordError, SpriteRecord};

/// Error type for output operations
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// Record could not be serialized or parsed
    #[error("{0}")]
    Record(#[from] RecordError),
    /// Scaled image would not fit in memory
    #[error("cannot scale {width}x{height} image by {factor}: result is too large")]
    ScaleTooLarge { width: u32, height: u32, factor: u32 },
}

/// Create parent directories of `path` if they don't exist.
fn ensure_parent(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Save an RGBA image to a PNG file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    ensure_parent(path)?;
    image.save(path)?;
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// This preserves crisp pixel edges. A factor of 0 or 1 returns the image
/// unchanged. Fails if the scaled buffer cannot be addressed.
pub fn scale_image(image: RgbaImage, factor: u32) -> Result<RgbaImage, OutputError> {
    if factor <= 1 {
        return Ok(image);
    }
    let (w, h) = image.dimensions();
    let too_large = || OutputError::ScaleTooLarge { width: w, height: h, factor };

    let sw = w.checked_mul(factor).ok_or_else(too_large)?;
    let sh = h.checked_mul(factor).ok_or_else(too_large)?;
    let fits = u64::from(sw)
        .checked_mul(u64::from(sh))
        .and_then(|px| px.checked_mul(4))
        .and_then(|bytes| usize::try_from(bytes).ok())
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if !fits {
        return Err(too_large());
    }
    Ok(image::imageops::resize(&image, sw, sh, FilterType::Nearest))
}

/// Read a sprite record from a JSON file.
pub fn read_record(path: &Path) -> Result<SpriteRecord, OutputError> {
    let content = std::fs::read_to_string(path)?;
    Ok(SpriteRecord::from_json(&content)?)
}

/// Write a sprite record as pretty JSON.
pub fn write_record(record: &SpriteRecord, path: &Path) -> Result<(), OutputError> {
    ensure_parent(path)?;
    let mut json = record.to_json_pretty()?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}

/// Default path for a record copy: `{dir}/{name}.json` next to `input`.
pub fn sibling_record_path(input: &Path, name: &str) -> PathBuf {
    let parent = input.parent().unwrap_or(Path::new(""));
    parent.join(format!("{}.json", name))
}

mod error;
mod glyphs;
mod render;


use std::fs;
use std::path::PathBuf;

use crate::catalog::save_options;
use crate::config::AppConfig;
use crate::model::ImageOption;

pub use error::{Result, SampleError};
pub use render::render_placeholder;

pub fn sample_image_path(config: &AppConfig, number: usize) -> PathBuf {
    config.images_dir.join(format!("sample_{number}.png"))
}

/// Writes placeholder images and a default options file when none exists.
///
/// Returns `false` without touching anything if the options file is already
/// present. Placeholder images are best effort: failures are logged and the
/// option still points at the intended path.
pub fn ensure_sample_options(config: &AppConfig) -> Result<bool> {
    if config.options_path.exists() {
        return Ok(false);
    }
    fs::create_dir_all(&config.images_dir).map_err(|source| SampleError::CreateDir {
        path: config.images_dir.clone(),
        source,
    })?;

    let options = (1..=config.sample_count)
        .map(|number| {
            let path = sample_image_path(config, number);
            if !path.exists() {
                let image = render_placeholder(number, config.sample_image_size);
                if let Err(error) = image.save(&path) {
                    log::warn!("could not write placeholder {}: {error}", path.display());
                }
            }
            ImageOption::new(number as i64, format!("Option {number}"), path)
        })
        .collect::<Vec<_>>();

    if let Some(parent) = config.options_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| SampleError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    save_options(&config.options_path, &options)?;
    log::info!(
        "generated {} sample options in {}",
        options.len(),
        config.options_path.display()
    );
    Ok(true)
}

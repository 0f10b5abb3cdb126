#[cfg(test)]
#[path = "logo_files_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::fs;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::LogoImage;

/// Writes synthesized logos to disk as standalone SVG files.
pub struct LogoFiles {
    pub dir: path::PathBuf,
}

impl Default for LogoFiles {
    fn default() -> LogoFiles {
        return LogoFiles::new(path::PathBuf::from(Config::get(ConfigKey::LogoDir)));
    }
}

impl LogoFiles {
    pub fn new(dir: path::PathBuf) -> LogoFiles {
        return LogoFiles { dir };
    }

    /// Lowercase ASCII letters and digits, with every other run of characters
    /// collapsed into a single `-`.
    pub fn slug(brand: &str) -> String {
        let slug = brand
            .to_lowercase()
            .split(|c: char| return !c.is_ascii_alphanumeric())
            .filter(|part| return !part.is_empty())
            .collect::<Vec<&str>>()
            .join("-");

        if slug.is_empty() {
            return "logo".to_string();
        }

        return slug;
    }

    pub fn file_path(&self, brand: &str, session_id: &str) -> path::PathBuf {
        let slug = LogoFiles::slug(brand);
        return self.dir.join(format!("{slug}-{session_id}.svg"));
    }

    pub async fn save(&self, image: &LogoImage, session_id: &str) -> Result<path::PathBuf> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).await?;
        }

        let file_path = self.file_path(&image.design.brand, session_id);
        fs::write(&file_path, image.to_svg()).await?;
        tracing::info!(path = ?file_path, "Saved logo");

        return Ok(file_path);
    }
}

pub mod brandcraft;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::BackendBox;

pub struct BackendManager {}

impl BackendManager {
    pub fn get(url: &str) -> Result<BackendBox> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!(format!(
                "Backend URL must start with http:// or https://, got '{url}'"
            ));
        }

        return Ok(Box::new(brandcraft::BrandCraft::new(url)));
    }
}

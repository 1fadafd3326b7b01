use crate::config::builder::{ConfigOverrides, build_config};
use crate::config::file::FileConfig;
use crate::config::models::{AppConfig, CatalogSource};
use crate::error::Result;
use checkup::core::catalog::Catalog;
use std::borrow::Cow;
use std::path::Path;
use tracing::{debug, info};

pub mod catalog;
pub mod recommend;
pub mod urgency;

pub fn resolve_config(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<AppConfig> {
    let file_config = FileConfig::discover(config_path)?;
    build_config(file_config, overrides)
}

pub fn load_catalog(source: &CatalogSource) -> Result<Cow<'static, Catalog>> {
    match source {
        CatalogSource::Builtin => {
            debug!("Using the builtin screening catalog.");
            Ok(Cow::Borrowed(Catalog::builtin()))
        }
        CatalogSource::File(path) => {
            info!("Loading screening catalog from {:?}", path);
            Ok(Cow::Owned(Catalog::load(path)?))
        }
    }
}

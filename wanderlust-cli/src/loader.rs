//! Catalog and scoring-config sources for the command line.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wanderlust_core::{Catalog, CatalogError, CatalogLoader, ConfigError, ScoringConfig};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The bundled catalog and default scoring, each replaceable by a JSON file.
#[derive(Debug, Clone, Default)]
pub struct CliLoader {
    pub catalog_file: Option<PathBuf>,
    pub scoring_file: Option<PathBuf>,
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl CatalogLoader for CliLoader {
    type Error = LoadError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        match &self.catalog_file {
            Some(path) => {
                log::debug!("loading catalog from {}", path.display());
                Ok(Catalog::from_json(&read(path)?)?)
            }
            None => Ok(Catalog::bundled().clone()),
        }
    }

    fn load_scoring_config(&self) -> Result<ScoringConfig, Self::Error> {
        match &self.scoring_file {
            Some(path) => {
                log::debug!("loading scoring config from {}", path.display());
                Ok(ScoringConfig::from_json(&read(path)?)?)
            }
            None => Ok(ScoringConfig::default_config()),
        }
    }
}

// marquee/marquee-store
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::Driver;
use crate::StoreError;

/// Stores each key as `<directory>/<key>.json`.
pub struct FsDriver {
    directory: PathBuf,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid key '{key}'. Keys may only contain ASCII letters, digits, '-' and '_'.")]
    InvalidKey { key: String },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    JSON(#[from] serde_json::Error),
}

impl StoreError for Error {}

impl FsDriver {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for_key(&self, key: &str) -> Result<PathBuf, Error> {
        let is_valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if !is_valid {
            return Err(Error::InvalidKey {
                key: key.to_string(),
            });
        }

        Ok(self.directory.join(format!("{key}.json")))
    }
}

#[async_trait]
impl Driver for FsDriver {
    type Error = Error;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        let path = self.path_for_key(key)?;

        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        let path = self.path_for_key(key)?;
        let tmp_path = path.with_extension("json.tmp");

        tokio::fs::create_dir_all(&self.directory).await?;
        tokio::fs::write(&tmp_path, value).await?;
        tokio::fs::rename(&tmp_path, &path).await?;

        debug!("Wrote {:?}", path);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), Self::Error> {
        let path = self.path_for_key(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                debug!("Deleted {:?}", path);
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

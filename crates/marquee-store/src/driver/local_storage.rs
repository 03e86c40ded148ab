// marquee/marquee-store
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::Driver;
use crate::StoreError;

/// Stores values in `window.localStorage`, optionally namespaced by a key prefix.
pub struct LocalStorageDriver {
    prefix: String,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("localStorage is not available in this environment")]
    Unavailable,

    #[error("[localStorage] {0}")]
    Js(String),

    #[error(transparent)]
    JSON(#[from] serde_json::Error),
}

impl StoreError for Error {}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}

impl LocalStorageDriver {
    pub fn new() -> Self {
        Self::with_prefix("")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn storage(&self) -> Result<Storage, Error> {
        web_sys::window()
            .ok_or(Error::Unavailable)?
            .local_storage()?
            .ok_or(Error::Unavailable)
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl Default for LocalStorageDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(? Send)]
impl Driver for LocalStorageDriver {
    type Error = Error;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.storage()?.get_item(&self.prefixed(key))?)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), Self::Error> {
        Ok(self.storage()?.set_item(&self.prefixed(key), &value)?)
    }

    async fn delete(&self, key: &str) -> Result<(), Self::Error> {
        Ok(self.storage()?.remove_item(&self.prefixed(key))?)
    }
}

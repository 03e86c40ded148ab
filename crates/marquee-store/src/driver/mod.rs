// marquee/marquee-store
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::StoreError;

#[cfg(not(target_arch = "wasm32"))]
pub mod fs;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;

/// Raw access to the underlying storage. Values are opaque strings, (de)serialization
/// happens in `Store`.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
pub trait Driver: SendUnlessWasm + SyncUnlessWasm + 'static {
    type Error: StoreError + From<serde_json::Error> + Send + Sync + 'static;

    async fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;
    async fn set(&self, key: &str, value: String) -> Result<(), Self::Error>;
    /// Deleting a key that does not exist is not an error.
    async fn delete(&self, key: &str) -> Result<(), Self::Error>;
}

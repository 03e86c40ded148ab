// marquee/marquee-store
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::{driver::memory::InMemoryDriver, driver::Driver, store::Store, StoreError};

#[cfg(not(target_arch = "wasm32"))]
pub use crate::driver::fs::{Error, FsDriver};
#[cfg(target_arch = "wasm32")]
pub use crate::driver::local_storage::{Error, LocalStorageDriver};

#[cfg(not(target_arch = "wasm32"))]
pub use FsDriver as PlatformDriver;
#[cfg(target_arch = "wasm32")]
pub use LocalStorageDriver as PlatformDriver;

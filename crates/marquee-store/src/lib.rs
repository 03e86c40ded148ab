// marquee/marquee-store
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

//! A minimal persistent key-value store. Each key holds one JSON document. The platform
//! driver decides where the documents live: a directory of files on native targets and
//! `window.localStorage` in the browser.

use std::error::Error;

pub use driver::Driver;
pub use store::Store;

mod driver;
pub mod prelude;
mod store;

pub trait StoreError: Error {}

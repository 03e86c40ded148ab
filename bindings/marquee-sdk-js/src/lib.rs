// marquee/marquee-sdk-js
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use wasm_bindgen::prelude::*;

mod client;
mod delegate;
mod error;
mod search;
mod types;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use errors::*;
pub use ids::*;
pub use page::Page;

mod errors;
mod ids;
mod page;

// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

/// The named movie lists the catalog can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovieList {
    #[strum(to_string = "Popular")]
    Popular,
    #[strum(to_string = "Top Rated")]
    TopRated,
    #[strum(to_string = "Now Playing")]
    NowPlaying,
    #[strum(to_string = "Upcoming")]
    Upcoming,
    #[strum(to_string = "Trending")]
    Trending(TimeWindow),
}

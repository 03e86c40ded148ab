// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use catalog_query::CatalogQuery;
pub(crate) use catalog_query::CatalogSource;
pub use credits::{CastMember, Credits, CrewMember};
pub use genre::Genre;
pub use image::{ImageSize, ImageUrlBuilder};
pub use movie_details::{MovieDetails, MovieDetailPage};
pub use movie_list::{MovieList, TimeWindow};
pub use movie_summary::MovieSummary;
pub use review::Review;
pub use video::Video;

mod catalog_query;
mod credits;
mod genre;
pub(crate) mod image;
mod movie_details;
mod movie_list;
mod movie_summary;
mod review;
mod video;

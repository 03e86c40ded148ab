// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use mock_app_dependencies::{
    MockAppDependencies, MockFavoritesDomainServiceDependencies,
    MockSessionDomainServiceDependencies,
};

mod mock_app_dependencies;

pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_movie as movie, mock_movie_page as movie_page, mock_session as session,
    };
}

#[macro_export]
macro_rules! movie_id {
    ($id:expr) => {
        $crate::dtos::MovieId::from($id as u64)
    };
}

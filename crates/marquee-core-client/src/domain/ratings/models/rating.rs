// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::movies::models::MovieSummary;

/// A rating on TMDB's scale of 1 to 10 in steps of 0.5. Users pick half-stars on a scale
/// of 0.5 to 5, which maps to `stars × 2`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(f32);

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    #[error("{stars} is not a valid rating. Pick between 0.5 and 5 stars in steps of 0.5.")]
    InvalidStars { stars: f32 },
    #[error("{value} is not a valid rating value. Values range from 1 to 10 in steps of 0.5.")]
    InvalidValue { value: f32 },
}

impl Rating {
    pub const MIN_STARS: f32 = 0.5;
    pub const MAX_STARS: f32 = 5.0;

    pub fn from_stars(stars: f32) -> Result<Self, RatingError> {
        if !is_half_step(stars) || !(Self::MIN_STARS..=Self::MAX_STARS).contains(&stars) {
            return Err(RatingError::InvalidStars { stars });
        }
        Ok(Self(stars * 2.0))
    }

    pub fn from_value(value: f32) -> Result<Self, RatingError> {
        if !is_half_step(value) || !(1.0..=10.0).contains(&value) {
            return Err(RatingError::InvalidValue { value });
        }
        Ok(Self(value))
    }

    /// The value sent to and received from TMDB.
    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn stars(&self) -> f32 {
        self.0 / 2.0
    }
}

fn is_half_step(value: f32) -> bool {
    value.is_finite() && (value * 2.0).fract() == 0.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedMovie {
    pub movie: MovieSummary,
    pub rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_map_to_doubled_value() {
        assert_eq!(Rating::from_stars(0.5).map(|r| r.value()), Ok(1.0));
        assert_eq!(Rating::from_stars(3.5).map(|r| r.value()), Ok(7.0));
        assert_eq!(Rating::from_stars(5.0).map(|r| r.value()), Ok(10.0));
        assert_eq!(Rating::from_value(7.0).map(|r| r.stars()), Ok(3.5));
    }

    #[test]
    fn test_rejects_invalid_stars() {
        for stars in [0.0, 0.3, 5.5, -1.0, f32::NAN] {
            assert!(Rating::from_stars(stars).is_err(), "{stars} should be rejected");
        }
        assert!(Rating::from_value(0.5).is_err());
        assert!(Rating::from_value(10.5).is_err());
    }
}

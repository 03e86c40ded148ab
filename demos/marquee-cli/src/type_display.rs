// marquee/marquee-cli
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use marquee_core_client::dtos::{
    Credits, Genre, MovieDetailPage, MovieSummary, RatedMovie, Review, Video,
};

pub trait StringExt {
    fn truncate_to(&self, max_len: usize) -> String;
}

impl<T: AsRef<str>> StringExt for T {
    fn truncate_to(&self, max_len: usize) -> String {
        let str = self.as_ref();
        if str.chars().count() <= max_len {
            return str.to_string();
        }
        let mut truncated = str.chars().take(max_len.saturating_sub(1)).collect::<String>();
        truncated.push('…');
        truncated
    }
}

pub struct MovieEntry<'a>(pub &'a MovieSummary);

impl Display for MovieEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let movie = self.0;
        write!(
            f,
            "{:<8} | {:<40} | {:<4} | {:.1}",
            movie.id,
            movie.title.truncate_to(40),
            movie
                .release_year()
                .map(|year| year.to_string())
                .unwrap_or_default(),
            movie.vote_average
        )
    }
}

pub struct RatedMovieEntry<'a>(pub &'a RatedMovie);

impl Display for RatedMovieEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {:.1}★",
            MovieEntry(&self.0.movie),
            self.0.rating.stars()
        )
    }
}

pub struct GenreEntry<'a>(pub &'a Genre);

impl Display for GenreEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<6} | {}", self.0.id, self.0.name)
    }
}

pub struct ReviewEntry<'a>(pub &'a Review);

impl Display for ReviewEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let review = self.0;
        write!(
            f,
            "{} ({}): {}",
            review.author,
            review
                .rating
                .map(|rating| format!("{rating:.1}"))
                .unwrap_or("–".to_string()),
            review.content.replace('\n', " ").truncate_to(120)
        )
    }
}

pub struct DetailPageEntry<'a> {
    pub page: &'a MovieDetailPage,
    pub credits: &'a Credits,
    pub trailer: Option<&'a Video>,
    pub poster_url: Option<String>,
}

impl Display for DetailPageEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let details = &self.page.details;

        writeln!(f, "{}", details.title)?;
        if let Some(tagline) = &details.tagline {
            writeln!(f, "  {}", tagline)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", details.overview)?;
        writeln!(f)?;
        writeln!(
            f,
            "Runtime:   {}",
            details.formatted_runtime().unwrap_or("–".to_string())
        )?;
        writeln!(
            f,
            "Genres:    {}",
            details
                .genres
                .iter()
                .map(|genre| genre.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        writeln!(
            f,
            "Rating:    {:.1} ({} votes)",
            details.vote_average, details.vote_count
        )?;
        writeln!(
            f,
            "Directed:  {}",
            self.credits
                .directors()
                .map(|crew| crew.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        writeln!(
            f,
            "Starring:  {}",
            self.credits
                .top_billed(5)
                .iter()
                .map(|cast| cast.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        if let Some(url) = &self.poster_url {
            writeln!(f, "Poster:    {}", url)?;
        }
        if let Some(url) = self.trailer.and_then(|video| video.watch_url()) {
            writeln!(f, "Trailer:   {}", url)?;
        }

        writeln!(f)?;
        writeln!(f, "Reviews ({}):", self.page.reviews.total_results)?;
        for review in &self.page.reviews.results {
            writeln!(f, "  {}", ReviewEntry(review))?;
        }

        writeln!(f)?;
        writeln!(f, "Recommendations:")?;
        for movie in &self.page.recommendations.results {
            writeln!(f, "  {}", MovieEntry(movie))?;
        }

        Ok(())
    }
}

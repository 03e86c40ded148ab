// marquee/marquee-cli
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::sync::Arc;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password, Select};
use secrecy::SecretString;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use url::Url;

use common::{demos_dir, enable_debug_logging, load_credentials, Level, TmdbCredentials};
use marquee_core_client::dtos::{
    CatalogQuery, ImageSize, MovieList, MovieSummary, Route, TimeWindow, Video,
};
use marquee_core_client::{AppConfig, Client, ClientDelegate, ClientEvent};
use marquee_store::prelude::{FsDriver, Store};

use crate::type_display::{DetailPageEntry, GenreEntry, MovieEntry, RatedMovieEntry};

mod type_display;

async fn configure_client(credentials: &TmdbCredentials) -> Result<Client> {
    let cache_path = demos_dir()?.join("marquee-cli").join("cache");
    println!("Persisted data can be found at {:?}", cache_path);

    let mut builder = Client::builder()
        .set_store(Store::new(FsDriver::new(&cache_path)))
        .set_api_key(&credentials.api_key)
        .set_config(AppConfig {
            trending_window: TimeWindow::Day,
            ..Default::default()
        })
        .set_delegate(Some(Box::new(Delegate {})));

    if let Some(base_url) = &credentials.base_url {
        builder = builder.set_base_url(Url::parse(base_url)?);
    }

    let client = builder.build().await;

    if let Some(session) = client.current_session() {
        println!("Signed in as {}.", session.username);
    }

    Ok(client)
}

fn select_command() -> Selection {
    let options: Vec<Selection> = Selection::iter().collect();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to do?")
        .default(0)
        .items(&options[..])
        .interact()
        .ok();

    let Some(selection) = selection else {
        return Selection::Noop;
    };

    println!();
    options[selection].clone()
}

fn prompt_string(prompt: impl Into<String>) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(false)
        .interact_text()?)
}

fn prompt_stars() -> Result<f32> {
    Ok(Input::<f32>::with_theme(&ColorfulTheme::default())
        .with_prompt("Stars (0.5 to 5)")
        .interact_text()?)
}

fn select_item_from_list<T, O: ToString>(
    prompt: &str,
    iter: impl IntoIterator<Item = T>,
    format: impl Fn(&T) -> O,
) -> Result<Option<T>> {
    let mut list = iter.into_iter().collect::<Vec<_>>();
    if list.is_empty() {
        println!("Nothing to select.");
        return Ok(None);
    }

    let display_list = list.iter().map(format).collect::<Vec<_>>();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(display_list.as_slice())
        .interact_opt()?;
    println!();

    Ok(selection.map(|idx| list.swap_remove(idx)))
}

fn print_movies<'a>(movies: impl IntoIterator<Item = &'a MovieSummary>) {
    for movie in movies {
        println!("{}", MovieEntry(movie));
    }
}

/// Shows `route` after passing it through the navigation gate.
async fn show(client: &Client, route: Route, listed: &mut Vec<MovieSummary>) -> Result<()> {
    let mut route = route;

    loop {
        match client.navigation.resolve(route) {
            Route::Catalog(query) => {
                let page = client.catalog.load_catalog(&query).await;
                println!(
                    "Page {} of {} ({} movies)",
                    page.page, page.total_pages, page.total_results
                );
                print_movies(&page.results);
                *listed = page.results;
            }
            Route::MovieDetail { id } => {
                let Some(page) = client.movie_details.load_detail_page(&id).await else {
                    println!("Failed to load movie {}.", id);
                    return Ok(());
                };
                let credits = client.movie_details.load_credits(&id).await;
                let videos = client.movie_details.load_videos(&id).await;
                let poster_url = client
                    .movie_details
                    .image_url(page.details.poster_path.as_deref(), ImageSize::Original);

                println!(
                    "{}",
                    DetailPageEntry {
                        page: &page,
                        credits: &credits,
                        trailer: Video::best_trailer(&videos),
                        poster_url,
                    }
                );
                if client.favorites.is_favorite(&id) {
                    println!("★ In your favorites");
                }
                *listed = page.recommendations.results;
            }
            Route::Favorites => {
                let favorites = client.favorites.favorites();
                println!("{} favorites", favorites.len());
                print_movies(&favorites);
                *listed = favorites;
            }
            Route::Login { .. } => {
                println!("You need to log in first.");
                if login(client).await? {
                    route = client.navigation.route_after_login();
                    continue;
                }
            }
        }
        return Ok(());
    }
}

async fn login(client: &Client) -> Result<bool> {
    let credentials = load_credentials()?;

    let username = match credentials.username {
        Some(username) => username,
        None => prompt_string("Username")?,
    };
    let password = match credentials.password {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    println!("Logging in as {}…", username);
    match client.login(&username, SecretString::new(password)).await {
        Ok(session) => {
            println!("Logged in as {} (account {}).", session.username, session.account_id);
            Ok(true)
        }
        Err(err) => {
            println!("{}", err);
            client.session.acknowledge_login_error();
            Ok(false)
        }
    }
}

async fn select_genre(client: &Client) -> Result<Option<CatalogQuery>> {
    let genres = client.catalog.load_genres().await;
    Ok(
        select_item_from_list("Select a genre", genres, |genre| GenreEntry(genre).to_string())?
            .map(|genre| CatalogQuery::genre(genre.id)),
    )
}

fn select_movie(listed: &[MovieSummary]) -> Result<Option<MovieSummary>> {
    select_item_from_list("Select a movie", listed.iter().cloned(), |movie| {
        MovieEntry(movie).to_string()
    })
}

#[derive(EnumIter, Display, Clone)]
enum Selection {
    #[strum(serialize = "Popular movies")]
    Popular,
    #[strum(serialize = "Top rated movies")]
    TopRated,
    #[strum(serialize = "Trending today")]
    Trending,
    #[strum(serialize = "Search movies")]
    Search,
    #[strum(serialize = "Browse genre")]
    BrowseGenre,
    #[strum(serialize = "Show movie details")]
    MovieDetails,
    #[strum(serialize = "Show favorites")]
    Favorites,
    #[strum(serialize = "Toggle favorite")]
    ToggleFavorite,
    #[strum(serialize = "Rate movie")]
    RateMovie,
    #[strum(serialize = "Show rated movies")]
    RatedMovies,
    Login,
    Logout,
    Noop,
    Exit,
}

struct Delegate {}

impl ClientDelegate for Delegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        match event {
            ClientEvent::MutationFailed { mutation, message } => {
                println!("Failed to {}. {}", mutation, message)
            }
            event => println!("Received event: {:?}", event),
        }
    }
}

struct EventLogger;

impl ClientDelegate for EventLogger {
    fn handle_event(&self, client: Client, event: ClientEvent) {
        if let ClientEvent::FavoritesChanged = event {
            println!("Now {} favorites.", client.favorites.favorites().len());
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env::set_var("RUST_BACKTRACE", "1");
    enable_debug_logging(Level::TRACE)?;

    let credentials = load_credentials()?;
    let client = configure_client(&credentials).await?;
    let _subscription = client.subscribe(Arc::new(EventLogger));

    let mut listed = Vec::<MovieSummary>::new();

    loop {
        println!();

        match select_command() {
            Selection::Popular => {
                show(&client, Route::default(), &mut listed).await?;
            }
            Selection::TopRated => {
                let page = client.catalog.load_list(MovieList::TopRated, 1).await;
                print_movies(&page.results);
                listed = page.results;
            }
            Selection::Trending => {
                let page = client.catalog.load_trending(1).await;
                print_movies(&page.results);
                listed = page.results;
            }
            Selection::Search => {
                let query = prompt_string("Search for")?;
                show(&client, Route::Catalog(CatalogQuery::search(query)), &mut listed).await?;
            }
            Selection::BrowseGenre => {
                if let Some(query) = select_genre(&client).await? {
                    show(&client, Route::Catalog(query), &mut listed).await?;
                }
            }
            Selection::MovieDetails => {
                if let Some(movie) = select_movie(&listed)? {
                    show(&client, Route::MovieDetail { id: movie.id }, &mut listed).await?;
                }
            }
            Selection::Favorites => {
                show(&client, Route::Favorites, &mut listed).await?;
            }
            Selection::ToggleFavorite => {
                if let Some(movie) = select_movie(&listed)? {
                    match client.favorites.toggle(&movie).await {
                        Ok(true) => println!("Added {} to your favorites.", movie.title),
                        Ok(false) => println!("Removed {} from your favorites.", movie.title),
                        Err(err) => println!("{}", err),
                    }
                }
            }
            Selection::RateMovie => {
                if let Some(movie) = select_movie(&listed)? {
                    let stars = prompt_stars()?;
                    match client.ratings.rate_movie(&movie.id, stars).await {
                        Ok(rating) => {
                            println!("Rated {} with {:.1}★.", movie.title, rating.stars())
                        }
                        Err(err) => println!("{}", err),
                    }
                }
            }
            Selection::RatedMovies => {
                let page = client.ratings.rated_movies(1).await;
                for rated in &page.results {
                    println!("{}", RatedMovieEntry(rated));
                }
                listed = page.results.into_iter().map(|rated| rated.movie).collect();
            }
            Selection::Login => {
                login(&client).await?;
            }
            Selection::Logout => {
                println!("Logging out…");
                client.logout().await;
            }
            Selection::Noop => {}
            Selection::Exit => {
                println!("Bye bye!");
                return Ok(());
            }
        }
    }
}

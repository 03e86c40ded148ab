// marquee/marquee-sdk-js
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::warn;
use wasm_bindgen::prelude::*;

use marquee_core_client::{ClientDelegate, ClientEvent, SessionEvent};

use crate::client::Client;

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"
export interface MarqueeClientDelegate {
    /// The user signed in, signed out or the session was replaced.
    sessionChanged(client: MarqueeClient, isSignedIn: boolean): void

    /// The local favorite set has changed.
    favoritesChanged(client: MarqueeClient): void

    /// The rating of a movie was set or removed.
    ratingChanged(client: MarqueeClient, movieId: number, rating?: number): void

    /// A favorite toggle or rating failed. `action` is e.g. "manage favorites".
    mutationFailed(client: MarqueeClient, action: string, message: string): void
}
"#;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(typescript_type = "MarqueeClientDelegate")]
    pub type JSDelegate;

    #[wasm_bindgen(method, catch, js_name = "sessionChanged")]
    fn session_changed(this: &JSDelegate, client: Client, is_signed_in: bool)
        -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "favoritesChanged")]
    fn favorites_changed(this: &JSDelegate, client: Client) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "ratingChanged")]
    fn rating_changed(
        this: &JSDelegate,
        client: Client,
        movie_id: f64,
        rating: Option<f32>,
    ) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch, js_name = "mutationFailed")]
    fn mutation_failed(
        this: &JSDelegate,
        client: Client,
        action: String,
        message: String,
    ) -> Result<(), JsValue>;
}

pub struct Delegate {
    inner: JSDelegate,
}

impl Delegate {
    pub fn new(js: JSDelegate) -> Self {
        Delegate { inner: js }
    }
}

impl ClientDelegate for Delegate {
    fn handle_event(&self, client: marquee_core_client::Client, event: ClientEvent) {
        match self.handle_event_throwing(client, event) {
            Ok(()) => (),
            Err(val) => warn!(
                "JSDelegate threw an error when handling an event: {:?}",
                val
            ),
        }
    }
}

impl Delegate {
    fn handle_event_throwing(
        &self,
        client: marquee_core_client::Client,
        event: ClientEvent,
    ) -> Result<(), JsValue> {
        let client = Client::from(client);

        match event {
            ClientEvent::SessionChanged { event } => self
                .inner
                .session_changed(client, event == SessionEvent::SignedIn)?,
            ClientEvent::FavoritesChanged => self.inner.favorites_changed(client)?,
            ClientEvent::RatingChanged { movie_id, rating } => self.inner.rating_changed(
                client,
                movie_id.value() as f64,
                rating.map(|rating| rating.stars()),
            )?,
            ClientEvent::MutationFailed { mutation, message } => {
                self.inner
                    .mutation_failed(client, mutation.to_string(), message)?
            }
        }
        Ok(())
    }
}

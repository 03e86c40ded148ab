// marquee/marquee-sdk-js
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use futures::StreamExt;
use tokio::sync::mpsc;
use tracing::{info, warn};
use wasm_bindgen::prelude::*;

use marquee_core_client::Client as MarqueeClient;
use marquee_wasm_utils::ReceiverStream;

use crate::types::to_js;

const INPUT_BUFFER_SIZE: usize = 64;

/// Feeds keystrokes into a debounced catalog search. Results are delivered to the callback
/// passed to `MarqueeClient.startSearch` as `(query, page)`.
#[wasm_bindgen(js_name = "SearchInput")]
pub struct SearchInput {
    sender: Option<mpsc::Sender<String>>,
}

impl SearchInput {
    pub(crate) fn start(client: MarqueeClient, callback: js_sys::Function) -> Self {
        let (sender, receiver) = mpsc::channel(INPUT_BUFFER_SIZE);

        marquee_wasm_utils::spawn(async move {
            let results = client
                .catalog
                .search_as_you_type(ReceiverStream::new(receiver));
            futures::pin_mut!(results);

            while let Some((query, page)) = results.next().await {
                let (Ok(query), Ok(page)) = (to_js(&query), to_js(&page)) else {
                    warn!("Failed to convert search results.");
                    continue;
                };
                if let Err(err) = callback.call2(&JsValue::NULL, &query, &page) {
                    warn!("JS search callback threw an error: {:?}", err);
                }
            }

            info!("Search input closed.");
        });

        SearchInput {
            sender: Some(sender),
        }
    }
}

#[wasm_bindgen(js_class = "SearchInput")]
impl SearchInput {
    /// Submits the current contents of the search field.
    pub fn push(&self, text: String) {
        let Some(sender) = &self.sender else {
            return;
        };
        if sender.try_send(text).is_err() {
            warn!("Dropped search input.");
        }
    }

    /// Ends the session. A pending search still completes.
    pub fn close(&mut self) {
        self.sender.take();
    }
}

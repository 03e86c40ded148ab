// marquee/marquee-wasm-utils
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use futures::{Stream, StreamExt};
use tokio::sync::mpsc::channel;

use crate::{sleep, spawn, ReceiverStream, SendUnlessWasm};

pub trait MarqueeStreamExt: Stream {
    /// Emits the most recent item once the underlying stream has been quiet for `interval`.
    /// Every new item restarts the timer, so a burst of items yields a single emission.
    /// A pending item is flushed when the underlying stream ends.
    fn debounced(self, interval: Duration) -> impl Stream<Item = Self::Item>;
}

impl<T: Stream + SendUnlessWasm + 'static> MarqueeStreamExt for T
where
    T::Item: SendUnlessWasm,
{
    fn debounced(self, interval: Duration) -> impl Stream<Item = T::Item> {
        let (tx, rx) = channel(1);

        spawn(async move {
            let mut stream = Box::pin(self);
            let mut pending: Option<T::Item> = None;

            loop {
                let Some(item) = pending.take() else {
                    let Some(item) = stream.next().await else {
                        break;
                    };
                    pending = Some(item);
                    continue;
                };

                tokio::select! {
                    next = stream.next() => {
                        match next {
                            Some(next) => pending = Some(next),
                            None => {
                                let _ = tx.send(item).await;
                                break;
                            }
                        }
                    }
                    _ = sleep(interval) => {
                        if tx.send(item).await.is_err() {
                            break;
                        }
                    }
                }
            }
        });

        ReceiverStream::new(rx)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::sync::mpsc;

    use super::*;

    async fn type_text(tx: &mpsc::Sender<String>, text: &str) {
        for idx in 1..=text.len() {
            tx.send(text[..idx].to_string()).await.unwrap();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_debounce_emits_once_per_pause() {
        let (tx, rx) = mpsc::channel::<String>(32);
        let debounced = ReceiverStream::new(rx).debounced(Duration::from_millis(80));
        let collected = Arc::new(Mutex::new(Vec::<String>::new()));

        {
            let collected = collected.clone();
            tokio::spawn(async move {
                let mut stream = Box::pin(debounced);
                while let Some(value) = stream.next().await {
                    collected.lock().unwrap().push(value);
                }
            });
        }

        type_text(&tx, "batman").await;
        assert!(collected.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(*collected.lock().unwrap(), vec!["batman".to_string()]);

        type_text(&tx, "joker").await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(
            *collected.lock().unwrap(),
            vec!["batman".to_string(), "joker".to_string()]
        );
    }

    #[tokio::test]
    async fn test_debounce_flushes_pending_item_when_stream_ends() {
        let (tx, rx) = mpsc::channel::<String>(32);
        let debounced = ReceiverStream::new(rx).debounced(Duration::from_secs(60));

        tx.send("alien".to_string()).await.unwrap();
        drop(tx);

        let values = debounced.collect::<Vec<_>>().await;
        assert_eq!(values, vec!["alien".to_string()]);
    }
}

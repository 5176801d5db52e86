use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::clients::ArticlePreviewClient;
use crate::session::state::PreviewState;

/// Path marker that makes a raw input eligible for a preview fetch.
pub const WIKIPEDIA_ARTICLE_MARKER: &str = "wikipedia.org/wiki/";

pub fn is_wikipedia_article_url(url: &str) -> bool {
    url.contains(WIKIPEDIA_ARTICLE_MARKER)
}

/// Debounced, cancellable article-preview lookup keyed on the URL text the
/// user is typing. Each edit restarts the settle timer; once the input
/// settles, at most one fetch is issued, and only the most recently issued
/// request may commit state. Cancellation is discard-on-arrival: a response
/// whose request generation has been superseded is thrown away, the
/// in-flight call itself is never aborted.
pub struct PreviewController {
    client: Arc<dyn ArticlePreviewClient>,
    debounce: Duration,
    shared: Arc<Shared>,
    timer: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Shared {
    generation: AtomicU64,
    slot: RwLock<Slot>,
}

#[derive(Default)]
struct Slot {
    url: String,
    state: PreviewState,
    suppressed: bool,
}

impl Shared {
    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

impl PreviewController {
    pub fn new(client: Arc<dyn ArticlePreviewClient>, debounce: Duration) -> Self {
        Self {
            client,
            debounce,
            shared: Arc::new(Shared::default()),
            timer: None,
        }
    }

    /// Record the latest URL text and restart the settle timer.
    pub async fn on_url_changed(&mut self, url: &str) {
        if self.shared.slot.read().await.suppressed {
            return;
        }

        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.shared.slot.write().await.url = url.to_string();

        let shared = Arc::clone(&self.shared);
        let client = Arc::clone(&self.client);
        let url = url.to_string();
        let debounce = self.debounce;

        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if !shared.is_current(generation) {
                return;
            }

            if !is_wikipedia_article_url(&url) {
                let mut slot = shared.slot.write().await;
                if shared.is_current(generation) {
                    slot.state = PreviewState::Idle;
                }
                return;
            }

            {
                let mut slot = shared.slot.write().await;
                if !shared.is_current(generation) {
                    return;
                }
                slot.state = PreviewState::Loading;
            }

            // Detached: the settle timer can be aborted, the request cannot.
            // Staleness is decided when the response arrives.
            tokio::spawn(async move {
                let result = client.preview_article(&url).await;

                let mut slot = shared.slot.write().await;
                if !shared.is_current(generation) {
                    return;
                }
                slot.state = match result {
                    Ok(preview) => PreviewState::Ready(preview),
                    Err(err) => {
                        log::debug!("Preview fetch failed for {}: {}", url, err);
                        PreviewState::Unavailable
                    }
                };
            });
        }));
    }

    /// Generation start: clear any pending or visible preview and ignore
    /// further URL edits until `reset` lifts the suppression.
    pub async fn suppress(&mut self) {
        self.clear(true).await;
    }

    /// Back to a fresh input phase; suppression lifted.
    pub async fn reset(&mut self) {
        self.clear(false).await;
    }

    async fn clear(&mut self, suppressed: bool) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.shared.generation.fetch_add(1, Ordering::SeqCst);

        let mut slot = self.shared.slot.write().await;
        slot.url.clear();
        slot.state = PreviewState::Idle;
        slot.suppressed = suppressed;
    }

    pub async fn state(&self) -> PreviewState {
        self.shared.slot.read().await.state.clone()
    }

    pub async fn current_url(&self) -> String {
        self.shared.slot.read().await.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;

    use crate::errors::{AppError, AppResult};
    use crate::models::domain::ArticlePreview;

    const ARTICLE_URL: &str = "https://en.wikipedia.org/wiki/Alan_Turing";

    /// Counts calls and answers with a preview titled after the request URL,
    /// optionally after a simulated network delay.
    struct CountingPreviewClient {
        calls: AtomicUsize,
        delay: Duration,
        fail: bool,
    }

    impl CountingPreviewClient {
        fn new(delay: Duration, fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                delay,
                fail,
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ArticlePreviewClient for CountingPreviewClient {
        async fn preview_article(&self, url: &str) -> AppResult<ArticlePreview> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(AppError::PreviewUnavailable("boom".to_string()));
            }
            Ok(ArticlePreview {
                title: url.to_string(),
                summary: "summary".to_string(),
            })
        }
    }

    fn controller(client: &Arc<CountingPreviewClient>) -> PreviewController {
        let as_trait: Arc<dyn ArticlePreviewClient> = Arc::clone(client) as _;
        PreviewController::new(as_trait, Duration::from_millis(800))
    }

    async fn settle() {
        // Paused clock: sleeps resolve instantly but still order tasks.
        tokio::time::sleep(Duration::from_millis(2000)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_edits_fetch_once_for_the_settled_url() {
        let client = Arc::new(CountingPreviewClient::new(Duration::ZERO, false));
        let mut controller = controller(&client);

        for suffix in ["Alan", "Alan_T", "Alan_Turing"] {
            controller
                .on_url_changed(&format!("https://en.wikipedia.org/wiki/{}", suffix))
                .await;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        settle().await;

        assert_eq!(client.call_count(), 1);
        match controller.state().await {
            PreviewState::Ready(preview) => assert_eq!(preview.title, ARTICLE_URL),
            other => panic!("expected ready preview, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn non_wikipedia_url_never_fetches_and_clears_preview() {
        let client = Arc::new(CountingPreviewClient::new(Duration::ZERO, false));
        let mut controller = controller(&client);

        controller.on_url_changed(ARTICLE_URL).await;
        settle().await;
        assert!(matches!(controller.state().await, PreviewState::Ready(_)));

        controller.on_url_changed("https://example.com/article").await;
        settle().await;

        assert_eq!(client.call_count(), 1);
        assert_eq!(controller.state().await, PreviewState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_response_is_discarded() {
        let client = Arc::new(CountingPreviewClient::new(Duration::from_millis(5000), false));
        let mut controller = controller(&client);

        controller.on_url_changed(ARTICLE_URL).await;
        // Let the timer fire and the slow fetch start.
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(client.call_count(), 1);

        let newer = "https://en.wikipedia.org/wiki/Enigma_machine";
        controller.on_url_changed(newer).await;
        tokio::time::sleep(Duration::from_millis(10_000)).await;

        assert_eq!(client.call_count(), 2);
        match controller.state().await {
            PreviewState::Ready(preview) => assert_eq!(preview.title, newer),
            other => panic!("expected the newer preview, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn suppress_discards_in_flight_response_and_blocks_edits() {
        let client = Arc::new(CountingPreviewClient::new(Duration::from_millis(5000), false));
        let mut controller = controller(&client);

        controller.on_url_changed(ARTICLE_URL).await;
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(client.call_count(), 1);

        controller.suppress().await;
        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(controller.state().await, PreviewState::Idle);

        controller.on_url_changed(ARTICLE_URL).await;
        settle().await;
        assert_eq!(client.call_count(), 1);

        controller.reset().await;
        controller.on_url_changed(ARTICLE_URL).await;
        settle().await;
        tokio::time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_failure_degrades_to_unavailable() {
        let client = Arc::new(CountingPreviewClient::new(Duration::ZERO, true));
        let mut controller = controller(&client);

        controller.on_url_changed(ARTICLE_URL).await;
        settle().await;

        assert_eq!(controller.state().await, PreviewState::Unavailable);
    }
}

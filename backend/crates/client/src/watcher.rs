//! Duplicate warnings while typing
//!
//! [`DuplicateWatcher`] turns the (first name, last name) inputs into a
//! stream of likely duplicates:
//!
//! - both fields empty: cancel pending work, publish no matches
//! - initials changed since the last fetch: re-fetch the prefix candidate
//!   set from the server, then rank it
//! - otherwise: re-rank the cached candidates locally
//!
//! Both paths run behind a [`Debouncer`]. Results are published on a
//! `tokio::sync::watch` channel.

use std::sync::Arc;
use std::time::Duration;

use customer::{CustomerSummary, Initials, rank_candidates};
use kernel::id::CustomerId;
use platform::fuzzy::FuzzyOptions;
use tokio::sync::{Mutex, watch};

use crate::api::CustomerApi;
use crate::debounce::Debouncer;
use crate::error::ClientResult;

/// Where prefix candidates come from
#[trait_variant::make(CandidateSource: Send)]
pub trait LocalCandidateSource {
    async fn fetch_candidates(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> ClientResult<Vec<CustomerSummary>>;
}

impl CandidateSource for CustomerApi {
    async fn fetch_candidates(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> ClientResult<Vec<CustomerSummary>> {
        CustomerApi::fetch_candidates(self, first_name, last_name).await
    }
}

/// Last fetched prefix candidate set
#[derive(Default)]
struct CandidateCache {
    initials: Option<Initials>,
    candidates: Vec<CustomerSummary>,
}

pub struct DuplicateWatcher<S>
where
    S: CandidateSource + Sync + 'static,
{
    source: Arc<S>,
    cache: Arc<Mutex<CandidateCache>>,
    debouncer: Debouncer,
    exclude: Option<CustomerId>,
    options: FuzzyOptions,
    matches: watch::Sender<Vec<CustomerSummary>>,
}

impl<S> DuplicateWatcher<S>
where
    S: CandidateSource + Sync + 'static,
{
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            cache: Arc::new(Mutex::new(CandidateCache::default())),
            debouncer: Debouncer::default(),
            exclude: None,
            options: FuzzyOptions::default(),
            matches: watch::Sender::new(Vec::new()),
        }
    }

    pub fn with_quiet_period(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Watch for an edit form: the record being edited is never a match
    pub fn editing(mut self, id: CustomerId) -> Self {
        self.exclude = Some(id);
        self
    }

    pub fn with_options(mut self, options: FuzzyOptions) -> Self {
        self.options = options;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<CustomerSummary>> {
        self.matches.subscribe()
    }

    /// Latest published matches
    pub fn current(&self) -> Vec<CustomerSummary> {
        self.matches.borrow().clone()
    }

    /// Feed the current contents of both input fields
    pub fn input_changed(&mut self, first_name: &str, last_name: &str) {
        let first_name = first_name.trim().to_string();
        let last_name = last_name.trim().to_string();

        if first_name.is_empty() && last_name.is_empty() {
            self.debouncer.cancel();
            self.matches.send_replace(Vec::new());
            return;
        }

        let source = self.source.clone();
        let cache = self.cache.clone();
        let matches = self.matches.clone();
        let exclude = self.exclude;
        let options = self.options;

        self.debouncer.schedule(async move {
            let mut cache = cache.lock().await;

            if let Some(initials) = Initials::of(&first_name, &last_name)
                && cache.initials.as_ref() != Some(&initials)
            {
                match source.fetch_candidates(&first_name, &last_name).await {
                    Ok(candidates) => {
                        tracing::debug!(count = candidates.len(), "Duplicate candidates fetched");
                        cache.initials = Some(initials);
                        cache.candidates = candidates;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Duplicate candidate fetch failed");
                        cache.initials = None;
                        cache.candidates.clear();
                    }
                }
            }

            let ranked = rank_candidates(
                &cache.candidates,
                &first_name,
                &last_name,
                exclude,
                &options,
            );
            matches.send_replace(ranked.into_iter().map(|r| r.candidate).collect());
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::time::advance;

    /// Serves the same-initials subset of a fixed list and counts calls
    #[derive(Clone, Default)]
    struct FakeSource {
        customers: Arc<Vec<CustomerSummary>>,
        calls: Arc<AtomicUsize>,
        fail: bool,
    }

    impl FakeSource {
        fn new(names: &[(&str, &str)]) -> Self {
            let customers = names
                .iter()
                .map(|(first, last)| CustomerSummary {
                    id: CustomerId::new(),
                    first_name: first.to_string(),
                    last_name: last.to_string(),
                })
                .collect();
            Self {
                customers: Arc::new(customers),
                ..Self::default()
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CandidateSource for FakeSource {
        async fn fetch_candidates(
            &self,
            first_name: &str,
            last_name: &str,
        ) -> ClientResult<Vec<CustomerSummary>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClientError::Api {
                    status: 500,
                    message: "Internal server error".into(),
                });
            }
            let Some(initials) = Initials::of(first_name, last_name) else {
                return Ok(Vec::new());
            };
            Ok(self
                .customers
                .iter()
                .filter(|c| initials.matches(&c.first_name, &c.last_name))
                .cloned()
                .collect())
        }
    }

    fn names(matches: &[CustomerSummary]) -> Vec<String> {
        matches
            .iter()
            .map(|c| format!("{} {}", c.first_name, c.last_name))
            .collect()
    }

    async fn next(rx: &mut watch::Receiver<Vec<CustomerSummary>>) -> Vec<String> {
        rx.changed().await.unwrap();
        names(&rx.borrow_and_update())
    }

    fn pool() -> FakeSource {
        FakeSource::new(&[("John", "Doe"), ("Jon", "Doe"), ("Jane", "Dunn"), ("Mark", "Doe")])
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystrokes_inside_quiet_period_fetch_once() {
        let source = pool();
        let mut watcher = DuplicateWatcher::new(source.clone());
        let mut rx = watcher.subscribe();

        for (first, last) in [("J", "D"), ("Jo", "D"), ("Joh", "Do"), ("John", "Doe")] {
            watcher.input_changed(first, last);
            advance(Duration::from_millis(50)).await;
        }

        assert_eq!(next(&mut rx).await, vec!["John Doe", "Jon Doe"]);
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_same_initials_reuse_cache() {
        let source = pool();
        let mut watcher = DuplicateWatcher::new(source.clone());
        let mut rx = watcher.subscribe();

        watcher.input_changed("Jo", "Do");
        next(&mut rx).await;

        watcher.input_changed("Jane", "Dun");
        assert_eq!(next(&mut rx).await, vec!["Jane Dunn"]);
        assert_eq!(source.calls(), 1);

        watcher.input_changed("Mark", "Doe");
        assert_eq!(next(&mut rx).await, vec!["Mark Doe"]);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_editing_excludes_own_record() {
        let source = pool();
        let own = source.customers[0].id;
        let mut watcher = DuplicateWatcher::new(source).editing(own);
        let mut rx = watcher.subscribe();

        watcher.input_changed("John", "Doe");
        assert_eq!(next(&mut rx).await, vec!["Jon Doe"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleared_inputs_publish_nothing() {
        let source = pool();
        let mut watcher = DuplicateWatcher::new(source.clone());
        let mut rx = watcher.subscribe();

        watcher.input_changed("John", "Doe");
        assert_eq!(next(&mut rx).await.len(), 2);

        watcher.input_changed("Jon", "Doe");
        watcher.input_changed("  ", "");
        assert!(next(&mut rx).await.is_empty());

        // The cancelled re-rank never publishes
        advance(Duration::from_secs(1)).await;
        assert!(!rx.has_changed().unwrap());
        assert!(watcher.current().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_is_empty_and_retried() {
        let source = FakeSource {
            fail: true,
            ..pool()
        };
        let mut watcher = DuplicateWatcher::new(source.clone());
        let mut rx = watcher.subscribe();

        watcher.input_changed("John", "Doe");
        assert!(next(&mut rx).await.is_empty());

        watcher.input_changed("Johnny", "Doe");
        assert!(next(&mut rx).await.is_empty());
        assert_eq!(source.calls(), 2);
    }
}

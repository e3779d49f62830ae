//! `MovieService` - asynchronous facade over the TMDB client.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Result, bail};
use tokio::sync::{OnceCell, oneshot};
use url::Url;

use crate::tmdb::{LocalMovieApi, Movie, MoviePage, TmdbClient};

use super::handle::{Outcome, RequestHandle};
use super::sort::SortBy;

/// Process-wide shared service instance.
static SHARED: OnceCell<MovieService> = OnceCell::const_new();

/// Configuration for constructing the movie service.
///
/// Plain in-process values; the facade reads no files and no
/// environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// TMDB API key sent as the `api_key` query parameter.
    pub api_key: String,
    /// Override for the API base URL (tests, proxies).
    pub base_url: Option<Url>,
}

impl ServiceConfig {
    /// Creates a config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }
}

/// Asynchronous movie service facade.
///
/// The single entry point consumers hold for upstream movie queries.
/// Cloning is cheap; all clones share one HTTP client. Each query
/// returns a cancellable [`RequestHandle`] that delivers exactly one
/// terminal [`Outcome`].
#[derive(Debug, Clone)]
pub struct MovieService {
    /// Shared TMDB client.
    client: Arc<TmdbClient>,
}

impl MovieService {
    /// Creates a service owning the given client.
    ///
    /// This is the composition-root path: construct one client for the
    /// process and hand clones of the service to consumers.
    #[must_use]
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Returns the process-wide shared service, constructing it on
    /// first call.
    ///
    /// Concurrent first-time callers all observe the same instance;
    /// `config` is ignored once the service exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the first-time client construction fails.
    pub async fn shared(config: &ServiceConfig) -> Result<&'static Self> {
        SHARED
            .get_or_try_init(|| async { Self::from_config(config) })
            .await
    }

    /// Builds a service from a config.
    fn from_config(config: &ServiceConfig) -> Result<Self> {
        let mut builder = TmdbClient::builder().api_key(config.api_key.clone());
        if let Some(url) = &config.base_url {
            builder = builder.base_url(url.clone());
        }
        Ok(Self::new(builder.build()?))
    }

    /// Fetches a single movie by its TMDB id.
    ///
    /// Returns immediately; the request runs on the tokio runtime and
    /// the handle delivers its terminal outcome.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn movie(&self, movie_id: u64) -> RequestHandle<Movie> {
        tracing::debug!(movie_id, "dispatching movie request");
        let client = Arc::clone(&self.client);
        Self::dispatch(async move { client.movie(movie_id).await })
    }

    /// Fetches one page of a movie list, dispatching on `sort_by`.
    ///
    /// `page` is 1-based. [`SortBy::Favourite`] is backed by
    /// caller-local data, not by the upstream API: its handle resolves
    /// `Failed` without any network request.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn movies(&self, sort_by: SortBy, page: u32) -> RequestHandle<MoviePage> {
        tracing::debug!(?sort_by, page, "dispatching movie list request");
        match sort_by {
            SortBy::MostPopular => {
                let client = Arc::clone(&self.client);
                Self::dispatch(async move { client.popular_movies(page).await })
            }
            SortBy::TopRated => {
                let client = Arc::clone(&self.client);
                Self::dispatch(async move { client.top_rated_movies(page).await })
            }
            SortBy::Favourite => {
                tracing::warn!("favourite listing requested from the network facade");
                Self::dispatch(async move {
                    bail!("SortBy::Favourite is not backed by a network endpoint")
                })
            }
        }
    }

    /// Spawns the request future and wires its outcome to a handle.
    ///
    /// The spawned task reports through a oneshot channel; an aborted
    /// task drops the sender, which the handle observes as cancellation.
    fn dispatch<T>(fut: impl Future<Output = Result<T>> + Send + 'static) -> RequestHandle<T>
    where
        T: Send + 'static,
    {
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let outcome = match fut.await {
                Ok(payload) => Outcome::Success(payload),
                Err(err) => {
                    tracing::error!(error = %err, "API request failed");
                    Outcome::Failed(err)
                }
            };
            // The caller may have dropped the handle; the outcome is
            // discarded in that case.
            let _ = outcome_tx.send(outcome);
        });
        RequestHandle::new(outcome_rx, task.abort_handle())
    }
}

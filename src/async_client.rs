//! Async wrapper around [`CampusSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. Store
//! round-trips are short blocking HTTP calls, making this approach a good
//! fit for request handlers.
//!
//! # Example
//!
//! ```no_run
//! use campus_tcg_sdk::AsyncCampusSdk;
//!
//! # async fn example() -> campus_tcg_sdk::Result<()> {
//! let sdk = AsyncCampusSdk::builder().build().await?;
//!
//! // Run any sync SDK method via closure
//! let pack = sdk.run(|s| s.boosters().open_pack("user-123")).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{CampusError, Result};
use crate::CampusSdk;

// ---------------------------------------------------------------------------
// AsyncCampusSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCampusSdk`] instance.
pub struct AsyncCampusSdkBuilder {
    api_base: Option<String>,
    service_key: Option<String>,
    cache_dir: Option<PathBuf>,
    offline: bool,
    timeout: Duration,
}

impl Default for AsyncCampusSdkBuilder {
    fn default() -> Self {
        Self {
            api_base: None,
            service_key: None,
            cache_dir: None,
            offline: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl AsyncCampusSdkBuilder {
    /// Set the store base URL explicitly.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Set the service key explicitly.
    pub fn service_key(mut self, key: impl Into<String>) -> Self {
        self.service_key = Some(key.into());
        self
    }

    /// Set a custom cache directory for the catalog snapshot.
    pub fn cache_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.cache_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Enable or disable offline mode.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the HTTP request timeout for store calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the async SDK.
    ///
    /// Initialization runs on the blocking thread pool so it won't block
    /// the async event loop.
    pub async fn build(self) -> Result<AsyncCampusSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = CampusSdk::builder();
            if let Some(base) = self.api_base {
                builder = builder.api_base(base);
            }
            if let Some(key) = self.service_key {
                builder = builder.service_key(key);
            }
            if let Some(dir) = self.cache_dir {
                builder = builder.cache_dir(dir);
            }
            builder = builder.offline(self.offline).timeout(self.timeout);
            let sdk = builder.build()?;
            Ok(AsyncCampusSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| CampusError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCampusSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`CampusSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`CampusSdk`] is
/// protected by a [`Mutex`] since it uses `RefCell` internally.
///
/// # Usage
///
/// Use [`run()`](Self::run) to execute any sync SDK method:
///
/// ```no_run
/// # use campus_tcg_sdk::AsyncCampusSdk;
/// # async fn example() -> campus_tcg_sdk::Result<()> {
/// let sdk = AsyncCampusSdk::builder().build().await?;
/// let board = sdk.run(|s| s.minigame().deal()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AsyncCampusSdk {
    inner: Arc<Mutex<CampusSdk>>,
}

impl AsyncCampusSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncCampusSdkBuilder {
        AsyncCampusSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives a `&CampusSdk` reference and should return a
    /// `Result<T>`. The operation runs on a dedicated blocking thread,
    /// keeping the async event loop free.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use campus_tcg_sdk::AsyncCampusSdk;
    /// # async fn example() -> campus_tcg_sdk::Result<()> {
    /// # let sdk = AsyncCampusSdk::builder().build().await?;
    /// let leaderboard = sdk.run(|s| s.collections().leaderboard()).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CampusSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| CampusError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CampusError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Drop the cached catalog snapshot asynchronously.
    pub async fn refresh(&self) -> Result<()> {
        self.run(|s| s.refresh()).await
    }
}

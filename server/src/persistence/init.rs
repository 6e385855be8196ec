//! One-shot initialization latch.

use std::future::Future;
use tokio::sync::Mutex;

use super::PersistenceError;

/// Lifecycle of a repository's schema/seed bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitState {
    Uninitialized,
    /// A caller holds the latch and is running the bootstrap.
    Initializing,
    Ready,
    Failed(String),
}

/// Runs a bootstrap future at most once and remembers its outcome.
///
/// The mutex is held for the whole bootstrap, so callers that arrive while it
/// runs queue behind it and then observe the latched result. A failure is
/// never retried.
#[derive(Debug)]
pub struct InitLatch {
    state: Mutex<InitState>,
}

impl Default for InitLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl InitLatch {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(InitState::Uninitialized),
        }
    }

    /// Current state. Waits if a bootstrap is in flight.
    #[cfg(test)]
    pub async fn state(&self) -> InitState {
        self.state.lock().await.clone()
    }

    /// Run `bootstrap` if no caller has done so yet, otherwise return the
    /// latched outcome.
    pub async fn run_once<F, Fut>(&self, bootstrap: F) -> Result<(), PersistenceError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(), PersistenceError>>,
    {
        let mut state = self.state.lock().await;
        match &*state {
            InitState::Ready => return Ok(()),
            InitState::Failed(reason) => {
                return Err(PersistenceError::Initialization(reason.clone()));
            }
            InitState::Initializing => {
                // The previous holder was cancelled mid-bootstrap.
                let reason = "initialization was interrupted".to_string();
                tracing::error!("{}", reason);
                *state = InitState::Failed(reason.clone());
                return Err(PersistenceError::Initialization(reason));
            }
            InitState::Uninitialized => {}
        }

        *state = InitState::Initializing;
        tracing::info!("Running repository initialization");

        match bootstrap().await {
            Ok(()) => {
                *state = InitState::Ready;
                tracing::info!("Repository initialization complete");
                Ok(())
            }
            Err(e) => {
                let reason = e.to_string();
                tracing::error!(error = %reason, "Repository initialization failed");
                *state = InitState::Failed(reason.clone());
                Err(PersistenceError::Initialization(reason))
            }
        }
    }
}

//! Cancellation context for record operations
//!
//! Every provider operation receives a [`Context`]. Network calls race
//! against it with [`Context::run`]: when the caller cancels (or the deadline
//! passes) the in-flight future is dropped, which aborts the request, and the
//! operation returns [`Error::Cancelled`].
//!
//! ```rust,no_run
//! use libdns_core::Context;
//! use std::time::Duration;
//!
//! # async fn demo() {
//! let (ctx, cancel) = Context::with_cancel();
//! tokio::spawn(async move {
//!     let _ = tokio::signal::ctrl_c().await;
//!     cancel.cancel();
//! });
//!
//! let bounded = ctx.clone().timeout(Duration::from_secs(10));
//! # let _ = bounded;
//! # }
//! ```

use crate::error::{Error, Result};
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Caller-supplied cancellation signal and optional deadline
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancel: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Handle that cancels every [`Context`] cloned from its pair
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Cancel all operations running under the paired context
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl Context {
    /// A context that is never cancelled
    pub fn background() -> Self {
        Self::default()
    }

    /// A cancellable context and the handle that cancels it
    pub fn with_cancel() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        (
            Self {
                cancel: Some(rx),
                deadline: None,
            },
            CancelHandle { tx },
        )
    }

    /// A context that expires after `duration`
    pub fn with_timeout(duration: Duration) -> Self {
        Self::background().timeout(duration)
    }

    /// Bound this context by a deadline `duration` from now
    ///
    /// An existing earlier deadline is kept.
    pub fn timeout(mut self, duration: Duration) -> Self {
        let deadline = Instant::now() + duration;
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    /// Whether the context is already cancelled or past its deadline
    pub fn is_done(&self) -> bool {
        let cancelled = self.cancel.as_ref().is_some_and(|rx| *rx.borrow());
        let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
        cancelled || expired
    }

    /// Resolve once the context is cancelled or its deadline passes
    ///
    /// Never resolves for a background context.
    pub async fn done(&self) -> Error {
        let cancelled = async {
            match self.cancel.clone() {
                Some(mut rx) => loop {
                    if *rx.borrow_and_update() {
                        return;
                    }
                    if rx.changed().await.is_err() {
                        // Handle dropped without cancelling
                        std::future::pending::<()>().await;
                    }
                },
                None => std::future::pending::<()>().await,
            }
        };
        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            _ = cancelled => Error::cancelled("context cancelled"),
            _ = expired => Error::cancelled("context deadline exceeded"),
        }
    }

    /// Run `fut` unless the context finishes first
    ///
    /// The future is dropped on cancellation.
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_done() {
            return Err(self.done().await);
        }

        tokio::select! {
            biased;
            err = self.done() => Err(err),
            res = fut => res,
        }
    }
}

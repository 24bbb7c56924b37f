//! Caller-supplied execution context: cancellation and deadlines.
//!
//! Every API operation takes a `&Context`. The operation races its in-flight
//! request against the context; when the context is cancelled or its deadline
//! passes, the request future is dropped (aborting the connection) and the
//! operation returns [`ErrorKind::Cancelled`].
//!
//! ```rust,ignore
//! let (ctx, cancel) = Context::with_cancel();
//! let ctx = ctx.with_timeout(Duration::from_secs(5));
//!
//! tokio::spawn(async move {
//!     tokio::signal::ctrl_c().await.ok();
//!     cancel.cancel();
//! });
//!
//! let records = client.search(&ctx, "car", None).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::Instant;
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};

/// Execution context observed by every request.
///
/// Cloning is cheap; clones share the same cancellation signal.
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancel: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Cancels every [`Context`] created alongside it.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Returns true once `cancel` has been called.
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Context {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// A cancellable context and the handle that cancels it.
    ///
    /// Dropping the handle without calling `cancel` leaves the context
    /// uncancelled.
    pub fn with_cancel() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            cancel: Some(rx),
            deadline: None,
        };
        (ctx, CancelHandle { tx })
    }

    /// Derive a context whose deadline is `timeout` from now.
    ///
    /// An existing earlier deadline is kept.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a context that expires at `deadline`.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        });
        self
    }

    /// The deadline, if one is set.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true if the context was cancelled or its deadline has passed.
    pub fn is_done(&self) -> bool {
        self.check().is_err()
    }

    /// Fail fast if the context is already done.
    pub fn check(&self) -> Result<()> {
        if let Some(rx) = &self.cancel {
            if *rx.borrow() {
                return Err(cancelled("context cancelled"));
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(cancelled("deadline exceeded"));
            }
        }
        Ok(())
    }

    /// Run `fut` under this context.
    ///
    /// Returns the future's own result, or a `Cancelled` error as soon as the
    /// context is cancelled or times out. The future is dropped in that case.
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.check()?;

        tokio::select! {
            biased;
            _ = self.cancelled() => {
                debug!("request aborted by context cancellation");
                Err(cancelled("context cancelled"))
            }
            _ = self.expired() => {
                debug!("request aborted by context deadline");
                Err(cancelled("deadline exceeded"))
            }
            result = fut => result,
        }
    }

    async fn cancelled(&self) {
        let Some(rx) = &self.cancel else {
            return std::future::pending().await;
        };
        let mut rx = rx.clone();
        loop {
            let flagged = *rx.borrow_and_update();
            if flagged {
                return;
            }
            if rx.changed().await.is_err() {
                // Handle dropped without cancelling.
                return std::future::pending().await;
            }
        }
    }

    async fn expired(&self) {
        match self.deadline {
            Some(deadline) => tokio::time::sleep_until(deadline).await,
            None => std::future::pending().await,
        }
    }
}

fn cancelled(reason: &str) -> Error {
    Error::new(ErrorKind::Cancelled(reason.to_string()))
}

//! Caller-side deadlines for any client call.
//!
//! Each request is already bounded by `request_timeout_secs`. A chain of calls
//! (or a single call) can additionally be bounded by an absolute deadline.
//! Dropping the future cancels the in-flight request.

use std::future::Future;

use tokio::time::Instant;

use crate::error::{Error, Result};

/// Run `call` until `deadline`, failing with [`Error::DeadlineElapsed`] after it.
///
/// ```rust,no_run
/// use std::time::Duration;
/// use intermed_client::{within, ClientConfig, ClientIdentity, SessionClient};
///
/// # async fn example() -> intermed_client::Result<()> {
/// let identity = ClientIdentity::new("Имя", "Фамилия", "Отчество", "2000-01-01", "7690299770000000");
/// let mut client = SessionClient::new(identity, ClientConfig::default())?;
/// let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
/// within(deadline, client.login()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn within<F, T>(deadline: Instant, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout_at(deadline, call).await {
        Ok(result) => result,
        Err(_) => Err(Error::DeadlineElapsed),
    }
}

use std::future::Future;

use tracing::error;

/// Runs a best-effort side effect in the background.
///
/// The caller never awaits the result: a failure is logged under `task`
/// and swallowed, so it cannot fail the primary request.
pub fn spawn_logged<F>(task: &'static str, fut: F)
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(error) = fut.await {
            error!(%error, task, "background task failed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn runs_the_future_to_completion() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        spawn_logged("test task", async move {
            tx.send(42).ok();
            Ok(())
        });
        assert_eq!(rx.await.expect("task ran"), 42);
    }

    #[tokio::test]
    async fn failure_is_swallowed() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        spawn_logged("failing task", async move {
            tx.send(()).ok();
            Err(anyhow::anyhow!("boom"))
        });
        // The spawned task must not propagate its error anywhere observable.
        rx.await.expect("task ran");
    }
}

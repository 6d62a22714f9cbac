use std::future::Future;
use std::time::Duration;

/// Calls `on_tick` every `every` until `shutdown` completes. The first call is
/// immediate.
///
/// `shutdown` is polled across every iteration, so a signal that arrives while
/// `on_tick` runs stops the loop before the next tick. Returns the number of
/// ticks run.
pub async fn run_every<S, F>(every: Duration, shutdown: S, mut on_tick: F) -> u64
where
    S: Future,
    F: FnMut(),
{
    let mut ticker = tokio::time::interval(every);
    tokio::pin!(shutdown);
    let mut ticks = 0;

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                tracing::info!(ticks, "Shutting down");
                return ticks;
            }
            _ = ticker.tick() => {
                on_tick();
                ticks += 1;
            }
        }
    }
}

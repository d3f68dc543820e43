//! Heartbeat — background timer for unprompted lines.
//!
//! Ticks on a fixed interval, asks [`IdleChatter`] whether Flowey should say
//! something, and forwards any line to the front end over a channel.

use super::idle_chatter::{IdleChatter, IdleLine};
use super::session::FloweySession;
use super::sentiment::LexiconScorer;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, Mutex};

/// Shortest tick the loop will run at.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Runs until the receiving side of `tx` is dropped. Intervals below
/// [`MIN_INTERVAL`] are raised to it.
pub async fn heartbeat_loop<S>(
    session: Arc<Mutex<FloweySession<S>>>,
    mut chatter: IdleChatter,
    tx: mpsc::Sender<IdleLine>,
    interval: Duration,
) where
    S: LexiconScorer + Send,
{
    let mut ticker = tokio::time::interval(interval.max(MIN_INTERVAL));
    // First tick completes immediately; skip it so the visitor gets a full interval.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tx.closed() => break,
        }

        let line = {
            let mut session = session.lock().await;
            let now = Instant::now();
            if session.is_holding(now) {
                continue;
            }
            let idle_secs = session.idle_seconds(now);
            let previous = session.previous_expression();
            chatter.decide_at(idle_secs, previous, now, session.rng())
        };

        if let Some(line) = line {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    }

    tracing::debug!("[Heartbeat] Receiver gone, stopping");
}

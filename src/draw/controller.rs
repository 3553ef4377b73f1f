use std::{sync::Arc, time::Duration};

use anyhow::{bail, Result};
use log::info;
use rand::Rng;
use serde::Serialize;
use tokio::{
    sync::{mpsc::UnboundedSender, Mutex},
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tokio_util::sync::CancellationToken;

use crate::{
    history::HistoryStore,
    models::{Category, QuoteRecord},
    quotes,
};

use super::{DrawPhase, DrawState};

/// Fixed number of cosmetic shuffle frames before the committed pick.
pub const SHUFFLE_STEPS: u32 = 20;

const STEP_INTERVAL_MS: u64 = 100;
const DEBUG_STEP_INTERVAL_MS: u64 = 10;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum DrawEvent {
    /// Cosmetic animation frame; never persisted.
    Shuffle {
        category: Category,
        text: String,
        step: u32,
    },
    /// The committed result, already appended to history.
    Settled {
        category: Category,
        record: QuoteRecord,
    },
}

type PoolFn = fn(Category) -> &'static [&'static str];

/// Runs the shuffle animation for one modal instance and commits the
/// result into history. At most one draw is in flight; starting a new one
/// supersedes the old one before any of its remaining steps can fire.
#[derive(Clone)]
pub struct DrawController {
    state: Arc<Mutex<DrawState>>,
    history: HistoryStore,
    events: UnboundedSender<DrawEvent>,
    in_flight: Arc<Mutex<Option<(JoinHandle<()>, CancellationToken)>>>,
    pool_fn: PoolFn,
    shuffle_steps: u32,
    step_interval: Duration,
}

impl DrawController {
    pub fn new(history: HistoryStore, events: UnboundedSender<DrawEvent>) -> Self {
        let debug_mode = std::env::var("WISHBOX_DEBUG")
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let step_interval_ms = if debug_mode {
            DEBUG_STEP_INTERVAL_MS
        } else {
            STEP_INTERVAL_MS
        };

        Self::with_config(
            history,
            events,
            quotes::pool,
            SHUFFLE_STEPS,
            Duration::from_millis(step_interval_ms),
        )
    }

    pub(crate) fn with_config(
        history: HistoryStore,
        events: UnboundedSender<DrawEvent>,
        pool_fn: PoolFn,
        shuffle_steps: u32,
        step_interval: Duration,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(DrawState::new())),
            history,
            events,
            in_flight: Arc::new(Mutex::new(None)),
            pool_fn,
            shuffle_steps,
            step_interval,
        }
    }

    pub async fn get_state(&self) -> DrawState {
        self.state.lock().await.clone()
    }

    /// Starts a draw for `category`. An empty pool is a configuration
    /// integrity violation, fatal to this draw attempt.
    pub async fn draw(&self, category: Category) -> Result<()> {
        let pool = (self.pool_fn)(category);
        if pool.is_empty() {
            bail!("no quotes configured for category {}", category.as_str());
        }

        self.cancel_in_flight().await;

        {
            let mut state = self.state.lock().await;
            state.begin(category);
        }

        let cancel_token = CancellationToken::new();
        let token = cancel_token.clone();
        let state = self.state.clone();
        let history = self.history.clone();
        let events = self.events.clone();
        let shuffle_steps = self.shuffle_steps;
        let step_interval = self.step_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(step_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            for step in 0..shuffle_steps {
                tokio::select! {
                    _ = ticker.tick() => {
                        let text = pick(pool);
                        {
                            let mut guard = state.lock().await;
                            guard.shuffle(text);
                        }
                        let _ = events.send(DrawEvent::Shuffle {
                            category,
                            text: text.to_string(),
                            step,
                        });
                    }
                    _ = token.cancelled() => {
                        info!("Draw for {} superseded mid-animation", category.as_str());
                        return;
                    }
                }
            }

            if token.is_cancelled() {
                return;
            }

            // The committed pick is drawn fresh, independent of the last
            // shuffle frame; a repeat of that frame is expected.
            let record = QuoteRecord::new(pick(pool));
            history.append(category, record.clone());

            {
                let mut guard = state.lock().await;
                guard.settle(record.clone());
            }

            let _ = events.send(DrawEvent::Settled { category, record });
        });

        *self.in_flight.lock().await = Some((handle, cancel_token));

        Ok(())
    }

    /// Cancels any in-flight animation (modal closed or a different
    /// category opened). No record is appended by a cancelled draw.
    pub async fn cancel(&self) {
        self.cancel_in_flight().await;

        let mut state = self.state.lock().await;
        if state.phase == DrawPhase::Drawing {
            state.reset();
        }
    }

    /// Cancels the token and joins the task so no stale step can fire
    /// into a dismissed view afterwards.
    async fn cancel_in_flight(&self) {
        if let Some((handle, token)) = self.in_flight.lock().await.take() {
            token.cancel();
            let _ = handle.await;
        }
    }
}

fn pick(pool: &[&'static str]) -> &'static str {
    pool[rand::thread_rng().gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

    const TINY_POOL: &[&str] = &["甲", "乙", "丙"];

    fn tiny_pool(_: Category) -> &'static [&'static str] {
        TINY_POOL
    }

    fn empty_pool(_: Category) -> &'static [&'static str] {
        &[]
    }

    fn controller_with(
        dir: &tempfile::TempDir,
        pool_fn: PoolFn,
    ) -> (DrawController, HistoryStore, UnboundedReceiver<DrawEvent>) {
        let history = HistoryStore::new(dir.path().join("history.json")).unwrap();
        let (tx, rx) = unbounded_channel();
        let controller = DrawController::with_config(
            history.clone(),
            tx,
            pool_fn,
            SHUFFLE_STEPS,
            Duration::from_millis(1),
        );
        (controller, history, rx)
    }

    async fn wait_for_settled(rx: &mut UnboundedReceiver<DrawEvent>) -> (Category, QuoteRecord) {
        loop {
            match tokio::time::timeout(Duration::from_secs(5), rx.recv()).await {
                Ok(Some(DrawEvent::Settled { category, record })) => return (category, record),
                Ok(Some(DrawEvent::Shuffle { .. })) => continue,
                Ok(None) => panic!("event channel closed before settling"),
                Err(_) => panic!("draw did not settle within the step budget"),
            }
        }
    }

    #[tokio::test]
    async fn draw_appends_exactly_one_record_from_the_pool() {
        let dir = tempdir().unwrap();
        let (controller, history, mut rx) = controller_with(&dir, tiny_pool);

        controller.draw(Category::Joy).await.unwrap();
        let (category, record) = wait_for_settled(&mut rx).await;

        assert_eq!(category, Category::Joy);
        assert!(TINY_POOL.contains(&record.text.as_str()));
        assert_eq!(history.all(Category::Joy), vec![record.clone()]);

        let state = controller.get_state().await;
        assert_eq!(state.phase, DrawPhase::Result);
        assert_eq!(state.current_text.as_deref(), Some(record.text.as_str()));
    }

    #[tokio::test]
    async fn shuffle_frames_precede_the_committed_result() {
        let dir = tempdir().unwrap();
        let (controller, _history, mut rx) = controller_with(&dir, tiny_pool);

        controller.draw(Category::Answers).await.unwrap();

        let mut shuffles = 0;
        loop {
            match tokio::time::timeout(Duration::from_secs(5), rx.recv()).await {
                Ok(Some(DrawEvent::Shuffle { text, .. })) => {
                    assert!(TINY_POOL.contains(&text.as_str()));
                    shuffles += 1;
                }
                Ok(Some(DrawEvent::Settled { .. })) => break,
                other => panic!("unexpected event: {other:?}"),
            }
        }
        assert_eq!(shuffles, SHUFFLE_STEPS);
    }

    #[tokio::test]
    async fn superseding_draw_appends_only_to_the_new_category() {
        let dir = tempdir().unwrap();
        let (controller, history, mut rx) = controller_with(&dir, tiny_pool);

        controller.draw(Category::Sorrow).await.unwrap();
        controller.draw(Category::Birthday).await.unwrap();

        let (category, _record) = wait_for_settled(&mut rx).await;
        assert_eq!(category, Category::Birthday);
        assert!(history.all(Category::Sorrow).is_empty());
        assert_eq!(history.len(Category::Birthday), 1);
    }

    #[tokio::test]
    async fn cancel_leaves_no_record_and_resets_to_idle() {
        let dir = tempdir().unwrap();
        let (controller, history, mut rx) = controller_with(&dir, tiny_pool);

        controller.draw(Category::Fear).await.unwrap();
        controller.cancel().await;

        for category in Category::ALL {
            assert!(history.all(category).is_empty());
        }
        assert_eq!(controller.get_state().await.phase, DrawPhase::Idle);

        // Any buffered events are cosmetic frames only.
        while let Ok(event) = rx.try_recv() {
            assert!(matches!(event, DrawEvent::Shuffle { .. }));
        }
    }

    #[tokio::test]
    async fn empty_pool_is_a_fatal_draw_error() {
        let dir = tempdir().unwrap();
        let (controller, history, _rx) = controller_with(&dir, empty_pool);

        let err = controller.draw(Category::Anger).await.unwrap_err();
        assert!(err.to_string().contains("ANGER"));
        assert!(history.all(Category::Anger).is_empty());
        assert_eq!(controller.get_state().await.phase, DrawPhase::Idle);
    }
}

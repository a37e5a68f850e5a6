use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep};

/// Quiet period after the last resize notification before pools re-init.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Conditions the demo mode cycles through; one per variant.
pub const DEMO_PLAYLIST: [&str; 7] = [
    "Clear",
    "Clouds",
    "Rain",
    "Snow",
    "Thunderstorm",
    "Mist",
    "Squall",
];

#[derive(Debug)]
pub enum AppEvent {
    TickFrame,
    Input(Event),
    ResizeSettled { cols: u16, rows: u16 },
    SetCondition(String),
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

pub fn start_frame_task(tx: mpsc::Sender<AppEvent>, fps: u8) {
    let fps = fps.max(15);
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(1000_u64 / u64::from(fps)));
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

pub fn start_demo_task(tx: mpsc::Sender<AppEvent>, period_secs: u64) {
    tokio::spawn(async move {
        let period = Duration::from_secs(period_secs.max(1));
        for condition in DEMO_PLAYLIST.iter().cycle() {
            if tx
                .send(AppEvent::SetCondition((*condition).to_string()))
                .await
                .is_err()
            {
                break;
            }
            sleep(period).await;
        }
    });
}

/// Coalesces rapid resize notifications into a single settled event. Each
/// new notification aborts the pending timer, so at most one is ever in
/// flight.
#[derive(Debug, Default)]
pub struct ResizeDebouncer {
    pending: Option<JoinHandle<()>>,
}

impl ResizeDebouncer {
    pub fn schedule(&mut self, tx: mpsc::Sender<AppEvent>, cols: u16, rows: u16) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.pending = Some(tokio::spawn(async move {
            sleep(RESIZE_DEBOUNCE).await;
            let _ = tx.send(AppEvent::ResizeSettled { cols, rows }).await;
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{VariantKind, variant_for_condition};

    #[test]
    fn demo_playlist_covers_every_variant() {
        let kinds: Vec<VariantKind> = DEMO_PLAYLIST
            .iter()
            .map(|code| variant_for_condition(code))
            .collect();
        for kind in VariantKind::ALL {
            assert!(kinds.contains(&kind), "{kind:?} missing from playlist");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn debouncer_keeps_only_the_last_resize() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut debouncer = ResizeDebouncer::default();
        debouncer.schedule(tx.clone(), 80, 24);
        tokio::time::advance(Duration::from_millis(100)).await;
        debouncer.schedule(tx.clone(), 100, 30);

        // paused clock auto-advances while the test awaits
        let event = rx.recv().await.expect("settled event");
        match event {
            AppEvent::ResizeSettled { cols, rows } => {
                assert_eq!((cols, rows), (100, 30));
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(rx.try_recv().is_err(), "stale resize not coalesced");
    }
}

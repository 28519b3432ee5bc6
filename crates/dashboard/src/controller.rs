use std::{sync::Arc, time::Duration};

use common::models::Selection;
use signal_feed::{FetchFailure, SignalSource};
use tokio::{
    sync::{Mutex, RwLock},
    task::JoinHandle,
    time,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    card::SignalCard,
    view::{Panel, SignalView},
};

pub const AUTO_REFRESH_PERIOD: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    Manual,
    Auto,
}

struct Shared<S, V> {
    source: S,
    view: Mutex<V>,
    selection: RwLock<Selection>,
}

impl<S: SignalSource, V: SignalView> Shared<S, V> {
    async fn request_signal(&self) -> Result<(), FetchFailure> {
        // Read at fetch time so a tick always sees the latest selection.
        let Selection { symbol, timeframe } = self.selection.read().await.clone();
        let request_id = Uuid::new_v4();

        debug!("[{}] requesting {} {}", request_id, symbol, timeframe);
        self.view.lock().await.show(Panel::Loading);

        match self.source.fetch_signal(&symbol, &timeframe).await {
            Ok(data) => {
                let card = SignalCard::render(&data);
                info!("[{}] {} {} -> {}", request_id, data.symbol, timeframe, data.signal);
                self.view.lock().await.show(Panel::Result(card));
                Ok(())
            }
            Err(e) => {
                warn!("[{}] signal request for {} failed: {}", request_id, symbol, e);
                self.view.lock().await.show(Panel::Error(error_message(&e)));
                Err(e)
            }
        }
    }
}

pub fn error_message(err: &FetchFailure) -> String {
    format!(
        "Error fetching signal: {}. Make sure the backend API is running.",
        err
    )
}

/// Owns the refresh mode and the one periodic timer. Requests are never
/// fenced: when two overlap, whichever resolves last is what stays on screen.
pub struct SignalViewController<S, V> {
    shared: Arc<Shared<S, V>>,
    mode: RefreshMode,
    timer: Option<JoinHandle<()>>,
    period: Duration,
}

impl<S, V> SignalViewController<S, V>
where
    S: SignalSource + 'static,
    V: SignalView + 'static,
{
    pub fn new(source: S, view: V, selection: Selection) -> Self {
        Self {
            shared: Arc::new(Shared {
                source,
                view: Mutex::new(view),
                selection: RwLock::new(selection),
            }),
            mode: RefreshMode::Manual,
            timer: None,
            period: AUTO_REFRESH_PERIOD,
        }
    }

    #[cfg(test)]
    async fn selection(&self) -> Selection {
        self.shared.selection.read().await.clone()
    }

    /// Runs one full fetch-and-render cycle in the caller's task.
    pub async fn request_signal(&self) -> Result<(), FetchFailure> {
        self.shared.request_signal().await
    }

    /// Starts a fetch-and-render cycle without waiting for it.
    pub fn refresh(&self) -> JoinHandle<()> {
        let shared = self.shared.clone();
        tokio::spawn(async move {
            let _ = shared.request_signal().await;
        })
    }

    pub async fn toggle_auto_refresh(&mut self) -> RefreshMode {
        match self.mode {
            RefreshMode::Manual => self.start().await,
            RefreshMode::Auto => self.stop().await,
        }
        self.mode
    }

    /// Changes the symbol. Only in manual mode does this fetch right away;
    /// in auto mode the next tick picks it up.
    pub async fn set_symbol(&self, symbol: impl Into<String>) -> Option<JoinHandle<()>> {
        self.shared.selection.write().await.symbol = symbol.into();
        match self.mode {
            RefreshMode::Manual => Some(self.refresh()),
            RefreshMode::Auto => None,
        }
    }

    pub async fn set_timeframe(&self, timeframe: impl Into<String>) {
        self.shared.selection.write().await.timeframe = timeframe.into();
    }

    async fn start(&mut self) {
        if let Some(stale) = self.timer.take() {
            stale.abort();
        }

        self.mode = RefreshMode::Auto;
        self.shared.view.lock().await.set_auto_refresh(true);
        info!("Auto refresh on, every {}s", self.period.as_secs());

        let shared = self.shared.clone();
        let period = self.period;
        self.timer = Some(tokio::spawn(async move {
            // The first tick completes immediately.
            let mut ticker = time::interval(period);
            loop {
                ticker.tick().await;
                let shared = shared.clone();
                tokio::spawn(async move {
                    let _ = shared.request_signal().await;
                });
            }
        }));
    }

    async fn stop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        self.mode = RefreshMode::Manual;
        self.shared.view.lock().await.set_auto_refresh(false);
        info!("Auto refresh off");
    }
}

impl<S, V> Drop for SignalViewController<S, V> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

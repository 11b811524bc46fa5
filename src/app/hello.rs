//! Hello view: one greeting fetch on first display

use crate::api::ApiClient;
use eframe::egui;
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{info, warn};

pub const LOADING_TEXT: &str = "Loading...";
pub const FAILED_TEXT: &str = "Failed to load message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GreetingState {
    Idle,
    Loading,
    Loaded(String),
    Failed,
}

impl GreetingState {
    pub fn text(&self) -> &str {
        match self {
            GreetingState::Idle | GreetingState::Loading => LOADING_TEXT,
            GreetingState::Loaded(message) => message.as_str(),
            GreetingState::Failed => FAILED_TEXT,
        }
    }
}

pub struct HelloPage {
    greeting: GreetingState,
    client: ApiClient,
    runtime: Handle,
    pending: Option<oneshot::Receiver<Option<String>>>,
}

impl HelloPage {
    pub fn new(client: ApiClient, runtime: Handle) -> Self {
        Self { greeting: GreetingState::Idle, client, runtime, pending: None }
    }

    pub fn greeting(&self) -> &GreetingState {
        &self.greeting
    }

    /// Start the fetch if it has never run. Later calls do nothing.
    pub fn ensure_started(&mut self, ctx: &egui::Context) {
        if self.greeting != GreetingState::Idle {
            return;
        }
        self.greeting = GreetingState::Loading;

        let (tx, rx) = oneshot::channel();
        self.pending = Some(rx);
        let client = self.client.clone();
        let ctx = ctx.clone();

        self.runtime.spawn(async move {
            let message = match client.hello().await {
                Ok(message) => Some(message),
                Err(e) => {
                    warn!(error = %e, "Greeting fetch failed");
                    None
                }
            };
            let _ = tx.send(message);
            ctx.request_repaint();
        });
    }

    /// Pick up the fetch result. Called once per frame.
    pub fn poll(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };
        self.greeting = match rx.try_recv() {
            Ok(Some(message)) => {
                info!(%message, "Greeting loaded");
                GreetingState::Loaded(message)
            }
            Ok(None) | Err(TryRecvError::Closed) => GreetingState::Failed,
            Err(TryRecvError::Empty) => return,
        };
        self.pending = None;
    }
}

use crate::config::MonitorConfig;
use crate::errors::{MonitorError, Result};
use crate::puller::Puller;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;
use sync::kind::DataKind;
use sync::pagination::PageDirection;
use sync::scope::ScopeKey;
use sync::view::{DisplayData, RenderSignal};
use sync::{FetchOutcome, SyncEngine};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use transport::{AccountStream, PushFrame, RestApi, StreamConfig};

/// Requests routed into the engine loop. All engine state lives on that one
/// task, so every interaction goes through this channel.
pub enum AppEvent {
    Activate {
        kind: DataKind,
        scope: ScopeKey,
    },
    Paginate {
        direction: PageDirection,
    },
    Query {
        reply: oneshot::Sender<Option<DisplayData>>,
    },
}

/// Wires the pull client, the push stream and the engine together: fetches
/// the roster, hydrates live state from the startup summary, then runs the
/// single-owner event loop.
pub struct App {
    event_tx: UnboundedSender<AppEvent>,
    stream: AccountStream,
    shutdown: CancellationToken,
}

impl App {
    pub async fn start(
        config: MonitorConfig,
        render_tx: UnboundedSender<RenderSignal>,
    ) -> Result<Self> {
        let mut api = RestApi::new(config.api_base_url.clone(), config.api_timeout_milli_secs);
        api.init().map_err(|e| MonitorError::TransportError {
            message: e.to_string(),
        })?;
        let api = Arc::new(api);

        let accounts = api
            .get_accounts()
            .await
            .map_err(|e| MonitorError::TransportError {
                message: format!("load accounts failed: {}", e),
            })?;
        info!("loaded {} accounts", accounts.len());

        let mut engine = SyncEngine::new(config.ttl_secs * 1000);
        engine.set_accounts(accounts);
        engine.register_render_callback(Arc::new(move |signal| {
            let _ = render_tx.send(signal);
        }));

        // startup bulk hydrate; failure here degrades to cold caches
        match api.get_summary().await {
            Ok(summaries) => engine.hydrate(&summaries, time::now_millis()),
            Err(e) => warn!("summary hydrate failed, starting cold: {}", e),
        }

        let (frame_tx, frame_rx) = mpsc::unbounded_channel();
        let mut stream = AccountStream::new(
            StreamConfig {
                url: config.stream_url.clone(),
                connect_timeout: Duration::from_millis(config.stream_connect_timeout_milli_secs),
                heartbeat_interval: Duration::from_millis(
                    config.stream_heartbeat_interval_milli_secs,
                ),
                reconnect_delay: Duration::from_millis(
                    config.stream_reconnect_interval_milli_secs,
                ),
            },
            frame_tx,
        );
        stream.start().map_err(|e| MonitorError::StreamError {
            message: e.to_string(),
        })?;

        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let puller = Puller::new(api, config.page_limit, outcome_tx);

        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let loop_token = shutdown.child_token();
        tokio::spawn(async move {
            Self::run_loop(engine, puller, frame_rx, outcome_rx, event_rx, loop_token).await;
        });

        Ok(App {
            event_tx,
            stream,
            shutdown,
        })
    }

    pub fn activate(&self, kind: DataKind, scope: ScopeKey) -> Result<()> {
        self.send(AppEvent::Activate { kind, scope })
    }

    pub fn paginate(&self, direction: PageDirection) -> Result<()> {
        self.send(AppEvent::Paginate { direction })
    }

    /// Snapshot of the active view, built inside the engine loop.
    pub async fn display_data(&self) -> Result<Option<DisplayData>> {
        let (reply, response) = oneshot::channel();
        self.send(AppEvent::Query { reply })?;
        response.await.map_err(|_| MonitorError::AppError {
            message: "engine loop stopped".to_string(),
        })
    }

    pub async fn stop(&mut self) {
        self.shutdown.cancel();
        self.stream.stop().await;
    }

    fn send(&self, event: AppEvent) -> Result<()> {
        self.event_tx.send(event).map_err(|_| MonitorError::AppError {
            message: "engine loop stopped".to_string(),
        })
    }

    async fn run_loop(
        mut engine: SyncEngine,
        puller: Puller,
        mut frame_rx: UnboundedReceiver<PushFrame>,
        mut outcome_rx: UnboundedReceiver<FetchOutcome>,
        mut event_rx: UnboundedReceiver<AppEvent>,
        shutdown: CancellationToken,
    ) {
        loop {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    break;
                }
                Some(frame) = frame_rx.recv() => {
                    engine.apply_push(&frame, time::now_millis());
                }
                Some(outcome) = outcome_rx.recv() => {
                    engine.apply_fetch(outcome, time::now_millis());
                }
                Some(event) = event_rx.recv() => {
                    Self::handle_event(&mut engine, &puller, event);
                }
                else => {
                    break;
                }
            }
        }
        info!("engine loop stopped");
    }

    fn handle_event(engine: &mut SyncEngine, puller: &Puller, event: AppEvent) {
        match event {
            AppEvent::Activate { kind, scope } => {
                match engine.activate(kind, scope, time::now_millis()) {
                    Ok(commands) => {
                        for command in commands {
                            puller.spawn(command);
                        }
                    }
                    Err(e) => warn!("activate rejected: {}", e),
                }
            }
            AppEvent::Paginate { direction } => match engine.paginate(direction) {
                Ok(command) => puller.spawn(command),
                Err(e) => warn!("paginate rejected: {}", e),
            },
            AppEvent::Query { reply } => {
                let _ = reply.send(engine.display_data(time::now_millis()));
            }
        }
    }
}

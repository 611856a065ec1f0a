use crate::errors::*;
use crate::frame::PushFrame;
use log::{error, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use ws::{ConnState, RecvMsg};

#[derive(Debug, Clone)]
pub struct StreamConfig {
    pub url: String,
    pub connect_timeout: Duration,
    pub heartbeat_interval: Duration,
    pub reconnect_delay: Duration,
}

/// Push-channel consumer: owns the reconnecting `ws::Client`, decodes frames
/// and forwards them to the engine's event loop. Heartbeat and reconnect live
/// in the `ws` layer; this layer only translates frames.
pub struct AccountStream {
    config: StreamConfig,
    frame_tx: UnboundedSender<PushFrame>,
    client: Option<ws::Client>,
}

impl AccountStream {
    pub fn new(config: StreamConfig, frame_tx: UnboundedSender<PushFrame>) -> Self {
        AccountStream {
            config,
            frame_tx,
            client: None,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        let frame_tx = self.frame_tx.clone();
        let mut ws_config = ws::Config::default(
            self.config.url.clone(),
            Arc::new(move |msg: RecvMsg| {
                let frame_tx = frame_tx.clone();
                Box::pin(async move { Self::handle(msg, frame_tx) })
            }),
        );
        ws_config.connect_timeout = self.config.connect_timeout;
        ws_config.heartbeat_interval = self.config.heartbeat_interval;
        ws_config.reconnect_delay = self.config.reconnect_delay;

        let mut client = ws::Client::new(ws_config).map_err(|e| {
            error!("WebSocket client error: {:?}", e);
            TransportError::ClientError {
                message: e.to_string(),
            }
        })?;
        client.start().map_err(|e| {
            error!("WebSocket start error: {:?}", e);
            TransportError::ClientError {
                message: e.to_string(),
            }
        })?;

        info!("account stream started: {}", self.config.url);
        self.client = Some(client);
        Ok(())
    }

    pub fn state(&self) -> Option<watch::Receiver<ConnState>> {
        self.client.as_ref().map(|c| c.state())
    }

    pub async fn stop(&mut self) {
        if let Some(mut client) = self.client.take() {
            let _ = client.disconnect().await;
        }
    }

    fn handle(msg: RecvMsg, frame_tx: UnboundedSender<PushFrame>) -> ws::Result<()> {
        let text = match msg {
            RecvMsg::Text { content } => content,
            RecvMsg::Binary { data } => std::str::from_utf8(&data)
                .map_err(|e| ws::WsError::HandleError {
                    message: e.to_string(),
                })?
                .to_string(),
            _ => {
                return Ok(());
            }
        };

        let frame = match PushFrame::parse(&text) {
            Ok(frame) => frame,
            Err(e) => {
                error!("Unknown push frame: {} error: {}", text, e);
                return Err(ws::WsError::HandleError {
                    message: e.to_string(),
                });
            }
        };

        frame_tx.send(frame).map_err(|e| ws::WsError::HandleError {
            message: format!("frame channel closed: {}", e),
        })
    }
}

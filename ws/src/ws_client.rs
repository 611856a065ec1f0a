use crate::{Result, WsError};
use futures_util::stream::{SplitSink, SplitStream, StreamExt};
use futures_util::SinkExt;
use log::{error, info, warn};
use scopeguard::defer;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc::{channel, Receiver, Sender};
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tokio_util::sync::CancellationToken;

/// Connection lifecycle published to observers. The client re-enters
/// `Connecting` on every reconnect attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnState {
    Connecting,
    Open,
    Closed,
}

#[derive(Debug, Clone)]
pub enum SendMsg {
    Text { content: String },
    Binary { data: Vec<u8> },
    Ping { data: Vec<u8> },
    Pong { data: Vec<u8> },
}

impl SendMsg {
    pub fn to_websocket_message(self) -> Message {
        match self {
            SendMsg::Text { content } => Message::Text(content.into()),
            SendMsg::Binary { data } => Message::Binary(data.into()),
            SendMsg::Ping { data } => Message::Ping(data.into()),
            SendMsg::Pong { data } => Message::Pong(data.into()),
        }
    }
}

#[derive(Debug, Clone)]
pub enum RecvMsg {
    Text { content: String },
    Binary { data: Vec<u8> },
    Ping { data: Vec<u8> },
    Pong { data: Vec<u8> },
    Close { code: Option<u16>, reason: Option<String> },
}

impl RecvMsg {
    pub fn from_websocket_message(msg: Message) -> Option<Self> {
        match msg {
            Message::Text(content) => Some(RecvMsg::Text {
                content: content.to_string(),
            }),
            Message::Binary(data) => Some(RecvMsg::Binary {
                data: data.to_vec(),
            }),
            Message::Ping(data) => Some(RecvMsg::Ping {
                data: data.to_vec(),
            }),
            Message::Pong(data) => Some(RecvMsg::Pong {
                data: data.to_vec(),
            }),
            Message::Close(close_frame) => {
                let (code, reason) = if let Some(frame) = close_frame {
                    (Some(frame.code.into()), Some(frame.reason.to_string()))
                } else {
                    (None, None)
                };
                Some(RecvMsg::Close { code, reason })
            }
            _ => None, // Frame messages are handled internally by tungstenite
        }
    }
}

type Fut = Pin<Box<dyn Future<Output = Result<()>> + Send>>;
type Handler = Arc<dyn Fn(RecvMsg) -> Fut + Send + Sync>;

pub struct Config {
    pub url: String,
    pub send_buf_size: usize,
    pub handle: Handler,
    pub connect_timeout: Duration,
    pub heartbeat_interval: Duration,
    pub reconnect_delay: Duration,
}

impl Config {
    pub fn default(url: String, handle: Handler) -> Self {
        Self {
            url,
            send_buf_size: 1024,
            handle,
            connect_timeout: Duration::from_millis(10000),
            heartbeat_interval: Duration::from_secs(15),
            reconnect_delay: Duration::from_secs(5),
        }
    }
}

/// Reconnecting WebSocket client. One supervisor task owns the connection
/// lifecycle: connect, run send/recv/heartbeat loops until the connection
/// dies, then retry after a fixed delay until shutdown.
pub struct Client {
    config: Arc<Config>,
    state_tx: watch::Sender<ConnState>,
    send_slot: Arc<RwLock<Option<Sender<SendMsg>>>>,
    shutdown_token: CancellationToken,
    supervisor: Option<JoinHandle<()>>,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        if config.url.is_empty() {
            return Err(WsError::invalid_url(config.url));
        }
        if config.connect_timeout.is_zero() {
            return Err(WsError::invalid_timeout("connect_timeout".to_string()));
        }
        if config.heartbeat_interval.is_zero() {
            return Err(WsError::invalid_heartbeat_interval());
        }
        if config.reconnect_delay.is_zero() {
            return Err(WsError::invalid_reconnect_delay());
        }
        if config.send_buf_size == 0 {
            return Err(WsError::invalid_send_buf_size());
        }
        let (state_tx, _) = watch::channel(ConnState::Closed);
        Ok(Client {
            config: Arc::new(config),
            state_tx,
            send_slot: Arc::new(RwLock::new(None)),
            shutdown_token: CancellationToken::new(),
            supervisor: None,
        })
    }

    pub fn state(&self) -> watch::Receiver<ConnState> {
        self.state_tx.subscribe()
    }

    pub fn get_shutdown_token(&self) -> CancellationToken {
        self.shutdown_token.clone()
    }

    /// Spawns the supervisor; returns immediately. Connection failures are
    /// retried forever on the fixed delay, they never propagate out.
    pub fn start(&mut self) -> Result<()> {
        if self.supervisor.is_some() {
            return Err(WsError::client("client already started"));
        }
        let config = self.config.clone();
        let state_tx = self.state_tx.clone();
        let send_slot = self.send_slot.clone();
        let shutdown_token = self.shutdown_token.clone();
        self.supervisor = Some(tokio::spawn(async move {
            Self::supervise(config, state_tx, send_slot, shutdown_token).await;
        }));
        Ok(())
    }

    pub async fn send(&self, msg: SendMsg) -> Result<()> {
        let slot = self.send_slot.read().await;
        let send_tx = match slot.as_ref() {
            Some(tx) => tx,
            None => return Err(WsError::disconnected()),
        };
        send_tx
            .send(msg)
            .await
            .map_err(|e| WsError::channel_closed("send_tx".to_string(), e.to_string()))
    }

    pub async fn disconnect(&mut self) -> Result<()> {
        self.shutdown_token.cancel();
        if let Some(handle) = self.supervisor.take() {
            if let Err(e) = handle.await {
                error!("Supervisor join error: {}", e);
            }
        }
        Ok(())
    }

    async fn supervise(
        config: Arc<Config>,
        state_tx: watch::Sender<ConnState>,
        send_slot: Arc<RwLock<Option<Sender<SendMsg>>>>,
        shutdown_token: CancellationToken,
    ) {
        defer!(
            state_tx.send_replace(ConnState::Closed);
        );
        loop {
            if shutdown_token.is_cancelled() {
                return;
            }
            state_tx.send_replace(ConnState::Connecting);

            let connected =
                tokio::time::timeout(config.connect_timeout, connect_async(&config.url)).await;
            match connected {
                Ok(Ok((ws_stream, _))) => {
                    info!("WebSocket connected: {}", config.url);
                    state_tx.send_replace(ConnState::Open);
                    Self::run_connection(&config, &send_slot, &shutdown_token, ws_stream).await;
                    send_slot.write().await.take();
                    state_tx.send_replace(ConnState::Closed);
                }
                Ok(Err(e)) => {
                    error!("WebSocket connect error: {}", e);
                    state_tx.send_replace(ConnState::Closed);
                }
                Err(_) => {
                    error!(
                        "WebSocket connect timeout after {:?}: {}",
                        config.connect_timeout, config.url
                    );
                    state_tx.send_replace(ConnState::Closed);
                }
            }

            tokio::select! {
                _ = shutdown_token.cancelled() => {
                    return;
                }
                _ = tokio::time::sleep(config.reconnect_delay) => {}
            }
        }
    }

    // Runs one connection to completion: any loop exiting cancels the others.
    async fn run_connection(
        config: &Arc<Config>,
        send_slot: &Arc<RwLock<Option<Sender<SendMsg>>>>,
        shutdown_token: &CancellationToken,
        ws_stream: WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>,
    ) {
        let (sender, receiver) = ws_stream.split();
        let (send_tx, send_rx) = channel::<SendMsg>(config.send_buf_size);
        *send_slot.write().await = Some(send_tx.clone());

        let conn_token = shutdown_token.child_token();

        let conn_token1 = conn_token.clone();
        let send_loop_handle =
            tokio::spawn(async move { Self::send_loop(sender, send_rx, conn_token1).await });

        let handle = config.handle.clone();
        let conn_token2 = conn_token.clone();
        let send_tx1 = send_tx.clone();
        let recv_loop_handle =
            tokio::spawn(
                async move { Self::recv_loop(receiver, handle, send_tx1, conn_token2).await },
            );

        let heartbeat_interval = config.heartbeat_interval;
        let conn_token3 = conn_token.clone();
        let heartbeat_handle = tokio::spawn(async move {
            Self::heartbeat(send_tx, heartbeat_interval, conn_token3).await
        });

        for handle in [send_loop_handle, recv_loop_handle, heartbeat_handle] {
            if let Err(e) = handle.await {
                error!("Task join error: {}", e);
            }
        }
    }

    async fn recv_loop<S>(
        mut receiver: SplitStream<WebSocketStream<S>>,
        handle: Handler,
        send_tx: Sender<SendMsg>,
        conn_token: CancellationToken,
    ) -> Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        defer!(
            conn_token.cancel();
        );
        loop {
            tokio::select! {
                _ = conn_token.cancelled() => {
                    return Err(WsError::disconnected());
                }
                msg = receiver.next() => {
                    let msg = match msg {
                        None => {
                            return Err(WsError::receive_failed(std::io::Error::new(
                                std::io::ErrorKind::UnexpectedEof,
                                "WebSocket stream ended unexpectedly"
                            )));
                        }
                        Some(Err(e)) => {
                            error!("WebSocket receive error: {}", e);
                            return Err(WsError::receive_failed(e));
                        }
                        Some(Ok(msg)) => msg,
                    };
                    let Some(recv_msg) = RecvMsg::from_websocket_message(msg) else {
                        warn!("Unsupported WebSocket message type");
                        continue;
                    };
                    match &recv_msg {
                        RecvMsg::Text { .. } | RecvMsg::Binary { .. } => {
                            if let Err(e) = handle(recv_msg).await {
                                error!("failed to handle message: {}", e);
                            }
                        }
                        RecvMsg::Ping { data } => {
                            let pong_msg = SendMsg::Pong { data: data.clone() };
                            if let Err(e) = send_tx.send(pong_msg).await {
                                error!("failed to send Pong: {}", e);
                                return Err(WsError::channel_closed("send_tx".to_string(), e.to_string()));
                            }
                        }
                        RecvMsg::Pong { data } => {
                            let data_str = std::str::from_utf8(data);
                            info!("Received Pong: {}", data_str.unwrap_or_default());
                        }
                        RecvMsg::Close { code, reason } => {
                            info!("WebSocket connection closed: code={:?}, reason={:?}", code, reason);
                            return Err(WsError::connection_closed(code.unwrap_or(0), reason.clone().unwrap_or_default()));
                        }
                    }
                }
            }
        }
    }

    async fn send_loop<S>(
        mut sender: SplitSink<WebSocketStream<S>, Message>,
        mut send_rx: Receiver<SendMsg>,
        conn_token: CancellationToken,
    ) -> Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        defer!(
            conn_token.cancel();
        );
        loop {
            tokio::select! {
                _ = conn_token.cancelled() => {
                    send_rx.close();
                    return Err(WsError::disconnected());
                }
                msg = send_rx.recv() => {
                    if let Some(msg) = msg {
                        if let Err(e) = sender.send(msg.to_websocket_message()).await {
                            error!("WebSocket send error: {}", e);
                            return Err(WsError::send_failed("websocket message".to_string(), e));
                        }
                    } else {
                        send_rx.close();
                        return Err(WsError::channel_closed("send_rx".to_string(), "send channel closed".to_string()));
                    }
                }
            }
        }
    }

    // Opaque heartbeat: a ping carrying the current ms timestamp. A silent
    // server is not treated as fatal here; a dead connection surfaces in the
    // recv loop and the supervisor reconnects.
    async fn heartbeat(
        send_tx: Sender<SendMsg>,
        interval: Duration,
        conn_token: CancellationToken,
    ) -> Result<()> {
        defer!(
            conn_token.cancel();
        );
        let mut interval = tokio::time::interval(interval);
        loop {
            tokio::select! {
                _ = conn_token.cancelled() => {
                    return Err(WsError::disconnected());
                }
                _ = interval.tick() => {
                    let heartbeat_msg = SendMsg::Ping {
                        data: time::now_millis().to_string().as_bytes().to_vec(),
                    };
                    if let Err(e) = send_tx.send(heartbeat_msg).await {
                        error!("Failed to send heartbeat: {}", e);
                        return Err(WsError::channel_closed("send_tx".to_string(), e.to_string()));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::account_stream::{AccountStream, StreamConfig};
    use crate::frame::PushFrame;
    use futures_util::{SinkExt, StreamExt};
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tokio::time::timeout;
    use tokio_tungstenite::{accept_async, tungstenite::protocol::Message};

    const BALANCE_FRAME: &str = r#"{"type":"balance","account_id":"1","data":{"total_equity":10.0,"available":10.0,"frozen":0.0,"margin_used":0.0,"unrealized_pnl":0.0,"assets":[]}}"#;

    async fn start_push_server(frames: Vec<&'static str>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    return;
                };
                let frames = frames.clone();
                tokio::spawn(async move {
                    let ws_stream = accept_async(stream).await.unwrap();
                    let (mut sender, mut receiver) = ws_stream.split();
                    for frame in frames {
                        let _ = sender.send(Message::Text(frame.into())).await;
                    }
                    // Keep the connection alive, answering pings.
                    while let Some(Ok(msg)) = receiver.next().await {
                        if let Message::Ping(data) = msg {
                            let _ = sender.send(Message::Pong(data)).await;
                        }
                    }
                });
            }
        });
        format!("ws://{}", addr)
    }

    fn stream_config(url: String) -> StreamConfig {
        StreamConfig {
            url,
            connect_timeout: Duration::from_millis(2000),
            heartbeat_interval: Duration::from_millis(500),
            reconnect_delay: Duration::from_millis(100),
        }
    }

    #[tokio::test]
    async fn test_frames_are_forwarded() {
        let url = start_push_server(vec![BALANCE_FRAME]).await;
        let (frame_tx, mut frame_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut stream = AccountStream::new(stream_config(url), frame_tx);
        stream.start().unwrap();

        let frame = timeout(Duration::from_secs(2), frame_rx.recv())
            .await
            .expect("no frame forwarded")
            .unwrap();
        match frame {
            PushFrame::Balance { account_id, .. } => assert_eq!(account_id, "1"),
            other => panic!("expected balance frame, got {:?}", other),
        }

        stream.stop().await;
    }

    #[tokio::test]
    async fn test_garbage_frames_are_not_forwarded() {
        let url = start_push_server(vec!["not json", BALANCE_FRAME]).await;
        let (frame_tx, mut frame_rx) = tokio::sync::mpsc::unbounded_channel();
        let mut stream = AccountStream::new(stream_config(url), frame_tx);
        stream.start().unwrap();

        // The bad frame is dropped with an error log; the good one arrives.
        let frame = timeout(Duration::from_secs(2), frame_rx.recv())
            .await
            .expect("no frame forwarded")
            .unwrap();
        assert!(matches!(frame, PushFrame::Balance { .. }));

        stream.stop().await;
    }
}

#[cfg(test)]
mod tests {
    use crate::puller::Puller;
    use std::sync::Arc;
    use sync::kind::DataKind;
    use sync::scope::ScopeKey;
    use sync::store::KindData;
    use sync::FetchCommand;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;
    use transport::RestApi;

    // Answers every connection with the canned body and records request lines.
    struct MockHttpServer {
        addr: String,
        request_lines: Arc<tokio::sync::Mutex<Vec<String>>>,
    }

    impl MockHttpServer {
        async fn start(status_line: &'static str, body: &'static str) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap().to_string();
            let request_lines = Arc::new(tokio::sync::Mutex::new(Vec::new()));

            let request_lines1 = request_lines.clone();
            tokio::spawn(async move {
                loop {
                    let Ok((mut stream, _)) = listener.accept().await else {
                        return;
                    };
                    let request_lines = request_lines1.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 8192];
                        let mut read = 0;
                        loop {
                            match stream.read(&mut buf[read..]).await {
                                Ok(0) | Err(_) => break,
                                Ok(n) => {
                                    read += n;
                                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                }
                            }
                        }
                        let head = String::from_utf8_lossy(&buf[..read]).to_string();
                        if let Some(line) = head.lines().next() {
                            request_lines.lock().await.push(line.to_string());
                        }
                        let response = format!(
                            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_line,
                            body.len(),
                            body
                        );
                        let _ = stream.write_all(response.as_bytes()).await;
                        let _ = stream.shutdown().await;
                    });
                }
            });

            Self {
                addr,
                request_lines,
            }
        }

        fn base_url(&self) -> String {
            format!("http://{}", self.addr)
        }

        async fn last_request_line(&self) -> String {
            self.request_lines
                .lock()
                .await
                .last()
                .cloned()
                .unwrap_or_default()
        }
    }

    fn api(base_url: String) -> Arc<RestApi> {
        let mut api = RestApi::new(base_url, 2000);
        api.init().unwrap();
        Arc::new(api)
    }

    fn command(kind: DataKind, page: usize, cursor: Option<&str>) -> FetchCommand {
        FetchCommand {
            kind,
            account_id: "1".to_string(),
            scope: ScopeKey::account("1"),
            page,
            cursor: cursor.map(|c| c.to_string()),
            generation: 1,
        }
    }

    #[tokio::test]
    async fn test_balance_command_yields_unpaged_payload() {
        let server = MockHttpServer::start(
            "HTTP/1.1 200 OK",
            r#"{"total_equity":"100","available":"90","frozen":"10","margin_used":"0","unrealized_pnl":"0","assets":[]}"#,
        )
        .await;
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
        let puller = Puller::new(api(server.base_url()), 50, outcome_tx);

        puller.spawn(command(DataKind::Balance, 1, None));
        let outcome = outcome_rx.recv().await.unwrap();
        let payload = outcome.result.unwrap();
        assert!(!payload.has_more);
        assert!(matches!(payload.data, KindData::Balance(_)));
        assert!(
            server
                .last_request_line()
                .await
                .contains("/api/accounts/1/balance")
        );
    }

    #[tokio::test]
    async fn test_orders_command_carries_cursor_and_limit() {
        let server = MockHttpServer::start(
            "HTTP/1.1 200 OK",
            r#"{"items":[],"has_more":true,"last_id":"X9"}"#,
        )
        .await;
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
        let puller = Puller::new(api(server.base_url()), 20, outcome_tx);

        puller.spawn(command(DataKind::Orders, 2, Some("X123")));
        let outcome = outcome_rx.recv().await.unwrap();
        let payload = outcome.result.unwrap();
        assert!(payload.has_more);
        assert_eq!(payload.last_cursor.as_deref(), Some("X9"));

        let line = server.last_request_line().await;
        assert!(line.contains("/api/accounts/1/orders"));
        assert!(line.contains("after=X123"));
        assert!(line.contains("limit=20"));
    }

    #[tokio::test]
    async fn test_failed_pull_reports_error_with_command_intact() {
        let server =
            MockHttpServer::start("HTTP/1.1 500 Internal Server Error", r#"{"detail":"boom"}"#)
                .await;
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
        let puller = Puller::new(api(server.base_url()), 50, outcome_tx);

        puller.spawn(command(DataKind::Bills, 1, None));
        let outcome = outcome_rx.recv().await.unwrap();
        assert!(outcome.result.is_err());
        assert_eq!(outcome.command.kind, DataKind::Bills);
        assert_eq!(outcome.command.generation, 1);
    }
}

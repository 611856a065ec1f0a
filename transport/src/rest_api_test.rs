#[cfg(test)]
mod tests {
    use crate::errors::TransportError;
    use crate::requests::{GetBillsRequest, GetOrdersRequest};
    use crate::rest_api::RestApi;
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::Mutex;

    // One-shot HTTP server: answers every connection with the canned body and
    // records the request line of each.
    struct MockHttpServer {
        addr: String,
        request_lines: Arc<Mutex<Vec<String>>>,
    }

    impl MockHttpServer {
        async fn start(status_line: &'static str, body: &'static str) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap().to_string();
            let request_lines = Arc::new(Mutex::new(Vec::new()));

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
            self.request_lines.lock().await.last().cloned().unwrap_or_default()
        }
    }

    fn api(base_url: String) -> RestApi {
        let mut api = RestApi::new(base_url, 2000);
        api.init().unwrap();
        api
    }

    #[tokio::test]
    async fn test_get_accounts() {
        let server = MockHttpServer::start(
            "HTTP/1.1 200 OK",
            r#"[{"id":"1","name":"main","simulated":false},{"id":"2","name":"demo","simulated":true}]"#,
        )
        .await;
        let api = api(server.base_url());

        let accounts = api.get_accounts().await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].id, "1");
        assert!(accounts[1].simulated);
        assert!(server.last_request_line().await.contains("/api/accounts"));
    }

    #[tokio::test]
    async fn test_get_orders_sends_cursor_params() {
        let server = MockHttpServer::start(
            "HTTP/1.1 200 OK",
            r#"{"items":[],"has_more":false,"last_id":null}"#,
        )
        .await;
        let api = api(server.base_url());

        let page = api
            .get_orders(GetOrdersRequest {
                account_id: "1".to_string(),
                after: Some("X123".to_string()),
                limit: Some(20),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(!page.has_more);
        assert!(page.items.is_empty());

        let line = server.last_request_line().await;
        assert!(line.contains("/api/accounts/1/orders"));
        assert!(line.contains("after=X123"));
        assert!(line.contains("limit=20"));
    }

    #[tokio::test]
    async fn test_get_bills_first_page_omits_after() {
        let server = MockHttpServer::start(
            "HTTP/1.1 200 OK",
            r#"{"items":[],"has_more":true,"last_id":"B9"}"#,
        )
        .await;
        let api = api(server.base_url());

        let page = api
            .get_bills(GetBillsRequest {
                account_id: "2".to_string(),
                bill_type: Some("8".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(page.has_more);
        assert_eq!(page.last_id.as_deref(), Some("B9"));

        let line = server.last_request_line().await;
        assert!(line.contains("/api/accounts/2/bills"));
        assert!(line.contains("bill_type=8"));
        assert!(!line.contains("after="));
    }

    #[tokio::test]
    async fn test_server_error_is_status_error() {
        let server =
            MockHttpServer::start("HTTP/1.1 500 Internal Server Error", r#"{"detail":"boom"}"#)
                .await;
        let api = api(server.base_url());

        let result = api.get_balance("1").await;
        match result {
            Err(TransportError::StatusError { code, .. }) => assert_eq!(code, 500),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_uninitialized_client_errors() {
        let api = RestApi::new("http://127.0.0.1:1".to_string(), 100);
        let result = api.get_accounts().await;
        assert!(matches!(result, Err(TransportError::ClientError { .. })));
    }

    #[tokio::test]
    async fn test_bad_body_is_parse_error() {
        let server = MockHttpServer::start("HTTP/1.1 200 OK", r#"{"not":"a list"}"#).await;
        let api = api(server.base_url());

        let result = api.get_accounts().await;
        assert!(matches!(
            result,
            Err(TransportError::ParseResultError { .. })
        ));
    }
}

// Aropool Miner - Free and Open Source Software Statement
//
// This project, aropool-miner, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/client_test.rs
// Version: 1.0.0
//
// This file contains tests for the HTTP pool client, located in the tests
// directory. A one-shot TCP server on 127.0.0.1 answers with canned HTTP
// responses and hands back the raw request so the query string, form body
// and headers can be checked.
//
// Tree Location:
// - tests/client_test.rs (pool client tests)
// - Depends on: aropool-miner, tokio

mod common;

#[cfg(test)]
mod tests {
    use super::common::share;
    use aropool_miner::core::difficulty::U256;
    use aropool_miner::pool::{PoolApi, PoolClient, PoolError, WorkError};
    use reqwest::StatusCode;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const WORK_BODY: &str = r#"{"status":"ok","data":{"block":"b1","height":5000,"difficulty":"100","limit":1000,"public_key":"pk1"}}"#;

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Accept one connection, read the whole request, answer with `status`
    /// and `body`, and return the raw request text.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    if request.len() >= end + 4 + content_length(&text[..end]) {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
            String::from_utf8(request).unwrap()
        });

        (url, handle)
    }

    fn client(url: &str) -> PoolClient {
        PoolClient::new(url, Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn test_endpoint_appends_mine_php() {
        let pool = PoolClient::new("http://pool.example/", Duration::from_secs(1)).unwrap();
        assert_eq!(pool.endpoint(), "http://pool.example/mine.php");
    }

    #[tokio::test]
    async fn test_fetch_work_query_and_parse() {
        let (url, server) = serve_once("200 OK", WORK_BODY).await;

        let item = client(&url).fetch_work("rig01", "WALLET", 2.5).await.unwrap();
        assert_eq!(item.block, "b1");
        assert_eq!(item.height, 5000);
        assert_eq!(item.difficulty, U256::from(100u64));
        assert_eq!(item.limit, 1000);
        assert_eq!(item.pool_public_key, "pk1");

        let request = server.await.unwrap();
        assert!(
            request.starts_with("GET /mine.php?q=info&worker=rig01&address=WALLET&hashrate=2.5 HTTP/1.1\r\n"),
            "unexpected request: {}",
            request
        );
        assert!(request.to_ascii_lowercase().contains("user-agent: aropool-miner "));
    }

    #[tokio::test]
    async fn test_fetch_work_null_data() {
        let (url, server) = serve_once("200 OK", r#"{"status":"ok","data":null}"#).await;

        let result = client(&url).fetch_work("rig01", "WALLET", 0.0).await;
        assert!(matches!(result, Err(PoolError::Work(WorkError::MissingData))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_work_http_error() {
        let (url, server) = serve_once("500 Internal Server Error", "{}").await;

        match client(&url).fetch_work("rig01", "WALLET", 0.0).await {
            Err(PoolError::Status { status, url }) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
                assert!(url.ends_with("/mine.php"));
            }
            other => panic!("expected a status error, got {:?}", other),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_work_malformed_body() {
        let (url, server) = serve_once("200 OK", "<html>maintenance</html>").await;

        let result = client(&url).fetch_work("rig01", "WALLET", 0.0).await;
        assert!(matches!(result, Err(PoolError::Decode(_))));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_work_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        // Accept and hold the connection without ever answering.
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(stream);
        });

        let pool = PoolClient::new(&url, Duration::from_millis(200)).unwrap();
        let started = tokio::time::Instant::now();
        let result = pool.fetch_work("rig01", "WALLET", 0.0).await;
        assert!(matches!(result, Err(PoolError::Request { .. })));
        assert!(started.elapsed() < Duration::from_secs(3));
        server.abort();
    }

    #[tokio::test]
    async fn test_submit_share_form_post() {
        let (url, server) = serve_once("200 OK", r#"{"status":"ok","data":"accepted"}"#).await;

        let share = share(1, "n1");
        let ack = client(&url).submit_share(&share, "WALLET").await.unwrap();
        assert!(ack.is_ok());

        let request = server.await.unwrap();
        assert!(
            request.starts_with("POST /mine.php?q=submitNonce HTTP/1.1\r\n"),
            "unexpected request: {}",
            request
        );
        assert!(request
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        let body = request.split("\r\n\r\n").nth(1).unwrap();
        assert_eq!(
            body,
            "argon=%24c2FsdA%24aGFzaA&nonce=n1&private_key=WALLET&public_key=pk1&address=WALLET"
        );
    }

    #[tokio::test]
    async fn test_submit_share_http_error() {
        let (url, server) = serve_once("503 Service Unavailable", "").await;

        let result = client(&url).submit_share(&share(0, "n1"), "WALLET").await;
        assert!(matches!(
            result,
            Err(PoolError::Status { status, .. }) if status == StatusCode::SERVICE_UNAVAILABLE
        ));
        server.await.unwrap();
    }
}

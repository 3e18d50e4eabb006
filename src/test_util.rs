use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// One request served by a [`StubVehicle`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Scripted loopback vehicle for exercising the session stack end to end.
///
/// Speaks just enough HTTP/1.1 for one request per connection and answers
/// the vehicle REST shapes with canned `data`-wrapped bodies: authentication
/// grants a fixed access level, each status refresh serves the next scripted
/// flight phase (the last entry repeats once the script runs dry) plus a
/// fresh session id, and command endpoints acknowledge with an empty object.
/// Every served request is recorded for assertions.
pub struct StubVehicle {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl StubVehicle {
    pub async fn spawn(phases: &[&str]) -> Self {
        Self::spawn_with_access(phases, "PILOT").await
    }

    pub async fn spawn_with_access(phases: &[&str], access_level: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();
        let recorded = Arc::clone(&requests);
        let granted = access_level.to_string();
        let mut script: VecDeque<String> = phases.iter().map(|p| (*p).to_string()).collect();
        let handle = tokio::spawn(async move {
            // The session mutex serializes callers, so requests arrive one at
            // a time and a sequential accept loop is enough.
            let mut status_count = 0_usize;
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let Some(request) = read_request(&mut stream).await else {
                    continue;
                };
                let body = respond_to(&request, &granted, &mut script, &mut status_count);
                recorded.lock().unwrap().push(request);
                let response = format!(
                    "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });
        Self { base_url, requests, handle }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of served requests for `path`.
    pub fn count_path(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.path == path).count()
    }

    /// Number of served async commands carrying the given command word.
    pub fn count_command(&self, command: &str) -> usize {
        let needle = format!("\"command\":\"{command}\"");
        self.requests()
            .iter()
            .filter(|r| r.path == "/api/async_command" && r.body.contains(&needle))
            .count()
    }
}

impl Drop for StubVehicle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn respond_to(
    request: &RecordedRequest,
    access_level: &str,
    phases: &mut VecDeque<String>,
    status_count: &mut usize,
) -> String {
    match (request.method.as_str(), request.path.as_str()) {
        ("POST", "/api/authentication") => format!(
            r#"{{"data":{{"accessLevel":"{access_level}","accessToken":"stub-token"}}}}"#
        ),
        ("POST", "/api/status") => {
            *status_count += 1;
            let phase = if phases.len() > 1 { phases.pop_front() } else { phases.front().cloned() };
            match phase {
                Some(p) => format!(
                    r#"{{"data":{{"sessionId":"session-{status_count}","flightPhase":"{p}"}}}}"#
                ),
                None => format!(r#"{{"data":{{"sessionId":"session-{status_count}"}}}}"#),
            }
        }
        ("GET", "/api/status") => concat!(
            r#"{"data":{"config":{"deployInfo":"#,
            r#"{"api_version_major":2,"api_version_minor":5},"#,
            r#""lcmProxyUdpHostname":"","lcmProxyUdpPort":13337}}}"#
        )
        .to_string(),
        ("GET", "/api/active_faults") => concat!(
            r#"{"data":{"faults":{"#,
            r#""17":{"name":"LOST_PHONE_COMMS_SHORT","relevant":true},"#,
            r#""23":{"name":"VIO_DEGRADED","relevant":false}}}}"#
        )
        .to_string(),
        // base64 for "hello".
        ("POST", "/api/custom_comms") => r#"{"data":{"data":"aGVsbG8="}}"#.to_string(),
        _ => r#"{"data":{}}"#.to_string(),
    }
}

/// Reads one HTTP/1.1 request off the stream.
async fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    let header_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let content_length = lines
        .filter_map(|l| l.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end + 4..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }
    Some(RecordedRequest {
        method,
        path,
        body: String::from_utf8_lossy(&body).to_string(),
    })
}

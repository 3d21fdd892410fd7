use std::io;
use std::sync::{Arc, Mutex};

use bijux_contacts_server::{build_router, AppState};
use bijux_contacts_store::{ContactBook, MemoryStore};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = BufferWriter;

    fn make_writer(&'a self) -> Self::Writer {
        BufferWriter(Arc::clone(&self.0))
    }
}

impl io::Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "lock poisoned"))?;
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn json_lines(&self) -> Vec<serde_json::Value> {
        let bytes = self.0.lock().expect("lock output").clone();
        let text = String::from_utf8(bytes).expect("utf8 log output");
        text.lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("json log line"))
            .collect()
    }
}

// Current-thread runtime: the server task shares the thread-local subscriber.
#[tokio::test]
async fn access_log_lines_are_structured_json() {
    let sink = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .json()
        .with_max_level(Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let book = ContactBook::new(Arc::new(MemoryStore::default()));
    let app = build_router(AppState::new(book));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = format!(
        "GET /contacts HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\nx-request-id: req-123\r\n\r\n"
    );
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    assert!(response.starts_with("HTTP/1.1 200"));

    let lines = sink.json_lines();
    let access = lines
        .iter()
        .find(|l| l.get("target").and_then(|v| v.as_str()) == Some("contacts_access"))
        .expect("access log line");

    assert_eq!(access.get("level").and_then(|v| v.as_str()), Some("INFO"));
    let fields = access.get("fields").expect("fields object");
    assert_eq!(fields.get("status").and_then(|v| v.as_u64()), Some(200));
    assert!(fields.get("latency_ms").is_some_and(|v| v.is_number()));
    let span = access.get("span").expect("span object");
    assert_eq!(
        span.get("name").and_then(|v| v.as_str()),
        Some("http.request")
    );
    assert_eq!(
        span.get("request_id").and_then(|v| v.as_str()),
        Some("req-123")
    );
    assert_eq!(span.get("route").and_then(|v| v.as_str()), Some("/contacts"));
}

// Helpers for driving a service over real TCP from integration tests.
use std::future::Future;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::instrument::WithSubscriber;
use tracing_subscriber::fmt::MakeWriter;

// Bind an ephemeral port, hand the listener to `run` and return the base URL.
// The socket is bound before the task starts, so early requests just queue.
pub async fn spawn_service<F, Fut>(run: F) -> String
where
    F: FnOnce(TcpListener) -> Fut,
    Fut: Future<Output = io::Result<()>> + Send + 'static,
{
    let (listener, base_url) = bind_ephemeral().await;
    tokio::spawn(run(listener));
    base_url
}

// Same as `spawn_service`, with events emitted by `run` recorded in the
// returned capture.
pub async fn spawn_service_with_logs<F, Fut>(run: F) -> (String, LogCapture)
where
    F: FnOnce(TcpListener) -> Fut,
    Fut: Future<Output = io::Result<()>> + Send + 'static,
{
    let (listener, base_url) = bind_ephemeral().await;
    let logs = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    tokio::spawn(run(listener).with_subscriber(subscriber));
    (base_url, logs)
}

async fn bind_ephemeral() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    (listener, format!("http://{addr}"))
}

// In-memory sink for formatted log lines.
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    pub fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("log buffer mutex poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }

    // Poll until `needle` shows up in the captured output or about a second passes.
    pub async fn wait_for(&self, needle: &str) -> bool {
        for _ in 0..100 {
            if self.contents().contains(needle) {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut buffer = self.buffer.lock().expect("log buffer mutex poisoned");
        buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

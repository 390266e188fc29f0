#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use bytes::Bytes;
use futures::channel::mpsc::{unbounded, UnboundedSender};
use jwt_auth::TokenProvider;
use sse_client::{
    ByteStream, SseConnectionStatus, SseConnectionStatusChangeCallback, SseFrame,
    SseFrameCallback, StreamTransport, TransportError,
};
use std::{
    collections::VecDeque,
    net::SocketAddr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, Once,
    },
};
use tokio::{net::TcpListener, sync::mpsc};
use tracing::level_filters::LevelFilter;

static INIT_TRACING_ONCE: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_target(false)
            .with_test_writer()
            .init();
    });
}

///
/// Issues `token-1`, `token-2`, ... or nothing when signed out
///
pub struct CountingTokenProvider {
    signed_in: bool,
    issued: AtomicUsize,
}

impl CountingTokenProvider {
    pub fn signed_in() -> Self {
        Self {
            signed_in: true,
            issued: AtomicUsize::new(0),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            issued: AtomicUsize::new(0),
        }
    }

    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for CountingTokenProvider {
    async fn token(&self) -> Result<Option<String>, jwt_auth::error::Error> {
        if !self.signed_in {
            return Ok(None);
        }

        let issued = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        Ok(Some(format!("token-{issued}")))
    }
}

pub enum Attempt {
    Fail,
    Stream(ByteStream),
}

///
/// Transport that replays prepared attempts.
/// When all of them are used every next attempt fails.
///
pub struct ScriptedTransport {
    attempts: Mutex<VecDeque<Attempt>>,
    tokens: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(attempts: Vec<Attempt>) -> Self {
        Self {
            attempts: Mutex::new(attempts.into()),
            tokens: Mutex::new(Vec::new()),
        }
    }

    /// Tokens of all attempts, in order
    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }

    pub fn attempts_made(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }
}

#[async_trait]
impl StreamTransport for ScriptedTransport {
    async fn open(&self, token: &str) -> Result<ByteStream, TransportError> {
        self.tokens.lock().unwrap().push(token.to_string());

        let attempt = self.attempts.lock().unwrap().pop_front();
        match attempt {
            Some(Attempt::Stream(stream)) => Ok(stream),
            Some(Attempt::Fail) | None => Err(TransportError::UnexpectedStatus {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: "".to_string(),
            }),
        }
    }
}

///
/// Creates stream attempt and sender that feeds it.
/// Dropping the sender ends the stream.
///
pub fn stream_attempt() -> (UnboundedSender<Result<Bytes, TransportError>>, Attempt) {
    let (tx, rx) = unbounded();

    (tx, Attempt::Stream(Box::pin(rx)))
}

pub struct RecordingFrameCallback {
    frames_tx: mpsc::UnboundedSender<SseFrame>,
}

impl RecordingFrameCallback {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SseFrame>) {
        let (frames_tx, frames_rx) = mpsc::unbounded_channel();

        (Self { frames_tx }, frames_rx)
    }
}

#[async_trait]
impl SseFrameCallback for RecordingFrameCallback {
    async fn execute(&self, frame: SseFrame) {
        let _ = self.frames_tx.send(frame);
    }
}

pub struct RecordingStatusCallback {
    statuses_tx: mpsc::UnboundedSender<SseConnectionStatus>,
}

impl RecordingStatusCallback {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<SseConnectionStatus>) {
        let (statuses_tx, statuses_rx) = mpsc::unbounded_channel();

        (Self { statuses_tx }, statuses_rx)
    }
}

#[async_trait]
impl SseConnectionStatusChangeCallback for RecordingStatusCallback {
    async fn execute(&self, status: SseConnectionStatus) {
        let _ = self.statuses_tx.send(status);
    }
}

pub fn chunk(text: &str) -> Result<Bytes, TransportError> {
    Ok(Bytes::from(text.to_string()))
}

pub async fn start_server(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    address
}

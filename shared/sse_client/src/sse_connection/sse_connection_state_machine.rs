use super::{
    SseConnectionConfig, SseConnectionStatus, SseConnectionStatusChangeCallback, SseFrameCallback,
};
use crate::{ByteStream, FrameParser, StreamTransport};
use anyhow::anyhow;
use futures::StreamExt;
use jwt_auth::TokenProvider;
use std::sync::Arc;
use tokio::sync::{watch, Notify};

pub struct SseConnectionStateMachine<FrameCallback, StatusCallback> {
    config: SseConnectionConfig,

    transport: Arc<dyn StreamTransport>,
    token_provider: Arc<dyn TokenProvider>,

    stream: Option<ByteStream>,
    parser: FrameParser,

    frame_callback: FrameCallback,
    status_callback: StatusCallback,
    status_tx: watch::Sender<SseConnectionStatus>,

    // Consecutive failed attempts. Reset after connection becomes live
    attempt: u32,

    state: State,
}

impl<FrameCallback, StatusCallback> SseConnectionStateMachine<FrameCallback, StatusCallback>
where
    FrameCallback: SseFrameCallback + 'static,
    StatusCallback: SseConnectionStatusChangeCallback + 'static,
{
    pub fn new(
        config: SseConnectionConfig,
        transport: Arc<dyn StreamTransport>,
        token_provider: Arc<dyn TokenProvider>,
        frame_callback: FrameCallback,
        status_callback: StatusCallback,
        status_tx: watch::Sender<SseConnectionStatus>,
    ) -> Self {
        Self {
            config,
            transport,
            token_provider,
            stream: None,
            parser: FrameParser::new(),
            frame_callback,
            status_callback,
            status_tx,
            attempt: 0,
            state: State::Idle,
        }
    }

    ///
    /// Infinite loop that keeps stream alive.
    /// Loop can be stopped by using notify or by exhausting retries.
    ///
    #[tracing::instrument(name = "SSE Connection", target = "sse_client::connection", skip_all)]
    pub async fn run(mut self, stop: Arc<Notify>) {
        tracing::info!("state machine started");

        tokio::select! {
            biased;

            // Dropping the other branch cancels pending request, read or retry sleep
            _ = stop.notified() => {
                tracing::info!("closing connection");
            }

            _ = async { loop {
                match self.state {
                    State::Idle => {
                        tracing::info!("state: Idle");
                        self.idle_state();
                    }
                    State::Connecting => {
                        tracing::info!("state: Connecting");
                        self.connecting_state().await;
                    }
                    State::Live => {
                        tracing::info!("state: Live");
                        self.live_state().await;
                    }
                    State::Reconnecting => {
                        tracing::info!("state: Reconnecting");
                        self.reconnecting_state().await;
                    }
                    State::RetriesExhausted => {
                        tracing::error!(attempts = self.attempt, "retries exhausted");
                        break;
                    }
                }
            }} => {}
        }

        self.stream = None;
        self.parser.reset();
        self.change_status(SseConnectionStatus::Terminated).await;

        tracing::info!("state machine finished");
    }

    fn idle_state(&mut self) {
        self.state = State::Connecting;
    }

    async fn connecting_state(&mut self) {
        self.attempt += 1;
        self.change_status(SseConnectionStatus::Connecting).await;

        tracing::info!(attempt = self.attempt, "connecting");
        let token_provider = Arc::clone(&self.token_provider);
        let transport = Arc::clone(&self.transport);
        match Self::connect(token_provider, transport).await {
            Ok(stream) => {
                tracing::info!(attempt = self.attempt, "connected");
                self.stream = Some(stream);
                self.parser.reset();
                self.state = State::Live;
            }
            Err(err) => {
                tracing::warn!(attempt = self.attempt, %err, "failed to connect");
                self.state = match self.config.retry_max_count {
                    Some(max_count) if self.attempt >= max_count => State::RetriesExhausted,
                    _ => State::Reconnecting,
                };
            }
        }
    }

    async fn live_state(&mut self) {
        self.attempt = 0;
        self.change_status(SseConnectionStatus::Live).await;

        // It's not possible to reach this state without stream
        if let Some(stream) = self.stream.as_mut() {
            loop {
                match stream.next().await {
                    Some(Ok(chunk)) => {
                        tracing::trace!(len = chunk.len(), "received chunk");
                        for frame in self.parser.push(&chunk) {
                            tracing::debug!(
                                event = frame.event.as_deref(),
                                id = frame.id.as_deref(),
                                "received frame"
                            );
                            self.frame_callback.execute(frame).await;
                        }
                    }
                    Some(Err(err)) => {
                        tracing::warn!(%err, "failed to read stream");
                        break;
                    }
                    None => {
                        // Server is allowed to close idle streams,
                        // it's handled the same way as an error
                        tracing::info!("stream ended");
                        break;
                    }
                }
            }
        }

        self.stream = None;
        self.state = State::Reconnecting;
    }

    async fn reconnecting_state(&mut self) {
        self.change_status(SseConnectionStatus::Reconnecting).await;

        tracing::info!(retry_interval = ?self.config.retry_interval, "waiting before next attempt");
        tokio::time::sleep(self.config.retry_interval).await;

        self.state = State::Connecting;
    }

    // Doesn't borrow self, the stream it holds is not Sync
    async fn connect(
        token_provider: Arc<dyn TokenProvider>,
        transport: Arc<dyn StreamTransport>,
    ) -> anyhow::Result<ByteStream> {
        // Token is requested for every attempt because previous one could have expired
        let token = token_provider
            .token()
            .await
            .map_err(|err| anyhow!("failed to obtain token: {err}"))?
            .ok_or_else(|| anyhow!("no signed-in identity"))?;

        let stream = transport.open(&token).await?;

        Ok(stream)
    }

    async fn change_status(&mut self, status: SseConnectionStatus) {
        self.status_tx.send_replace(status);
        self.status_callback.execute(status).await;
    }
}

enum State {
    Idle,
    Connecting,
    Live,
    Reconnecting,
    RetriesExhausted,
}

#![allow(dead_code)]

use axum::{
    body::Body,
    extract::{Path, Query, State},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use futures::{
    channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender},
    StreamExt,
};
use jsonwebtoken::{Algorithm, EncodingKey};
use jwt_auth::test::decode_jwt;
use serde::Deserialize;
use serde_json::{json, Value};
use sse_client::SseConnectionStatus;
use std::{
    collections::VecDeque,
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, Mutex, Once},
    time::Duration,
};
use tokio::{net::TcpListener, time::timeout};
use tracing::level_filters::LevelFilter;
use trip_notifier_client::application::{ApplicationEnv, ApplicationStateToClose};
use uuid::Uuid;

pub const JWT_ALGORITHMS: &str = "HS256";
pub const JWT_KEY: &str = "trip-notifier-client-test-secret";

static INIT_TRACING_ONCE: Once = Once::new();

pub fn init_tracing() {
    INIT_TRACING_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(LevelFilter::DEBUG)
            .with_target(false)
            .with_test_writer()
            .init();
    });
}

pub fn create_test_env(backend: &MockBackend, user_id: Option<Uuid>) -> ApplicationEnv {
    ApplicationEnv {
        log_directory: "logs".to_string(),
        log_filename: "trip-notifier-client.log".to_string(),
        api_base_url: backend.url(),
        stream_base_url: backend.url(),
        user_id,
        jwt_algorithm: Algorithm::HS256,
        jwt_key: EncodingKey::from_secret(JWT_KEY.as_bytes()),
        jwt_lifespan: Duration::from_secs(60),
        retry_interval: Duration::from_millis(20),
        retry_max_count: None,
        fetch_limit: 20,
        max_notifications: 50,
    }
}

pub fn notification_value(id: &str, is_read: bool) -> Value {
    json!({
        "id": id,
        "recipientId": "user_2",
        "actorId": "user_1",
        "actorName": "Alice",
        "actorImage": null,
        "type": "reaction",
        "tripId": "trip_1",
        "message": "Alice reacted to your trip",
        "isRead": is_read,
        "createdAt": "2026-10-19T12:00:00Z",
    })
}

pub fn notification_frame(id: &str) -> String {
    format!(
        "event: notification\ndata: {}\n\n",
        notification_value(id, false)
    )
}

pub async fn wait_for_stream_status(state: &ApplicationStateToClose, status: SseConnectionStatus) {
    let mut status_rx = state
        .notifications_stream_service
        .as_ref()
        .expect("stream service not started")
        .status();

    timeout(Duration::from_secs(2), status_rx.wait_for(|current| *current == status))
        .await
        .unwrap() // timeout
        .unwrap(); // sender dropped
}

#[derive(Default)]
struct Recorded {
    fetch_limits: Vec<usize>,
    read_ids: Vec<String>,
    read_all_count: usize,
    stream_connections: usize,
    unauthorized_count: usize,
}

struct BackendState {
    user_id: Uuid,
    notifications: Mutex<Vec<Value>>,
    streams: Mutex<VecDeque<UnboundedReceiver<String>>>,
    acknowledgement_status: Mutex<StatusCode>,
    recorded: Mutex<Recorded>,
}

impl BackendState {
    fn authorize(&self, headers: &HeaderMap) -> bool {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        let authorized = match token {
            Some(token) => {
                let claims = decode_jwt(token, JWT_ALGORITHMS.to_string(), JWT_KEY.to_string());
                claims.sub == self.user_id
            }
            None => false,
        };
        if !authorized {
            self.recorded.lock().unwrap().unauthorized_count += 1;
        }

        authorized
    }
}

///
/// In-process notifications server.
/// Every stream connection takes next stream prepared with [MockBackend::push_stream],
/// when there are none the connection is rejected with 503.
///
pub struct MockBackend {
    address: SocketAddr,
    state: Arc<BackendState>,
}

impl MockBackend {
    pub async fn start(user_id: Uuid) -> Self {
        init_tracing();

        let state = Arc::new(BackendState {
            user_id,
            notifications: Mutex::new(Vec::new()),
            streams: Mutex::new(VecDeque::new()),
            acknowledgement_status: Mutex::new(StatusCode::NO_CONTENT),
            recorded: Mutex::new(Recorded::default()),
        });

        let router = Router::new()
            .route("/api/notifications", get(find_latest))
            .route("/api/notifications/stream", get(stream))
            .route("/api/notifications/read-all", post(mark_all_read))
            .route("/api/notifications/:id/read", post(mark_read))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { address, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.address)
    }

    pub fn set_notifications(&self, notifications: Vec<Value>) {
        *self.state.notifications.lock().unwrap() = notifications;
    }

    ///
    /// Prepares stream for the next connection.
    /// Dropping the sender ends the stream.
    ///
    pub fn push_stream(&self) -> UnboundedSender<String> {
        let (tx, rx) = unbounded();
        self.state.streams.lock().unwrap().push_back(rx);

        tx
    }

    pub fn fail_acknowledgements(&self, status: StatusCode) {
        *self.state.acknowledgement_status.lock().unwrap() = status;
    }

    pub fn fetch_limits(&self) -> Vec<usize> {
        self.state.recorded.lock().unwrap().fetch_limits.clone()
    }

    pub fn read_ids(&self) -> Vec<String> {
        self.state.recorded.lock().unwrap().read_ids.clone()
    }

    pub fn read_all_count(&self) -> usize {
        self.state.recorded.lock().unwrap().read_all_count
    }

    pub fn stream_connections(&self) -> usize {
        self.state.recorded.lock().unwrap().stream_connections
    }

    pub fn unauthorized_count(&self) -> usize {
        self.state.recorded.lock().unwrap().unauthorized_count
    }

    /// Number of all authorized requests
    pub fn requests(&self) -> usize {
        let recorded = self.state.recorded.lock().unwrap();

        recorded.fetch_limits.len()
            + recorded.read_ids.len()
            + recorded.read_all_count
            + recorded.stream_connections
    }
}

#[derive(Deserialize)]
struct LimitQuery {
    limit: usize,
}

async fn find_latest(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Query(query): Query<LimitQuery>,
) -> Response {
    if !state.authorize(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.recorded.lock().unwrap().fetch_limits.push(query.limit);

    let notifications = state
        .notifications
        .lock()
        .unwrap()
        .iter()
        .take(query.limit)
        .cloned()
        .collect::<Vec<_>>();

    Json(notifications).into_response()
}

async fn stream(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    if !state.authorize(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state.recorded.lock().unwrap().stream_connections += 1;

    let Some(rx) = state.streams.lock().unwrap().pop_front() else {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    };
    let body = Body::from_stream(rx.map(Ok::<_, Infallible>));

    ([(CONTENT_TYPE, "text/event-stream")], body).into_response()
}

async fn mark_read(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> StatusCode {
    if !state.authorize(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    state.recorded.lock().unwrap().read_ids.push(id);

    *state.acknowledgement_status.lock().unwrap()
}

async fn mark_all_read(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> StatusCode {
    if !state.authorize(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    state.recorded.lock().unwrap().read_all_count += 1;

    *state.acknowledgement_status.lock().unwrap()
}

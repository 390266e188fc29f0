use super::ApplicationState;
use std::future::Future;

///
/// Loads notifications and follows unread count until shutdown future completes
///
pub async fn run(state: ApplicationState, shutdown: impl Future<Output = ()>) {
    if !state.notifications_active {
        tracing::info!("no signed-in identity, notifications are inactive");
        return;
    }

    let notifications_service = state.notifications_service;
    let mut unread_count_rx = notifications_service.subscribe_unread_count();

    notifications_service.refresh().await;
    let unread_count = *unread_count_rx.borrow_and_update();
    tracing::info!(unread_count, "notifications loaded");

    tokio::select! {
        _ = shutdown => {}
        _ = async {
            while unread_count_rx.changed().await.is_ok() {
                let unread_count = *unread_count_rx.borrow_and_update();
                tracing::info!(
                    unread_count,
                    streaming = notifications_service.is_streaming(),
                    "unread notifications changed"
                );
            }
        } => {}
    }
}

use super::ApplicationStateToClose;

pub async fn close(state: ApplicationStateToClose) {
    // Stream goes first so no notification arrives after service is closed
    if let Some(notifications_stream_service) = state.notifications_stream_service {
        tracing::info!("closing notifications stream");
        notifications_stream_service.close().await;
    }

    tracing::info!("closing notifications service");
    state.notifications_service.close().await;
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("starting shutdown");
}

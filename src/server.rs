//! HTTP listener lifecycle
//!
//! The listener runs in its own task; the caller keeps control and decides
//! when to stop it. Shutdown stops accepting connections and gives in-flight
//! requests a bounded grace period.

use std::{future::Future, net::SocketAddr, time::Duration};

use anyhow::{anyhow, Context};
use axum::Router;
use tokio::{net::TcpListener, signal, sync::oneshot, task::JoinHandle};

use crate::config::ServerConfig;

/// A bound, not yet serving, HTTP listener
pub struct Server {
    listener: TcpListener,
    shutdown_grace: Duration,
}

impl Server {
    /// Bind the configured address
    pub async fn bind(config: &ServerConfig) -> anyhow::Result<Self> {
        let address = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind to {}", address))?;

        Ok(Self {
            listener,
            shutdown_grace: config.shutdown_grace(),
        })
    }

    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("failed to read listener address")
    }

    /// Start serving in a background task
    pub fn spawn(self, app: Router) -> anyhow::Result<RunningServer> {
        let addr = self.local_addr()?;
        let Self {
            listener,
            shutdown_grace,
        } = self;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    // A dropped sender also means "stop"
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tracing::info!("Server listening on http://{}", addr);

        Ok(RunningServer {
            addr,
            shutdown_tx,
            task,
            shutdown_grace,
        })
    }
}

/// Handle on a listener serving in the background
pub struct RunningServer {
    addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
    shutdown_grace: Duration,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until `signal` resolves, then shut down gracefully.
    ///
    /// Returns an error if the listener stops on its own before the signal.
    pub async fn shutdown_on<F>(mut self, signal: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            () = signal => {}
            result = &mut self.task => {
                return match result {
                    Ok(Ok(())) => Err(anyhow!("HTTP server stopped unexpectedly")),
                    Ok(Err(e)) => Err(e).context("HTTP server failed"),
                    Err(e) => Err(e).context("HTTP server task failed"),
                };
            }
        }

        self.shutdown().await
    }

    /// Stop accepting connections and wait for in-flight requests
    pub async fn shutdown(self) -> anyhow::Result<()> {
        tracing::info!("Stopping HTTP listener");
        let _ = self.shutdown_tx.send(());

        let mut task = self.task;
        match tokio::time::timeout(self.shutdown_grace, &mut task).await {
            Ok(Ok(Ok(()))) => {
                tracing::info!("HTTP listener stopped");
                Ok(())
            }
            Ok(Ok(Err(e))) => Err(e).context("HTTP server failed during shutdown"),
            Ok(Err(e)) => Err(e).context("HTTP server task failed"),
            Err(_) => {
                task.abort();
                Err(anyhow!(
                    "in-flight requests did not finish within {:?}",
                    self.shutdown_grace
                ))
            }
        }
    }
}

/// Resolve on Ctrl+C or SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, initiating graceful shutdown"),
    }
}

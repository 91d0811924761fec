use axum::Router;
use medassist_common::config::{Config, Overrides};

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    Ok(format!("http://{addr}"))
}

/// A base URL nothing is listening on.
pub async fn dead_url() -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}"))
}

pub fn config(base_url: String) -> anyhow::Result<Config> {
    let overrides = Overrides {
        base_url: Some(base_url),
        ..Overrides::default()
    };
    Ok(Config::resolve(overrides, |_| None)?)
}

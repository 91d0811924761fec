use anyhow::Context;
use colored::*;
use tracing::warn;

use crate::terminal::print;
use medassist_common::config::Config;
use medassist_core::gateway::HttpGateway;

pub async fn health(cfg: &Config) -> anyhow::Result<()> {
    let gateway = HttpGateway::new(cfg).context("failed to build HTTP client")?;
    print::aligned_line("Endpoint", cfg.health_url());

    let status = gateway
        .health()
        .await
        .map_err(|e| anyhow::anyhow!("health check failed: {}", e.user_message()))?;

    let status_value: ColoredString = if status.is_ok() {
        status.status.as_str().green().bold()
    } else {
        status.status.as_str().red().bold()
    };
    let pipeline: ColoredString = if status.pipeline_ready {
        "ready".green()
    } else {
        "indexes not loaded".yellow()
    };

    print::aligned_line("Status", status_value);
    print::aligned_line("Pipeline", pipeline);

    if !status.is_ok() {
        warn!("Service reports status '{}'", status.status);
    }
    print::end_of_program();
    Ok(())
}

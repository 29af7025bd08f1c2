use anyhow::Context;
use nshop::domain::config::GatewayConfig;
use nshop::kernel::config::load_config;
use nshop_logger::Logger;
use nshop_server::{Server, runtime};

fn main() -> anyhow::Result<()> {
    let cfg: GatewayConfig =
        load_config(Some("config/server")).context("Critical: Configuration is malformed")?;

    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    runtime::build(cfg.server.worker_threads)?
        .block_on(async { Server::builder().config(cfg).build()?.run().await })
}

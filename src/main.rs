use std::process::ExitCode;

mod config;
mod error;
mod handler;
mod http;
mod logger;
mod server;

use error::SetupError;
use server::Outcome;

fn main() -> ExitCode {
    let result = run();
    if let Err(e) = &result {
        logger::log_setup_failure(e);
    }
    ExitCode::from(exit_status(&result))
}

/// Only setup failures exit nonzero; every outcome after a successful
/// setup, served or not, is a normal exit
const fn exit_status(result: &Result<Outcome, SetupError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn run() -> Result<Outcome, SetupError> {
    let cfg = config::Config::load()?;
    logger::init(&cfg).map_err(SetupError::Logger)?;

    // The runtime owns the networking resources; dropping it on return
    // releases them on every path
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(SetupError::Runtime)?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<Outcome, SetupError> {
    let addr = cfg.get_socket_addr().map_err(SetupError::Address)?;
    let listener = server::create_listener(addr, cfg.server.backlog)?;

    logger::log_listening(listener.local_addr().map_or(addr.port(), |a| a.port()));
    logger::log_debug(&format!(
        "Serving '{}' (at most {} bytes) on {addr}",
        cfg.content.index_file, cfg.content.max_body_size
    ));

    Ok(server::serve_once(listener, &cfg).await)
}

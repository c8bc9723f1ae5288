// Server module entry point
// Accepts exactly one connection, runs the exchange, and closes everything

pub mod exchange;
pub mod listener;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::logger::{self, ExchangeRecord};

pub use exchange::Outcome;
pub use listener::create_listener;

/// Accept a single connection from `listener`, answer it, and close.
///
/// The listener is consumed and dropped before returning, so a second
/// client is never serviced. There is no timeout: this blocks until a
/// client connects and sends something or closes.
pub async fn serve_once(listener: TcpListener, config: &Config) -> Outcome {
    let (mut stream, peer) = match listener.accept().await {
        Ok(accepted) => accepted,
        Err(e) => {
            logger::log_accept_failed(&e);
            let outcome = Outcome::AcceptFailed;
            logger::log_exchange(&ExchangeRecord::new(None, outcome.label()));
            return outcome;
        }
    };
    logger::log_debug(&format!("Accepted connection from {peer}"));

    let exchange = exchange::handle_exchange(&mut stream, config).await;

    // Close the client first, then the listening endpoint
    if let Err(e) = stream.shutdown().await {
        logger::log_debug(&format!("shutdown() failed: {e}"));
    }
    drop(stream);
    drop(listener);

    let outcome = exchange.outcome;
    logger::log_exchange(
        &ExchangeRecord::new(Some(peer.to_string()), outcome.label())
            .with_request(exchange.request.filled())
            .with_body_bytes(outcome.body_bytes()),
    );
    outcome
}

//! One-shot edge entry point for `/api/market`.
//!
//! Runs a single request through the same handler as the long-running server
//! and exits. The quote cache lives only as long as the process, so repeated
//! invocations each reach the upstream provider.

use std::io::Write;

use papertrade_server::{
    api::market::dispatch,
    build_state,
    cgi::{render_response, request_method},
    config::Config,
    init_tracing_with_writer,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing_with_writer(std::io::stderr);
    let state = build_state(&config)?;

    let method = request_method(std::env::var("REQUEST_METHOD").ok().as_deref())?;
    let query = std::env::var("QUERY_STRING").ok();

    let response = dispatch(&state, &method, query.as_deref()).await;
    let output = render_response(response).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

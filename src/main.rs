use crate::api::ApiClient;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod api;
mod dates;
mod domain;
mod errors;
mod filters;
mod messages;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Locate the ordens/entregas backend
    let api_url = std::env::var("MARCENARIA_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:3001".to_string());

    let api = match ApiClient::new(&api_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("❌ API client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Start the server
    let bind = std::env::var("MARCENARIA_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let addr: SocketAddr = match bind.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid bind address '{bind}': {e}");
            std::process::exit(1);
        }
    };
    println!("Starting server at http://{addr} (backend: {api_url})");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the API client into the closure
    let result = server.serve(move |req, _info| match handle(req, &api) {
        Ok(resp) => resp,
        Err(err) => {
            eprintln!("Request failed: {err}");
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}

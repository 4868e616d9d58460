//! # File Server - Entry Point
//! src/main.rs
//!
//! Parsea la configuración, inicializa el logging, abre el socket y entra en
//! el loop principal. Los errores de arranque terminan el proceso con código 1.

use file_server::config::Config;
use file_server::logging;
use file_server::server::Server;

fn main() {
    let config = Config::new();
    logging::init(&config.log_level);

    tracing::info!(
        address = %config.address(),
        mode = ?config.mode,
        "iniciando servidor de archivos"
    );

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "error fatal al arrancar");
            eprintln!("💥 Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run() {
        tracing::error!(error = %e, "error fatal en el loop principal");
        std::process::exit(1);
    }
}

//! UNO table server binary.
//!
//! Hosts exactly one four-seat table: admit players over WebSocket, run the
//! game to a winner, then tear the process down.

use std::sync::Arc;
use unoroom::gameroom::Room;
use unoroom::hosting::Lobby;
use unoroom::hosting::Server;

#[tokio::main]
async fn main() {
    unoroom::log();
    unoroom::interrupts();
    let lobby = Arc::new(Lobby::default());
    let table = lobby.clone();
    tokio::spawn(async move {
        let roster = table.roster().await;
        log::info!("table full, starting game");
        match Room::new(roster).run().await {
            Ok(()) => log::info!("game complete, shutting down"),
            Err(e) => log::error!("game aborted: {}", e),
        }
        // give the bridges a beat to flush close frames
        tokio::time::sleep(std::time::Duration::from_millis(250)).await;
        std::process::exit(0);
    });
    Server::run(lobby).await.expect("table server failed");
}

use crate::protocol::Request;
use crate::protocol::Response;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// One seat's transport handle, owned by the room. JSON goes out to the
/// client on `tx` and comes back in on `rx`; the far ends live in the
/// WebSocket bridge as a Remote.
///
/// A failed send means that client is unreachable; it is logged and dropped
/// so delivery to the other seats is never disturbed. A closed receive means
/// the client is gone, which the room treats as fatal for the game only when
/// it is actually waiting on that player.
#[derive(Debug)]
pub struct Player {
    name: String,
    tx: UnboundedSender<String>,
    rx: UnboundedReceiver<String>,
}

/// Bridge-side endpoints paired with a Player.
#[derive(Debug)]
pub struct Remote {
    pub tx: UnboundedSender<String>,
    pub rx: UnboundedReceiver<String>,
}

impl Player {
    /// Creates the coupled channel pair for one connection.
    /// Returns the room-side handle and the bridge-side endpoints.
    pub fn pair(name: &str) -> (Self, Remote) {
        let (tx_outgoing, rx_outgoing) = unbounded_channel::<String>();
        let (tx_incoming, rx_incoming) = unbounded_channel::<String>();
        let player = Self {
            name: name.to_string(),
            tx: tx_outgoing,
            rx: rx_incoming,
        };
        let remote = Remote {
            tx: tx_incoming,
            rx: rx_outgoing,
        };
        (player, remote)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn send(&self, response: &Response) {
        self.tx
            .send(response.to_json())
            .inspect_err(|e| log::warn!("failed send to {}: {}", self.name, e))
            .ok();
    }

    /// Next well-formed message from this client. Malformed frames are
    /// logged and skipped; None means the connection is gone.
    pub async fn recv(&mut self) -> Option<Request> {
        loop {
            let text = self.rx.recv().await?;
            match serde_json::from_str(&text) {
                Ok(request) => break Some(request),
                Err(e) => log::warn!("malformed message from {}: {}", self.name, e),
            }
        }
    }
}

use crate::gameroom::Player;
use crate::gameroom::Remote;
use tokio::sync::Mutex;
use tokio::sync::Notify;

/// Why a connection was turned away.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Refusal {
    /// The name is already seated at the table.
    Taken,
    /// The table is full, or the game has already started.
    Full,
}

impl std::fmt::Display for Refusal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Taken => write!(f, "name already seated"),
            Self::Full => write!(f, "table is full"),
        }
    }
}

impl std::error::Error for Refusal {}

/// Admission gate for the one table this process hosts.
///
/// Connections are seated here until the fourth arrives, at which point the
/// game task (blocked in `roster`) is signalled and takes the whole roster
/// out. From then on the lobby holds nothing: late joiners are refused and
/// departures are no-ops, so nothing can disturb seat indices mid-game.
pub struct Lobby {
    seats: Mutex<Option<Vec<Player>>>,
    full: Notify,
}

impl Default for Lobby {
    fn default() -> Self {
        Self {
            seats: Mutex::new(Some(Vec::new())),
            full: Notify::new(),
        }
    }
}

impl Lobby {
    /// Seat a named connection, returning the bridge-side channel endpoints.
    pub async fn admit(&self, name: &str) -> Result<Remote, Refusal> {
        let mut guard = self.seats.lock().await;
        let seats = guard.as_mut().ok_or(Refusal::Full)?;
        if seats.iter().any(|player| player.name() == name) {
            return Err(Refusal::Taken);
        }
        if seats.len() == crate::SEATS {
            return Err(Refusal::Full);
        }
        let (player, remote) = Player::pair(name);
        seats.push(player);
        log::info!("{} seated ({}/{})", name, seats.len(), crate::SEATS);
        if seats.len() == crate::SEATS {
            self.full.notify_waiters();
        }
        Ok(remote)
    }

    /// Remove a connection that hung up before the deal. Once the game has
    /// the roster this does nothing.
    pub async fn depart(&self, name: &str) {
        if let Some(seats) = self.seats.lock().await.as_mut() {
            let before = seats.len();
            seats.retain(|player| player.name() != name);
            if seats.len() < before {
                log::info!("{} left before the deal ({}/{})", name, seats.len(), crate::SEATS);
            }
        }
    }

    /// Block until the table is full, then take the roster. Resolves exactly
    /// once per process; the hand-off closes the lobby.
    pub async fn roster(&self) -> Vec<Player> {
        loop {
            let notified = self.full.notified();
            if let Some(players) = self.claim().await {
                break players;
            }
            notified.await;
        }
    }

    async fn claim(&self) -> Option<Vec<Player>> {
        let mut guard = self.seats.lock().await;
        match guard.as_ref() {
            Some(seats) if seats.len() == crate::SEATS => guard.take(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refuses_duplicate_names() {
        let lobby = Lobby::default();
        assert!(lobby.admit("alice").await.is_ok());
        assert!(matches!(lobby.admit("alice").await, Err(Refusal::Taken)));
        assert!(lobby.admit("bob").await.is_ok());
    }

    #[tokio::test]
    async fn refuses_a_fifth_seat() {
        let lobby = Lobby::default();
        for name in ["alice", "bob", "carol", "dave"] {
            assert!(lobby.admit(name).await.is_ok());
        }
        assert!(matches!(lobby.admit("eve").await, Err(Refusal::Full)));
    }

    #[tokio::test]
    async fn departures_free_seats_before_the_deal() {
        let lobby = Lobby::default();
        for name in ["alice", "bob", "carol", "dave"] {
            assert!(lobby.admit(name).await.is_ok());
        }
        lobby.depart("carol").await;
        assert!(lobby.admit("eve").await.is_ok());
    }

    #[tokio::test]
    async fn hand_off_closes_the_lobby() {
        let lobby = Lobby::default();
        for name in ["alice", "bob", "carol", "dave"] {
            assert!(lobby.admit(name).await.is_ok());
        }
        let roster = lobby.roster().await;
        assert!(roster.len() == crate::SEATS);
        assert!(matches!(lobby.admit("eve").await, Err(Refusal::Full)));
        lobby.depart("alice").await;
        assert!(matches!(lobby.admit("alice").await, Err(Refusal::Full)));
    }
}

use crate::cards::Card;
use serde::Deserialize;
use serde::Serialize;

/// Messages pushed to clients, one JSON object per frame, shaped
/// `{event, data?}`. Clients are render targets: they redraw from Hand,
/// Stack, and PlayerBoard, surface the notification events, and answer the
/// Draw2/Draw4 prompts before penalty cards are delivered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Response {
    /// Full replacement of the recipient's hand view.
    Hand(Vec<Card>),
    /// Current discard top.
    Stack(Card),
    /// Per-round table snapshot.
    PlayerBoard(Vec<BoardSeat>),
    /// "You may act now." Sent to the current seat only.
    Turn,
    /// Cards just delivered to this recipient.
    Draw(Vec<Card>),
    /// Someone drew; shown as a table notification.
    Drawn { player: String, amount: usize },
    Skip { player: String },
    Reverse,
    Uno { player: String },
    /// Recipient must acknowledge and draw 2 for an unclaimed UNO.
    UnoPenalty,
    InvalidCard,
    Winner { player: String },
    /// Forced-draw prompts awaiting the matching acknowledgment.
    Draw2,
    Draw4,
    Connected,
    AlreadyConnected,
    Full,
}

/// One row of the table snapshot: `turn` is 1 for the acting seat, 2 for the
/// seat up next, 0 otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSeat {
    pub name: String,
    #[serde(rename = "numCards")]
    pub num_cards: usize,
    pub turn: u8,
}

impl Response {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::cards::Face;

    #[test]
    fn bare_events_have_no_data_key() {
        let json = serde_json::to_value(&Response::Turn).expect("serialize");
        assert!(json == serde_json::json!({"event": "TURN"}));
        let json = serde_json::to_value(&Response::UnoPenalty).expect("serialize");
        assert!(json == serde_json::json!({"event": "UNO_PENALTY"}));
    }

    #[test]
    fn payload_events_nest_under_data() {
        let json = serde_json::to_value(&Response::Drawn {
            player: "alice".to_string(),
            amount: 2,
        })
        .expect("serialize");
        assert!(json == serde_json::json!({"event": "DRAWN", "data": {"player": "alice", "amount": 2}}));
    }

    #[test]
    fn stack_carries_one_card() {
        let json = serde_json::to_value(&Response::Stack(Card::from((Color::Red, Face::Seven))))
            .expect("serialize");
        assert!(
            json == serde_json::json!({
                "event": "STACK",
                "data": {"kind": "number", "color": "red", "face": "7"}
            })
        );
    }

    #[test]
    fn board_uses_wire_casing() {
        let json = serde_json::to_value(&Response::PlayerBoard(vec![BoardSeat {
            name: "bob".to_string(),
            num_cards: 7,
            turn: 1,
        }]))
        .expect("serialize");
        assert!(
            json == serde_json::json!({
                "event": "PLAYER_BOARD",
                "data": [{"name": "bob", "numCards": 7, "turn": 1}]
            })
        );
    }
}

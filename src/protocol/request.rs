use crate::cards::Card;
use serde::Deserialize;
use serde::Serialize;

/// Messages accepted from clients, one JSON object per frame, shaped
/// `{event, data?}`. Everything a client can say fits in five intents plus
/// the admission handshake; anything else fails to parse and is dropped.
///
/// Draw2/Draw4 are acknowledgments: the server prompts before delivering
/// penalty or forced-draw cards, and the client confirms with the matching
/// event.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Request {
    Name(String),
    Draw,
    Uno,
    Play(Card),
    Draw2,
    Draw4,
}

use serde::Deserialize;
use serde::Serialize;

/// Card category discriminant. Number cards carry no effect, action cards
/// carry one, wilds are colorless and split into plain wild and draw4.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Number,
    Action,
    Wild,
}

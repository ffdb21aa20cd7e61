use serde::Deserialize;
use serde::Serialize;

/// The four playable colors, plus the colorless state a wild card keeps for
/// its whole lifetime.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    None,
}

impl Color {
    pub const SOLIDS: [Self; 4] = [Self::Red, Self::Blue, Self::Green, Self::Yellow];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Blue => write!(f, "blue"),
            Self::Green => write!(f, "green"),
            Self::Yellow => write!(f, "yellow"),
            Self::None => write!(f, "-"),
        }
    }
}

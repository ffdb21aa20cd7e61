/// A single card. Identity (kind, color, face) is fixed at construction;
/// `resolved` exists only on effect-carrying cards (actions and draw4) and
/// flips to false while the card sits on the pile with its effect unapplied.
///
/// Wild cards are colorless for their whole lifetime: whatever color a client
/// claims for one is discarded on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    kind: Kind,
    color: Color,
    face: Face,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    resolved: Option<bool>,
}

impl From<(Color, Face)> for Card {
    fn from((color, face): (Color, Face)) -> Self {
        let kind = face.kind();
        Self {
            kind,
            face,
            color: match kind {
                Kind::Wild => Color::None,
                _ => color,
            },
            resolved: match (kind, face) {
                (Kind::Action, _) | (_, Face::Draw4) => Some(true),
                _ => None,
            },
        }
    }
}

impl Card {
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_wild(&self) -> bool {
        self.kind == Kind::Wild
    }
    /// Whether this card obligates the next player to something.
    pub fn carries_effect(&self) -> bool {
        self.kind == Kind::Action || self.face == Face::Draw4
    }
    /// True while the card's effect awaits application to the obligated player.
    pub fn is_pending(&self) -> bool {
        self.resolved == Some(false)
    }

    /// Rebuild a client-supplied card from its identity alone, discarding any
    /// claimed color on wilds and any claimed flag state.
    pub fn normalize(&self) -> Self {
        Self::from((self.color, self.face))
    }

    pub(crate) fn arm(&mut self) {
        if self.carries_effect() {
            self.resolved = Some(false);
        }
    }
    pub(crate) fn settle(&mut self) {
        if self.carries_effect() {
            self.resolved = Some(true);
        }
    }
}

/// Identity comparison only. The resolution flag is transient pile state and
/// must not break hand matching.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.color == other.color && self.face == other.face
    }
}
impl Eq for Card {}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let face = self.face.to_string();
        match self.color {
            Color::Red => write!(f, "{}", face.red()),
            Color::Blue => write!(f, "{}", face.blue()),
            Color::Green => write!(f, "{}", face.green()),
            Color::Yellow => write!(f, "{}", face.yellow()),
            Color::None => write!(f, "{}", face.magenta()),
        }
    }
}

use super::color::Color;
use super::face::Face;
use super::kind::Kind;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

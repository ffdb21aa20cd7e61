use crate::cards::Card;
use crate::cards::Deck;

/// Discard pile. Only the top card constrains play; everything beneath it is
/// inert history until a recycle feeds it back into the deck.
#[derive(Debug, Clone, Default)]
pub struct Pile(Vec<Card>);

impl From<Vec<Card>> for Pile {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl Pile {
    /// Accept a played (or seeded) card. Effect-carrying cards land with their
    /// effect unapplied.
    pub fn push(&mut self, mut card: Card) {
        card.arm();
        self.0.push(card);
    }

    pub fn top(&self) -> &Card {
        self.0.last().expect("pile is seeded before play begins")
    }

    /// Mark the top card's effect as applied.
    pub fn settle(&mut self) {
        if let Some(card) = self.0.last_mut() {
            card.settle();
        }
    }

    /// Whether `card` may legally land on `top`: wild always, otherwise a
    /// color or face match. Unplayed wilds are colorless, so nothing but
    /// another wild matches a wild top.
    pub fn playable(card: &Card, top: &Card) -> bool {
        card.is_wild() || card.color() == top.color() || card.face() == top.face()
    }

    pub fn accepts(&self, card: &Card) -> bool {
        Self::playable(card, self.top())
    }

    /// Feed everything but the top back into the deck, preserving relative
    /// order on the way out, and reshuffle.
    pub fn recycle(&mut self, deck: &mut Deck) {
        let top = self.0.pop().expect("pile is seeded before recycling");
        deck.restock(std::mem::take(&mut self.0));
        self.0.push(top);
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
}

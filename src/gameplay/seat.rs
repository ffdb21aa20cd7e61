use crate::cards::Card;

/// One admitted player's identity and hand. The hand is mutated only by the
/// turn controller, and only during this seat's turn or a forced draw.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    hand: Vec<Card>,
    said_uno: bool,
}

impl Seat {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            hand: Vec::new(),
            said_uno: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn size(&self) -> usize {
        self.hand.len()
    }
    pub fn said_uno(&self) -> bool {
        self.said_uno
    }

    /// The UNO claim protects this seat only while it holds exactly 2 cards.
    pub fn declare(&mut self) -> bool {
        if self.hand.len() == 2 {
            self.said_uno = true;
        }
        self.said_uno
    }

    /// A fresh turn clears last turn's claim, unless the seat is already down
    /// to its final card.
    pub fn begin_turn(&mut self) {
        if self.hand.len() > 1 {
            self.said_uno = false;
        }
    }

    pub fn give(&mut self, cards: Vec<Card>) {
        self.hand.extend(cards);
    }

    /// Remove the first card matching by identity, if held.
    pub fn take(&mut self, card: &Card) -> Option<Card> {
        let at = self.hand.iter().position(|held| held == card)?;
        Some(self.hand.remove(at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::cards::Face;

    #[test]
    fn declare_requires_two_cards() {
        let mut seat = Seat::new("alice");
        seat.give(vec![
            Card::from((Color::Red, Face::One)),
            Card::from((Color::Red, Face::Two)),
            Card::from((Color::Red, Face::Three)),
        ]);
        assert!(!seat.declare());
        seat.take(&Card::from((Color::Red, Face::Three)));
        assert!(seat.declare());
    }

    #[test]
    fn claim_expires_next_turn() {
        let mut seat = Seat::new("bob");
        seat.give(vec![
            Card::from((Color::Blue, Face::One)),
            Card::from((Color::Blue, Face::Two)),
        ]);
        assert!(seat.declare());
        seat.begin_turn();
        assert!(!seat.said_uno());
    }

    #[test]
    fn take_matches_wilds_colorless() {
        let mut seat = Seat::new("carol");
        seat.give(vec![Card::from((Color::None, Face::Wild))]);
        assert!(seat.take(&Card::from((Color::Red, Face::Wild)).normalize()).is_some());
        assert!(seat.size() == 0);
    }
}

use super::card::Card;
use super::color::Color;
use super::face::Face;
use rand::seq::SliceRandom;

/// Draw pile. Cards come off the back; recycled pile cards are appended and
/// the whole thing reshuffled.
#[derive(Debug, Clone, Default)]
pub struct Deck(Vec<Card>);

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl Deck {
    /// Full 108-card deck in uniform random order. Per color: one 0, two each
    /// of 1-9, two each of skip/reverse/draw2; plus four wilds and four draw4s.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(crate::DECK_SIZE);
        for color in Color::SOLIDS {
            cards.push(Card::from((color, Face::Zero)));
            for face in Face::NUMBERS.into_iter().skip(1) {
                cards.push(Card::from((color, face)));
                cards.push(Card::from((color, face)));
            }
            for face in Face::ACTIONS {
                cards.push(Card::from((color, face)));
                cards.push(Card::from((color, face)));
            }
        }
        for _ in 0..4 {
            cards.push(Card::from((Color::None, Face::Wild)));
            cards.push(Card::from((Color::None, Face::Draw4)));
        }
        let mut deck = Self(cards);
        deck.shuffle();
        deck
    }

    /// Uniform random permutation of the remaining cards.
    pub fn shuffle(&mut self) {
        self.0.shuffle(&mut rand::rng());
    }

    /// Remove and return the card at the draw end.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    /// Return a card to the bottom of the pile, away from the draw end.
    pub fn bury(&mut self, card: Card) {
        self.0.insert(0, card);
    }

    /// Absorb recycled pile cards and reshuffle.
    pub fn restock(&mut self, cards: Vec<Card>) {
        self.0.extend(cards);
        self.shuffle();
    }

    pub fn size(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(deck: &Deck) -> Vec<String> {
        let mut labels = deck
            .0
            .iter()
            .map(|c| format!("{}/{}", c.color(), c.face()))
            .collect::<Vec<_>>();
        labels.sort();
        labels
    }

    #[test]
    fn full_deck_size() {
        assert!(Deck::new().size() == crate::DECK_SIZE);
    }

    #[test]
    fn composition() {
        let deck = Deck::new();
        for color in Color::SOLIDS {
            assert!(deck.0.iter().filter(|c| c.color() == color).count() == 25);
        }
        assert!(deck.0.iter().filter(|c| c.face() == Face::Wild).count() == 4);
        assert!(deck.0.iter().filter(|c| c.face() == Face::Draw4).count() == 4);
        assert!(deck.0.iter().filter(|c| c.face() == Face::Zero).count() == 4);
        assert!(deck.0.iter().filter(|c| c.face() == Face::Five).count() == 8);
    }

    #[test]
    fn shuffle_is_permutation() {
        let mut deck = Deck::new();
        let before = labels(&deck);
        deck.shuffle();
        assert!(labels(&deck) == before);
    }

    #[test]
    fn restock_absorbs_cards() {
        let mut deck = Deck::from(vec![Card::from((Color::Red, Face::One))]);
        deck.restock(vec![
            Card::from((Color::Blue, Face::Two)),
            Card::from((Color::Green, Face::Three)),
        ]);
        assert!(deck.size() == 3);
    }

    #[test]
    fn draw_empties_the_deck() {
        let mut deck = Deck::new();
        for _ in 0..crate::DECK_SIZE {
            assert!(deck.draw().is_some());
        }
        assert!(deck.draw().is_none());
    }
}

use super::pile::Pile;
use super::seat::Seat;
use super::turn::Turn;
use crate::cards::Card;
use crate::cards::Deck;

/// Why a play was refused. Both cases are reported to the offending player
/// in-band and leave the game untouched.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PlayError {
    Unplayable,
    NotInHand,
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unplayable => write!(f, "card does not match the pile top"),
            Self::NotInHand => write!(f, "card is not in hand"),
        }
    }
}

impl std::error::Error for PlayError {}

/// Single source of truth for one running game: the seats in play order, the
/// draw pile, the discard pile, whose move it is, and which way play rotates.
/// Owned and mutated exclusively by the room driving it.
#[derive(Debug, Clone)]
pub struct Game {
    seats: Vec<Seat>,
    deck: Deck,
    pile: Pile,
    action: usize,
    direction: i8,
    winner: Option<usize>,
}

impl From<(Vec<Seat>, Deck, Pile)> for Game {
    fn from((seats, deck, pile): (Vec<Seat>, Deck, Pile)) -> Self {
        Self {
            seats,
            deck,
            pile,
            action: 0,
            direction: 1,
            winner: None,
        }
    }
}

impl Game {
    /// Fresh game for the given seating order, with a full shuffled deck and
    /// an empty pile. Deal and seed before driving turns.
    pub fn new(names: Vec<String>) -> Self {
        Self::from((
            names.iter().map(|name| Seat::new(name)).collect::<Vec<_>>(),
            Deck::new(),
            Pile::default(),
        ))
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, pos: usize) -> &Seat {
        self.seats.get(pos).expect("seat index in bounds")
    }
    pub fn action(&self) -> usize {
        self.action
    }
    pub fn top(&self) -> &Card {
        self.pile.top()
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    /// The seat that acts after the current one, given the direction.
    pub fn next(&self) -> usize {
        let n = self.seats.len() as isize;
        (self.action as isize + self.direction as isize).rem_euclid(n) as usize
    }

    pub fn turn(&self) -> Turn {
        match self.winner {
            Some(pos) => Turn::Over(pos),
            None if self.pile.top().is_pending() => Turn::Pending(self.action),
            None => Turn::Choice(self.action),
        }
    }

    pub fn advance(&mut self) {
        self.action = self.next();
    }

    pub fn flip(&mut self) {
        self.direction = -self.direction;
    }

    pub fn settle(&mut self) {
        self.pile.settle();
    }

    pub fn begin_turn(&mut self) {
        let pos = self.action;
        self.seats[pos].begin_turn();
    }

    /// Current seat claims UNO. Only honored while holding exactly 2 cards.
    pub fn declare(&mut self) -> bool {
        let pos = self.action;
        self.seats[pos].declare()
    }

    /// Starting hands for every seat.
    pub fn deal(&mut self) -> anyhow::Result<()> {
        for pos in 0..self.seats.len() {
            let cards = self.draw(crate::STARTING_HAND)?;
            self.seats[pos].give(cards);
        }
        Ok(())
    }

    /// First pile card off the deck. Wilds are buried and redrawn; an action
    /// seed lands unapplied and resolves against the first player.
    pub fn seed(&mut self) {
        loop {
            match self.deck.draw() {
                Some(card) if card.is_wild() => self.deck.bury(card),
                Some(card) => break self.pile.push(card),
                None => unreachable!("a dealt deck still holds non-wild cards"),
            }
        }
    }

    /// Remove `n` cards from the draw end, recycling the pile first when the
    /// deck runs short. Failing after a recycle means the 108-card invariant
    /// broke, which is fatal to the game.
    pub fn draw(&mut self, n: usize) -> anyhow::Result<Vec<Card>> {
        if self.deck.size() < n {
            self.pile.recycle(&mut self.deck);
        }
        anyhow::ensure!(
            self.deck.size() >= n,
            "deck exhausted: {} cards left of {} requested",
            self.deck.size(),
            n,
        );
        Ok((0..n).filter_map(|_| self.deck.draw()).collect())
    }

    /// Draw `n` into a seat's hand, returning copies for the wire.
    pub fn deliver(&mut self, pos: usize, n: usize) -> anyhow::Result<Vec<Card>> {
        let cards = self.draw(n)?;
        self.seats[pos].give(cards.clone());
        Ok(cards)
    }

    /// Current seat attempts to play a card. On success the card moves from
    /// hand to pile and an emptied hand decides the game.
    pub fn play(&mut self, card: Card) -> Result<(), PlayError> {
        let card = card.normalize();
        if !self.pile.accepts(&card) {
            return Err(PlayError::Unplayable);
        }
        let pos = self.action;
        let card = self.seats[pos].take(&card).ok_or(PlayError::NotInHand)?;
        self.pile.push(card);
        if self.seats[pos].size() == 0 {
            self.winner = Some(pos);
        }
        Ok(())
    }

    /// Cards in circulation across every container.
    pub fn circulation(&self) -> usize {
        self.deck.size() + self.pile.size() + self.seats.iter().map(Seat::size).sum::<usize>()
    }
}

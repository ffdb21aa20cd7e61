use super::player::Player;
use crate::cards::Face;
use crate::gameplay::Game;
use crate::gameplay::Turn;
use crate::protocol::BoardSeat;
use crate::protocol::Request;
use crate::protocol::Response;
use rand::seq::SliceRandom;

/// Central coordinator for one four-seat game.
/// Single source of truth: owns the game state and every player channel,
/// enforces the rules and turn order, and pushes every view change.
///
/// The room is strictly serial. Exactly one seat's channel is awaited at a
/// time; nobody else's input is even polled until the active turn ends. There
/// is no turn timeout, so an unresponsive active player suspends the table.
///
/// Each round re-reads the pile top:
/// - an unapplied effect resolves against the seat up next (forced draws
///   behind an acknowledgment, skip/reverse as broadcasts),
/// - otherwise the current seat acts until its turn truly ends (draws and
///   UNO claims keep the turn; a play ends it, by penalty, win, or advance).
#[derive(Debug)]
pub struct Room {
    game: Game,
    players: Vec<Player>,
}

impl From<(Game, Vec<Player>)> for Room {
    fn from((game, players): (Game, Vec<Player>)) -> Self {
        Self { game, players }
    }
}

impl Room {
    /// Seats the admitted roster in a random order. Seat index and channel
    /// index stay parallel for the lifetime of the game.
    pub fn new(mut players: Vec<Player>) -> Self {
        players.shuffle(&mut rand::rng());
        let names = players.iter().map(|p| p.name().to_string()).collect();
        Self::from((Game::new(names), players))
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        self.game.deal()?;
        for (pos, player) in self.players.iter().enumerate() {
            player.send(&Response::Hand(self.game.seat(pos).hand().to_vec()));
        }
        self.game.seed();
        log::info!("cards dealt, first card: {}", self.game.top());
        self.cycle().await
    }
}

impl Room {
    async fn cycle(&mut self) -> anyhow::Result<()> {
        loop {
            if let Turn::Over(pos) = self.game.turn() {
                log::info!("game over, {} wins", self.name(pos));
                break Ok(());
            }
            log::debug!("round: {} on {}", self.game.turn(), self.game.top());
            self.broadcast(&Response::Stack(self.game.top().clone()));
            self.broadcast(&Response::PlayerBoard(self.board()));
            match self.game.turn() {
                Turn::Pending(pos) => self.resolve(pos).await?,
                Turn::Choice(pos) => self.next_turn(pos).await?,
                Turn::Over(_) => unreachable!("terminal turns break above"),
            }
        }
    }

    /// Apply the top card's effect to the obligated seat, then settle it so
    /// the next round falls through to ordinary turn handling.
    async fn resolve(&mut self, pos: usize) -> anyhow::Result<()> {
        match self.game.top().face() {
            Face::Draw2 => self.penalize(pos, 2, Response::Draw2).await?,
            Face::Draw4 => self.penalize(pos, 4, Response::Draw4).await?,
            Face::Skip => {
                log::info!("{} is skipped", self.name(pos));
                self.broadcast(&Response::Skip {
                    player: self.name(pos),
                });
            }
            Face::Reverse => {
                log::info!("play reverses");
                self.broadcast(&Response::Reverse);
                self.game.flip();
            }
            face => unreachable!("{} carries no effect to resolve", face),
        }
        self.game.settle();
        self.game.advance();
        Ok(())
    }

    /// One seat's whole turn: draws and UNO claims keep it, a play ends it.
    async fn next_turn(&mut self, pos: usize) -> anyhow::Result<()> {
        self.game.begin_turn();
        self.unicast(pos, &Response::Turn);
        loop {
            match self.recv(pos).await? {
                Request::Draw => {
                    let cards = self.game.deliver(pos, 1)?;
                    self.unicast(pos, &Response::Draw(cards));
                    self.broadcast(&Response::Drawn {
                        player: self.name(pos),
                        amount: 1,
                    });
                }
                Request::Uno => {
                    if self.game.declare() {
                        log::info!("{} says UNO", self.name(pos));
                        self.broadcast(&Response::Uno {
                            player: self.name(pos),
                        });
                    }
                }
                Request::Play(card) => match self.game.play(card) {
                    Err(e) => {
                        log::debug!("refused play from {}: {}", self.name(pos), e);
                        self.unicast(pos, &Response::InvalidCard);
                    }
                    Ok(()) => {
                        log::info!("{} plays {}", self.name(pos), self.game.top());
                        self.unicast(pos, &Response::Hand(self.game.seat(pos).hand().to_vec()));
                        let unclaimed = {
                            let seat = self.game.seat(pos);
                            seat.size() == 1 && !seat.said_uno()
                        };
                        if unclaimed {
                            self.penalize(pos, 2, Response::UnoPenalty).await?;
                        } else if let Turn::Over(_) = self.game.turn() {
                            self.broadcast(&Response::Winner {
                                player: self.name(pos),
                            });
                        }
                        break;
                    }
                },
                request => {
                    log::warn!("{} sent {:?} outside a draw prompt", self.name(pos), request)
                }
            }
        }
        match self.game.turn() {
            Turn::Over(_) => {}
            _ => self.game.advance(),
        }
        Ok(())
    }

    /// Prompt, await the matching acknowledgment, then deliver the cards and
    /// tell the table.
    async fn penalize(&mut self, pos: usize, amount: usize, prompt: Response) -> anyhow::Result<()> {
        let ack = match amount {
            4 => Request::Draw4,
            _ => Request::Draw2,
        };
        self.unicast(pos, &prompt);
        while self.recv(pos).await? != ack {
            log::warn!("{} must acknowledge the forced draw first", self.name(pos));
        }
        let cards = self.game.deliver(pos, amount)?;
        self.unicast(pos, &Response::Draw(cards));
        self.broadcast(&Response::Drawn {
            player: self.name(pos),
            amount,
        });
        log::info!("{} draws {} cards", self.name(pos), amount);
        Ok(())
    }
}

impl Room {
    fn board(&self) -> Vec<BoardSeat> {
        self.game
            .seats()
            .iter()
            .enumerate()
            .map(|(pos, seat)| BoardSeat {
                name: seat.name().to_string(),
                num_cards: seat.size(),
                turn: match pos {
                    pos if pos == self.game.action() => 1,
                    pos if pos == self.game.next() => 2,
                    _ => 0,
                },
            })
            .collect()
    }

    fn name(&self, pos: usize) -> String {
        self.game.seat(pos).name().to_string()
    }

    async fn recv(&mut self, pos: usize) -> anyhow::Result<Request> {
        let name = self.name(pos);
        self.players
            .get_mut(pos)
            .expect("seat index in bounds")
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("{} disconnected mid-game", name))
    }

    fn unicast(&self, pos: usize, response: &Response) {
        if let Some(player) = self.players.get(pos) {
            player.send(response);
        }
    }

    fn broadcast(&self, response: &Response) {
        for player in &self.players {
            player.send(response);
        }
    }
}

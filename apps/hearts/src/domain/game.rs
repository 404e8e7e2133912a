//! Game orchestration: seating, dealing, passing, the trick loop and scoring.
//!
//! Each hand runs `Dealing -> Passing -> RotationEstablished -> TrickLoop ->
//! Scoring`. The game ends after the first hand in which any player's total
//! reaches the configured threshold.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::cards_types::Card;
use super::deck::Deck;
use super::passing::{CardPass, PassDirection};
use super::player::{pair_mut, Player};
use super::report::{
    CardLabel, GameReport, HandReport, HandScore, PassRecord, Standing, TrickRecord,
};
use super::rotation::{cycle_players_to, PlayerId, Rotation};
use super::scoring::{
    get_game_winner, get_hand_winner, get_players_sorted_by_total_points,
    get_point_cards_for, get_points_for, shot_the_moon, sort_player_cards, TricksByPlayer,
};
use super::seed_derivation::seed_from_u64;
use super::tricks::{ScoringRules, Trick};
use super::vocabulary::CardVocabulary;
use crate::config::{ConfigError, GameConfig, ResolvedConfig};
use crate::errors::domain::{CardName, DomainError};

pub struct Game<R: Rng = ChaCha8Rng> {
    vocab: CardVocabulary,
    starting_card: Card,
    rules: ScoringRules,
    max_points: u32,
    player_names: Vec<String>,
    players: Vec<Player>,
    deck: Deck,
    rotation: Rotation,
    hand_number: u32,
    card_passes: Vec<CardPass>,
    rng: R,
}

impl Game<ChaCha8Rng> {
    /// Build a game from `config`, seeded from `config.seed` or OS entropy.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::from_seed(seed_from_u64(seed)),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: &GameConfig, rng: R) -> Result<Self, ConfigError> {
        Ok(Self::from_resolved(config.resolve()?, rng))
    }

    pub fn from_resolved(config: ResolvedConfig, rng: R) -> Self {
        let deck = Deck::new(&config.vocab);
        Self {
            vocab: config.vocab,
            starting_card: config.starting_card,
            rules: config.rules,
            max_points: config.max_points,
            player_names: config.player_names,
            players: Vec::new(),
            deck,
            rotation: Rotation::new(0),
            hand_number: 0,
            card_passes: Vec::new(),
            rng,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: PlayerId) -> Result<&Player, DomainError> {
        self.players.get(seat).ok_or(DomainError::UnknownPlayer(seat))
    }

    pub fn vocabulary(&self) -> &CardVocabulary {
        &self.vocab
    }

    pub fn starting_card(&self) -> Card {
        self.starting_card
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }

    /// Passes made in the most recent passing phase.
    pub fn card_passes(&self) -> &[CardPass] {
        &self.card_passes
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seat `names` after anyone already seated.
    pub fn add_players<I, S>(&mut self, names: I) -> Result<(), DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> =
            self.players.iter().map(|p| p.name().to_string()).collect();
        let mut incoming = Vec::new();
        for name in names {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(DomainError::DuplicatePlayer(name));
            }
            incoming.push(Player::new(name));
        }
        self.players.extend(incoming);
        self.rotation = Rotation::new(self.players.len());
        Ok(())
    }

    pub fn shuffle_players(&mut self) {
        self.players.shuffle(&mut self.rng);
    }

    pub fn shuffle_deck(&mut self) {
        self.deck.shuffle(&mut self.rng);
    }

    /// Deal the whole deck round-robin in seating order.
    pub fn deal_cards(&mut self) -> Result<(), DomainError> {
        let seats = self.players.len();
        if seats == 0 {
            return Err(DomainError::NoPlayers);
        }
        if self.deck.count() % seats != 0 {
            return Err(DomainError::UnevenDeal {
                cards: self.deck.count(),
                players: seats,
            });
        }
        let mut seat = 0;
        while !self.deck.is_empty() {
            let card = self.deck.take()?;
            self.players[seat].receive_card(card);
            seat = (seat + 1) % seats;
        }
        Ok(())
    }

    /// Run the passing phase for `hand`, returning what moved in pass order.
    pub fn pass_three_cards(&mut self, hand: u32) -> Result<Vec<CardPass>, DomainError> {
        let direction = PassDirection::for_hand(hand);
        let mut passes = Vec::new();
        for (from, to) in direction.pairs(self.players.len()) {
            let (giver, receiver) = pair_mut(&mut self.players, from, to)?;
            let cards = giver.pass_three_cards_to(receiver, &mut self.rng)?;
            debug!(hand, from, to, ?direction, "passed three cards");
            passes.push(CardPass { from, to, cards });
        }
        self.card_passes = passes.clone();
        Ok(passes)
    }

    /// Seat holding the starting card.
    pub fn first_player(&self) -> Result<PlayerId, DomainError> {
        self.players
            .iter()
            .position(|p| p.has_card(self.starting_card))
            .ok_or_else(|| {
                DomainError::StartingCardNotDealt(CardName::tokens(self.starting_card, &self.vocab))
            })
    }

    pub fn set_player_rotation(&mut self) {
        self.rotation = Rotation::new(self.players.len());
    }

    pub fn next_player(&mut self) -> Result<PlayerId, DomainError> {
        self.rotation.next_player()
    }

    pub fn is_over(&self) -> bool {
        self.players
            .iter()
            .any(|p| p.total_points() >= self.max_points)
    }

    /// Play one trick led by `leader`, the rest following in rotation order.
    pub fn play_trick(&mut self, number: u32, leader: PlayerId) -> Result<Trick, DomainError> {
        let mut trick = Trick::new(
            number,
            self.starting_card,
            self.players.len(),
            self.rules,
        );
        let mut seat = cycle_players_to(leader, &mut self.rotation)?;
        loop {
            self.players[seat]
                .play(seat, &mut trick, &mut self.rng)
                .map_err(|e| e.name_cards(&self.vocab))?;
            seat = self.next_player()?;
            if seat == leader {
                break;
            }
        }
        Ok(trick)
    }

    /// Advance to the next hand, then deal, pass, play and score it.
    pub fn play_hand(&mut self) -> Result<HandReport, DomainError> {
        self.hand_number += 1;
        let hand = self.hand_number;

        self.deck = Deck::new(&self.vocab);
        self.shuffle_deck();
        self.deal_cards()?;
        sort_player_cards(&mut self.players);

        let pass_direction = PassDirection::for_hand(hand);
        let passes = self.pass_three_cards(hand)?;
        sort_player_cards(&mut self.players);

        self.set_player_rotation();
        let first = self.first_player()?;
        let order_of_play: Vec<String> = self
            .rotation
            .order_from(first)
            .map(|seat| self.players[seat].name().to_string())
            .collect();

        let mut tricks_by_player = TricksByPlayer::new();
        let mut trick_records = Vec::new();
        let mut leader = first;
        let mut number = 1;
        while self.players[leader].has_cards() {
            let trick = self.play_trick(number, leader)?;
            // Only an empty trick has no winner.
            let winner = trick.winning_player().ok_or(DomainError::NoPlayers)?;
            debug!(
                hand,
                trick = number,
                winner = self.players[winner].name(),
                points = trick.points(),
                "trick complete"
            );
            trick_records.push(TrickRecord::from_trick(&trick, &self.players, &self.vocab));
            tricks_by_player.entry(winner).or_default().push(trick);
            leader = winner;
            number += 1;
        }

        let moon = shot_the_moon(&tricks_by_player);
        let mut point_cards = Vec::with_capacity(self.players.len());
        for (seat, player) in self.players.iter_mut().enumerate() {
            let tricks = tricks_by_player
                .get(&seat)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            player.add_points(get_points_for(tricks, moon), hand);
            point_cards.push((player.name().to_string(), get_point_cards_for(tricks)));
        }

        let hand_winner = get_hand_winner(&self.players, hand, moon)?.map(|p| p.name().to_string());
        let mut scores = Vec::with_capacity(self.players.len());
        for player in get_players_sorted_by_total_points(&self.players) {
            let cards = point_cards
                .iter()
                .find(|(name, _)| name == player.name())
                .map(|(_, cards)| CardLabel::many(cards, &self.vocab))
                .unwrap_or_default();
            scores.push(HandScore {
                player: player.name().to_string(),
                points: player.points(hand)?,
                total_points: player.total_points(),
                point_cards: cards,
            });
        }

        info!(
            hand,
            tricks = trick_records.len(),
            shot_the_moon = moon,
            winner = hand_winner.as_deref().unwrap_or("-"),
            "hand scored"
        );

        Ok(HandReport {
            hand_number: hand,
            pass_direction,
            passes: passes
                .iter()
                .map(|p| PassRecord::from_pass(p, &self.players, &self.vocab))
                .collect(),
            first_player: self.players[first].name().to_string(),
            order_of_play,
            tricks: trick_records,
            shot_the_moon: moon,
            hand_winner,
            scores,
        })
    }

    /// Play hands until someone reaches the threshold.
    ///
    /// Seats the configured players in random order unless players were
    /// already added.
    pub fn start(&mut self) -> Result<GameReport, DomainError> {
        if self.players.is_empty() {
            let names = self.player_names.clone();
            self.add_players(names)?;
            self.shuffle_players();
        }
        let seating: Vec<String> = self.players.iter().map(|p| p.name().to_string()).collect();
        info!(players = ?seating, max_points = self.max_points, "game started");

        let mut hands = Vec::new();
        loop {
            hands.push(self.play_hand()?);
            if self.is_over() {
                break;
            }
        }

        let standings = get_players_sorted_by_total_points(&self.players)
            .into_iter()
            .enumerate()
            .map(|(i, p)| Standing {
                place: i + 1,
                player: p.name().to_string(),
                total_points: p.total_points(),
            })
            .collect();
        let winner = get_game_winner(&self.players)
            .map(|p| p.name().to_string())
            .ok_or(DomainError::NoPlayers)?;
        info!(winner = %winner, hands = hands.len(), "game over");

        Ok(GameReport {
            seating,
            max_points: self.max_points,
            hands,
            standings,
            winner,
        })
    }
}

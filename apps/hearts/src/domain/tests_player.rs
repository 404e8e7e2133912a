use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::player::{pair_mut, Player};
use crate::domain::test_gens::test_vocab;
use crate::domain::tricks::{ScoringRules, Trick};
use crate::domain::Card;
use crate::errors::domain::DomainError;

fn card(rank: &str, suit: &str) -> Card {
    test_vocab().card(rank, suit).unwrap()
}

fn starting_card() -> Card {
    card("Rank 1", "Suit A")
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn new_player_has_empty_hand() {
    let p = Player::new("Test Player 1");
    assert_eq!(p.name(), "Test Player 1");
    assert!(p.hand().is_empty());
    assert!(!p.has_cards());
    assert_eq!(p.total_points(), 0);
}

#[test]
fn receive_and_query_cards() {
    let vocab = test_vocab();
    let mut p = Player::new("Test Player 1");
    let c1 = card("Rank 1", "Suit C");
    let c2 = card("Rank 4", "Suit B");
    p.receive_card(c1);
    p.receive_cards([c2]);

    assert_eq!(p.hand(), &[c1, c2]);
    assert!(p.has_card(c1));
    assert!(p.has_all_cards_of(&[c1, c2]));
    assert!(!p.has_all_cards_of(&[c1, card("Rank 2", "Suit A")]));
    assert!(p.has_any_cards_of(&[card("Rank 2", "Suit A"), c2]));
    assert!(p.has_card_with(vocab.rank("Rank 4").unwrap(), vocab.suit("Suit B").unwrap()));
    assert!(!p.has_card_with(vocab.rank("Rank 3").unwrap(), vocab.suit("Suit B").unwrap()));
    assert!(p.has_card_with_suit(vocab.suit("Suit C").unwrap()));
    assert!(!p.has_card_with_suit(vocab.suit("Suit A").unwrap()));
}

#[test]
fn get_card_with_reports_missing_cards() {
    let vocab = test_vocab();
    let mut p = Player::new("Test Player 1");
    let c = card("Rank 4", "Suit B");
    p.receive_card(c);
    let rank = vocab.rank("Rank 4").unwrap();
    assert_eq!(p.get_card_with(rank, vocab.suit("Suit B").unwrap()), Ok(c));
    assert_eq!(
        p.get_card_with(rank, vocab.suit("Suit A").unwrap()),
        Err(DomainError::CardNotFound(card("Rank 4", "Suit A").into()))
    );
}

#[test]
fn passing_moves_exactly_three_cards() {
    let mut p1 = Player::new("Test Player 1");
    let mut p2 = Player::new("Test Player 2");
    let cards = [
        card("Rank 2", "Suit A"),
        card("Rank 1", "Suit B"),
        card("Rank 4", "Suit A"),
    ];
    p1.receive_cards(cards);

    let passed = p1.pass_three_cards_to(&mut p2, &mut rng()).unwrap();
    assert_eq!(passed.len(), 3);
    assert!(p2.has_all_cards_of(&cards));
    assert!(!p1.has_any_cards_of(&cards));
    assert!(!p1.has_cards());
}

#[test]
fn passing_needs_three_cards() {
    let mut p1 = Player::new("Test Player 1");
    let mut p2 = Player::new("Test Player 2");
    p1.receive_cards([card("Rank 2", "Suit A"), card("Rank 3", "Suit A")]);
    assert_eq!(
        p1.pass_three_cards_to(&mut p2, &mut rng()),
        Err(DomainError::InsufficientCards {
            needed: 3,
            available: 2
        })
    );
    assert_eq!(p1.hand().len(), 2);
    assert!(!p2.has_cards());
}

#[test]
fn never_shoots_the_moon() {
    assert!(!Player::should_shoot_the_moon());
}

#[test]
fn equality_and_hash_by_name() {
    let mut p1 = Player::new("Test Player 1");
    p1.receive_card(card("Rank 2", "Suit A"));
    let p2 = Player::new("Test Player 2");
    let p3 = Player::new("Test Player 1");
    assert_eq!(p1, p3);
    assert_ne!(p1, p2);

    let set: HashSet<Player> = [p1, p2, p3].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn points_are_kept_per_hand() {
    let mut p = Player::new("Test Player 1");
    p.add_points(5, 1);
    p.add_points(0, 2);
    p.add_points(26, 3);
    assert_eq!(p.points(1), Ok(5));
    assert_eq!(p.points(3), Ok(26));
    assert_eq!(p.points(4), Err(DomainError::NoSuchHand(4)));
    assert_eq!(p.total_points(), 31);
    assert_eq!(p.points_by_hand().len(), 3);
}

#[test]
fn opening_play_is_the_starting_card() {
    let mut p = Player::new("Test Player 1");
    p.receive_cards([
        card("Rank 2", "Suit C"),
        card("Rank 4", "Suit C"),
        card("Rank 3", "Suit A"),
        starting_card(),
    ]);
    let mut trick = Trick::new(1, starting_card(), 4, ScoringRules::default());

    let played = p.play(0, &mut trick, &mut rng()).unwrap();
    assert_eq!(played, starting_card());
    assert!(!p.has_card(starting_card()));
    assert_eq!(trick.plays(), &[(0, starting_card())]);
}

#[test]
fn opening_play_without_starting_card_fails() {
    let mut p = Player::new("Test Player 1");
    p.receive_cards([card("Rank 2", "Suit C")]);
    let mut trick = Trick::new(1, starting_card(), 4, ScoringRules::default());
    assert_eq!(
        p.play(0, &mut trick, &mut rng()),
        Err(DomainError::CardNotFound(starting_card().into()))
    );
    assert!(trick.is_empty());
}

#[test]
fn leading_a_later_trick_plays_any_held_card() {
    let mut p = Player::new("Test Player 1");
    let hand = [
        card("Rank 2", "Suit C"),
        card("Rank 4", "Suit C"),
        card("Rank 3", "Suit A"),
    ];
    p.receive_cards(hand);
    let mut trick = Trick::new(2, starting_card(), 4, ScoringRules::default());

    let played = p.play(1, &mut trick, &mut rng()).unwrap();
    assert!(hand.contains(&played));
    assert!(!p.has_card(played));
    assert_eq!(trick.len(), 1);
}

#[test]
fn follows_suit_when_able() {
    let mut trick = Trick::new(2, starting_card(), 4, ScoringRules::default());
    trick.add(0, card("Rank 1", "Suit B")).unwrap();

    for seed in 0..16 {
        let mut p = Player::new("Test Player 2");
        p.receive_cards([
            card("Rank 2", "Suit C"),
            card("Rank 4", "Suit B"),
            card("Rank 3", "Suit A"),
        ]);
        let mut t = trick.clone();
        let played = p
            .play(1, &mut t, &mut ChaCha8Rng::seed_from_u64(seed))
            .unwrap();
        assert_eq!(played, card("Rank 4", "Suit B"));
    }
}

#[test]
fn void_player_may_play_anything() {
    let mut trick = Trick::new(2, starting_card(), 4, ScoringRules::default());
    trick.add(0, card("Rank 1", "Suit B")).unwrap();
    let mut p = Player::new("Test Player 2");
    let hand = [card("Rank 2", "Suit C"), card("Rank 3", "Suit A")];
    p.receive_cards(hand);

    let played = p.play(1, &mut trick, &mut rng()).unwrap();
    assert!(hand.contains(&played));
}

#[test]
fn empty_hand_cannot_play() {
    let mut trick = Trick::new(2, starting_card(), 4, ScoringRules::default());
    let mut p = Player::new("Test Player 1");
    assert_eq!(
        p.play(0, &mut trick, &mut rng()),
        Err(DomainError::InsufficientCards {
            needed: 1,
            available: 0
        })
    );
}

#[test]
fn sort_cards_orders_by_suit_then_rank() {
    let mut p = Player::new("Test Player 1");
    let c1 = card("Rank 2", "Suit C");
    let c2 = card("Rank 4", "Suit C");
    let c3 = card("Rank 3", "Suit A");
    p.receive_cards([c1, c2, c3]);
    p.sort_cards();
    assert_eq!(p.hand(), &[c3, c1, c2]);
}

#[test]
fn pair_mut_rejects_same_or_missing_seats() {
    let mut players = vec![Player::new("a"), Player::new("b"), Player::new("c")];
    {
        let (x, y) = pair_mut(&mut players, 2, 0).unwrap();
        assert_eq!((x.name(), y.name()), ("c", "a"));
    }
    assert!(matches!(
        pair_mut(&mut players, 1, 1),
        Err(DomainError::UnknownPlayer(1))
    ));
    assert!(matches!(
        pair_mut(&mut players, 0, 3),
        Err(DomainError::UnknownPlayer(3))
    ));
}

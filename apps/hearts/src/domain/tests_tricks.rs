use crate::domain::test_gens::{standard_rules, std_card, test_vocab};
use crate::domain::tricks::{classify_play, PlayAction, ScoringRules, Trick};
use crate::domain::vocabulary::CardVocabulary;
use crate::domain::Card;
use crate::errors::domain::DomainError;

fn card(rank: &str, suit: &str) -> Card {
    test_vocab().card(rank, suit).unwrap()
}

fn test_rules() -> ScoringRules {
    ScoringRules {
        penalty_suit: Some(test_vocab().suit("Suit C").unwrap()),
        penalty_card: Some(card("Rank 3", "Suit B")),
    }
}

fn trick(number: u32) -> Trick {
    Trick::new(number, card("Rank 1", "Suit A"), 4, test_rules())
}

#[test]
fn new_trick_is_empty() {
    let t = trick(1);
    assert_eq!(t.number(), 1);
    assert!(t.is_empty());
    assert!(t.plays().is_empty());
    assert_eq!(t.suit_led(), None);
    assert_eq!(t.winning_card(), None);
    assert_eq!(t.winning_player(), None);
}

#[test]
fn first_only_for_trick_one() {
    assert!(trick(1).first());
    assert!(!trick(2).first());
}

#[test]
fn add_keeps_play_order_and_fixes_led_suit() {
    let mut t = trick(2);
    t.add(2, card("Rank 2", "Suit B")).unwrap();
    t.add(3, card("Rank 4", "Suit A")).unwrap();
    t.add(0, card("Rank 1", "Suit B")).unwrap();

    let plays: Vec<_> = t.plays().iter().map(|&(p, _)| p).collect();
    assert_eq!(plays, vec![2, 3, 0]);
    assert_eq!(t.suit_led(), Some(test_vocab().suit("Suit B").unwrap()));
    assert!(!t.is_empty());
    assert!(!t.is_complete());
}

#[test]
fn same_player_cannot_play_twice() {
    let mut t = trick(2);
    t.add(1, card("Rank 2", "Suit B")).unwrap();
    assert_eq!(
        t.add(1, card("Rank 3", "Suit B")),
        Err(DomainError::DuplicatePlay(1))
    );
}

#[test]
fn full_trick_rejects_more_cards() {
    let mut t = Trick::new(3, card("Rank 1", "Suit A"), 2, test_rules());
    t.add(0, card("Rank 2", "Suit B")).unwrap();
    t.add(1, card("Rank 3", "Suit B")).unwrap();
    assert!(t.is_complete());
    assert_eq!(
        t.add(0, card("Rank 4", "Suit B")),
        Err(DomainError::TrickComplete(3))
    );
}

#[test]
fn highest_card_of_led_suit_wins() {
    let mut t = trick(2);
    t.add(0, card("Rank 2", "Suit A")).unwrap();
    t.add(1, card("Rank 4", "Suit C")).unwrap();
    t.add(2, card("Rank 3", "Suit A")).unwrap();
    t.add(3, card("Rank 4", "Suit B")).unwrap();

    assert_eq!(t.winning_card(), Some(card("Rank 3", "Suit A")));
    assert_eq!(t.winning_player(), Some(2));
}

#[test]
fn trick_without_penalties_scores_zero() {
    let mut t = trick(2);
    t.add(0, card("Rank 2", "Suit A")).unwrap();
    t.add(1, card("Rank 1", "Suit B")).unwrap();
    t.add(2, card("Rank 3", "Suit A")).unwrap();
    t.add(3, card("Rank 4", "Suit B")).unwrap();
    assert_eq!(t.points(), 0);
    assert!(t.point_cards().is_empty());
}

#[test]
fn penalty_card_and_suit_points_add_up() {
    let mut t = trick(2);
    t.add(0, card("Rank 1", "Suit B")).unwrap();
    t.add(1, card("Rank 3", "Suit B")).unwrap();
    t.add(2, card("Rank 4", "Suit C")).unwrap();
    t.add(3, card("Rank 2", "Suit C")).unwrap();

    assert_eq!(t.points(), 13 + 1 + 1);
    // Suit descending, then rank ascending.
    assert_eq!(
        t.point_cards(),
        vec![
            card("Rank 2", "Suit C"),
            card("Rank 4", "Suit C"),
            card("Rank 3", "Suit B"),
        ]
    );
}

#[test]
fn standard_queen_of_spades_is_thirteen() {
    let vocab = CardVocabulary::standard();
    let mut t = Trick::new(5, std_card("2", "clubs"), 4, standard_rules(&vocab));
    t.add(0, std_card("K", "spades")).unwrap();
    t.add(1, std_card("Q", "spades")).unwrap();
    t.add(2, std_card("A", "hearts")).unwrap();
    t.add(3, std_card("3", "spades")).unwrap();

    assert_eq!(t.points(), 14);
    assert_eq!(t.winning_player(), Some(0));
}

#[test]
fn actions_follow_precedence() {
    let mut t = trick(2);
    t.add(0, card("Rank 2", "Suit A")).unwrap();
    t.add(1, card("Rank 3", "Suit B")).unwrap();
    t.add(2, card("Rank 1", "Suit C")).unwrap();
    t.add(3, card("Rank 4", "Suit A")).unwrap();

    assert_eq!(t.action_for(card("Rank 2", "Suit A")), Some(PlayAction::Led));
    assert_eq!(
        t.action_for(card("Rank 3", "Suit B")),
        Some(PlayAction::DroppedPenaltyCard)
    );
    assert_eq!(t.action_for(card("Rank 1", "Suit C")), Some(PlayAction::Painted));
    assert_eq!(t.action_for(card("Rank 4", "Suit A")), Some(PlayAction::Followed));
    assert_eq!(t.action_for(card("Rank 1", "Suit B")), None);
}

#[test]
fn leading_the_penalty_card_and_sloughing() {
    let rules = test_rules();
    let penalty = card("Rank 3", "Suit B");
    let suit_b = Some(penalty.suit());

    assert_eq!(
        classify_play(0, penalty, suit_b, &rules),
        PlayAction::LedPenaltyCard
    );
    assert_eq!(
        classify_play(2, card("Rank 4", "Suit A"), suit_b, &rules),
        PlayAction::Sloughed
    );
}

#[test]
fn action_words() {
    assert_eq!(PlayAction::Led.as_str(), "led");
    assert_eq!(PlayAction::LedPenaltyCard.as_str(), "led the penalty card");
    assert_eq!(PlayAction::DroppedPenaltyCard.as_str(), "dropped the penalty card");
    assert_eq!(PlayAction::Sloughed.as_str(), "sloughed");
    assert_eq!(PlayAction::Painted.as_str(), "painted");
    assert_eq!(PlayAction::Followed.as_str(), "followed");
}

use crate::domain::player::Player;
use crate::domain::rules::MOON_POINTS;
use crate::domain::scoring::{
    get_game_winner, get_hand_winner, get_players_sorted_by_total_points, get_point_cards_for,
    get_points_for, raw_points, shot_the_moon, sort_player_cards, TricksByPlayer,
};
use crate::domain::test_gens::{standard_rules, std_card};
use crate::domain::tricks::Trick;
use crate::domain::vocabulary::CardVocabulary;
use crate::domain::Card;
use crate::errors::domain::DomainError;

fn standard_trick(number: u32, plays: [(usize, &str, &str); 4]) -> Trick {
    let vocab = CardVocabulary::standard();
    let mut t = Trick::new(number, std_card("2", "clubs"), 4, standard_rules(&vocab));
    for (seat, rank, suit) in plays {
        t.add(seat, std_card(rank, suit)).unwrap();
    }
    t
}

/// Every heart plus the queen of spades, in four-card tricks.
fn all_penalty_tricks() -> Vec<Trick> {
    let ranks = ["2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "K", "A"];
    let mut tricks: Vec<Trick> = ranks
        .chunks(4)
        .enumerate()
        .map(|(i, chunk)| {
            standard_trick(
                i as u32 + 2,
                [
                    (0, chunk[0], "hearts"),
                    (1, chunk[1], "hearts"),
                    (2, chunk[2], "hearts"),
                    (3, chunk[3], "hearts"),
                ],
            )
        })
        .collect();
    tricks.push(standard_trick(
        5,
        [
            (0, "Q", "hearts"),
            (1, "Q", "spades"),
            (2, "2", "diamonds"),
            (3, "3", "diamonds"),
        ],
    ));
    tricks
}

fn named_players(points: &[(&str, u32)], hand: u32) -> Vec<Player> {
    points
        .iter()
        .map(|&(name, pts)| {
            let mut p = Player::new(name);
            p.add_points(pts, hand);
            p
        })
        .collect()
}

#[test]
fn all_penalties_total_twenty_six() {
    assert_eq!(raw_points(&all_penalty_tricks()), MOON_POINTS);
}

#[test]
fn points_without_moon_are_raw() {
    let t = standard_trick(
        2,
        [
            (0, "K", "spades"),
            (1, "Q", "spades"),
            (2, "A", "hearts"),
            (3, "3", "spades"),
        ],
    );
    assert_eq!(get_points_for(std::slice::from_ref(&t), false), 14);
    assert_eq!(get_points_for(&[], false), 0);
}

#[test]
fn moon_flips_points() {
    let all = all_penalty_tricks();
    assert_eq!(get_points_for(&all, true), 0);
    assert_eq!(get_points_for(&[], true), MOON_POINTS);
}

#[test]
fn shot_the_moon_needs_one_player_with_everything() {
    let mut by_player = TricksByPlayer::new();
    by_player.insert(2, all_penalty_tricks());
    by_player.insert(0, vec![]);
    assert!(shot_the_moon(&by_player));

    let mut split = all_penalty_tricks();
    let last = split.pop().unwrap();
    let mut by_player = TricksByPlayer::new();
    by_player.insert(1, split);
    by_player.insert(3, vec![last]);
    assert!(!shot_the_moon(&by_player));
}

#[test]
fn moon_hand_scores_shooter_zero_and_others_twenty_six() {
    let mut by_player = TricksByPlayer::new();
    by_player.insert(1, all_penalty_tricks());
    let moon = shot_the_moon(&by_player);

    let mut players = vec![
        Player::new("Bob"),
        Player::new("Alice"),
        Player::new("John"),
        Player::new("Sandy"),
    ];
    for (seat, p) in players.iter_mut().enumerate() {
        let tricks = by_player.get(&seat).map(Vec::as_slice).unwrap_or(&[]);
        p.add_points(get_points_for(tricks, moon), 1);
    }

    let points: Vec<u32> = players.iter().map(|p| p.points(1).unwrap()).collect();
    assert_eq!(points, vec![26, 0, 26, 26]);
    let winner = get_hand_winner(&players, 1, moon).unwrap().unwrap();
    assert_eq!(winner.name(), "Alice");
}

#[test]
fn hand_winner_is_first_lowest() {
    let players = named_players(&[("a", 5), ("b", 0), ("c", 0), ("d", 21)], 1);
    let winner = get_hand_winner(&players, 1, false).unwrap().unwrap();
    assert_eq!(winner.name(), "b");
}

#[test]
fn hand_winner_needs_recorded_points() {
    let players = named_players(&[("a", 5), ("b", 0)], 1);
    assert!(matches!(
        get_hand_winner(&players, 2, false),
        Err(DomainError::NoSuchHand(2))
    ));
    assert_eq!(get_hand_winner(&[], 1, false), Ok(None));
}

#[test]
fn game_winner_and_standings() {
    let mut players = named_players(&[("a", 40), ("b", 12), ("c", 101), ("d", 12)], 1);
    players[0].add_points(0, 2);

    assert_eq!(get_game_winner(&players).unwrap().name(), "b");
    let order: Vec<&str> = get_players_sorted_by_total_points(&players)
        .into_iter()
        .map(Player::name)
        .collect();
    assert_eq!(order, vec!["b", "d", "a", "c"]);
    assert!(get_game_winner(&[]).is_none());
}

#[test]
fn point_cards_are_suit_then_rank_ascending() {
    let t1 = standard_trick(
        2,
        [
            (0, "K", "hearts"),
            (1, "Q", "spades"),
            (2, "2", "hearts"),
            (3, "3", "clubs"),
        ],
    );
    let cards: Vec<Card> = get_point_cards_for(&[t1]);
    assert_eq!(
        cards,
        vec![
            std_card("Q", "spades"),
            std_card("2", "hearts"),
            std_card("K", "hearts"),
        ]
    );
}

#[test]
fn sort_player_cards_sorts_every_hand() {
    let mut p1 = Player::new("a");
    let mut p2 = Player::new("b");
    p1.receive_cards([std_card("A", "hearts"), std_card("2", "clubs")]);
    p2.receive_cards([std_card("5", "spades"), std_card("4", "spades")]);
    let mut players = vec![p1, p2];
    sort_player_cards(&mut players);
    assert_eq!(
        players[0].hand(),
        &[std_card("2", "clubs"), std_card("A", "hearts")]
    );
    assert_eq!(
        players[1].hand(),
        &[std_card("4", "spades"), std_card("5", "spades")]
    );
}

use klondike_core::{fits_on_foundation, fits_on_tableau, is_movable_run, Card, Rank, Suit};

fn up(suit: Suit, rank: Rank) -> Card {
    Card {
        suit,
        rank,
        face_up: true,
    }
}

fn down(suit: Suit, rank: Rank) -> Card {
    Card::face_down(suit, rank)
}

macro_rules! tableau_case {
    ($name:ident, $dest:expr, $card:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(fits_on_tableau($dest, &$card), $expected);
        }
    };
}

tableau_case!(king_on_empty_column, None, up(Suit::Spades, Rank::King), true);
tableau_case!(queen_on_empty_column, None, up(Suit::Hearts, Rank::Queen), false);
tableau_case!(ace_on_empty_column, None, up(Suit::Clubs, Rank::Ace), false);
tableau_case!(
    black_five_on_red_six,
    Some(&up(Suit::Hearts, Rank::Six)),
    up(Suit::Spades, Rank::Five),
    true
);
tableau_case!(
    red_five_on_red_six,
    Some(&up(Suit::Hearts, Rank::Six)),
    up(Suit::Diamonds, Rank::Five),
    false
);
tableau_case!(
    black_five_on_black_six,
    Some(&up(Suit::Clubs, Rank::Six)),
    up(Suit::Spades, Rank::Five),
    false
);
tableau_case!(
    red_four_on_red_six,
    Some(&up(Suit::Hearts, Rank::Six)),
    up(Suit::Diamonds, Rank::Four),
    false
);
tableau_case!(
    black_six_on_red_six,
    Some(&up(Suit::Hearts, Rank::Six)),
    up(Suit::Spades, Rank::Six),
    false
);
tableau_case!(
    red_queen_on_black_king,
    Some(&up(Suit::Spades, Rank::King)),
    up(Suit::Hearts, Rank::Queen),
    true
);
tableau_case!(
    nothing_lands_on_face_down_top,
    Some(&down(Suit::Hearts, Rank::Six)),
    up(Suit::Spades, Rank::Five),
    false
);

macro_rules! foundation_case {
    ($name:ident, $suit:expr, $dest:expr, $card:expr, $expected:expr) => {
        #[test]
        fn $name() {
            assert_eq!(fits_on_foundation($suit, $dest, &$card), $expected);
        }
    };
}

foundation_case!(
    ace_on_empty_matching_foundation,
    Suit::Hearts,
    None,
    up(Suit::Hearts, Rank::Ace),
    true
);
foundation_case!(
    ace_on_empty_wrong_suit_foundation,
    Suit::Spades,
    None,
    up(Suit::Hearts, Rank::Ace),
    false
);
foundation_case!(
    two_on_empty_foundation,
    Suit::Hearts,
    None,
    up(Suit::Hearts, Rank::Two),
    false
);
foundation_case!(
    two_on_ace_same_suit,
    Suit::Hearts,
    Some(&up(Suit::Hearts, Rank::Ace)),
    up(Suit::Hearts, Rank::Two),
    true
);
foundation_case!(
    three_on_ace_same_suit,
    Suit::Hearts,
    Some(&up(Suit::Hearts, Rank::Ace)),
    up(Suit::Hearts, Rank::Three),
    false
);
foundation_case!(
    king_on_queen_same_suit,
    Suit::Diamonds,
    Some(&up(Suit::Diamonds, Rank::Queen)),
    up(Suit::Diamonds, Rank::King),
    true
);

#[test]
fn single_face_up_card_is_a_run() {
    assert!(is_movable_run(&[up(Suit::Hearts, Rank::Nine)]));
}

#[test]
fn empty_slice_is_not_a_run() {
    assert!(!is_movable_run(&[]));
}

#[test]
fn descending_alternating_run_is_movable() {
    let run = [
        up(Suit::Spades, Rank::Nine),
        up(Suit::Hearts, Rank::Eight),
        up(Suit::Clubs, Rank::Seven),
    ];
    assert!(is_movable_run(&run));
}

#[test]
fn run_with_face_down_card_is_not_movable() {
    let run = [
        down(Suit::Spades, Rank::Nine),
        up(Suit::Hearts, Rank::Eight),
    ];
    assert!(!is_movable_run(&run));
}

#[test]
fn run_with_same_color_step_is_not_movable() {
    let run = [
        up(Suit::Spades, Rank::Nine),
        up(Suit::Clubs, Rank::Eight),
    ];
    assert!(!is_movable_run(&run));
}

#[test]
fn run_with_rank_gap_is_not_movable() {
    let run = [
        up(Suit::Spades, Rank::Nine),
        up(Suit::Hearts, Rank::Seven),
    ];
    assert!(!is_movable_run(&run));
}

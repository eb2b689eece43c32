use thirteen_rs::cards::{parse_cards, Card, Rank, Suit};
use thirteen_rs::evaluator::{evaluate_five, evaluate_three, Category, HandScore};

fn five(s: &str) -> HandScore {
    let cards: [Card; 5] = parse_cards(s).unwrap().try_into().unwrap();
    evaluate_five(&cards)
}

fn three(s: &str) -> HandScore {
    let cards: [Card; 3] = parse_cards(s).unwrap().try_into().unwrap();
    evaluate_three(&cards)
}

#[test]
fn category_straight_flush() {
    let sf = [
        Card::new(Rank::Ten, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Hearts),
        Card::new(Rank::Queen, Suit::Hearts),
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Hearts),
    ];
    let e = evaluate_five(&sf);
    assert!(matches!(e.category, Category::StraightFlush));
    assert_eq!(e.tiebreak(), &[Rank::Ace]);
}

#[test]
fn category_steel_wheel() {
    let e = five("AD 2D 3D 4D 5D");
    assert_eq!(e.category, Category::StraightFlush);
    assert_eq!(e.tiebreak(), &[Rank::Five]);
    assert!(e < five("2D 3D 4D 5D 6D"));
}

#[test]
fn category_four_of_a_kind() {
    let e = five("9C 9D 9H 9S AC");
    assert!(matches!(e.category, Category::FourOfAKind));
    assert_eq!(e.tiebreak(), &[Rank::Nine, Rank::Ace]);
    assert!(e > five("9C 9D 9H 9S KC"));
}

#[test]
fn category_full_house() {
    let e = five("AH AD AC KH KS");
    assert!(matches!(e.category, Category::FullHouse));
    assert_eq!(e.primary(), Rank::Ace);
    assert_eq!(e.tiebreak(), &[Rank::Ace, Rank::King]);

    // Trips rank decides before the pair
    assert!(five("3C 3D 3H AS AC") > five("2C 2D 2H KS KC"));
    assert!(five("3C 3D 3H AS AC") < five("4C 4D 4H 2S 2C"));
}

#[test]
fn category_flush() {
    let e = five("KH TH 8H 6H 3H");
    assert!(matches!(e.category, Category::Flush));
    assert_eq!(e.tiebreak(), &[Rank::King, Rank::Ten, Rank::Eight, Rank::Six, Rank::Three]);
    // Last kicker
    assert!(e > five("KS TS 8S 6S 2S"));
}

#[test]
fn category_straight() {
    let e = five("6C 7D 8H 9S TC");
    assert!(matches!(e.category, Category::Straight));
    assert_eq!(e.tiebreak(), &[Rank::Ten]);
}

#[test]
fn wheel_is_a_five_high_straight() {
    let e = five("2H 3D 4S 5C AH");
    assert_eq!(e.category, Category::Straight);
    assert_eq!(e.tiebreak(), &[Rank::Five]);
    assert_eq!(e.tiebreak_ordinals(), vec![3]);
    assert!(e < five("2H 3D 4S 5C 6H"));
}

#[test]
fn ace_does_not_wrap_around() {
    let e = five("QH KD AS 2C 3H");
    assert_eq!(e.category, Category::HighCard);
}

#[test]
fn category_three_of_a_kind() {
    let e = five("7C 7D 7H KS 2C");
    assert!(matches!(e.category, Category::ThreeOfAKind));
    assert_eq!(e.tiebreak(), &[Rank::Seven, Rank::King, Rank::Two]);
}

#[test]
fn category_two_pair() {
    let e = five("KC KD 9H 9S 4C");
    assert!(matches!(e.category, Category::TwoPair));
    assert_eq!(e.tiebreak(), &[Rank::King, Rank::Nine, Rank::Four]);
    assert!(e > five("KS KH 9C 9D 3C"));
    assert!(e < five("KS KH TC TD 2C"));
}

#[test]
fn category_pair() {
    let e = five("AS AH KC 7D 5S");
    assert!(matches!(e.category, Category::Pair));
    assert_eq!(e.tiebreak(), &[Rank::Ace, Rank::King, Rank::Seven, Rank::Five]);
    assert!(e > five("AC AD QH 7S 5H"));
}

#[test]
fn category_high_card() {
    let e = five("AH KD 7S 5C 2D");
    assert!(matches!(e.category, Category::HighCard));
    assert_eq!(e.tiebreak().len(), 5);
    assert_eq!(e.primary(), Rank::Ace);
}

#[test]
fn four_suited_cards_are_not_a_flush() {
    let e = five("2H 5H 9H JH KS");
    assert_eq!(e.category, Category::HighCard);
}

#[test]
fn top_hand_categories() {
    let trips = three("QC QD QH");
    assert_eq!(trips.category, Category::ThreeOfAKind);
    assert_eq!(trips.tiebreak(), &[Rank::Queen]);

    let pair = three("AH AD 3C");
    assert_eq!(pair.category, Category::Pair);
    assert_eq!(pair.tiebreak_ordinals(), vec![12, 1]);

    let high = three("JS 9H 2D");
    assert_eq!(high.category, Category::HighCard);
    assert_eq!(high.tiebreak(), &[Rank::Jack, Rank::Nine, Rank::Two]);
}

#[test]
fn top_hand_ignores_straights_and_flushes() {
    assert_eq!(three("2H 3H 4H").category, Category::HighCard);
    assert_eq!(three("QS KD AC").category, Category::HighCard);
}

#[test]
fn three_and_five_card_scores_share_one_scale() {
    // Top trips sit above any two pair and below any straight
    assert!(three("2C 2D 2H") > five("AS AH KC KD QS"));
    assert!(three("AC AD AH") < five("2S 3H 4C 5D 6S"));
    // Same pair, top kicker vs middle's best kicker
    assert!(three("QC QD AH") > five("QS QH KC JD 9S"));
    assert!(three("QC QD 3H") < five("QS QH KC JD 9S"));
}

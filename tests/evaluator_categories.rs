use pot_odds::cards::{parse_cards, Card, Rank};
use pot_odds::evaluator::{evaluate, evaluate_five, Category, HandValue};

fn five(s: &str) -> [Card; 5] {
    let v = parse_cards(s).unwrap();
    [v[0], v[1], v[2], v[3], v[4]]
}

fn category_of(s: &str) -> Option<Category> {
    evaluate(&parse_cards(s).unwrap()).category()
}

#[test]
fn every_category_is_detected() {
    assert_eq!(category_of("As Ks Qs Js Ts"), Some(Category::StraightFlush));
    assert_eq!(category_of("9c 9d 9h 9s Ac"), Some(Category::FourOfAKind));
    assert_eq!(category_of("3c 3d 3h Js Jc"), Some(Category::FullHouse));
    assert_eq!(category_of("Kh Th 8h 6h 3h"), Some(Category::Flush));
    assert_eq!(category_of("Ac 5c 4d 3h 2s"), Some(Category::Straight));
    assert_eq!(category_of("7c 7d 7h Ks 2c"), Some(Category::ThreeOfAKind));
    assert_eq!(category_of("Qc Qd 4h 4s 9c"), Some(Category::TwoPair));
    assert_eq!(category_of("Tc Td 8h 4s 2c"), Some(Category::Pair));
    assert_eq!(category_of("Ac Jd 8h 4s 2c"), Some(Category::HighCard));
}

#[test]
fn category_precedence() {
    let order = [
        "Ac Jd 8h 4s 2c",
        "Tc Td 8h 4s 2c",
        "Qc Qd 4h 4s 9c",
        "7c 7d 7h Ks 2c",
        "Ac 5c 4d 3h 2s",
        "Kh Th 8h 6h 3h",
        "3c 3d 3h Js Jc",
        "9c 9d 9h 9s Ac",
        "5s 4s 3s 2s As",
    ];
    let values: Vec<HandValue> = order.iter().map(|s| evaluate_five(&five(s)).value()).collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
}

#[test]
fn two_pair_tiebreaks_on_higher_pair_first() {
    // A/K beats K/Q even though both carry a deuce kicker
    let ak = evaluate(&parse_cards("As Ah Ks Kh 2d").unwrap());
    let kq = evaluate(&parse_cards("Ks Kh Qs Qh 2d").unwrap());
    assert_eq!(ak.category(), Some(Category::TwoPair));
    assert!(ak > kq);
}

#[test]
fn two_pair_with_same_top_pair_compares_second_pair() {
    let aces_kings = evaluate(&parse_cards("As Ah Ks Kh 2c").unwrap());
    let aces_queens = evaluate(&parse_cards("As Ah Qs Qh 2c").unwrap());
    assert!(aces_kings > aces_queens);
}

#[test]
fn one_pair_compares_kickers_in_order() {
    let king_kicker = evaluate(&parse_cards("Ah Ad Ks 9c 2d").unwrap());
    let queen_kicker = evaluate(&parse_cards("Ah Ad Qs 9c 2d").unwrap());
    assert_eq!(king_kicker.category(), Some(Category::Pair));
    assert!(king_kicker > queen_kicker);
    let last_kicker = evaluate(&parse_cards("Ah Ad Ks 9c 3d").unwrap());
    assert!(last_kicker > king_kicker);
}

#[test]
fn two_pair_kicker_breaks_tie() {
    let hi = evaluate(&parse_cards("8s 8h 5s 5h Kd").unwrap());
    let lo = evaluate(&parse_cards("8c 8d 5c 5d Qd").unwrap());
    assert!(hi > lo);
}

#[test]
fn wheel_ranks_below_six_high_straight() {
    let wheel = evaluate(&parse_cards("As 2d 3c 4h 5s").unwrap());
    let six_high = evaluate(&parse_cards("2d 3c 4h 5s 6c").unwrap());
    assert_eq!(wheel.category(), Some(Category::Straight));
    assert!(six_high > wheel);
    assert_eq!(wheel, HandValue::from_parts(Category::Straight, &[Rank::Five]));
}

#[test]
fn seven_cards_use_best_five() {
    let trips = evaluate(&parse_cards("Js Jh 2s 7h 9d Jc").unwrap());
    assert_eq!(trips.category(), Some(Category::ThreeOfAKind));
    assert_eq!(trips, HandValue::from_parts(
        Category::ThreeOfAKind,
        &[Rank::Jack, Rank::Nine, Rank::Seven],
    ));
}

#[test]
fn equal_hands_in_different_suits_chop() {
    let a = evaluate(&parse_cards("Ah Kh 9c 7d 2s").unwrap());
    let b = evaluate(&parse_cards("Ad Kd 9s 7h 2c").unwrap());
    assert_eq!(a, b);
}

#[test]
fn fewer_than_five_cards_score_minimum() {
    assert_eq!(evaluate(&[]), HandValue::MIN);
    assert_eq!(evaluate(&parse_cards("As Ah Ad Ac").unwrap()), HandValue::MIN);
    assert!(evaluate(&parse_cards("7c 5d 4h 3s 2c").unwrap()) > HandValue::MIN);
    assert_eq!(HandValue::MIN.describe(), "No Hand");
}

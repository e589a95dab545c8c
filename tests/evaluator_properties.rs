use pot_odds::cards::{Card, Rank, Suit};
use pot_odds::deck::Deck;
use pot_odds::evaluator::{evaluate, evaluate_five, Category, HandValue};
use proptest::prelude::*;
use std::cmp::Ordering;

fn rank_from_val(v: u8) -> Rank {
    Rank::from_value(v).unwrap_or(Rank::Ace)
}

fn any_card() -> impl Strategy<Value = Card> {
    (0usize..52).prop_map(|i| Deck::standard().as_slice()[i])
}

/// `n` distinct cards from a shuffled deck.
fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    any::<u64>().prop_map(move |seed| {
        let mut deck = Deck::standard();
        deck.shuffle_seeded(seed);
        deck.as_slice()[..n].to_vec()
    })
}

fn straight_cards(top: u8) -> [Card; 5] {
    let ranks = if top == 5 {
        [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
    } else {
        [
            rank_from_val(top - 4),
            rank_from_val(top - 3),
            rank_from_val(top - 2),
            rank_from_val(top - 1),
            rank_from_val(top),
        ]
    };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    [
        Card::new(ranks[0], suits[0]),
        Card::new(ranks[1], suits[1]),
        Card::new(ranks[2], suits[2]),
        Card::new(ranks[3], suits[3]),
        Card::new(ranks[4], suits[4]),
    ]
}

fn ranks_desc(ranks: &[Rank]) -> Vec<Rank> {
    let mut out = ranks.to_vec();
    out.sort_by(|a, b| b.cmp(a));
    out
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let mut vals: Vec<u8> = set.iter().copied().collect();
            vals.sort_unstable();
            let is_wheel = vals == vec![2, 3, 4, 5, 14];
            let is_straight = vals.windows(2).all(|w| w[1] == w[0] + 1);
            !(is_straight || is_wheel)
        })
        .prop_map(|set| set.into_iter().map(rank_from_val).collect())
}

proptest! {
    #[test]
    fn five_card_ordering_is_antisymmetric_and_transitive(
        a in distinct_cards(5),
        b in distinct_cards(5),
        c in distinct_cards(5),
    ) {
        let ea = evaluate(&a);
        let eb = evaluate(&b);
        let ec = evaluate(&c);

        if ea >= eb && eb >= ea { prop_assert_eq!(ea, eb); }
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn seven_card_best_is_at_least_as_good_as_any_five(cards in distinct_cards(7)) {
        let best7 = evaluate(&cards);
        for i in 0..3 {
            for j in (i + 1)..4 {
                for k in (j + 1)..5 {
                    for l in (k + 1)..6 {
                        for m in (l + 1)..7 {
                            let five = [cards[i], cards[j], cards[k], cards[l], cards[m]];
                            prop_assert!(best7 >= evaluate_five(&five).value());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn evaluation_ignores_input_order(cards in distinct_cards(7), rot in 0usize..7) {
        let mut shuffled = cards.clone();
        shuffled.rotate_left(rot);
        shuffled.reverse();
        prop_assert_eq!(evaluate(&cards), evaluate(&shuffled));
    }

    #[test]
    fn short_inputs_score_minimum(cards in prop::collection::vec(any_card(), 0..5)) {
        prop_assert_eq!(evaluate(&cards), HandValue::MIN);
    }

    #[test]
    fn category_stays_inside_its_block(cards in distinct_cards(6)) {
        let v = evaluate(&cards);
        let cat = v.category().expect("six cards always score");
        let base = cat.ordinal() as u32 * HandValue::CATEGORY_BASE;
        prop_assert!(v.raw() >= base);
        prop_assert!(v.raw() < base + HandValue::CATEGORY_BASE);
    }

    #[test]
    fn straight_ordering_respects_top_card(top_hi in 6u8..=14u8, top_lo in 5u8..=13u8) {
        prop_assume!(top_hi > top_lo);
        let e_hi = evaluate_five(&straight_cards(top_hi));
        let e_lo = evaluate_five(&straight_cards(top_lo));
        prop_assert!(matches!(e_hi.category, Category::Straight));
        prop_assert!(matches!(e_lo.category, Category::Straight));
        prop_assert!(e_hi > e_lo);
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let suit = Suit::Hearts;
        let hand_a = [
            Card::new(a[0], suit),
            Card::new(a[1], suit),
            Card::new(a[2], suit),
            Card::new(a[3], suit),
            Card::new(a[4], suit),
        ];
        let hand_b = [
            Card::new(b[0], Suit::Spades),
            Card::new(b[1], Suit::Spades),
            Card::new(b[2], Suit::Spades),
            Card::new(b[3], Suit::Spades),
            Card::new(b[4], Suit::Spades),
        ];
        let e_a = evaluate_five(&hand_a);
        let e_b = evaluate_five(&hand_b);
        prop_assert!(matches!(e_a.category, Category::Flush));
        prop_assert!(matches!(e_b.category, Category::Flush));

        match ranks_desc(&a).cmp(&ranks_desc(&b)) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }
}

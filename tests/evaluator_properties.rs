use poker_hands::cards::{Card, Rank, Suit};
use poker_hands::evaluator::{classify, Category, ClassifiedHand};
use poker_hands::hand::Hand;
use proptest::prelude::*;
use proptest::sample::subsequence;
use std::cmp::Ordering;

fn rank_from_val(v: u8) -> Rank {
    Rank::from_value(v).expect("rank value in 2..=14")
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Clubs), Just(Suit::Diamonds), Just(Suit::Hearts), Just(Suit::Spades),]
}

fn deck() -> Vec<Card> {
    Suit::ALL.iter().flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s))).collect()
}

/// Five distinct cards from a standard deck.
fn any_hand() -> impl Strategy<Value = Hand> {
    subsequence(deck(), 5)
        .prop_shuffle()
        .prop_map(|cards| Hand::try_new(&cards).expect("five cards"))
}

fn eval(hand: &Hand) -> ClassifiedHand {
    classify(hand).expect("distinct cards always classify")
}

fn straight_cards(top: u8, suits: [Suit; 5]) -> Hand {
    let cards: Vec<Card> =
        (0..5).map(|i| Card::new(rank_from_val(top - 4 + i as u8), suits[i])).collect();
    Hand::try_new(&cards).expect("five cards")
}

fn ranks_desc(ranks: &[Rank]) -> Vec<Rank> {
    let mut out = ranks.to_vec();
    out.sort_by(|a, b| b.cmp(a));
    out
}

fn flush_rank_set() -> impl Strategy<Value = Vec<Rank>> {
    prop::collection::btree_set(2u8..=14u8, 5)
        .prop_filter("non-straight ranks", |set| {
            let vals: Vec<u8> = set.iter().copied().collect();
            vals[4] - vals[0] != 4
        })
        .prop_map(|set| set.into_iter().map(rank_from_val).collect())
}

proptest! {
    #[test]
    fn every_distinct_hand_classifies(hand in any_hand()) {
        prop_assert!(classify(&hand).is_ok());
    }

    #[test]
    fn classification_is_idempotent(hand in any_hand()) {
        let a = eval(&hand);
        let b = eval(&hand);
        prop_assert_eq!(a.category, b.category);
        prop_assert_eq!(a.weight(), b.weight());
    }

    #[test]
    fn card_order_does_not_matter(hand in any_hand()) {
        let mut reversed = *hand.cards();
        reversed.reverse();
        let a = eval(&hand);
        let b = eval(&Hand::new(reversed));
        prop_assert_eq!(a.category, b.category);
        prop_assert_eq!(a.weight(), b.weight());
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive(a in any_hand(), b in any_hand(), c in any_hand()) {
        let ea = eval(&a);
        let eb = eval(&b);
        let ec = eval(&c);

        prop_assert_eq!(ea.compare(&eb), eb.compare(&ea).reverse());
        if ea >= eb && eb >= ec { prop_assert!(ea >= ec); }
    }

    #[test]
    fn different_categories_never_look_at_weight(a in any_hand(), b in any_hand()) {
        let ea = eval(&a);
        let eb = eval(&b);
        if ea.category != eb.category {
            prop_assert_eq!(ea.compare(&eb), ea.category.cmp(&eb.category));
        }
    }

    #[test]
    fn straight_ordering_respects_top_card(
        top_hi in 7u8..=13u8,
        top_lo in 6u8..=12u8,
        suit in any_suit(),
    ) {
        prop_assume!(top_hi > top_lo);
        let mixed = [suit, Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];
        let hi = eval(&straight_cards(top_hi, mixed));
        let lo = eval(&straight_cards(top_lo, mixed));
        prop_assert_eq!(hi.category, Category::Straight);
        prop_assert_eq!(lo.category, Category::Straight);
        prop_assert!(hi > lo);
    }

    #[test]
    fn suited_runs_are_straight_flushes_below_ace(top in 6u8..=13u8, suit in any_suit()) {
        let e = eval(&straight_cards(top, [suit; 5]));
        prop_assert_eq!(e.category, Category::StraightFlush);
        prop_assert_eq!(e.weight(), u64::from(top));
    }

    #[test]
    fn flush_kicker_ordering(a in flush_rank_set(), b in flush_rank_set()) {
        let suit = Suit::Hearts;
        let hand_a = Hand::new(std::array::from_fn(|i| Card::new(a[i], suit)));
        let hand_b = Hand::new(std::array::from_fn(|i| Card::new(b[i], suit)));
        let e_a = eval(&hand_a);
        let e_b = eval(&hand_b);
        prop_assert_eq!(e_a.category, Category::Flush);
        prop_assert_eq!(e_b.category, Category::Flush);

        match ranks_desc(&a).cmp(&ranks_desc(&b)) {
            Ordering::Greater => prop_assert!(e_a > e_b),
            Ordering::Less => prop_assert!(e_a < e_b),
            Ordering::Equal => prop_assert_eq!(e_a, e_b),
        }
    }
}

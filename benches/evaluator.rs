use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use holdem_sim::cards::{Card, Rank, Suit};
use holdem_sim::evaluator::evaluate_five;
use holdem_sim::hand::HoleCards;
use holdem_sim::selector::best_hand;

fn bench_evaluate_five(c: &mut Criterion) {
    let hi = [
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Five, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
    ];
    let sf = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::King, Suit::Spades),
        Card::new(Rank::Queen, Suit::Spades),
        Card::new(Rank::Jack, Suit::Spades),
        Card::new(Rank::Ten, Suit::Spades),
    ];

    let mut g = c.benchmark_group("evaluate_five");
    g.bench_with_input(BenchmarkId::new("high_card", "A,K,7,5,2"), &hi, |b, input| {
        b.iter(|| evaluate_five(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("straight_flush", "royal"), &sf, |b, input| {
        b.iter(|| evaluate_five(black_box(input)))
    });
    g.finish();
}

fn bench_best_hand(c: &mut Criterion) {
    let hole = HoleCards::try_new(
        Card::new(Rank::King, Suit::Diamonds),
        Card::new(Rank::Queen, Suit::Diamonds),
    )
    .unwrap();
    let community = [
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::Seven, Suit::Spades),
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Jack, Suit::Diamonds),
        Card::new(Rank::Ten, Suit::Diamonds),
    ];
    c.bench_function("best_hand_river", |b| {
        b.iter(|| best_hand(black_box(&hole), black_box(&community)))
    });
}

criterion_group!(benches, bench_evaluate_five, bench_best_hand);
criterion_main!(benches);

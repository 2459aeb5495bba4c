use criterion::{black_box, criterion_group, criterion_main, Criterion};

use twenty_one::{hand_value, simulate, Card, GameConfig, Rank, StandOn, Suit};

fn bench_hand_value(c: &mut Criterion) {
    let cards = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Four, Suit::Clubs),
        Card::new(Rank::Two, Suit::Diamonds),
        Card::new(Rank::Three, Suit::Spades),
    ];

    c.bench_function("hand_value_five_cards", |b| {
        b.iter(|| hand_value(black_box(&cards)))
    });
}

fn bench_simulate(c: &mut Criterion) {
    c.bench_function("simulate_100_rounds", |b| {
        b.iter(|| simulate(GameConfig::new(), &StandOn::new(17), black_box(100), 42))
    });
}

criterion_group!(benches, bench_hand_value, bench_simulate);
criterion_main!(benches);

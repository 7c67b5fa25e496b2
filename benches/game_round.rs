//! Benchmarks for claim settlement and full matches.

use century_core::cards::{CardId, PointCard};
use century_core::core::{GameState, Inventory, PlayerId};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn free_cards(first: u32, count: u32) -> Vec<PointCard> {
    (first..first + count)
        .map(|id| PointCard::new(CardId::new(id), Inventory::empty(), 2))
        .collect()
}

/// Five players claim from the front slot until the game ends.
fn play_match() -> GameState {
    let mut deck = free_cards(100, 40);
    let mut state = GameState::new(free_cards(1, 5), Vec::new(), 2, 3).unwrap();

    while !state.has_game_ended() {
        let player = PlayerId::new(state.current_turn() as u8);
        if let Some(card) = state.point_row().get(0).map(|c| c.id) {
            state.claim_point_card(player, card).unwrap();
            state.restock_point_row(card, deck.pop()).unwrap();
        }
        state.advance_turn().unwrap();
    }
    state
}

fn bench_claim(c: &mut Criterion) {
    let state = GameState::new(free_cards(1, 5), Vec::new(), 2, 3).unwrap();

    c.bench_function("claim_point_card", |b| {
        b.iter(|| {
            let mut s = state.clone();
            s.claim_point_card(PlayerId::new(0), black_box(CardId::new(1)))
                .unwrap()
        })
    });
}

fn bench_match(c: &mut Criterion) {
    c.bench_function("five_player_match", |b| b.iter(|| black_box(play_match())));
}

criterion_group!(benches, bench_claim, bench_match);
criterion_main!(benches);

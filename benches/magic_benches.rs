#[macro_use]
extern crate criterion;
extern crate plecox;

use criterion::{black_box, Bencher, Criterion};

use plecox::helper::Helper;
use plecox::{BitBoard, SQ};

fn magic_helper_benches(c: &mut Criterion) {
    c.bench_function("magic_rook_lookup", bench_rook_lookup);
    c.bench_function("magic_bishop_lookup", bench_bishop_lookup);
    c.bench_function("magic_queen_lookup", bench_queen_lookup);
    c.bench_function("magic_king_lookup", bench_king_lookup);
    c.bench_function("magic_knight_lookup", bench_knight_lookup);
    c.bench_function("magic_multi_lookup_sequential", bench_multi_lookup_sequential);
    c.bench_function("magic_multi_lookup_stutter", bench_multi_lookup_stutter);
}

fn bench_rook_lookup(b: &mut Bencher) {
    let m = Helper::new();
    b.iter(|| {
        let n: u8 = black_box(64);
        (0..n).fold(0, |a: u64, c| {
            let x: u64 = m.rook_moves(BitBoard(a), SQ(c)).0;
            a ^ (x)
        })
    })
}

fn bench_bishop_lookup(b: &mut Bencher) {
    let m = Helper::new();
    b.iter(|| {
        let n: u8 = black_box(64);
        (0..n).fold(0, |a: u64, c| {
            let x: u64 = m.bishop_moves(BitBoard(a), SQ(c)).0;
            a ^ (x)
        })
    })
}

fn bench_queen_lookup(b: &mut Bencher) {
    let m = Helper::new();
    b.iter(|| {
        let n: u8 = black_box(64);
        (0..n).fold(0, |a: u64, c| {
            let x: u64 = m.queen_moves(BitBoard(a), SQ(c)).0;
            a ^ (x)
        })
    })
}

fn bench_king_lookup(b: &mut Bencher) {
    let m = Helper::new();
    b.iter(|| {
        let n: u8 = black_box(64);
        (0..n).fold(0, |a: u64, c| {
            let x: u64 = m.king_moves(SQ(c)).0;
            a ^ (x)
        })
    })
}

fn bench_knight_lookup(b: &mut Bencher) {
    let m = Helper::new();
    b.iter(|| {
        let n: u8 = black_box(64);
        (0..n).fold(0, |a: u64, c| {
            let x: u64 = m.knight_moves(SQ(c)).0;
            a ^ (x)
        })
    })
}

// Benefits from locality
fn bench_multi_lookup_sequential(b: &mut Bencher) {
    let m = Helper::new();
    b.iter(|| {
        let n: u8 = black_box(64);
        (0..n).fold(0, |a: u64, c| {
            let mut x: u64 = m.knight_moves(SQ(c)).0;
            x ^= m.king_moves(SQ(c)).0;
            x ^= m.bishop_moves(BitBoard(x), SQ(c)).0;
            x ^= m.rook_moves(BitBoard(x), SQ(c)).0;
            x ^= m.queen_moves(BitBoard(x), SQ(c)).0;
            a ^ (x)
        })
    })
}

// Stutters so cache must be refreshed more often
fn bench_multi_lookup_stutter(b: &mut Bencher) {
    let m = Helper::new();
    b.iter(|| {
        let n: u8 = black_box(64);
        (0..n).fold(0, |a: u64, c| {
            let mut x: u64 = m.queen_moves(BitBoard(a), SQ(c)).0;
            x ^= m.king_moves(SQ(c)).0;
            x ^= m.bishop_moves(BitBoard(a), SQ(c)).0;
            x ^= m.knight_moves(SQ(c)).0;
            x ^= m.rook_moves(BitBoard(a), SQ(c)).0;
            a ^ (x)
        })
    })
}

criterion_group!(name = magic_benches; config = Criterion::default(); targets = magic_helper_benches);

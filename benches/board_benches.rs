#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;
extern crate plecox;
extern crate rand;

use criterion::{black_box, Bencher, Criterion};

use plecox::board::RandBoard;
use plecox::tools::prng::PRNG;
use plecox::{BitMove, Board, MoveList, Player};

pub const SEED: u64 = 5363310003543;

lazy_static! {
    pub static ref RAND_BOARDS: Vec<Board> = {
        RandBoard::default().min_moves(5).pseudo_random(SEED).many(100)
    };
}

fn all_board_benches(c: &mut Criterion) {
    c.bench_function("board_100_clone", bench_board_100_clone);
    c.bench_function("king_sq_lookup", bench_find);
    c.bench_function("apply_100_move", bench_apply_100_move);
    c.bench_function("undo_100_move", bench_undo_100_move);
}

fn bench_board_100_clone(b: &mut Bencher) {
    b.iter(|| {
        for board in RAND_BOARDS.iter() {
            black_box(board.shallow_clone());
        }
    })
}

fn bench_find(b: &mut Bencher) {
    b.iter(|| {
        for board in RAND_BOARDS.iter() {
            black_box(board.king_sq(Player::Black));
        }
    })
}

fn bench_apply_100_move(b: &mut Bencher) {
    let mut prng = PRNG::init(SEED);
    let mut board_move: Vec<(Board, BitMove)> = Vec::with_capacity(100);

    for board in RAND_BOARDS.iter() {
        let moves: Vec<BitMove> = MoveList::into(board.generate_moves());
        let bit_move = *moves.get(prng.rand() as usize % moves.len()).unwrap();
        board_move.push((board.parallel_clone(), bit_move));
    }

    b.iter(|| {
        for t in board_move.iter_mut() {
            let b: &mut Board = &mut (t.0);
            black_box(black_box(b.parallel_clone()).apply_move(t.1));
        }
    })
}

fn bench_undo_100_move(b: &mut Bencher) {
    let mut boards: Vec<Board> = Vec::with_capacity(100);
    for board in RAND_BOARDS.iter() {
        boards.push(board.parallel_clone());
    }

    b.iter(|| {
        for b in boards.iter_mut() {
            black_box(black_box(b.parallel_clone()).undo_move());
        }
    })
}

criterion_group!(name = board_benches; config = Criterion::default(); targets = all_board_benches);

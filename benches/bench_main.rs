#[macro_use]
extern crate criterion;
#[macro_use]
extern crate lazy_static;

extern crate plecox;

mod board_benches;
mod lookup_benches;
mod magic_benches;
mod perft_benches;

criterion_main!{
    bit_benches::bit_benches,
    board_benches::board_benches,
    lookup_benches::lookup_benches,
    magic_benches::magic_benches,
    move_gen_benches::movegen_benches,
    perft_benches::perft_benches,
}

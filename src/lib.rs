//! A legal chess move generator and position engine built on bitboards, magic-bitboard
//! sliding attacks, and a mailbox/bitboard dual board representation.
//!
//! This crate covers the core of a UCI-style chess program: attack tables, Zobrist
//! hashing, FEN (de)serialization, make/unmake with full undo history, and a
//! template-specialized fully-legal move generator (no pseudo-legal + make/unmake
//! filtering). Evaluation, search and opening-book probing are deliberately out of
//! scope; this crate hands a caller a [`Board`], a [`BitMove`] and a Zobrist hash and
//! lets them build a search on top.
//!
//! # Examples
//!
//! You can create a [`Board`] with the starting position like so:
//!
//! ```
//! use plecox::Board;
//! let board = Board::start_pos();
//! ```
//!
//! Generating a list of moves (contained inside a [`MoveList`]) can be done with:
//!
//! ```
//! use plecox::Board;
//! let board = Board::start_pos();
//! let list = board.generate_moves();
//! assert_eq!(list.len(), 20);
//! ```
//!
//! Applying and undoing moves is simple:
//!
//! ```
//! use plecox::Board;
//! let mut board = Board::start_pos();
//! let list = board.generate_moves();
//!
//! for mov in list.iter() {
//!     board.apply_move(*mov);
//!     println!("{}", board.get_fen());
//!     board.undo_move();
//! }
//! ```
//!
//! Using FEN strings is also supported:
//!
//! ```
//! use plecox::Board;
//! let start_position = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
//! let board = Board::from_fen(start_position).unwrap();
//! ```
//!
//! [`MoveList`]: core/move_list/struct.MoveList.html
//! [`Board`]: board/struct.Board.html

#![allow(dead_code)]

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate failure_derive;
extern crate failure;
#[macro_use]
extern crate log;
extern crate rand;

pub mod core;
pub mod board;
pub mod helper;
pub mod tools;

pub use board::{Board, PlecoxError};
pub use core::piece_move::{BitMove, ScoringMove};
pub use core::move_list::{MoveList, ScoringMoveList};
pub use core::sq::SQ;
pub use core::bitboard::BitBoard;
pub use helper::Helper;
pub use core::{Player, Piece, PieceType, Rank, File};

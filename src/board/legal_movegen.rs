//! Single-pass legal move generation.
//!
//! [`movegen`] generates pseudo-legal moves and filters each one through
//! [`Board::legal_move`], which is simple but does duplicate work: the board already
//! knows, before generating a single move, which squares resolve the current checks and
//! which pieces are pinned. This module computes that information once per call
//! (a checkmask, two pin masks, and the set of squares the opponent attacks) and uses it
//! to generate only legal moves directly, with no post-filtering pass.
//!
//! Only the three move sets that admit a one-pass treatment are covered here --
//! [`MoveGenType::All`], [`MoveGenType::Captures`], and [`MoveGenType::Quiets`]. The
//! `QuietChecks`, `Evasions`, and `NonEvasions` variants of [`GenTypes`] have no
//! counterpart here and continue to be served by [`movegen`].
//!
//! [`movegen`]: ../movegen/index.html
//! [`Board::legal_move`]: ../struct.Board.html#method.legal_move
//! [`GenTypes`]: ../../core/enum.GenTypes.html

use super::Board;
use core::bitboard::BitBoard;
use core::mono_traits::{BlackType, PlayerTrait, WhiteType};
use core::move_list::MoveList;
use core::piece_move::{BitMove, MoveFlag, PreMoveInfo};
use core::sq::{NO_SQ, SQ};
use core::{CastleType, Player, PieceType, Rank};

/// The move sets this generator is able to produce in a single pass.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MoveGenType {
    All,
    Captures,
    Quiets,
}

/// Generates legal moves for the side to move on `board`, restricted to `gen_type`.
pub fn generate(board: &Board, gen_type: MoveGenType) -> MoveList {
    match board.turn() {
        Player::White => generate_for::<WhiteType>(board, gen_type),
        Player::Black => generate_for::<BlackType>(board, gen_type),
    }
}

fn generate_for<P: PlayerTrait>(board: &Board, gen_type: MoveGenType) -> MoveList {
    let mut list = MoveList::default();
    let helper = board.magic_helper;

    let us: BitBoard = board.get_occupied_player(P::player());
    let them: BitBoard = board.get_occupied_player(P::opp_player());
    let all: BitBoard = us | them;
    let king_sq: SQ = board.king_sq(P::player());

    // Squares the opponent attacks, with our king removed from the occupancy so that the
    // king cannot "hide" behind itself and slide backwards along a check ray.
    let occ_without_king: BitBoard = all ^ king_sq.to_bb();
    let mut seen: BitBoard = BitBoard(0);
    {
        let mut pawns = board.piece_bb(P::opp_player(), PieceType::P);
        while let Some(sq) = pawns.pop_some_lsb() {
            seen |= helper.pawn_attacks_from(sq, P::opp_player());
        }
        let mut knights = board.piece_bb(P::opp_player(), PieceType::N);
        while let Some(sq) = knights.pop_some_lsb() {
            seen |= helper.knight_moves(sq);
        }
        let mut diagonal = board.diagonal_piece_bb(P::opp_player());
        while let Some(sq) = diagonal.pop_some_lsb() {
            seen |= helper.bishop_moves(occ_without_king, sq);
        }
        let mut hv = board.sliding_piece_bb(P::opp_player());
        while let Some(sq) = hv.pop_some_lsb() {
            seen |= helper.rook_moves(occ_without_king, sq);
        }
        seen |= helper.king_moves(board.king_sq(P::opp_player()));
    }

    // Checkers and the checkmask: the set of squares a non-king move must land on to
    // resolve the current check(s). All ones if not in check, zero if in check twice over
    // (only king moves are legal), otherwise the checking piece's square unioned with the
    // ray between it and the king (empty for a leaper check).
    let leaper_checkers: BitBoard = (helper.pawn_attacks_from(king_sq, P::player())
        & board.piece_bb(P::opp_player(), PieceType::P))
        | (helper.knight_moves(king_sq) & board.piece_bb(P::opp_player(), PieceType::N));
    let slider_checkers: BitBoard = (helper.bishop_moves(all, king_sq)
        & board.diagonal_piece_bb(P::opp_player()))
        | (helper.rook_moves(all, king_sq) & board.sliding_piece_bb(P::opp_player()));
    let checkers: BitBoard = leaper_checkers | slider_checkers;
    let check_count: u32 = checkers.count_bits() as u32;

    let checkmask: BitBoard = if check_count == 0 {
        BitBoard::ALL
    } else if check_count == 1 {
        let checker_sq = checkers.to_sq();
        if slider_checkers.is_not_empty() {
            helper.between_bb(king_sq, checker_sq) | checker_sq.to_bb()
        } else {
            checker_sq.to_bb()
        }
    } else {
        BitBoard(0)
    };

    // Pin masks: for each ray-shape, find enemy sliders that would see the king if our own
    // pieces weren't in the way, then check whether exactly one of our pieces sits between
    // them. If so, that piece is pinned, and may only move along the ray (inclusive of the
    // pinner's square).
    let mut pin_hv: BitBoard = BitBoard(0);
    let mut pin_d: BitBoard = BitBoard(0);
    {
        let mut hv_pinners = helper.rook_moves(them, king_sq) & board.sliding_piece_bb(P::opp_player());
        while let Some(pinner_sq) = hv_pinners.pop_some_lsb() {
            let between = helper.between_bb(king_sq, pinner_sq);
            if (between & us).count_bits() == 1 {
                pin_hv |= between | pinner_sq.to_bb();
            }
        }
        let mut d_pinners = helper.bishop_moves(them, king_sq) & board.diagonal_piece_bb(P::opp_player());
        while let Some(pinner_sq) = d_pinners.pop_some_lsb() {
            let between = helper.between_bb(king_sq, pinner_sq);
            if (between & us).count_bits() == 1 {
                pin_d |= between | pinner_sq.to_bb();
            }
        }
    }

    // Squares movable for this `MoveGenType`, before accounting for check.
    let movable: BitBoard = match gen_type {
        MoveGenType::All => !us,
        MoveGenType::Quiets => !all,
        MoveGenType::Captures => them,
    };

    // King moves, including castling. Not constrained by the checkmask -- the king simply
    // cannot step onto a square the opponent sees.
    let mut king_targets = helper.king_moves(king_sq) & movable & !seen;
    while let Some(dst) = king_targets.pop_some_lsb() {
        emit_one(&mut list, king_sq, dst, them);
    }

    if check_count == 0 && gen_type != MoveGenType::Captures {
        try_castle::<P>(board, CastleType::KingSide, seen, pin_hv, king_sq, &mut list);
        try_castle::<P>(board, CastleType::QueenSide, seen, pin_hv, king_sq, &mut list);
    }

    generate_pawn_moves::<P>(board, gen_type, checkmask, pin_hv, pin_d, king_sq, them, all, &mut list);

    let mut knights = board.piece_bb(P::player(), PieceType::N);
    while let Some(src) = knights.pop_some_lsb() {
        if ((pin_hv | pin_d) & src.to_bb()).is_not_empty() {
            continue;
        }
        let mut targets = helper.knight_moves(src) & movable & checkmask;
        while let Some(dst) = targets.pop_some_lsb() {
            emit_one(&mut list, src, dst, them);
        }
    }

    let mut bishops = board.piece_bb(P::player(), PieceType::B);
    while let Some(src) = bishops.pop_some_lsb() {
        if (pin_hv & src.to_bb()).is_not_empty() {
            continue;
        }
        let mut targets = helper.bishop_moves(all, src) & movable & checkmask;
        if (pin_d & src.to_bb()).is_not_empty() {
            targets &= pin_d;
        }
        while let Some(dst) = targets.pop_some_lsb() {
            emit_one(&mut list, src, dst, them);
        }
    }

    let mut rooks = board.piece_bb(P::player(), PieceType::R);
    while let Some(src) = rooks.pop_some_lsb() {
        if (pin_d & src.to_bb()).is_not_empty() {
            continue;
        }
        let mut targets = helper.rook_moves(all, src) & movable & checkmask;
        if (pin_hv & src.to_bb()).is_not_empty() {
            targets &= pin_hv;
        }
        while let Some(dst) = targets.pop_some_lsb() {
            emit_one(&mut list, src, dst, them);
        }
    }

    let mut queens = board.piece_bb(P::player(), PieceType::Q);
    while let Some(src) = queens.pop_some_lsb() {
        let mut targets = helper.queen_moves(all, src) & movable & checkmask;
        if (pin_hv & src.to_bb()).is_not_empty() {
            targets &= pin_hv;
        }
        if (pin_d & src.to_bb()).is_not_empty() {
            targets &= pin_d;
        }
        while let Some(dst) = targets.pop_some_lsb() {
            emit_one(&mut list, src, dst, them);
        }
    }

    list
}

#[inline]
fn emit_one(list: &mut MoveList, src: SQ, dst: SQ, them: BitBoard) {
    if (them & dst.to_bb()).is_not_empty() {
        list.push(BitMove::make_capture(src, dst));
    } else {
        list.push(BitMove::make_quiet(src, dst));
    }
}

fn push_promotions(list: &mut MoveList, src: SQ, dst: SQ) {
    list.push(BitMove::make(BitMove::FLAG_PROMO_Q, src, dst));
    list.push(BitMove::make(BitMove::FLAG_PROMO_R, src, dst));
    list.push(BitMove::make(BitMove::FLAG_PROMO_B, src, dst));
    list.push(BitMove::make(BitMove::FLAG_PROMO_N, src, dst));
}

fn capture_promotions(list: &mut MoveList, src: SQ, dst: SQ) {
    list.push(BitMove::make(BitMove::FLAG_PROMO_CAP_Q, src, dst));
    list.push(BitMove::make(BitMove::FLAG_PROMO_CAP_R, src, dst));
    list.push(BitMove::make(BitMove::FLAG_PROMO_CAP_B, src, dst));
    list.push(BitMove::make(BitMove::FLAG_PROMO_CAP_N, src, dst));
}

fn try_castle<P: PlayerTrait>(
    board: &Board,
    side: CastleType,
    seen: BitBoard,
    pin_hv: BitBoard,
    king_sq: SQ,
    list: &mut MoveList,
) {
    if !board.can_castle(P::player(), side) || board.castle_impeded(side) {
        return;
    }
    let rook_sq = board.castling_rook_square(side);
    if board.piece_at_sq(rook_sq) != Some(PieceType::R) {
        return;
    }
    if (pin_hv & rook_sq.to_bb()).is_not_empty() {
        return;
    }

    let king_side = side == CastleType::KingSide;
    let k_to = P::player().relative_square(if king_side { SQ::G1 } else { SQ::C1 });
    let path = board.magic_helper.between_bb(king_sq, k_to) | k_to.to_bb();

    if (path & seen).is_not_empty() {
        return;
    }
    let occ_without_rook = board.get_occupied() ^ rook_sq.to_bb();
    if (path & occ_without_rook).is_not_empty() {
        return;
    }

    list.push(BitMove::init(PreMoveInfo {
        src: king_sq,
        dst: rook_sq,
        flags: MoveFlag::Castle { king_side },
    }));
}

#[allow(clippy::too_many_arguments)]
fn generate_pawn_moves<P: PlayerTrait>(
    board: &Board,
    gen_type: MoveGenType,
    checkmask: BitBoard,
    pin_hv: BitBoard,
    pin_d: BitBoard,
    king_sq: SQ,
    them: BitBoard,
    all: BitBoard,
    list: &mut MoveList,
) {
    let helper = board.magic_helper;
    let (rank_7, rank_3): (BitBoard, BitBoard) = if P::player() == Player::White {
        (BitBoard::RANK_7, BitBoard::RANK_3)
    } else {
        (BitBoard::RANK_2, BitBoard::RANK_6)
    };

    let all_pawns: BitBoard = board.piece_bb(P::player(), PieceType::P);
    let pawns_rank_7: BitBoard = all_pawns & rank_7;
    let pawns_not_rank_7: BitBoard = all_pawns & !rank_7;
    let empty: BitBoard = !all;

    let pinned_hv = pawns_not_rank_7 & pin_hv;
    let unpinned = pawns_not_rank_7 & !(pin_hv | pin_d);
    let pinned_hv_promo = pawns_rank_7 & pin_hv;
    let unpinned_promo = pawns_rank_7 & !(pin_hv | pin_d);

    if gen_type != MoveGenType::Captures {
        // Single and double pushes.
        let push_one_unpinned = P::shift_up(unpinned) & empty;
        let push_one_pinned = P::shift_up(pinned_hv) & empty & pin_hv;
        let mut push_one = (push_one_unpinned | push_one_pinned) & checkmask;

        let push_two_unpinned = P::shift_up(push_one_unpinned & rank_3) & empty;
        let push_two_pinned = P::shift_up(push_one_pinned & rank_3) & empty & pin_hv;
        let mut push_two = (push_two_unpinned | push_two_pinned) & checkmask;

        while let Some(dst) = push_one.pop_some_lsb() {
            list.push(BitMove::make_quiet(P::down(dst), dst));
        }
        while let Some(dst) = push_two.pop_some_lsb() {
            list.push(BitMove::make_pawn_push(P::down(P::down(dst)), dst));
        }

        // Quiet promotions.
        let promo_one_unpinned = P::shift_up(unpinned_promo) & empty;
        let promo_one_pinned = P::shift_up(pinned_hv_promo) & empty & pin_hv;
        let mut promo_one = (promo_one_unpinned | promo_one_pinned) & checkmask;
        while let Some(dst) = promo_one.pop_some_lsb() {
            push_promotions(list, P::down(dst), dst);
        }
    }

    if gen_type != MoveGenType::Quiets {
        let pinned_d = pawns_not_rank_7 & pin_d;
        let pinned_d_promo = pawns_rank_7 & pin_d;

        let mut left_cap = ((P::shift_up_left(unpinned) & them)
            | (P::shift_up_left(pinned_d) & them & pin_d))
            & checkmask;
        let mut right_cap = ((P::shift_up_right(unpinned) & them)
            | (P::shift_up_right(pinned_d) & them & pin_d))
            & checkmask;

        while let Some(dst) = left_cap.pop_some_lsb() {
            list.push(BitMove::make_capture(P::down_right(dst), dst));
        }
        while let Some(dst) = right_cap.pop_some_lsb() {
            list.push(BitMove::make_capture(P::down_left(dst), dst));
        }

        // Capture promotions.
        let mut left_cap_promo = ((P::shift_up_left(unpinned_promo) & them)
            | (P::shift_up_left(pinned_d_promo) & them & pin_d))
            & checkmask;
        let mut right_cap_promo = ((P::shift_up_right(unpinned_promo) & them)
            | (P::shift_up_right(pinned_d_promo) & them & pin_d))
            & checkmask;
        while let Some(dst) = left_cap_promo.pop_some_lsb() {
            capture_promotions(list, P::down_right(dst), dst);
        }
        while let Some(dst) = right_cap_promo.pop_some_lsb() {
            capture_promotions(list, P::down_left(dst), dst);
        }

        // En-passant, including the classic rank-discovered-check exception: capturing
        // off the board both the moving pawn and its victim can expose the king to a
        // horizontal or diagonal slider that neither the checkmask nor the pin masks
        // account for, since neither the mover nor the victim is otherwise pinned.
        let ep_sq = board.ep_square();
        if ep_sq != NO_SQ {
            debug_assert_eq!(ep_sq.rank(), P::player().relative_rank(Rank::R6));
            let captured_sq = P::down(ep_sq);
            if (checkmask & (ep_sq.to_bb() | captured_sq.to_bb())).is_not_empty() {
                let mut candidates = pawns_not_rank_7 & helper.pawn_attacks_from(ep_sq, P::opp_player());
                while let Some(src) = candidates.pop_some_lsb() {
                    if (pin_hv & src.to_bb()).is_not_empty() {
                        continue;
                    }
                    if (pin_d & src.to_bb()).is_not_empty() && (pin_d & ep_sq.to_bb()).is_empty() {
                        continue;
                    }
                    let occ_after = (all ^ src.to_bb() ^ captured_sq.to_bb()) | ep_sq.to_bb();
                    let exposes_hv = (helper.rook_moves(occ_after, king_sq)
                        & board.sliding_piece_bb(P::opp_player()))
                        .is_not_empty();
                    let exposes_d = (helper.bishop_moves(occ_after, king_sq)
                        & board.diagonal_piece_bb(P::opp_player()))
                        .is_not_empty();
                    if exposes_hv || exposes_d {
                        continue;
                    }
                    list.push(BitMove::make_ep_capture(src, ep_sq));
                }
            }
        }
    }
}

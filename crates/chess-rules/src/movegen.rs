//! Legal move generation and position mutation.
//!
//! Generation is mailbox-based: pseudo-legal moves are produced per piece
//! type by walking offsets and rays, then filtered by king safety. Castling
//! additionally requires empty in-between squares and an unattacked
//! pass-through square; the destination square is covered by the king-safety
//! filter like any other king move.

use chess_core::{Color, Move, MoveFlag, Piece, Square};

use crate::Position;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const PROMOTIONS: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Generates all legal moves for the side to move.
///
/// Enumeration order is deterministic: pawns, knights, bishops, rooks,
/// queens, king steps, then castling, with origin squares ascending within
/// each group.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::new();

    pawn_moves(position, &mut moves);
    step_moves(position, Piece::Knight, &KNIGHT_JUMPS, &mut moves);
    slide_moves(position, Piece::Bishop, &DIAGONALS, &mut moves);
    slide_moves(position, Piece::Rook, &ORTHOGONALS, &mut moves);
    queen_moves(position, &mut moves);
    step_moves(position, Piece::King, &KING_STEPS, &mut moves);
    castling_moves(position, &mut moves);

    let us = position.side_to_move;
    moves.retain(|m| !is_king_attacked(&apply(position, *m), us));
    moves
}

fn pawn_moves(position: &Position, moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    let dir = us.pawn_direction();

    for from in position.squares_of(Piece::Pawn, us) {
        // Pushes.
        if let Some(one) = from.offset(0, dir) {
            if position.piece_at(one).is_none() {
                push_pawn_move(moves, from, one, us);
                if from.rank() == us.pawn_start_rank() {
                    if let Some(two) = one.offset(0, dir) {
                        if position.piece_at(two).is_none() {
                            moves.push(Move::new(from, two, MoveFlag::DoublePush));
                        }
                    }
                }
            }
        }

        // Captures, en passant included.
        for df in [-1, 1] {
            let Some(to) = from.offset(df, dir) else {
                continue;
            };
            match position.piece_at(to) {
                Some((_, color)) if color != us => push_pawn_move(moves, from, to, us),
                None if position.en_passant == Some(to) => {
                    moves.push(Move::new(from, to, MoveFlag::EnPassant));
                }
                _ => {}
            }
        }
    }
}

fn push_pawn_move(moves: &mut Vec<Move>, from: Square, to: Square, us: Color) {
    if to.rank() == us.promotion_rank() {
        for piece in PROMOTIONS {
            moves.push(Move::new(from, to, MoveFlag::Promote(piece)));
        }
    } else {
        moves.push(Move::normal(from, to));
    }
}

fn step_moves(position: &Position, piece: Piece, steps: &[(i8, i8)], moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    for from in position.squares_of(piece, us) {
        for &(df, dr) in steps {
            let Some(to) = from.offset(df, dr) else {
                continue;
            };
            match position.piece_at(to) {
                Some((_, color)) if color == us => {}
                _ => moves.push(Move::normal(from, to)),
            }
        }
    }
}

fn slide_moves(position: &Position, piece: Piece, dirs: &[(i8, i8)], moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    for from in position.squares_of(piece, us) {
        slide_from(position, from, dirs, us, moves);
    }
}

fn queen_moves(position: &Position, moves: &mut Vec<Move>) {
    let us = position.side_to_move;
    for from in position.squares_of(Piece::Queen, us) {
        slide_from(position, from, &DIAGONALS, us, moves);
        slide_from(position, from, &ORTHOGONALS, us, moves);
    }
}

fn slide_from(
    position: &Position,
    from: Square,
    dirs: &[(i8, i8)],
    us: Color,
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut to = from;
        while let Some(next) = to.offset(df, dr) {
            to = next;
            match position.piece_at(to) {
                None => moves.push(Move::normal(from, to)),
                Some((_, color)) => {
                    if color != us {
                        moves.push(Move::normal(from, to));
                    }
                    break;
                }
            }
        }
    }
}

fn castling_moves(position: &Position, moves: &mut Vec<Move>) {
    let us = position.side_to_move;

    if is_king_attacked(position, us) {
        return;
    }

    let (king_from, rook_ks, rook_qs) = match us {
        Color::White => (Square::E1, Square::H1, Square::A1),
        Color::Black => (Square::E8, Square::H8, Square::A8),
    };

    // Rights can outlive the pieces in hand-written FENs.
    if position.piece_at(king_from) != Some((Piece::King, us)) {
        return;
    }

    if position.castling.can_castle_kingside(us)
        && position.piece_at(rook_ks) == Some((Piece::Rook, us))
    {
        let (f, g) = match us {
            Color::White => (Square::F1, Square::G1),
            Color::Black => (Square::F8, Square::G8),
        };
        if position.piece_at(f).is_none()
            && position.piece_at(g).is_none()
            && !is_square_attacked(position, f, us.opposite())
        {
            moves.push(Move::new(king_from, g, MoveFlag::CastleKingside));
        }
    }

    if position.castling.can_castle_queenside(us)
        && position.piece_at(rook_qs) == Some((Piece::Rook, us))
    {
        let (b, c, d) = match us {
            Color::White => (Square::B1, Square::C1, Square::D1),
            Color::Black => (Square::B8, Square::C8, Square::D8),
        };
        if position.piece_at(b).is_none()
            && position.piece_at(c).is_none()
            && position.piece_at(d).is_none()
            && !is_square_attacked(position, d, us.opposite())
        {
            moves.push(Move::new(king_from, c, MoveFlag::CastleQueenside));
        }
    }
}

/// Returns true if the given square is attacked by any piece of `by`.
pub fn is_square_attacked(position: &Position, sq: Square, by: Color) -> bool {
    // A pawn of `by` attacks sq from one rank behind its push direction.
    let dir = by.pawn_direction();
    for df in [-1, 1] {
        if let Some(from) = sq.offset(df, -dir) {
            if position.piece_at(from) == Some((Piece::Pawn, by)) {
                return true;
            }
        }
    }

    for &(df, dr) in &KNIGHT_JUMPS {
        if let Some(from) = sq.offset(df, dr) {
            if position.piece_at(from) == Some((Piece::Knight, by)) {
                return true;
            }
        }
    }

    for &(df, dr) in &KING_STEPS {
        if let Some(from) = sq.offset(df, dr) {
            if position.piece_at(from) == Some((Piece::King, by)) {
                return true;
            }
        }
    }

    for &(df, dr) in &DIAGONALS {
        if let Some((piece, color)) = first_piece_along(position, sq, df, dr) {
            if color == by && matches!(piece, Piece::Bishop | Piece::Queen) {
                return true;
            }
        }
    }

    for &(df, dr) in &ORTHOGONALS {
        if let Some((piece, color)) = first_piece_along(position, sq, df, dr) {
            if color == by && matches!(piece, Piece::Rook | Piece::Queen) {
                return true;
            }
        }
    }

    false
}

fn first_piece_along(
    position: &Position,
    from: Square,
    df: i8,
    dr: i8,
) -> Option<(Piece, Color)> {
    let mut sq = from;
    while let Some(next) = sq.offset(df, dr) {
        sq = next;
        if let Some(occupant) = position.piece_at(sq) {
            return Some(occupant);
        }
    }
    None
}

/// Returns true if the king of the given color is in check.
pub fn is_king_attacked(position: &Position, king_color: Color) -> bool {
    match position.king_square(king_color) {
        Some(sq) => is_square_attacked(position, sq, king_color.opposite()),
        None => false,
    }
}

/// Applies a move and returns the resulting position.
///
/// The move must be legal; this is guaranteed for moves produced by
/// [`legal_moves`].
pub fn apply(position: &Position, m: Move) -> Position {
    let mut next = position.clone();
    let us = position.side_to_move;
    let them = us.opposite();

    let (piece, _) = position.piece_at(m.from).expect("no piece on origin square");

    next.set(m.from, None);
    let mut is_capture = position.piece_at(m.to).is_some();

    // The captured en passant pawn does not sit on the destination square.
    if m.flag == MoveFlag::EnPassant {
        let captured_sq = m
            .to
            .offset(0, -us.pawn_direction())
            .expect("en passant target has a rank behind it");
        next.set(captured_sq, None);
        is_capture = true;
    }

    let dest_piece = m.flag.promotion_piece().unwrap_or(piece);
    next.set(m.to, Some((dest_piece, us)));

    // Castling relocates the rook as well.
    match m.flag {
        MoveFlag::CastleKingside => {
            let (rook_from, rook_to) = match us {
                Color::White => (Square::H1, Square::F1),
                Color::Black => (Square::H8, Square::F8),
            };
            next.set(rook_from, None);
            next.set(rook_to, Some((Piece::Rook, us)));
        }
        MoveFlag::CastleQueenside => {
            let (rook_from, rook_to) = match us {
                Color::White => (Square::A1, Square::D1),
                Color::Black => (Square::A8, Square::D8),
            };
            next.set(rook_from, None);
            next.set(rook_to, Some((Piece::Rook, us)));
        }
        _ => {}
    }

    // A king move forfeits both rights; a rook leaving or anything landing
    // on a corner square forfeits that corner's right.
    if piece == Piece::King {
        next.castling.remove_color(us);
    }
    for sq in [m.from, m.to] {
        match sq {
            Square::H1 => next.castling.remove_kingside(Color::White),
            Square::A1 => next.castling.remove_queenside(Color::White),
            Square::H8 => next.castling.remove_kingside(Color::Black),
            Square::A8 => next.castling.remove_queenside(Color::Black),
            _ => {}
        }
    }

    next.en_passant = None;

    if piece == Piece::Pawn || is_capture {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock += 1;
    }
    if us == Color::Black {
        next.fullmove_number += 1;
    }
    next.side_to_move = them;

    // The en passant target is only recorded when the capture is actually
    // playable, so serialized positions never advertise a dead right.
    if m.flag == MoveFlag::DoublePush {
        next.en_passant = m
            .to
            .offset(0, -us.pawn_direction())
            .filter(|candidate| en_passant_playable(&next, *candidate));
    }

    next
}

/// Returns true if the side to move has a legal en passant capture onto
/// the candidate target square.
fn en_passant_playable(position: &Position, candidate: Square) -> bool {
    let us = position.side_to_move;
    for df in [-1, 1] {
        let Some(from) = candidate.offset(df, -us.pawn_direction()) else {
            continue;
        };
        if position.piece_at(from) != Some((Piece::Pawn, us)) {
            continue;
        }
        let ep = Move::new(from, candidate, MoveFlag::EnPassant);
        if !is_king_attacked(&apply(position, ep), us) {
            return true;
        }
    }
    false
}

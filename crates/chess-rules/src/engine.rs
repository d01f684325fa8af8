//! The rules-engine seam.
//!
//! [`RulesEngine`] is the full interface the fixture annotator consumes:
//! position parsing, legal-move enumeration, move-property queries, position
//! mutation, and check detection. Keeping it a trait lets the annotator run
//! against a scripted stand-in engine in tests, with [`StandardChess`] as
//! the real implementation.

use chess_core::{Color, FenError, Move, MoveFlag, Piece, Square};

use crate::movegen;
use crate::Position;

/// Interface of a chess rules engine.
///
/// All queries take the position explicitly; implementations hold no
/// per-position state. `Position` is an opaque value type from the
/// caller's point of view, inspected only through these methods.
pub trait RulesEngine {
    type Position: Clone;

    /// Parses a FEN string into a position.
    fn parse(&self, fen: &str) -> Result<Self::Position, FenError>;

    /// Enumerates the legal moves for the side to move, in a deterministic
    /// order that callers must not re-sort.
    fn legal_moves(&self, position: &Self::Position) -> Vec<Move>;

    /// Returns true if the move is the kingside castle.
    fn is_kingside_castle(&self, position: &Self::Position, m: Move) -> bool;

    /// Returns true if the move is the queenside castle.
    fn is_queenside_castle(&self, position: &Self::Position, m: Move) -> bool;

    /// Returns true if the move is an en passant capture.
    fn is_en_passant(&self, position: &Self::Position, m: Move) -> bool;

    /// Returns true if the move captures a piece, en passant included.
    fn is_capture(&self, position: &Self::Position, m: Move) -> bool {
        self.piece_at(position, m.to).is_some() || self.is_en_passant(position, m)
    }

    /// Returns the occupant of a square.
    fn piece_at(&self, position: &Self::Position, square: Square) -> Option<(Piece, Color)>;

    /// Returns the side to move.
    fn side_to_move(&self, position: &Self::Position) -> Color;

    /// Applies a legal move, producing the resulting position. The input
    /// position is left untouched.
    fn apply(&self, position: &Self::Position, m: Move) -> Self::Position;

    /// Serializes a position to FEN.
    fn to_fen(&self, position: &Self::Position) -> String;

    /// Returns true if the side to move is in check.
    fn is_check(&self, position: &Self::Position) -> bool;

    /// Returns true if the side to move is checkmated.
    fn is_checkmate(&self, position: &Self::Position) -> bool {
        self.is_check(position) && self.legal_moves(position).is_empty()
    }
}

/// Standard chess rules (FIDE).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RulesEngine for StandardChess {
    type Position = Position;

    fn parse(&self, fen: &str) -> Result<Position, FenError> {
        Position::from_fen(fen)
    }

    fn legal_moves(&self, position: &Position) -> Vec<Move> {
        movegen::legal_moves(position)
    }

    fn is_kingside_castle(&self, _position: &Position, m: Move) -> bool {
        m.flag == MoveFlag::CastleKingside
    }

    fn is_queenside_castle(&self, _position: &Position, m: Move) -> bool {
        m.flag == MoveFlag::CastleQueenside
    }

    fn is_en_passant(&self, _position: &Position, m: Move) -> bool {
        m.flag == MoveFlag::EnPassant
    }

    fn piece_at(&self, position: &Position, square: Square) -> Option<(Piece, Color)> {
        position.piece_at(square)
    }

    fn side_to_move(&self, position: &Position) -> Color {
        position.side_to_move
    }

    fn apply(&self, position: &Position, m: Move) -> Position {
        movegen::apply(position, m)
    }

    fn to_fen(&self, position: &Position) -> String {
        position.to_fen()
    }

    fn is_check(&self, position: &Position) -> bool {
        movegen::is_king_attacked(position, position.side_to_move)
    }
}

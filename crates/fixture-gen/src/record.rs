//! Fixture record shapes.
//!
//! These structs define the serialized form of one annotated move:
//! `{move: {from, to, piece, capture, promotion, type}, uci, san, lan, fen}`.
//! Piece letters are case-coded by color (uppercase White, lowercase Black);
//! absent `capture`/`promotion` serialize as `null` so fixtures stay
//! byte-compatible with existing consumers.

use serde::{Deserialize, Serialize};

/// Semantic category of a move. Exactly one applies to every legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    KingSideCastle,
    QueenSideCastle,
    EnPassant,
    PromotionCapture,
    Promotion,
    Capture,
    Basic,
}

impl MoveKind {
    /// Returns true if a piece disappears from the board.
    pub const fn is_capture(self) -> bool {
        matches!(
            self,
            MoveKind::EnPassant | MoveKind::PromotionCapture | MoveKind::Capture
        )
    }

    /// Returns true if the moving pawn is replaced by another piece.
    pub const fn is_promotion(self) -> bool {
        matches!(self, MoveKind::Promotion | MoveKind::PromotionCapture)
    }
}

/// The `move` object inside a fixture record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDetail {
    /// Origin square name, e.g. "e2".
    pub from: String,
    /// Destination square name, e.g. "e4".
    pub to: String,
    /// Case-coded letter of the moving piece.
    pub piece: char,
    /// Case-coded letter of the captured piece. For en passant this is the
    /// pawn removed from beside the destination, not the (empty)
    /// destination occupant.
    pub capture: Option<char>,
    /// Case-coded letter of the promotion piece, if any.
    pub promotion: Option<char>,
    /// The move's classification.
    #[serde(rename = "type")]
    pub kind: MoveKind,
}

/// One fully annotated legal move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(rename = "move")]
    pub detail: MoveDetail,
    /// Coordinate notation, e.g. "e2e4" or "e7e8q".
    pub uci: String,
    /// Short algebraic notation, e.g. "Nf3", "exd6", "O-O", "e8=Q+".
    pub san: String,
    /// Long algebraic notation, e.g. "Ng1-f3", "e5xd6".
    pub lan: String,
    /// FEN of the position after the move.
    pub fen: String,
}

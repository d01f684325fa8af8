//! Move representation.

use crate::{Piece, Square};
use std::fmt;

/// Flags for special move types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    /// Normal move (no special action).
    Normal,
    /// Pawn double push from the starting rank.
    DoublePush,
    /// Kingside castling (O-O).
    CastleKingside,
    /// Queenside castling (O-O-O).
    CastleQueenside,
    /// En passant capture.
    EnPassant,
    /// Pawn promotion to the given piece.
    Promote(Piece),
}

impl MoveFlag {
    /// Returns the promotion piece if this is a promotion move.
    #[inline]
    pub const fn promotion_piece(self) -> Option<Piece> {
        match self {
            MoveFlag::Promote(piece) => Some(piece),
            _ => None,
        }
    }

    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }
}

/// A chess move: origin, destination, and a special-move flag.
///
/// Moves are produced by legal-move enumeration; constructing one by hand
/// does not make it legal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flag: MoveFlag,
}

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Move { from, to, flag }
    }

    /// Creates a normal move (no special flags).
    #[inline]
    pub const fn normal(from: Square, to: Square) -> Self {
        Self::new(from, to, MoveFlag::Normal)
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    ///
    /// The promotion letter, when present, is always lowercase.
    pub fn to_uci(self) -> String {
        let mut uci = format!("{}{}", self.from, self.to);
        if let Some(piece) = self.flag.promotion_piece() {
            uci.push(piece.san_char().to_ascii_lowercase());
        }
        uci
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn move_uci() {
        assert_eq!(Move::normal(sq("e2"), sq("e4")).to_uci(), "e2e4");
        assert_eq!(
            Move::new(sq("e7"), sq("e8"), MoveFlag::Promote(Piece::Queen)).to_uci(),
            "e7e8q"
        );
        assert_eq!(
            Move::new(sq("a2"), sq("b1"), MoveFlag::Promote(Piece::Knight)).to_uci(),
            "a2b1n"
        );
    }

    #[test]
    fn castling_flags() {
        assert!(MoveFlag::CastleKingside.is_castling());
        assert!(MoveFlag::CastleQueenside.is_castling());
        assert!(!MoveFlag::EnPassant.is_castling());
        assert!(!MoveFlag::Promote(Piece::Queen).is_castling());
    }

    #[test]
    fn promotion_piece() {
        assert_eq!(MoveFlag::Normal.promotion_piece(), None);
        assert_eq!(MoveFlag::EnPassant.promotion_piece(), None);
        assert_eq!(
            MoveFlag::Promote(Piece::Rook).promotion_piece(),
            Some(Piece::Rook)
        );
    }

    proptest! {
        #[test]
        fn uci_is_four_or_five_chars(from in 0u8..64, to in 0u8..64, promo in 0usize..5) {
            let flag = match promo {
                0 => MoveFlag::Normal,
                1 => MoveFlag::Promote(Piece::Knight),
                2 => MoveFlag::Promote(Piece::Bishop),
                3 => MoveFlag::Promote(Piece::Rook),
                _ => MoveFlag::Promote(Piece::Queen),
            };
            let m = Move::new(
                Square::from_index(from).unwrap(),
                Square::from_index(to).unwrap(),
                flag,
            );
            let expected = if flag.promotion_piece().is_some() { 5 } else { 4 };
            prop_assert_eq!(m.to_uci().len(), expected);
        }
    }
}

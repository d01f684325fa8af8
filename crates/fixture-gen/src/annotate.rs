//! The move annotator.
//!
//! [`Annotator`] turns one legal move into a [`MoveRecord`]: classification,
//! endpoint names, case-coded piece letters, the three notations, and the
//! resulting FEN. It owns nothing but the injected rules engine and never
//! mutates a position - `apply` produces a throwaway successor that is
//! dropped once its FEN is taken.

use chess_core::{FenError, Move, Piece, Square};
use chess_rules::RulesEngine;
use thiserror::Error;

use crate::classify::classify;
use crate::notation;
use crate::record::{MoveDetail, MoveKind, MoveRecord};

/// Errors raised while annotating.
///
/// Everything here is fatal for the run: either the input FEN is bad or the
/// rules engine contradicted its own contract, and a wrong fixture is worse
/// than no fixture.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnnotateError {
    #[error("no piece on origin square {0} of a supposedly legal move")]
    EmptyOrigin(Square),

    #[error("move {0} reported as both kingside and queenside castle")]
    AmbiguousCastle(String),

    #[error("en passant move {0} targets an occupied square")]
    EnPassantOntoOccupied(String),

    #[error("move {0} reported as both en passant and promotion")]
    EnPassantPromotion(String),

    #[error(transparent)]
    Fen(#[from] FenError),
}

/// Annotates legal moves against an injected rules engine.
pub struct Annotator<R: RulesEngine> {
    rules: R,
}

impl<R: RulesEngine> Annotator<R> {
    /// Creates an annotator around the given rules engine.
    pub fn new(rules: R) -> Self {
        Annotator { rules }
    }

    /// Returns the rules engine.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Builds the fixture record for one legal move.
    ///
    /// The position must be the state before the move; it is read, never
    /// changed.
    pub fn annotate(&self, position: &R::Position, m: Move) -> Result<MoveRecord, AnnotateError> {
        let kind = classify(&self.rules, position, m)?;

        let (piece, piece_color) = self
            .rules
            .piece_at(position, m.from)
            .ok_or(AnnotateError::EmptyOrigin(m.from))?;
        let mover = self.rules.side_to_move(position);

        // For en passant the captured pawn is read off the rules, not the
        // destination square - that square is empty.
        let capture = match kind {
            MoveKind::EnPassant => Some((Piece::Pawn, mover.opposite())),
            MoveKind::Capture | MoveKind::PromotionCapture => self.rules.piece_at(position, m.to),
            _ => None,
        };

        let promotion = m.flag.promotion_piece().map(|p| (p, mover));

        let next = self.rules.apply(position, m);
        let fen = self.rules.to_fen(&next);

        Ok(MoveRecord {
            detail: MoveDetail {
                from: m.from.to_algebraic(),
                to: m.to.to_algebraic(),
                piece: piece.to_fen_char(piece_color),
                capture: capture.map(|(p, c)| p.to_fen_char(c)),
                promotion: promotion.map(|(p, c)| p.to_fen_char(c)),
                kind,
            },
            uci: notation::uci(m),
            san: notation::san(&self.rules, position, m),
            lan: notation::lan(&self.rules, position, m),
            fen,
        })
    }

    /// Annotates every legal move from a position, in enumeration order.
    pub fn annotate_position(
        &self,
        position: &R::Position,
    ) -> Result<Vec<MoveRecord>, AnnotateError> {
        self.rules
            .legal_moves(position)
            .into_iter()
            .map(|m| self.annotate(position, m))
            .collect()
    }

    /// Parses a FEN and annotates every legal move from it.
    pub fn annotate_fen(&self, fen: &str) -> Result<Vec<MoveRecord>, AnnotateError> {
        let position = self.rules.parse(fen)?;
        self.annotate_position(&position)
    }
}

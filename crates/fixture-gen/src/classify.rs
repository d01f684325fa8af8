//! Move classification.

use chess_core::Move;
use chess_rules::RulesEngine;

use crate::annotate::AnnotateError;
use crate::record::MoveKind;

/// Maps one legal move to exactly one [`MoveKind`].
///
/// Precedence, first match wins: kingside castle, queenside castle,
/// en passant, promotion-with-capture, promotion, capture, basic. The order
/// matters only where categories could coincide (a promotion may also be a
/// capture); castling and en passant exclude promotion in legal chess, and
/// an engine reporting otherwise has broken its contract, which is an error
/// here rather than a silent `Basic`.
pub fn classify<R: RulesEngine>(
    rules: &R,
    position: &R::Position,
    m: Move,
) -> Result<MoveKind, AnnotateError> {
    let kingside = rules.is_kingside_castle(position, m);
    let queenside = rules.is_queenside_castle(position, m);
    if kingside && queenside {
        return Err(AnnotateError::AmbiguousCastle(m.to_uci()));
    }
    if kingside {
        return Ok(MoveKind::KingSideCastle);
    }
    if queenside {
        return Ok(MoveKind::QueenSideCastle);
    }

    let promotes = m.flag.promotion_piece().is_some();
    let destination_occupied = rules.piece_at(position, m.to).is_some();

    if rules.is_en_passant(position, m) {
        if promotes {
            return Err(AnnotateError::EnPassantPromotion(m.to_uci()));
        }
        if destination_occupied {
            return Err(AnnotateError::EnPassantOntoOccupied(m.to_uci()));
        }
        return Ok(MoveKind::EnPassant);
    }

    Ok(match (promotes, destination_occupied) {
        (true, true) => MoveKind::PromotionCapture,
        (true, false) => MoveKind::Promotion,
        (false, true) => MoveKind::Capture,
        (false, false) => MoveKind::Basic,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{MoveFlag, Piece, Square};
    use chess_rules::StandardChess;

    fn mv(from: &str, to: &str, flag: MoveFlag) -> Move {
        Move::new(
            Square::from_algebraic(from).unwrap(),
            Square::from_algebraic(to).unwrap(),
            flag,
        )
    }

    #[test]
    fn basic_move() {
        let engine = StandardChess;
        let position = engine.parse(chess_core::Fen::STARTPOS).unwrap();
        let kind = classify(&engine, &position, mv("g1", "f3", MoveFlag::Normal)).unwrap();
        assert_eq!(kind, MoveKind::Basic);
    }

    #[test]
    fn plain_capture() {
        let engine = StandardChess;
        let position = engine
            .parse("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2")
            .unwrap();
        let kind = classify(&engine, &position, mv("e4", "d5", MoveFlag::Normal)).unwrap();
        assert_eq!(kind, MoveKind::Capture);
    }

    #[test]
    fn en_passant_beats_capture() {
        let engine = StandardChess;
        let position = engine
            .parse("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .unwrap();
        let kind = classify(&engine, &position, mv("e5", "d6", MoveFlag::EnPassant)).unwrap();
        assert_eq!(kind, MoveKind::EnPassant);
    }

    #[test]
    fn promotion_with_and_without_capture() {
        let engine = StandardChess;
        let position = engine.parse("1n5k/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();

        let quiet = mv("a7", "a8", MoveFlag::Promote(Piece::Queen));
        assert_eq!(
            classify(&engine, &position, quiet).unwrap(),
            MoveKind::Promotion
        );

        let capturing = mv("a7", "b8", MoveFlag::Promote(Piece::Queen));
        assert_eq!(
            classify(&engine, &position, capturing).unwrap(),
            MoveKind::PromotionCapture
        );
    }

    #[test]
    fn castles() {
        let engine = StandardChess;
        let position = engine
            .parse("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1")
            .unwrap();

        let kingside = mv("e1", "g1", MoveFlag::CastleKingside);
        assert_eq!(
            classify(&engine, &position, kingside).unwrap(),
            MoveKind::KingSideCastle
        );

        let queenside = mv("e1", "c1", MoveFlag::CastleQueenside);
        assert_eq!(
            classify(&engine, &position, queenside).unwrap(),
            MoveKind::QueenSideCastle
        );
    }

    #[test]
    fn every_legal_move_classifies() {
        let engine = StandardChess;
        let position = engine
            .parse("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
        for m in engine.legal_moves(&position) {
            classify(&engine, &position, m).unwrap();
        }
    }
}

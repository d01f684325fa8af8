//! Move notation rendering: uci, san, and lan.
//!
//! SAN disambiguation and check/checkmate suffixes need legality answers,
//! so the renderers are generic over [`RulesEngine`] and query it rather
//! than re-deriving any rules.

use chess_core::{Move, Piece};
use chess_rules::RulesEngine;

/// Renders coordinate notation, e.g. "e2e4" or "e7e8q".
///
/// Always 4 characters, or 5 with a lowercase promotion letter.
pub fn uci(m: Move) -> String {
    m.to_uci()
}

/// Renders short algebraic notation for a legal move.
///
/// The position must be the state before the move. Examples: "e4", "Nf3",
/// "exd6", "Nbd2", "e8=Q", "O-O-O", "Ra8#".
pub fn san<R: RulesEngine>(rules: &R, position: &R::Position, m: Move) -> String {
    if rules.is_kingside_castle(position, m) {
        return with_check_suffix(rules, position, m, "O-O".to_string());
    }
    if rules.is_queenside_castle(position, m) {
        return with_check_suffix(rules, position, m, "O-O-O".to_string());
    }

    let (piece, _) = rules
        .piece_at(position, m.from)
        .expect("legal move starts on an occupied square");
    let capture = rules.is_capture(position, m);

    let mut san = String::new();
    if piece != Piece::Pawn {
        san.push(piece.san_char());
        san.push_str(&disambiguation(rules, position, m, piece));
    }
    if capture {
        if piece == Piece::Pawn {
            san.push(m.from.file().to_char());
        }
        san.push('x');
    }
    san.push_str(&m.to.to_algebraic());
    if let Some(promo) = m.flag.promotion_piece() {
        san.push('=');
        san.push(promo.san_char());
    }

    with_check_suffix(rules, position, m, san)
}

/// Renders long algebraic notation for a legal move.
///
/// Like san but the origin square is always spelled out: "e2-e4", "Ng1-f3",
/// "e5xd6", "a7-a8=Q". Castling still renders as "O-O"/"O-O-O".
pub fn lan<R: RulesEngine>(rules: &R, position: &R::Position, m: Move) -> String {
    if rules.is_kingside_castle(position, m) {
        return with_check_suffix(rules, position, m, "O-O".to_string());
    }
    if rules.is_queenside_castle(position, m) {
        return with_check_suffix(rules, position, m, "O-O-O".to_string());
    }

    let (piece, _) = rules
        .piece_at(position, m.from)
        .expect("legal move starts on an occupied square");

    let mut lan = String::new();
    if piece != Piece::Pawn {
        lan.push(piece.san_char());
    }
    lan.push_str(&m.from.to_algebraic());
    lan.push(if rules.is_capture(position, m) { 'x' } else { '-' });
    lan.push_str(&m.to.to_algebraic());
    if let Some(promo) = m.flag.promotion_piece() {
        lan.push('=');
        lan.push(promo.san_char());
    }

    with_check_suffix(rules, position, m, lan)
}

/// Minimal origin qualifier among same-type pieces that can legally reach
/// the same destination: file if that settles it, else rank, else both.
fn disambiguation<R: RulesEngine>(
    rules: &R,
    position: &R::Position,
    m: Move,
    piece: Piece,
) -> String {
    let same_dest: Vec<Move> = rules
        .legal_moves(position)
        .into_iter()
        .filter(|other| other.to == m.to)
        .filter(|other| {
            rules
                .piece_at(position, other.from)
                .map(|(p, _)| p == piece)
                .unwrap_or(false)
        })
        .collect();

    if same_dest.len() <= 1 {
        return String::new();
    }

    let sharing_file = same_dest
        .iter()
        .filter(|other| other.from.file() == m.from.file())
        .count();
    if sharing_file == 1 {
        return m.from.file().to_char().to_string();
    }

    let sharing_rank = same_dest
        .iter()
        .filter(|other| other.from.rank() == m.from.rank())
        .count();
    if sharing_rank == 1 {
        return m.from.rank().to_char().to_string();
    }

    m.from.to_algebraic()
}

fn with_check_suffix<R: RulesEngine>(
    rules: &R,
    position: &R::Position,
    m: Move,
    mut text: String,
) -> String {
    let next = rules.apply(position, m);
    if rules.is_checkmate(&next) {
        text.push('#');
    } else if rules.is_check(&next) {
        text.push('+');
    }
    text
}

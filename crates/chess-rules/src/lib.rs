//! Chess rules engine.
//!
//! This crate owns everything that requires a rules model:
//! - [`Position`] - board state with castling rights, en passant target,
//!   and move clocks, parsed from and serialized to FEN
//! - Legal move generation ([`legal_moves`]) and position mutation
//!   ([`apply`])
//! - Attack, check, and checkmate queries
//! - [`perft`] for move-generator validation
//! - The [`RulesEngine`] trait, the interface consumers program against,
//!   with [`StandardChess`] as the standard-rules implementation
//!
//! The board is a mailbox (one `Option<(Piece, Color)>` per square) rather
//! than a set of bitboards: consumers of this crate annotate a few dozen
//! moves per position, so generation speed is irrelevant next to clarity.

mod engine;
mod movegen;
mod perft;
mod position;

pub use engine::{RulesEngine, StandardChess};
pub use movegen::{apply, is_king_attacked, is_square_attacked, legal_moves};
pub use perft::perft;
pub use position::{CastlingRights, Position};

//! Golden test fixture generation for chess move generators.
//!
//! Given a position, this crate enumerates every legal move through a
//! [`RulesEngine`](chess_rules::RulesEngine), classifies each one, and
//! records everything a correct move generator must reproduce:
//!
//! - the classification (basic, capture, promotion, promotion-capture,
//!   en passant, kingside/queenside castle)
//! - origin, destination, moving piece, and captured/promotion pieces as
//!   case-coded letters
//! - the move in uci, san, and lan notation
//! - the FEN of the resulting position
//!
//! Test suites for independently written engines diff their own output
//! against these fixtures, so a classification or notation error here
//! silently corrupts every consumer. Everything suspicious is therefore a
//! hard error, never a guess.
//!
//! # Example
//!
//! ```
//! use chess_rules::StandardChess;
//! use fixture_gen::{Annotator, MoveKind};
//!
//! let annotator = Annotator::new(StandardChess);
//! let records = annotator
//!     .annotate_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
//!     .unwrap();
//! assert_eq!(records.len(), 20);
//! assert!(records.iter().all(|r| r.detail.kind == MoveKind::Basic));
//! ```

pub mod annotate;
pub mod classify;
pub mod driver;
pub mod notation;
pub mod record;

pub use annotate::{AnnotateError, Annotator};
pub use classify::classify;
pub use driver::{DriverError, TestCase};
pub use record::{MoveDetail, MoveKind, MoveRecord};

//! thirteen-rs: thirteen-card (Chinese poker) arrangement solver
//!
//! Goals:
//! - Split 13 cards into a 3-card top and two 5-card hands so that
//!   bottom >= middle >= top, picking the strongest legal split
//! - Kicker-complete hand scores, so ties are broken like real poker
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: solve a hand
//! ```
//! use thirteen_rs::evaluator::Category;
//! use thirteen_rs::search::analyze;
//!
//! let best = analyze("AH AD AC KH KS QD QH QS JC JD 9S 8H 7D").unwrap();
//! assert_eq!(best.key().bottom.category, Category::FullHouse);
//! assert_eq!(best.key().middle.category, Category::FullHouse);
//! println!("{best}");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin thirteen -- AH AD AC KH KS QD QH QS JC JD 9S 8H 7D
//! ```

pub mod arrangement;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod search;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

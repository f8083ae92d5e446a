//! Board geometry and the knight shortest-path engine behind the chess
//! visualization trainer.
//!
//! Everything here is pure and synchronous: squares, notation, square
//! colors, brother-square reflections, diagonal neighborhoods, the knight
//! move graph with its shortest-path search, and the [`GameRules`] trait
//! the trainer loop plays against. Terminal I/O and score persistence live
//! in the `chessvis-cli` crate.

mod diagonal;
mod games;
mod knight;
mod square;

pub use diagonal::diagonal_squares;
pub use games::{
    BrotherSquareGame, Challenge, ColorGame, DiagonalGame, GameRules, KnightPathGame,
};
pub use knight::{is_shortest_path, knight_neighbors, shortest_knight_path, KNIGHT_OFFSETS};
pub use square::{random_square, BoardError, Color, Square};

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use thiserror::Error;

/// File letters in board order; file 1 is 'a', file 8 is 'h'.
const FILE_LETTERS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Errors raised by square construction and answer parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("coordinate out of range: file {file}, rank {rank} (both must be 1-8)")]
    InvalidCoordinate { file: i16, rank: i16 },
    #[error("malformed square notation {0:?} (expected <a-h>:<1-8>)")]
    MalformedNotation(String),
    #[error("malformed answer {input:?}: expected {expected}")]
    MalformedAnswer { input: String, expected: &'static str },
}

/// Color of a square. Displays as `w` / `b`, the form the trainer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

impl FromStr for Color {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _ => Err(BoardError::MalformedAnswer {
                input: s.to_string(),
                expected: "'w' or 'b'",
            }),
        }
    }
}

/// A square on the 8x8 board. File and rank are both in `1..=8`; the type
/// cannot represent an off-board square.
///
/// Displays as `<letter>:<rank>`, e.g. `e:4`, and parses the same form
/// back. The two conversions are exact inverses over all 64 squares.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Result<Self, BoardError> {
        if Self::in_bounds(file as i16, rank as i16) {
            Ok(Self { file, rank })
        } else {
            Err(BoardError::InvalidCoordinate {
                file: file as i16,
                rank: rank as i16,
            })
        }
    }

    /// True iff both coordinates lie on the board. Signed so callers can
    /// test offset results before converting back.
    pub fn in_bounds(file: i16, rank: i16) -> bool {
        (1..=8).contains(&file) && (1..=8).contains(&rank)
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// The file rendered as its letter, 'a' through 'h'.
    pub fn file_letter(&self) -> char {
        FILE_LETTERS[self.file as usize - 1]
    }

    /// Color of this square. a1 is black and colors alternate from there,
    /// so even file-plus-rank parity means black.
    pub fn color(&self) -> Color {
        if (self.file + self.rank) % 2 == 0 {
            Color::Black
        } else {
            Color::White
        }
    }

    /// The brother square: the point reflection through the board center.
    /// An involution; a square and its brother share a color.
    pub fn brother(&self) -> Square {
        Square {
            file: 9 - self.file,
            rank: 9 - self.rank,
        }
    }

    /// Apply a signed offset, yielding the target square if it stays on
    /// the board.
    pub(crate) fn offset(&self, dfile: i8, drank: i8) -> Option<Square> {
        let file = self.file as i16 + dfile as i16;
        let rank = self.rank as i16 + drank as i16;
        if Self::in_bounds(file, rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in (file, rank) order.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8).flat_map(|file| (1..=8).map(move |rank| Square { file, rank }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_letter(), self.rank)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file_ch, sep, rank_ch) =
            match (chars.next(), chars.next(), chars.next(), chars.next()) {
                (Some(a), Some(b), Some(c), None) => (a, b, c),
                _ => return Err(BoardError::MalformedNotation(s.to_string())),
            };
        if sep != ':' || !FILE_LETTERS.contains(&file_ch) || !('1'..='8').contains(&rank_ch) {
            return Err(BoardError::MalformedNotation(s.to_string()));
        }
        Ok(Square {
            file: file_ch as u8 - b'a' + 1,
            rank: rank_ch as u8 - b'0',
        })
    }
}

/// Deal a uniformly random square with file and rank drawn from the given
/// sub-ranges. The knight game narrows the rank range to pin its endpoints
/// to the first and last rows.
///
/// Ranges must stay within `1..=8`; anything else is a caller bug.
pub fn random_square<R: Rng>(
    rng: &mut R,
    files: RangeInclusive<u8>,
    ranks: RangeInclusive<u8>,
) -> Square {
    let file = rng.gen_range(files);
    let rank = rng.gen_range(ranks);
    Square::new(file, rank).expect("file and rank ranges must stay on the board")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_notation_round_trip() {
        for square in Square::all() {
            let display = square.to_string();
            assert_eq!(display.parse::<Square>().unwrap(), square);
        }
        assert_eq!(sq("a:1"), Square::new(1, 1).unwrap());
        assert_eq!(sq("h:8"), Square::new(8, 8).unwrap());
        assert_eq!(sq("e:4").to_string(), "e:4");
    }

    #[test]
    fn test_malformed_notation_rejected() {
        for bad in ["", "e", "e4", "e:", ":4", "i:1", "e:9", "e:0", "e:44", "4:e", "E:4"] {
            assert_eq!(
                bad.parse::<Square>(),
                Err(BoardError::MalformedNotation(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_new_rejects_off_board() {
        assert!(matches!(
            Square::new(0, 4),
            Err(BoardError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            Square::new(4, 9),
            Err(BoardError::InvalidCoordinate { .. })
        ));
        assert!(Square::new(1, 8).is_ok());
    }

    #[test]
    fn test_square_colors() {
        assert_eq!(sq("a:1").color(), Color::Black);
        assert_eq!(sq("h:1").color(), Color::White);
        assert_eq!(sq("e:4").color(), Color::White);
        assert_eq!(sq("d:5").color(), Color::White);
        assert_eq!(sq("h:8").color(), Color::Black);
    }

    #[test]
    fn test_brother_squares() {
        assert_eq!(sq("a:1").brother(), sq("h:8"));
        assert_eq!(sq("h:8").brother(), sq("a:1"));
        assert_eq!(sq("e:4").brother(), sq("d:5"));
        assert_eq!(sq("b:6").brother(), sq("g:3"));
        assert_eq!(sq("g:3").brother(), sq("b:6"));
    }

    #[test]
    fn test_brother_is_involution_and_preserves_color() {
        for square in Square::all() {
            assert_eq!(square.brother().brother(), square);
            assert_eq!(square.brother().color(), square.color());
        }
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("w".parse::<Color>().unwrap(), Color::White);
        assert_eq!("b".parse::<Color>().unwrap(), Color::Black);
        assert!("x".parse::<Color>().is_err());
        assert!("wb".parse::<Color>().is_err());
    }

    #[test]
    fn test_random_square_honors_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let square = random_square(&mut rng, 1..=8, 1..=1);
            assert_eq!(square.rank(), 1);
        }
        for _ in 0..100 {
            let square = random_square(&mut rng, 3..=3, 8..=8);
            assert_eq!(square, sq("c:8"));
        }
    }
}

use crate::{
    diagonal_squares, is_shortest_path, random_square, shortest_knight_path, BoardError,
    Color, Square,
};
use rand::RngCore;
use std::fmt;

/// A dealt position the player must answer for. Most games show one
/// square; the knight game shows a start and a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Challenge {
    Single(Square),
    Pair { start: Square, end: Square },
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Challenge::Single(square) => write!(f, "{square}"),
            Challenge::Pair { start, end } => write!(f, "{start} -> {end}"),
        }
    }
}

/// One trainer variant: deals challenges, knows the correct answer for
/// each, and grades a submitted line against it. The session loop is
/// written once against this trait.
pub trait GameRules {
    fn name(&self) -> &'static str;

    /// One-line instructions shown when a session starts.
    fn instructions(&self) -> &'static str;

    fn deal(&self, rng: &mut dyn RngCore) -> Challenge;

    /// The canonical correct answer, shown after a wrong response.
    fn correct_answer(&self, challenge: &Challenge) -> String;

    /// `Ok(true)` right, `Ok(false)` wrong, `Err` when the line does not
    /// parse. The session re-prompts the same challenge on `Err`.
    fn grade(&self, answer: &str, challenge: &Challenge) -> Result<bool, BoardError>;
}

fn single(challenge: &Challenge, game: &str) -> Square {
    match challenge {
        Challenge::Single(square) => *square,
        Challenge::Pair { .. } => unreachable!("{game} deals single squares"),
    }
}

/// Name the color of a random square.
pub struct ColorGame;

impl GameRules for ColorGame {
    fn name(&self) -> &'static str {
        "color-square"
    }

    fn instructions(&self) -> &'static str {
        "Enter the color ('w' or 'b') of the square shown."
    }

    fn deal(&self, mut rng: &mut dyn RngCore) -> Challenge {
        Challenge::Single(random_square(&mut rng, 1..=8, 1..=8))
    }

    fn correct_answer(&self, challenge: &Challenge) -> String {
        single(challenge, self.name()).color().to_string()
    }

    fn grade(&self, answer: &str, challenge: &Challenge) -> Result<bool, BoardError> {
        let color: Color = answer.parse()?;
        Ok(color == single(challenge, self.name()).color())
    }
}

/// Name the brother square (the reflection through the board center) and
/// its color.
pub struct BrotherSquareGame;

impl GameRules for BrotherSquareGame {
    fn name(&self) -> &'static str {
        "brother-square"
    }

    fn instructions(&self) -> &'static str {
        "Enter the brother square and its color ('w' or 'b'), separated by a space."
    }

    fn deal(&self, mut rng: &mut dyn RngCore) -> Challenge {
        Challenge::Single(random_square(&mut rng, 1..=8, 1..=8))
    }

    fn correct_answer(&self, challenge: &Challenge) -> String {
        let brother = single(challenge, self.name()).brother();
        format!("{} {}", brother, brother.color())
    }

    fn grade(&self, answer: &str, challenge: &Challenge) -> Result<bool, BoardError> {
        let parts: Vec<&str> = answer.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(BoardError::MalformedAnswer {
                input: answer.to_string(),
                expected: "\"<square> <color>\"",
            });
        }
        let square: Square = parts[0].parse()?;
        let color: Color = parts[1].parse()?;
        let brother = single(challenge, self.name()).brother();
        Ok(square == brother && color == brother.color())
    }
}

/// List every square on the diagonals of a random square, in any order.
pub struct DiagonalGame;

impl GameRules for DiagonalGame {
    fn name(&self) -> &'static str {
        "diagonal-square"
    }

    fn instructions(&self) -> &'static str {
        "Enter every square on the diagonals of the square shown, separated by spaces."
    }

    fn deal(&self, mut rng: &mut dyn RngCore) -> Challenge {
        Challenge::Single(random_square(&mut rng, 1..=8, 1..=8))
    }

    fn correct_answer(&self, challenge: &Challenge) -> String {
        join(&diagonal_squares(single(challenge, self.name())))
    }

    fn grade(&self, answer: &str, challenge: &Challenge) -> Result<bool, BoardError> {
        let mut submitted = parse_squares(answer)?;
        submitted.sort();
        Ok(submitted == diagonal_squares(single(challenge, self.name())))
    }
}

/// Find a shortest knight path between two random squares, dealt on the
/// first and last ranks. Any minimal route is accepted, not just the one
/// the engine would produce.
pub struct KnightPathGame;

impl GameRules for KnightPathGame {
    fn name(&self) -> &'static str {
        "knight-path"
    }

    fn instructions(&self) -> &'static str {
        "Enter a shortest knight path from the first square to the second, \
         as squares separated by spaces (include both endpoints)."
    }

    fn deal(&self, mut rng: &mut dyn RngCore) -> Challenge {
        Challenge::Pair {
            start: random_square(&mut rng, 1..=8, 1..=1),
            end: random_square(&mut rng, 1..=8, 8..=8),
        }
    }

    fn correct_answer(&self, challenge: &Challenge) -> String {
        let Challenge::Pair { start, end } = challenge else {
            unreachable!("{} deals square pairs", self.name());
        };
        join(&shortest_knight_path(*start, *end))
    }

    fn grade(&self, answer: &str, challenge: &Challenge) -> Result<bool, BoardError> {
        let Challenge::Pair { start, end } = challenge else {
            unreachable!("{} deals square pairs", self.name());
        };
        let candidate = parse_squares(answer)?;
        let reference = shortest_knight_path(*start, *end);
        Ok(is_shortest_path(&candidate, &reference))
    }
}

fn join(squares: &[Square]) -> String {
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_squares(answer: &str) -> Result<Vec<Square>, BoardError> {
    let squares: Vec<Square> = answer
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()?;
    if squares.is_empty() {
        return Err(BoardError::MalformedAnswer {
            input: answer.to_string(),
            expected: "one or more squares",
        });
    }
    Ok(squares)
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
    fn test_color_game() {
        let game = ColorGame;
        let challenge = Challenge::Single(sq("e:4"));
        assert_eq!(game.correct_answer(&challenge), "w");
        assert_eq!(game.grade("w", &challenge), Ok(true));
        assert_eq!(game.grade("b", &challenge), Ok(false));
        assert!(game.grade("x", &challenge).is_err());
    }

    #[test]
    fn test_color_game_deals_singles() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(ColorGame.deal(&mut rng), Challenge::Single(_)));
    }

    #[test]
    fn test_brother_game() {
        let game = BrotherSquareGame;
        let challenge = Challenge::Single(sq("e:4"));
        assert_eq!(game.correct_answer(&challenge), "d:5 w");
        assert_eq!(game.grade("d:5 w", &challenge), Ok(true));
        assert_eq!(game.grade("d:5 b", &challenge), Ok(false));
        assert_eq!(game.grade("e:5 w", &challenge), Ok(false));
        assert!(game.grade("d5 w", &challenge).is_err());
        assert!(game.grade("d:5", &challenge).is_err());
        assert!(game.grade("d:5 w extra", &challenge).is_err());
    }

    #[test]
    fn test_diagonal_game_accepts_any_order() {
        let game = DiagonalGame;
        let challenge = Challenge::Single(sq("a:1"));
        assert_eq!(
            game.grade("h:8 g:7 f:6 e:5 d:4 c:3 b:2", &challenge),
            Ok(true)
        );
        // One square short.
        assert_eq!(game.grade("g:7 f:6 e:5 d:4 c:3 b:2", &challenge), Ok(false));
        assert!(game.grade("b:2 bogus", &challenge).is_err());
        assert!(game.grade("", &challenge).is_err());
    }

    #[test]
    fn test_knight_game_accepts_any_shortest_route() {
        let game = KnightPathGame;
        let challenge = Challenge::Pair {
            start: sq("a:1"),
            end: sq("d:4"),
        };
        assert_eq!(game.grade("a:1 b:3 d:4", &challenge), Ok(true));
        assert_eq!(game.grade("a:1 c:2 d:4", &challenge), Ok(true));
        // Not a knight move.
        assert_eq!(game.grade("a:1 d:4", &challenge), Ok(false));
        // Wrong endpoints.
        assert_eq!(game.grade("b:1 c:3 d:4", &challenge), Ok(false));
        assert!(game.grade("a:1 b3 d:4", &challenge).is_err());
    }

    #[test]
    fn test_knight_game_deals_first_and_last_rank() {
        let game = KnightPathGame;
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let Challenge::Pair { start, end } = game.deal(&mut rng) else {
                panic!("knight game should deal pairs");
            };
            assert_eq!(start.rank(), 1);
            assert_eq!(end.rank(), 8);
        }
    }

    #[test]
    fn test_challenge_display() {
        assert_eq!(Challenge::Single(sq("e:4")).to_string(), "e:4");
        let pair = Challenge::Pair {
            start: sq("b:1"),
            end: sq("g:8"),
        };
        assert_eq!(pair.to_string(), "b:1 -> g:8");
    }
}

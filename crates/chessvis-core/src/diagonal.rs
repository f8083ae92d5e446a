use crate::Square;

const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Every other square sharing a diagonal with `sq`, sorted by file then
/// rank. Corners see 7 squares; central squares up to 13.
pub fn diagonal_squares(sq: Square) -> Vec<Square> {
    let mut squares = Vec::new();
    for &(dfile, drank) in &DIAGONAL_DIRECTIONS {
        let mut current = sq;
        while let Some(next) = current.offset(dfile, drank) {
            squares.push(next);
            current = next;
        }
    }
    squares.sort();
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(squares: &[&str]) -> Vec<Square> {
        squares.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_corner_diagonal() {
        assert_eq!(
            diagonal_squares("a:1".parse().unwrap()),
            path(&["b:2", "c:3", "d:4", "e:5", "f:6", "g:7", "h:8"])
        );
        assert_eq!(
            diagonal_squares("h:8".parse().unwrap()),
            path(&["a:1", "b:2", "c:3", "d:4", "e:5", "f:6", "g:7"])
        );
    }

    #[test]
    fn test_central_diagonals() {
        let mut expected = path(&[
            "b:1", "c:2", "d:3", "b:7", "a:8", "c:6", "d:5", "f:5", "g:6", "h:7", "f:3",
            "g:2", "h:1",
        ]);
        expected.sort();
        assert_eq!(diagonal_squares("e:4".parse().unwrap()), expected);
    }

    #[test]
    fn test_diagonal_membership_is_symmetric() {
        for square in Square::all() {
            for other in diagonal_squares(square) {
                assert!(diagonal_squares(other).contains(&square));
            }
        }
    }
}

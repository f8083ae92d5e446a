use crate::Square;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// The eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Squares one knight move away from `sq`, in offset-table order.
/// Between 2 (corners) and 8 (central squares) results.
pub fn knight_neighbors(sq: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dfile, drank)| sq.offset(dfile, drank))
        .collect()
}

/// One minimal sequence of knight moves from `start` to `end`, both ends
/// inclusive. The returned route's length minus one is the graph distance.
///
/// Uniform-cost search over the knight move graph: a min-heap frontier
/// keyed by move count, a best-known-distance map consulted before
/// reinsertion, and a predecessor map for route reconstruction. Every edge
/// costs one move, so the first time `end` is popped its distance is
/// final and the search stops there.
///
/// When several minimal routes exist the one returned is unspecified, but
/// its length never varies. `start == end` yields the one-square,
/// zero-move route.
pub fn shortest_knight_path(start: Square, end: Square) -> Vec<Square> {
    if start == end {
        return vec![start];
    }

    let mut dist: HashMap<Square, u32> = HashMap::new();
    let mut prev: HashMap<Square, Square> = HashMap::new();
    let mut frontier = BinaryHeap::new();
    dist.insert(start, 0);
    frontier.push(Reverse((0u32, start)));

    while let Some(Reverse((moves, sq))) = frontier.pop() {
        if sq == end {
            return rebuild_route(&prev, start, end);
        }
        // Stale entry superseded by a later relaxation.
        if moves > dist[&sq] {
            continue;
        }
        for next in knight_neighbors(sq) {
            let through = moves + 1;
            if dist.get(&next).map_or(true, |&d| through < d) {
                dist.insert(next, through);
                prev.insert(next, sq);
                frontier.push(Reverse((through, next)));
            }
        }
    }

    // The knight graph on a full 8x8 board is connected, so running out of
    // frontier before reaching `end` means the neighbor generation is broken.
    unreachable!("no knight route from {start} to {end}");
}

fn rebuild_route(prev: &HashMap<Square, Square>, start: Square, end: Square) -> Vec<Square> {
    let mut route = vec![end];
    let mut sq = end;
    while sq != start {
        sq = prev[&sq];
        route.push(sq);
    }
    route.reverse();
    route
}

/// Whether `candidate` is itself a shortest route, judged against a
/// `reference` route already known to be minimal.
///
/// The length comparison is only sound when both routes connect the same
/// two squares, so mismatched endpoints are rejected here rather than left
/// to the caller. Past that: exact equality is accepted immediately, a
/// length mismatch is rejected, and otherwise every consecutive candidate
/// pair must be a knight-move edge. Any equal-endpoint route as short as
/// the known minimum is itself minimal.
pub fn is_shortest_path(candidate: &[Square], reference: &[Square]) -> bool {
    if candidate.first() != reference.first() || candidate.last() != reference.last() {
        return false;
    }
    if candidate == reference {
        return true;
    }
    if candidate.len() != reference.len() {
        return false;
    }
    candidate
        .windows(2)
        .all(|pair| knight_neighbors(pair[0]).contains(&pair[1]))
}

//! Wall-kick candidate tables for the rotation system.

use arrayvec::ArrayVec;

/// Ordered `(dx, dy)` offsets tried when rotating; the first entry is
/// always `(0, 0)`. Offsets follow the board convention (y grows upward).
pub(crate) type KickCandidates = ArrayVec<(i32, i32), 5>;

// Clockwise transitions, indexed by the source rotation state.
const NARROW_KICKS: [[(i32, i32); 5]; 4] = [
    // 0 -> 1
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 1 -> 2
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2 -> 3
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 3 -> 0
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

// The I piece's 4-wide grid shifts differently against walls.
const WIDE_KICKS: [[(i32, i32); 5]; 4] = [
    // 0 -> 1
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // 1 -> 2
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // 2 -> 3
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // 3 -> 0
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// Candidate offsets for a rotation from state `from` to state `to`.
///
/// Clockwise turns (half-turns included) use the table row of the source
/// state. An anticlockwise turn is the inverse of the clockwise turn from
/// `to` back to `from`, so it reuses that row with every offset negated.
#[expect(clippy::cast_sign_loss)]
pub(crate) fn kick_candidates(wide: bool, from: i32, to: i32, clockwise: bool) -> KickCandidates {
    let table = if wide { &WIDE_KICKS } else { &NARROW_KICKS };
    let key = if clockwise { from } else { to };
    let row = &table[key.rem_euclid(4) as usize];
    row.iter()
        .map(|&(dx, dy)| if clockwise { (dx, dy) } else { (-dx, -dy) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_candidate_is_always_the_plain_rotation() {
        for from in 0..4 {
            for (wide, clockwise) in [(false, true), (false, false), (true, true), (true, false)] {
                let to = if clockwise { (from + 1) % 4 } else { (from + 3) % 4 };
                let candidates = kick_candidates(wide, from, to, clockwise);
                assert_eq!(candidates[0], (0, 0));
                assert_eq!(candidates.len(), 5);
            }
        }
    }

    #[test]
    fn anticlockwise_negates_the_reverse_clockwise_row() {
        for from in 0..4 {
            let to = (from + 1) % 4;
            let cw = kick_candidates(false, from, to, true);
            let acw = kick_candidates(false, to, from, false);
            for (&(dx, dy), &(rx, ry)) in cw.iter().zip(acw.iter()) {
                assert_eq!((rx, ry), (-dx, -dy));
            }
        }
    }

    #[test]
    fn wide_and_narrow_tables_differ() {
        assert_ne!(
            kick_candidates(true, 0, 1, true),
            kick_candidates(false, 0, 1, true)
        );
    }
}

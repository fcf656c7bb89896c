use crate::board::Coord;

/// every coordinate in the 3x3 block around `coord` that lies on a `size` x `size`
/// board, excluding `coord` itself. row-major order, at most 8 entries.
pub fn neighbors(coord: Coord, size: usize) -> Vec<Coord> {
    let mut result = Vec::with_capacity(8);
    if size == 0 {
        return result;
    }

    // clip the block to the board; saturating_sub handles the top and left edges
    let rows = coord.row.saturating_sub(1)..=(coord.row + 1).min(size - 1);
    for row in rows {
        let cols = coord.col.saturating_sub(1)..=(coord.col + 1).min(size - 1);
        for col in cols {
            let candidate = Coord::new(row, col);
            if candidate != coord {
                result.push(candidate);
            }
        }
    }
    result
}

/// true when `b` is one king's move away from `a` and both are on the board
pub fn are_adjacent(a: Coord, b: Coord, size: usize) -> bool {
    a != b
        && a.row < size
        && a.col < size
        && b.row < size
        && b.col < size
        && a.row.abs_diff(b.row) <= 1
        && a.col.abs_diff(b.col) <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_neighbors_counts() {
        // corner, edge, centre
        assert_eq!(neighbors(Coord::new(0, 0), 5).len(), 3);
        assert_eq!(neighbors(Coord::new(4, 4), 5).len(), 3);
        assert_eq!(neighbors(Coord::new(0, 2), 5).len(), 5);
        assert_eq!(neighbors(Coord::new(2, 4), 5).len(), 5);
        assert_eq!(neighbors(Coord::new(2, 2), 5).len(), 8);
        assert!(neighbors(Coord::new(0, 0), 1).is_empty());
        assert!(neighbors(Coord::new(0, 0), 0).is_empty());
    }

    #[test]
    fn test_neighbors_order() {
        let expected: Vec<Coord> = [(0, 1), (1, 0), (1, 1)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(neighbors(Coord::new(0, 0), 3), expected);

        let expected: Vec<Coord> = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
            .into_iter()
            .map(Coord::from)
            .collect();
        assert_eq!(neighbors(Coord::new(1, 1), 3), expected);
    }

    #[test]
    fn test_neighbors_symmetry_exhaustive() {
        for size in 1..=6 {
            for a_row in 0..size {
                for a_col in 0..size {
                    let a = Coord::new(a_row, a_col);
                    for b_row in 0..size {
                        for b_col in 0..size {
                            let b = Coord::new(b_row, b_col);
                            assert_eq!(
                                neighbors(a, size).contains(&b),
                                neighbors(b, size).contains(&a)
                            );
                            assert_eq!(neighbors(a, size).contains(&b), are_adjacent(a, b, size));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_far_cells_not_adjacent() {
        assert!(!are_adjacent(Coord::new(0, 0), Coord::new(3, 3), 5));
        assert!(!are_adjacent(Coord::new(0, 0), Coord::new(0, 2), 5));
        assert!(!are_adjacent(Coord::new(1, 1), Coord::new(1, 1), 5));
        assert!(are_adjacent(Coord::new(1, 1), Coord::new(2, 2), 5));
        // off the board
        assert!(!are_adjacent(Coord::new(4, 4), Coord::new(5, 5), 5));
    }

    proptest! {
        #[test]
        fn prop_neighbors_symmetric(
            size in 1usize..12,
            a_row in 0usize..12,
            a_col in 0usize..12,
            b_row in 0usize..12,
            b_col in 0usize..12,
        ) {
            let a = Coord::new(a_row % size, a_col % size);
            let b = Coord::new(b_row % size, b_col % size);
            prop_assert_eq!(neighbors(a, size).contains(&b), neighbors(b, size).contains(&a));
        }

        #[test]
        fn prop_neighbors_in_bounds(size in 1usize..12, row in 0usize..12, col in 0usize..12) {
            let coord = Coord::new(row % size, col % size);
            let result = neighbors(coord, size);
            prop_assert!(result.len() <= 8);
            for neighbor in result {
                prop_assert!(neighbor.row < size && neighbor.col < size);
                prop_assert!(neighbor != coord);
                prop_assert!(neighbor.row.abs_diff(coord.row) <= 1);
                prop_assert!(neighbor.col.abs_diff(coord.col) <= 1);
            }
        }
    }
}

// patterns.rs - Named seed shapes, given as (row, col) offsets from the grid centre

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Single cell",
        cells: &[(0, 0)],
    },
    Pattern {
        name: "Cross",
        cells: &[(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)],
    },
    Pattern {
        name: "Bar",
        cells: &[(0, -2), (0, -1), (0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Diagonal",
        cells: &[(-2, -2), (-1, -1), (0, 0), (1, 1), (2, 2)],
    },
    Pattern {
        name: "Ring",
        cells: &[
            (-2, -1), (-2, 0), (-2, 1),
            (-1, -2), (-1, 2),
            (0, -2), (0, 2),
            (1, -2), (1, 2),
            (2, -1), (2, 0), (2, 1),
        ],
    },
    Pattern {
        name: "Checker block",
        cells: &[
            (-2, -2), (-2, 0), (-2, 2),
            (-1, -1), (-1, 1),
            (0, -2), (0, 0), (0, 2),
            (1, -1), (1, 1),
            (2, -2), (2, 0), (2, 2),
        ],
    },
];

/// Looks a pattern up by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("cross").map(|p| p.cells.len()), Some(5));
        assert_eq!(find("CHECKER BLOCK").map(|p| p.name), Some("Checker block"));
        assert!(find("glider").is_none());
    }

    #[test]
    fn test_pattern_cells_are_unique() {
        for pattern in PATTERNS {
            let mut cells = pattern.cells.to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }
}

//! Named seed patterns and the seed-kind enumeration.
//!
//! Patterns are pure data: a bounding box plus the coordinates of the
//! alive cells inside it. The controller stamps them centered into the
//! live grid. `SeedKind::Random` has no pattern; it seeds every cell
//! independently with a sparse alive probability.

use serde::{Deserialize, Serialize};

/// The closed set of selectable initial states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedKind {
    Random,
    Acorn,
    Pulsar,
    GliderGun,
    Pentadecathlon,
    Exploder,
}

impl SeedKind {
    /// The preset pattern for this kind, or `None` for `Random`.
    pub fn pattern(self) -> Option<&'static PresetPattern> {
        match self {
            SeedKind::Random => None,
            SeedKind::Acorn => Some(&ACORN),
            SeedKind::Pulsar => Some(&PULSAR),
            SeedKind::GliderGun => Some(&GLIDER_GUN),
            SeedKind::Pentadecathlon => Some(&PENTADECATHLON),
            SeedKind::Exploder => Some(&EXPLODER),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self.pattern() {
            Some(pattern) => pattern.display_name,
            None => "Random",
        }
    }
}

/// A named pattern: bounding box and the (x, y) coordinates of its
/// alive cells. Every other cell in the box is dead.
#[derive(Debug)]
pub struct PresetPattern {
    pub display_name: &'static str,
    pub width: usize,
    pub height: usize,
    pub alive_cells: &'static [(i32, i32)],
}

pub static ACORN: PresetPattern = PresetPattern {
    display_name: "Acorn",
    width: 7,
    height: 3,
    alive_cells: &[
        (0, 0), (1, 0), (4, 0), (5, 0), (6, 0),
        (3, 1),
        (1, 2),
    ],
};

pub static PULSAR: PresetPattern = PresetPattern {
    display_name: "Pulsar",
    width: 15,
    height: 15,
    alive_cells: &[
        (3, 1), (4, 1), (5, 1), (9, 1), (10, 1), (11, 1),
        (1, 3), (6, 3), (8, 3), (13, 3),
        (1, 4), (6, 4), (8, 4), (13, 4),
        (1, 5), (6, 5), (8, 5), (13, 5),
        (3, 6), (4, 6), (5, 6), (9, 6), (10, 6), (11, 6),
        (3, 8), (4, 8), (5, 8), (9, 8), (10, 8), (11, 8),
        (1, 9), (6, 9), (8, 9), (13, 9),
        (1, 10), (6, 10), (8, 10), (13, 10),
        (1, 11), (6, 11), (8, 11), (13, 11),
        (3, 13), (4, 13), (5, 13), (9, 13), (10, 13), (11, 13),
    ],
};

pub static GLIDER_GUN: PresetPattern = PresetPattern {
    display_name: "Glider Gun",
    width: 36,
    height: 9,
    alive_cells: &[
        (24, 0),
        (22, 1), (24, 1),
        (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
        (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
        (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
        (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
        (10, 6), (16, 6), (24, 6),
        (11, 7), (15, 7),
        (12, 8), (13, 8),
    ],
};

pub static PENTADECATHLON: PresetPattern = PresetPattern {
    display_name: "Penta-D",
    width: 16,
    height: 9,
    alive_cells: &[
        (5, 3), (10, 3),
        (3, 4), (4, 4), (6, 4), (7, 4), (8, 4), (9, 4), (11, 4), (12, 4),
        (5, 5), (10, 5),
    ],
};

pub static EXPLODER: PresetPattern = PresetPattern {
    display_name: "Exploder",
    width: 15,
    height: 15,
    alive_cells: &[
        (7, 6),
        (6, 7), (7, 7), (8, 7),
        (6, 8), (8, 8),
        (7, 9),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KINDS: [SeedKind; 6] = [
        SeedKind::Random,
        SeedKind::Acorn,
        SeedKind::Pulsar,
        SeedKind::GliderGun,
        SeedKind::Pentadecathlon,
        SeedKind::Exploder,
    ];

    #[test]
    fn test_patterns_fit_their_bounding_box() {
        for kind in ALL_KINDS {
            let Some(pattern) = kind.pattern() else {
                continue;
            };
            assert!(!pattern.alive_cells.is_empty(), "{:?} is empty", kind);
            for &(x, y) in pattern.alive_cells {
                assert!(
                    x >= 0 && (x as usize) < pattern.width && y >= 0 && (y as usize) < pattern.height,
                    "{:?} coordinate ({}, {}) outside {}x{} box",
                    kind,
                    x,
                    y,
                    pattern.width,
                    pattern.height
                );
            }
        }
    }

    #[test]
    fn test_patterns_have_no_duplicate_cells() {
        for kind in ALL_KINDS {
            let Some(pattern) = kind.pattern() else {
                continue;
            };
            let mut coords: Vec<_> = pattern.alive_cells.to_vec();
            coords.sort_unstable();
            coords.dedup();
            assert_eq!(coords.len(), pattern.alive_cells.len(), "{:?}", kind);
        }
    }

    #[test]
    fn test_random_has_no_pattern() {
        assert!(SeedKind::Random.pattern().is_none());
        assert_eq!(SeedKind::Random.display_name(), "Random");
        assert_eq!(SeedKind::GliderGun.display_name(), "Glider Gun");
    }

    #[test]
    fn test_seed_kind_yaml_names() {
        let kind: SeedKind = serde_yaml::from_str("glider_gun").unwrap();
        assert_eq!(kind, SeedKind::GliderGun);
        assert_eq!(serde_yaml::to_string(&SeedKind::Acorn).unwrap().trim(), "acorn");
    }
}

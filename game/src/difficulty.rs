use serde::{Deserialize, Serialize};

/// The ten preset goals, keyed by the digit that selects them on the difficulty screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    UnicellularOrganism,
    Moss,
    Mango,
    Jellyfish,
    Cockroach,
    Hamster,
    Ferret,
    Kangaroo,
    #[default]
    Human,
    Dolphin,
}

impl Difficulty {
    pub const ALL: [Difficulty; 10] = [
        Difficulty::UnicellularOrganism,
        Difficulty::Moss,
        Difficulty::Mango,
        Difficulty::Jellyfish,
        Difficulty::Cockroach,
        Difficulty::Hamster,
        Difficulty::Ferret,
        Difficulty::Kangaroo,
        Difficulty::Human,
        Difficulty::Dolphin,
    ];

    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            b'1'..=b'9' => Some(Self::ALL[(digit - b'1') as usize]),
            b'0' => Some(Self::Dolphin),
            _ => None,
        }
    }

    pub fn digit(self) -> char {
        match self {
            Self::Dolphin => '0',
            other => (b'1' + other.index() as u8) as char,
        }
    }

    /// Position in `ALL`, which lists the variants in declaration order.
    fn index(self) -> usize {
        self as usize
    }

    /// Tile value that wins the round.
    pub fn winning_tile(self) -> u32 {
        8 << self.index()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::UnicellularOrganism => "Unicellular Organism",
            Self::Moss => "Moss",
            Self::Mango => "Mango",
            Self::Jellyfish => "Jellyfish",
            Self::Cockroach => "Cockroach",
            Self::Hamster => "Hamster",
            Self::Ferret => "Ferret",
            Self::Kangaroo => "Kangaroo",
            Self::Human => "Human",
            Self::Dolphin => "Dolphin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_select_the_expected_goal() {
        let expected = [
            (b'1', 8),
            (b'2', 16),
            (b'3', 32),
            (b'4', 64),
            (b'5', 128),
            (b'6', 256),
            (b'7', 512),
            (b'8', 1024),
            (b'9', 2048),
            (b'0', 4096),
        ];
        for (digit, tile) in expected {
            let d = Difficulty::from_digit(digit).expect("digit maps to a level");
            assert_eq!(d.winning_tile(), tile);
            assert_eq!(d.digit(), digit as char);
        }
        assert_eq!(Difficulty::from_digit(b'x'), None);
    }

    #[test]
    fn all_lists_levels_in_declaration_order() {
        for (i, level) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(level.index(), i);
            assert_eq!(level.winning_tile(), 8 << i);
        }
    }

    #[test]
    fn labels_match_levels() {
        assert_eq!(Difficulty::UnicellularOrganism.label(), "Unicellular Organism");
        assert_eq!(Difficulty::Dolphin.label(), "Dolphin");
        assert_eq!(Difficulty::default().winning_tile(), 2048);
    }
}

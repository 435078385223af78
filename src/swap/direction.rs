use serde::{Deserialize, Serialize};

/// Which asset is treated as "send" at submission time. Toggling never
/// touches the displayed amounts or field labels; it only remaps which
/// registry assets the next submission transacts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    WbtcToBtc,
    BtcToWbtc,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::WbtcToBtc => Direction::BtcToWbtc,
            Direction::BtcToWbtc => Direction::WbtcToBtc,
        }
    }

    pub fn is_wbtc_to_btc(self) -> bool {
        self == Direction::WbtcToBtc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_wbtc_to_btc() {
        assert_eq!(Direction::default(), Direction::WbtcToBtc);
    }

    #[test]
    fn toggle_is_an_involution() {
        for direction in [Direction::WbtcToBtc, Direction::BtcToWbtc] {
            assert_ne!(direction.toggled(), direction);
            assert_eq!(direction.toggled().toggled(), direction);
        }
    }
}

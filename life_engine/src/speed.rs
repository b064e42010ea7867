// speed.rs - Speed levels and their turn intervals

use std::time::Duration;

use crate::error::Error;

/// How often the tick loop wakes up to check whether a turn is due.
/// Independent of the simulation speed.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Simulation speed, slowest first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Speed {
    Slowest = 1,
    Slow = 2,
    #[default]
    Normal = 3,
    Fast = 4,
    Fastest = 5,
}

impl Speed {
    pub const ALL: [Speed; 5] = [Speed::Slowest, Speed::Slow, Speed::Normal, Speed::Fast, Speed::Fastest];

    pub fn level(self) -> u8 {
        self as u8
    }

    /// Minimum wall-clock time between two turns.
    pub fn interval(self) -> Duration {
        match self {
            Speed::Slowest => Duration::from_secs(2),
            Speed::Slow    => Duration::from_secs(1),
            Speed::Normal  => Duration::from_millis(500),
            Speed::Fast    => Duration::from_millis(250),
            Speed::Fastest => Duration::from_millis(150),
        }
    }
}

impl TryFrom<u8> for Speed {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Speed::ALL
            .into_iter()
            .find(|speed| speed.level() == level)
            .ok_or(Error::InvalidSpeed(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_intervals() {
        let table = [(1, 2000), (2, 1000), (3, 500), (4, 250), (5, 150)];
        for (level, millis) in table {
            let speed = Speed::try_from(level).unwrap();
            assert_eq!(speed.level(), level);
            assert_eq!(speed.interval(), Duration::from_millis(millis));
        }
    }

    #[test]
    fn out_of_range_levels_are_rejected() {
        assert_eq!(Speed::try_from(0), Err(Error::InvalidSpeed(0)));
        assert_eq!(Speed::try_from(6), Err(Error::InvalidSpeed(6)));
    }

    #[test]
    fn default_is_half_second() {
        assert_eq!(Speed::default().interval(), Duration::from_millis(500));
    }
}

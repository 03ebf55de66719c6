use std::fmt::{Display, Formatter};

/// The gym's locations. Each one is known by its town name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Bridgewater,
    Edison,
    Franklin,
    Piscataway,
    Somerville,
}

impl Location {
    pub const ALL: [Location; 5] = [
        Location::Bridgewater,
        Location::Edison,
        Location::Franklin,
        Location::Piscataway,
        Location::Somerville,
    ];

    pub fn town(&self) -> &'static str {
        match self {
            Location::Bridgewater => "BRIDGEWATER",
            Location::Edison => "EDISON",
            Location::Franklin => "FRANKLIN",
            Location::Piscataway => "PISCATAWAY",
            Location::Somerville => "SOMERVILLE",
        }
    }

    pub fn county(&self) -> &'static str {
        match self {
            Location::Bridgewater | Location::Franklin | Location::Somerville => "SOMERSET",
            Location::Edison | Location::Piscataway => "MIDDLESEX",
        }
    }

    pub fn postal_code(&self) -> &'static str {
        match self {
            Location::Bridgewater => "08807",
            Location::Edison => "08837",
            Location::Franklin => "08873",
            Location::Piscataway => "08854",
            Location::Somerville => "08876",
        }
    }

    /// Case-insensitive lookup by town name.
    /// Returns [None] for unknown towns so that callers can report bad input.
    pub fn from_town(town: &str) -> Option<Location> {
        let town = town.trim();
        Self::ALL
            .into_iter()
            .find(|location| location.town().eq_ignore_ascii_case(town))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.town(), self.postal_code(), self.county())
    }
}

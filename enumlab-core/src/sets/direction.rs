//! Cardinal directions for a ship trying to get home.
//!
//! Home lies to the north-east, so North and East help and the other two
//! do not. Each direction carries its arrow as raw value.

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::closed_set::{ClosedSet, RawAssignment, RawValued};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr)]
pub enum CardinalDirection {
    North,
    South,
    East,
    West,
}

impl ClosedSet for CardinalDirection {
    const SET_NAME: &'static str = "CardinalDirection";
}

impl RawValued for CardinalDirection {
    type Raw = &'static str;
    const ASSIGNMENT: RawAssignment = RawAssignment::ExplicitText;

    fn raw_value(self) -> &'static str {
        match self {
            Self::North => "↑",
            Self::South => "↓",
            Self::East => "→",
            Self::West => "←",
        }
    }
}

/// Directions that bring the ship closer to home.
pub const HOMEWARD: [CardinalDirection; 2] = [CardinalDirection::North, CardinalDirection::East];

/// Tells the ship whether `direction` helps it get home.
pub fn help(direction: CardinalDirection) -> String {
    let arrow = direction.raw_value();
    match direction {
        CardinalDirection::North | CardinalDirection::East => {
            format!("The ship needs to go {} ({}).", direction, arrow)
        }
        CardinalDirection::South | CardinalDirection::West => format!(
            "This direction {} ({}) does not help the ship to get home.",
            direction, arrow
        ),
    }
}

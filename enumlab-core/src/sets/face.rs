//! Faces with text raw values.

use strum::{Display, EnumCount, EnumIter, IntoStaticStr};

use crate::closed_set::{ClosedSet, RawAssignment, RawValued};

/// A face whose raw value is its own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr)]
pub enum Face {
    Happy,
    Sad,
    Nerd,
}

impl ClosedSet for Face {
    const SET_NAME: &'static str = "Face";
}

impl RawValued for Face {
    type Raw = &'static str;
    const ASSIGNMENT: RawAssignment = RawAssignment::ImplicitText;

    fn raw_value(self) -> &'static str {
        self.name()
    }
}

/// A face drawn as an emoticon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr)]
pub enum Emoticon {
    Happy,
    Sad,
    Nerd,
}

impl ClosedSet for Emoticon {
    const SET_NAME: &'static str = "Emoticon";
}

impl RawValued for Emoticon {
    type Raw = &'static str;
    const ASSIGNMENT: RawAssignment = RawAssignment::ExplicitText;

    fn raw_value(self) -> &'static str {
        match self {
            Self::Happy => ":-)",
            Self::Sad => ":-(",
            Self::Nerd => "8-)",
        }
    }
}

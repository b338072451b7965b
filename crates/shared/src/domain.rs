use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! name_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

name_newtype!(FacilityName);
name_newtype!(ResidentName);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomNumber(pub u32);

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reported by the API; derived server-side from the room's current
/// resident list, never stored independently by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Vacant,
    #[serde(rename = "Partially Occupied")]
    PartiallyOccupied,
    Occupied,
}

impl RoomStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vacant => "Vacant",
            Self::PartiallyOccupied => "Partially Occupied",
            Self::Occupied => "Occupied",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    Private,
    #[serde(rename = "Semi-Private")]
    SemiPrivate,
}

impl RoomType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::SemiPrivate => "Semi-Private",
        }
    }
}

/// Display color for a room tile: vacant rooms are red, occupied
/// semi-private rooms yellow, occupied private rooms green.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomColor {
    Red,
    Yellow,
    Green,
}

impl RoomColor {
    pub fn for_room(status: RoomStatus, room_type: RoomType) -> Self {
        match (status, room_type) {
            (RoomStatus::Vacant, _) => Self::Red,
            (_, RoomType::SemiPrivate) => Self::Yellow,
            (_, RoomType::Private) => Self::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Overdue,
    #[serde(rename = "Upcoming Due")]
    UpcomingDue,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
            Self::UpcomingDue => "Upcoming Due",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Check,
    #[serde(rename = "Debit/Credit")]
    DebitCredit,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Cash, Self::Check, Self::DebitCredit];

    pub fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Check => "Check",
            Self::DebitCredit => "Debit/Credit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacant_rooms_are_red_regardless_of_type() {
        assert_eq!(
            RoomColor::for_room(RoomStatus::Vacant, RoomType::Private),
            RoomColor::Red
        );
        assert_eq!(
            RoomColor::for_room(RoomStatus::Vacant, RoomType::SemiPrivate),
            RoomColor::Red
        );
    }

    #[test]
    fn occupied_rooms_color_by_type() {
        assert_eq!(
            RoomColor::for_room(RoomStatus::Occupied, RoomType::SemiPrivate),
            RoomColor::Yellow
        );
        assert_eq!(
            RoomColor::for_room(RoomStatus::PartiallyOccupied, RoomType::SemiPrivate),
            RoomColor::Yellow
        );
        assert_eq!(
            RoomColor::for_room(RoomStatus::Occupied, RoomType::Private),
            RoomColor::Green
        );
    }

    #[test]
    fn status_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&RoomStatus::PartiallyOccupied).expect("serialize");
        assert_eq!(json, "\"Partially Occupied\"");
        let back: RoomStatus = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, RoomStatus::PartiallyOccupied);

        let json = serde_json::to_string(&PaymentStatus::UpcomingDue).expect("serialize");
        assert_eq!(json, "\"Upcoming Due\"");
        let json = serde_json::to_string(&PaymentMethod::DebitCredit).expect("serialize");
        assert_eq!(json, "\"Debit/Credit\"");
    }
}

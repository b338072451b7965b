use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        FacilityName, PaymentMethod, PaymentStatus, ResidentName, RoomNumber, RoomStatus, RoomType,
    },
    error::ApiError,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityInfo {
    pub total_beds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummary {
    pub room: RoomNumber,
    pub status: RoomStatus,
    pub room_type: RoomType,
}

/// One resident-to-room assignment with payment state. `due_day` is the
/// day of month rent is due.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyEntry {
    pub room: RoomNumber,
    pub resident: ResidentName,
    pub amount: f64,
    pub due_day: u8,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFacilityRequest {
    pub name: FacilityName,
    pub total_beds: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddRoomRequest {
    pub facility: FacilityName,
    pub room: RoomNumber,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddResidentRequest {
    pub facility: FacilityName,
    pub room: RoomNumber,
    pub resident: ResidentName,
    pub monthly_payment: f64,
    pub due_day: u8,
    pub move_in_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveResidentRequest {
    pub facility: FacilityName,
    pub room: RoomNumber,
    pub resident: ResidentName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPaymentRequest {
    pub facility: FacilityName,
    pub room: RoomNumber,
    pub resident: ResidentName,
    pub due_date: NaiveDate,
    pub paid_date: NaiveDate,
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Mutation envelope returned by the API: exactly one of the two keys is
/// expected to be present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MutationOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationOutcome {
    /// Maps the envelope to a result. A response carrying neither key is
    /// treated as a failure; callers never assume success.
    pub fn into_result(self) -> Result<String, ApiError> {
        if let Some(message) = self.error {
            return Err(ApiError::new(message));
        }
        match self.success {
            Some(message) => Ok(message),
            None => Err(ApiError::new(
                "API response carried neither a success nor an error key",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_error_key_wins() {
        let outcome: MutationOutcome =
            serde_json::from_str(r#"{"error":"Facility already exists"}"#).expect("deserialize");
        let err = outcome.into_result().expect_err("must fail");
        assert_eq!(err.message, "Facility already exists");
    }

    #[test]
    fn outcome_success_key_yields_message() {
        let outcome: MutationOutcome =
            serde_json::from_str(r#"{"success":"Room added"}"#).expect("deserialize");
        assert_eq!(outcome.into_result().expect("ok"), "Room added");
    }

    #[test]
    fn outcome_without_keys_is_a_failure() {
        let outcome: MutationOutcome = serde_json::from_str("{}").expect("deserialize");
        assert!(outcome.into_result().is_err());
    }

    #[test]
    fn occupancy_entry_deserializes_from_api_shape() {
        let entry: OccupancyEntry = serde_json::from_str(
            r#"{"room":12,"resident":"Ada Byron","amount":2500.0,"due_day":5,"status":"Overdue"}"#,
        )
        .expect("deserialize");
        assert_eq!(entry.room, RoomNumber(12));
        assert_eq!(entry.resident, ResidentName::from("Ada Byron"));
        assert_eq!(entry.status, PaymentStatus::Overdue);
    }
}

//! Modal form state and validation for the ledger dialogs.

use chrono::{Datelike, Local, NaiveDate};
use shared::domain::{FacilityName, PaymentMethod, ResidentName, RoomNumber};
use shared::protocol::{
    AddFacilityRequest, AddResidentRequest, AddRoomRequest, RecordPaymentRequest,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Default)]
pub struct AddFacilityForm {
    pub name: String,
    pub total_beds: String,
}

impl AddFacilityForm {
    pub fn validate(&self) -> Result<AddFacilityRequest, String> {
        let name = self.name.trim();
        let total_beds = self.total_beds.trim().parse::<u32>();
        match (name.is_empty(), total_beds) {
            (false, Ok(total_beds)) if total_beds > 0 => Ok(AddFacilityRequest {
                name: FacilityName::from(name),
                total_beds,
            }),
            _ => Err("Please enter a valid facility name and number of beds.".to_string()),
        }
    }
}

pub struct AddRoomForm {
    pub facility: FacilityName,
    pub room: String,
}

impl AddRoomForm {
    pub fn new(facility: FacilityName) -> Self {
        Self {
            facility,
            room: String::new(),
        }
    }

    pub fn validate(&self) -> Result<AddRoomRequest, String> {
        self.room
            .trim()
            .parse::<u32>()
            .map(|room| AddRoomRequest {
                facility: self.facility.clone(),
                room: RoomNumber(room),
            })
            .map_err(|_| "Please enter a room number.".to_string())
    }
}

pub struct AddResidentForm {
    pub facility: FacilityName,
    pub room: RoomNumber,
    pub name: String,
    pub monthly_payment: String,
    pub due_day: String,
    pub move_in_date: String,
}

impl AddResidentForm {
    pub fn new(facility: FacilityName, room: RoomNumber) -> Self {
        Self {
            facility,
            room,
            name: String::new(),
            monthly_payment: String::new(),
            due_day: String::new(),
            move_in_date: Local::now().date_naive().to_string(),
        }
    }

    pub fn validate(&self) -> Result<AddResidentRequest, String> {
        let name = self.name.trim();
        // Tolerate thousands separators in the amount field.
        let payment = self.monthly_payment.trim().replace(',', "");
        let due_day = self.due_day.trim();
        let move_in = self.move_in_date.trim();
        if name.is_empty() || payment.is_empty() || due_day.is_empty() || move_in.is_empty() {
            return Err("Please fill in all fields.".to_string());
        }
        let monthly_payment: f64 = payment
            .parse()
            .map_err(|_| "Invalid payment amount. Please enter a valid number.".to_string())?;
        let due_day: u8 = due_day
            .parse()
            .ok()
            .filter(|day| (1..=31).contains(day))
            .ok_or_else(|| "Please enter a due day between 1 and 31.".to_string())?;
        let move_in_date = NaiveDate::parse_from_str(move_in, DATE_FORMAT)
            .map_err(|_| "Please enter the move-in date as YYYY-MM-DD.".to_string())?;
        Ok(AddResidentRequest {
            facility: self.facility.clone(),
            room: self.room,
            resident: ResidentName::from(name),
            monthly_payment,
            due_day,
            move_in_date,
        })
    }
}

pub struct RecordPaymentForm {
    pub facility: FacilityName,
    pub room: RoomNumber,
    pub resident: ResidentName,
    pub due_date: String,
    pub paid_date: String,
    pub method: Option<PaymentMethod>,
    pub notes: String,
}

impl RecordPaymentForm {
    pub fn prefilled(
        facility: FacilityName,
        room: RoomNumber,
        resident: ResidentName,
        due_day: u8,
    ) -> Self {
        Self::prefilled_at(facility, room, resident, due_day, Local::now().date_naive())
    }

    // Due-date default lands on this month's due day, clamped to 28 so short
    // months never produce an invalid date.
    fn prefilled_at(
        facility: FacilityName,
        room: RoomNumber,
        resident: ResidentName,
        due_day: u8,
        today: NaiveDate,
    ) -> Self {
        let due_date =
            NaiveDate::from_ymd_opt(today.year(), today.month(), u32::from(due_day.clamp(1, 28)))
                .unwrap_or(today);
        Self {
            facility,
            room,
            resident,
            due_date: due_date.to_string(),
            paid_date: today.to_string(),
            method: None,
            notes: String::new(),
        }
    }

    pub fn validate(&self) -> Result<RecordPaymentRequest, String> {
        const MISSING: &str = "Please fill out all required fields (Due Date, Payment Date, Method).";

        let due = self.due_date.trim();
        let paid = self.paid_date.trim();
        let Some(method) = self.method else {
            return Err(MISSING.to_string());
        };
        if due.is_empty() || paid.is_empty() {
            return Err(MISSING.to_string());
        }
        let due_date = NaiveDate::parse_from_str(due, DATE_FORMAT)
            .map_err(|_| "Please enter the due date as YYYY-MM-DD.".to_string())?;
        let paid_date = NaiveDate::parse_from_str(paid, DATE_FORMAT)
            .map_err(|_| "Please enter the payment date as YYYY-MM-DD.".to_string())?;
        let notes = self.notes.trim();
        Ok(RecordPaymentRequest {
            facility: self.facility.clone(),
            room: self.room,
            resident: self.resident.clone(),
            due_date,
            paid_date,
            method,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facility_form_requires_name_and_positive_beds() {
        let form = AddFacilityForm {
            name: "  ".to_string(),
            total_beds: "12".to_string(),
        };
        assert!(form.validate().is_err());

        let form = AddFacilityForm {
            name: "Cedar House".to_string(),
            total_beds: "0".to_string(),
        };
        assert!(form.validate().is_err());

        let form = AddFacilityForm {
            name: " Cedar House ".to_string(),
            total_beds: " 12 ".to_string(),
        };
        let request = form.validate().expect("valid");
        assert_eq!(request.name, FacilityName::from("Cedar House"));
        assert_eq!(request.total_beds, 12);
    }

    #[test]
    fn room_form_rejects_non_numeric_input() {
        let mut form = AddRoomForm::new(FacilityName::from("Cedar House"));
        form.room = "1O1".to_string();
        assert_eq!(
            form.validate().expect_err("must fail"),
            "Please enter a room number."
        );

        form.room = " 104 ".to_string();
        assert_eq!(form.validate().expect("valid").room, RoomNumber(104));
    }

    #[test]
    fn resident_form_requires_every_field() {
        let mut form = AddResidentForm::new(FacilityName::from("Cedar House"), RoomNumber(101));
        form.name = "Mary Shelley".to_string();
        form.monthly_payment = String::new();
        form.due_day = "3".to_string();
        assert_eq!(
            form.validate().expect_err("must fail"),
            "Please fill in all fields."
        );
    }

    #[test]
    fn resident_form_accepts_comma_separated_amounts() {
        let mut form = AddResidentForm::new(FacilityName::from("Cedar House"), RoomNumber(101));
        form.name = "Mary Shelley".to_string();
        form.monthly_payment = "2,100.50".to_string();
        form.due_day = "3".to_string();
        form.move_in_date = "2024-06-01".to_string();

        let request = form.validate().expect("valid");
        assert_eq!(request.monthly_payment, 2100.50);
        assert_eq!(request.due_day, 3);
    }

    #[test]
    fn resident_form_rejects_bad_amounts_and_days() {
        let mut form = AddResidentForm::new(FacilityName::from("Cedar House"), RoomNumber(101));
        form.name = "Mary Shelley".to_string();
        form.monthly_payment = "lots".to_string();
        form.due_day = "3".to_string();
        assert_eq!(
            form.validate().expect_err("must fail"),
            "Invalid payment amount. Please enter a valid number."
        );

        form.monthly_payment = "2100".to_string();
        form.due_day = "32".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn payment_form_clamps_the_due_day_to_short_months() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).expect("date");
        let form = RecordPaymentForm::prefilled_at(
            FacilityName::from("Cedar House"),
            RoomNumber(102),
            ResidentName::from("Ada Byron"),
            31,
            today,
        );
        assert_eq!(form.due_date, "2024-02-28");
        assert_eq!(form.paid_date, "2024-02-10");
    }

    #[test]
    fn payment_form_requires_a_method() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).expect("date");
        let mut form = RecordPaymentForm::prefilled_at(
            FacilityName::from("Cedar House"),
            RoomNumber(102),
            ResidentName::from("Ada Byron"),
            5,
            today,
        );
        assert_eq!(
            form.validate().expect_err("must fail"),
            "Please fill out all required fields (Due Date, Payment Date, Method)."
        );

        form.method = Some(PaymentMethod::Check);
        form.notes = "  ".to_string();
        let request = form.validate().expect("valid");
        assert_eq!(request.due_date.to_string(), "2024-06-05");
        assert_eq!(request.notes, None);
    }
}

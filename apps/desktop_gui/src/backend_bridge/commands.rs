//! Backend commands queued from UI to backend worker.

use shared::protocol::{
    AddFacilityRequest, AddResidentRequest, AddRoomRequest, RecordPaymentRequest,
    RemoveResidentRequest,
};

pub enum BackendCommand {
    RefreshAll,
    AddFacility(AddFacilityRequest),
    AddRoom(AddRoomRequest),
    AddResident(AddResidentRequest),
    RemoveResident(RemoveResidentRequest),
    RecordPayment(RecordPaymentRequest),
    LocateResident { name: String },
}

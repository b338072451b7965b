//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::RefreshAll => "refresh_all",
        BackendCommand::AddFacility(_) => "add_facility",
        BackendCommand::AddRoom(_) => "add_room",
        BackendCommand::AddResident(_) => "add_resident",
        BackendCommand::RemoveResident(_) => "remove_resident",
        BackendCommand::RecordPayment(_) => "record_payment",
        BackendCommand::LocateResident { .. } => "locate_resident",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "Command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker disconnected; restart the application".to_string();
        }
    }
}

//! Backend worker: owns the tokio runtime and the ledger client.

use std::thread;

use client_core::{GatewayError, HttpGateway, LedgerClient};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || run_worker(server_url, cmd_rx, ui_tx));
}

fn run_worker(server_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: failed to build runtime: {err}"),
            )));
            tracing::error!("failed to build backend runtime: {err}");
            return;
        }
    };

    runtime.block_on(async move {
        let gateway = match HttpGateway::new(&server_url) {
            Ok(gateway) => gateway,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err}"),
                )));
                tracing::error!(%server_url, "invalid server url: {err}");
                return;
            }
        };
        let client = LedgerClient::new(gateway);
        tracing::info!(%server_url, "backend worker started");

        send_refresh(&client, &ui_tx).await;

        // Commands run strictly in arrival order; the view refresh inside a
        // mutation completes before the next command starts.
        while let Ok(cmd) = cmd_rx.recv() {
            handle_command(&client, &ui_tx, cmd).await;
        }
    });
}

async fn send_refresh(client: &LedgerClient<HttpGateway>, ui_tx: &Sender<UiEvent>) {
    match client.refresh_all().await {
        Ok(()) => {
            let _ = ui_tx.try_send(UiEvent::SnapshotLoaded(client.snapshot().await));
        }
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                UiErrorContext::Refresh,
                err.to_string(),
            )));
        }
    }
}

async fn handle_command(
    client: &LedgerClient<HttpGateway>,
    ui_tx: &Sender<UiEvent>,
    cmd: BackendCommand,
) {
    match cmd {
        BackendCommand::RefreshAll => send_refresh(client, ui_tx).await,
        BackendCommand::AddFacility(request) => {
            let result = client.add_facility(request).await;
            finish_mutation(client, ui_tx, result, "Facility added successfully!".to_string())
                .await;
        }
        BackendCommand::AddRoom(request) => {
            let result = client.add_room(request).await;
            finish_mutation(client, ui_tx, result, "Room added successfully!".to_string()).await;
        }
        BackendCommand::AddResident(request) => {
            let result = client.add_resident(request).await;
            finish_mutation(
                client,
                ui_tx,
                result,
                "Resident added successfully!".to_string(),
            )
            .await;
        }
        BackendCommand::RemoveResident(request) => {
            let notice = format!("{} removed successfully.", request.resident);
            let result = client.remove_resident(request).await;
            finish_mutation(client, ui_tx, result, notice).await;
        }
        BackendCommand::RecordPayment(request) => {
            let notice = format!("Payment recorded for {}.", request.resident);
            let result = client.record_payment(request).await;
            finish_mutation(client, ui_tx, result, notice).await;
        }
        BackendCommand::LocateResident { name } => match client.locate_resident(&name).await {
            Some((facility, room)) => {
                let _ = ui_tx.try_send(UiEvent::ResidentLocated {
                    name,
                    facility,
                    room,
                });
            }
            None => {
                let _ = ui_tx.try_send(UiEvent::ResidentNotFound { name });
            }
        },
    }
}

async fn finish_mutation(
    client: &LedgerClient<HttpGateway>,
    ui_tx: &Sender<UiEvent>,
    result: Result<String, GatewayError>,
    notice: String,
) {
    match result {
        Ok(message) => {
            tracing::debug!(%message, "mutation accepted");
            let _ = ui_tx.try_send(UiEvent::MutationSucceeded {
                notice,
                snapshot: client.snapshot().await,
            });
        }
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                UiErrorContext::Mutation,
                err.to_string(),
            )));
        }
    }
}

//! App shell: screen stack, modal dialogs, and backend event intake.

use std::time::Duration;

use client_core::ViewSnapshot;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::{FacilityName, PaymentMethod, ResidentName, RoomColor, RoomNumber};
use shared::protocol::RemoveResidentRequest;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::forms::{AddFacilityForm, AddResidentForm, AddRoomForm, RecordPaymentForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Overview,
    FacilityDetail {
        facility: FacilityName,
    },
    RoomDetail {
        facility: FacilityName,
        room: RoomNumber,
    },
}

pub enum Dialog {
    AddFacility(AddFacilityForm),
    AddRoom(AddRoomForm),
    AddResident(AddResidentForm),
    RecordPayment(RecordPaymentForm),
    ConfirmRemoval {
        facility: FacilityName,
        room: RoomNumber,
        resident: ResidentName,
    },
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

enum DialogOutcome {
    Keep,
    Close,
    Dispatch(BackendCommand),
    Notice(Notice),
}

pub struct LedgerApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    snapshot: ViewSnapshot,
    stack: Vec<Screen>,
    dialog: Option<Dialog>,
    notice: Option<Notice>,

    selected_facility: Option<FacilityName>,
    selected_resident: Option<ResidentName>,
    locator_query: String,
    status: String,
}

impl LedgerApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            snapshot: ViewSnapshot::default(),
            stack: vec![Screen::Overview],
            dialog: None,
            notice: None,
            selected_facility: None,
            selected_resident: None,
            locator_query: String::new(),
            status: "Loading data from server...".to_string(),
        }
    }

    fn current_screen(&self) -> Screen {
        self.stack.last().cloned().unwrap_or(Screen::Overview)
    }

    fn push_screen(&mut self, screen: Screen) {
        self.selected_resident = None;
        self.stack.push(screen);
    }

    // The overview is the root of the stack and never pops.
    fn pop_screen(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.selected_resident = None;
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::SnapshotLoaded(snapshot) => {
                    self.snapshot = snapshot;
                    self.status = "Data loaded".to_string();
                }
                UiEvent::MutationSucceeded { notice, snapshot } => {
                    self.snapshot = snapshot;
                    self.dialog = None;
                    self.status = notice.clone();
                    self.notice = Some(Notice::new("Success", notice));
                }
                UiEvent::ResidentLocated {
                    name,
                    facility,
                    room,
                } => {
                    self.notice = Some(Notice::new(
                        "Resident Found",
                        format!("{name} is in {facility}, Room {room}"),
                    ));
                }
                UiEvent::ResidentNotFound { name } => {
                    self.notice = Some(Notice::new(
                        "Resident Not Found",
                        format!("{name} not found in the system."),
                    ));
                }
                UiEvent::Error(err) => {
                    let message = err.dialog_message();
                    self.status = message.clone();
                    self.notice = Some(Notice::new(err.dialog_title(), message));
                }
            }
        }
    }

    fn show_overview(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("HavenLedger - Facility Overview");
        let overview = self.snapshot.facility_overview();
        ui.label(
            egui::RichText::new(format!(
                "Total Monthly Revenue Across Facilities: ${:.2}",
                overview.total_monthly_revenue
            ))
            .strong(),
        );

        ui.horizontal(|ui| {
            ui.label("Resident Locator:");
            ui.add(egui::TextEdit::singleline(&mut self.locator_query).desired_width(240.0));
            if ui.button("Search").clicked() {
                let name = self.locator_query.trim().to_string();
                if !name.is_empty() {
                    dispatch_backend_command(
                        &self.cmd_tx,
                        BackendCommand::LocateResident { name },
                        &mut self.status,
                    );
                }
            }
        });

        ui.add_space(6.0);
        egui::ScrollArea::vertical().max_height(360.0).show(ui, |ui| {
            egui::Grid::new("facility_overview_table")
                .striped(true)
                .min_col_width(90.0)
                .show(ui, |ui| {
                    ui.strong("Facility Name");
                    ui.strong("Vacant");
                    ui.strong("Monthly Revenue");
                    ui.strong("Overdue");
                    ui.strong("Upcoming Due");
                    ui.strong("Total Beds");
                    ui.end_row();

                    for row in &overview.rows {
                        let selected = self.selected_facility.as_ref() == Some(&row.facility);
                        if ui
                            .selectable_label(selected, row.facility.to_string())
                            .clicked()
                        {
                            self.selected_facility = Some(row.facility.clone());
                        }
                        ui.label(row.vacant.to_string());
                        ui.label(format!("${:.2}", row.monthly_revenue));
                        ui.label(row.overdue.to_string());
                        ui.label(row.upcoming_due.to_string());
                        ui.label(
                            row.total_beds
                                .map(|beds| beds.to_string())
                                .unwrap_or_else(|| "N/A".to_string()),
                        );
                        ui.end_row();
                    }
                });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let can_view = self.selected_facility.is_some();
            if ui
                .add_enabled(can_view, egui::Button::new("View Facility Details"))
                .clicked()
            {
                if let Some(facility) = self.selected_facility.clone() {
                    self.push_screen(Screen::FacilityDetail { facility });
                }
            }
            if ui.button("Add Facility").clicked() {
                self.dialog = Some(Dialog::AddFacility(AddFacilityForm::default()));
            }
            if ui.button("Refresh").clicked() {
                dispatch_backend_command(&self.cmd_tx, BackendCommand::RefreshAll, &mut self.status);
            }
            if ui.button("Exit").clicked() {
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    }

    fn show_facility_detail(&mut self, ui: &mut egui::Ui, facility: &FacilityName) {
        ui.heading(format!("{facility} - Room Overview"));

        let tiles = self.snapshot.room_tiles(facility);
        let mut clicked_room = None;
        for chunk in tiles.chunks(5) {
            ui.horizontal(|ui| {
                for tile in chunk {
                    let button = egui::Button::new(
                        egui::RichText::new(&tile.label)
                            .color(egui::Color32::BLACK)
                            .strong(),
                    )
                    .fill(tile_fill(tile.color))
                    .min_size(egui::vec2(120.0, 56.0));
                    if ui.add(button).clicked() {
                        clicked_room = Some(tile.room);
                    }
                }
            });
        }
        if let Some(room) = clicked_room {
            self.push_screen(Screen::RoomDetail {
                facility: facility.clone(),
                room,
            });
        }

        ui.horizontal(|ui| {
            ui.label("Legend:");
            ui.colored_label(tile_fill(RoomColor::Red), "Red = Vacant");
            ui.colored_label(
                tile_fill(RoomColor::Yellow),
                "Yellow = Occupied (Semi-Private)",
            );
            ui.colored_label(tile_fill(RoomColor::Green), "Green = Occupied (Private)");
        });

        ui.add_space(8.0);
        ui.label(egui::RichText::new("Resident Payments").strong());
        let payments = self.snapshot.occupancy_for_facility(facility);
        egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
            egui::Grid::new("facility_payments_table")
                .striped(true)
                .min_col_width(90.0)
                .show(ui, |ui| {
                    ui.strong("Room #");
                    ui.strong("Resident Name");
                    ui.strong("Amount Due");
                    ui.strong("Payment Status");
                    ui.strong("Due Day");
                    ui.end_row();

                    for entry in &payments {
                        ui.label(entry.room.to_string());
                        ui.label(entry.resident.to_string());
                        ui.label(format!("${:.2}", entry.amount));
                        ui.label(entry.status.label());
                        ui.label(format!("Day {}", entry.due_day));
                        ui.end_row();
                    }
                });
        });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Add Room").clicked() {
                self.dialog = Some(Dialog::AddRoom(AddRoomForm::new(facility.clone())));
            }
            if ui.button("Back").clicked() {
                self.pop_screen();
            }
        });
    }

    fn show_room_detail(&mut self, ui: &mut egui::Ui, facility: &FacilityName, room: RoomNumber) {
        ui.heading(format!("Room {room} Details"));
        ui.label(egui::RichText::new("Resident(s)").strong());

        let residents = self.snapshot.residents_in_room(facility, room);
        egui::Grid::new("room_residents_table")
            .striped(true)
            .min_col_width(110.0)
            .show(ui, |ui| {
                ui.strong("Resident Name");
                ui.strong("Monthly Payment");
                ui.strong("Payment Due Date");
                ui.strong("Status");
                ui.end_row();

                if residents.is_empty() {
                    ui.label("No Residents");
                    ui.label("-");
                    ui.label("-");
                    ui.label("-");
                    ui.end_row();
                }
                for entry in &residents {
                    let selected = self.selected_resident.as_ref() == Some(&entry.resident);
                    if ui
                        .selectable_label(selected, entry.resident.to_string())
                        .clicked()
                    {
                        self.selected_resident = Some(entry.resident.clone());
                    }
                    ui.label(format!("${:.2}", entry.amount));
                    ui.label(format!("Day {}", entry.due_day));
                    ui.label(entry.status.label());
                    ui.end_row();
                }
            });

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Add Resident").clicked() {
                self.dialog = Some(Dialog::AddResident(AddResidentForm::new(
                    facility.clone(),
                    room,
                )));
            }
            if ui.button("Remove Resident").clicked() {
                match self.selected_resident.clone() {
                    Some(resident) => {
                        self.dialog = Some(Dialog::ConfirmRemoval {
                            facility: facility.clone(),
                            room,
                            resident,
                        });
                    }
                    None => {
                        self.notice = Some(Notice::new(
                            "No selection",
                            "Please select a valid resident to remove.",
                        ));
                    }
                }
            }
            if ui.button("Mark as Paid").clicked() {
                let selected = self.selected_resident.clone().and_then(|resident| {
                    residents
                        .iter()
                        .find(|entry| entry.resident == resident)
                        .map(|entry| (resident, entry.due_day))
                });
                match selected {
                    Some((resident, due_day)) => {
                        self.dialog = Some(Dialog::RecordPayment(RecordPaymentForm::prefilled(
                            facility.clone(),
                            room,
                            resident,
                            due_day,
                        )));
                    }
                    None => {
                        self.notice =
                            Some(Notice::new("No selection", "Please select a valid resident."));
                    }
                }
            }
            if ui.button("Back").clicked() {
                self.pop_screen();
            }
        });
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(mut dialog) = self.dialog.take() else {
            return;
        };
        let notice_open = self.notice.is_some();
        let mut outcome = DialogOutcome::Keep;

        match &mut dialog {
            Dialog::AddFacility(form) => {
                egui::Window::new("Add Facility")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                    .show(ctx, |ui| {
                        ui.add_enabled_ui(!notice_open, |ui| {
                            ui.label("Facility Name:");
                            ui.text_edit_singleline(&mut form.name);
                            ui.label("Total Number of Beds:");
                            ui.text_edit_singleline(&mut form.total_beds);
                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                if ui.button("Add Facility").clicked() {
                                    outcome = match form.validate() {
                                        Ok(request) => DialogOutcome::Dispatch(
                                            BackendCommand::AddFacility(request),
                                        ),
                                        Err(message) => {
                                            DialogOutcome::Notice(Notice::new("Error", message))
                                        }
                                    };
                                }
                                if ui.button("Cancel").clicked() {
                                    outcome = DialogOutcome::Close;
                                }
                            });
                        });
                    });
            }
            Dialog::AddRoom(form) => {
                egui::Window::new(format!("Add Room - {}", form.facility))
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                    .show(ctx, |ui| {
                        ui.add_enabled_ui(!notice_open, |ui| {
                            ui.label("Room Number:");
                            ui.text_edit_singleline(&mut form.room);
                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                if ui.button("Add Room").clicked() {
                                    outcome = match form.validate() {
                                        Ok(request) => DialogOutcome::Dispatch(
                                            BackendCommand::AddRoom(request),
                                        ),
                                        Err(message) => {
                                            DialogOutcome::Notice(Notice::new("Error", message))
                                        }
                                    };
                                }
                                if ui.button("Cancel").clicked() {
                                    outcome = DialogOutcome::Close;
                                }
                            });
                        });
                    });
            }
            Dialog::AddResident(form) => {
                egui::Window::new(format!("Add Resident - {}", form.facility))
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                    .show(ctx, |ui| {
                        ui.add_enabled_ui(!notice_open, |ui| {
                            ui.label(format!("Add Resident to Room {}", form.room));
                            ui.label("Resident Name:");
                            ui.text_edit_singleline(&mut form.name);
                            ui.label("Monthly Payment:");
                            ui.text_edit_singleline(&mut form.monthly_payment);
                            ui.label("Payment Due Day (1-31):");
                            ui.text_edit_singleline(&mut form.due_day);
                            ui.label("Move-in Date (YYYY-MM-DD):");
                            ui.text_edit_singleline(&mut form.move_in_date);
                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                if ui.button("Add Resident").clicked() {
                                    outcome = match form.validate() {
                                        Ok(request) => DialogOutcome::Dispatch(
                                            BackendCommand::AddResident(request),
                                        ),
                                        Err(message) => {
                                            DialogOutcome::Notice(Notice::new("Error", message))
                                        }
                                    };
                                }
                                if ui.button("Cancel").clicked() {
                                    outcome = DialogOutcome::Close;
                                }
                            });
                        });
                    });
            }
            Dialog::RecordPayment(form) => {
                egui::Window::new("Record Payment")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                    .show(ctx, |ui| {
                        ui.add_enabled_ui(!notice_open, |ui| {
                            ui.label(format!(
                                "Recording payment for {} (Room {})",
                                form.resident, form.room
                            ));
                            ui.label("Payment Due Date (applies to):");
                            ui.text_edit_singleline(&mut form.due_date);
                            ui.label("Payment Date (actual paid):");
                            ui.text_edit_singleline(&mut form.paid_date);
                            ui.label("Payment Method:");
                            egui::ComboBox::from_id_source("payment_method_combo")
                                .selected_text(
                                    form.method.map(PaymentMethod::label).unwrap_or("Select..."),
                                )
                                .show_ui(ui, |ui| {
                                    for method in PaymentMethod::ALL {
                                        ui.selectable_value(
                                            &mut form.method,
                                            Some(method),
                                            method.label(),
                                        );
                                    }
                                });
                            ui.label("Notes (optional):");
                            ui.text_edit_singleline(&mut form.notes);
                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                if ui.button("Record Payment").clicked() {
                                    outcome = match form.validate() {
                                        Ok(request) => DialogOutcome::Dispatch(
                                            BackendCommand::RecordPayment(request),
                                        ),
                                        Err(message) => DialogOutcome::Notice(Notice::new(
                                            "Missing Info",
                                            message,
                                        )),
                                    };
                                }
                                if ui.button("Cancel").clicked() {
                                    outcome = DialogOutcome::Close;
                                }
                            });
                        });
                    });
            }
            Dialog::ConfirmRemoval {
                facility,
                room,
                resident,
            } => {
                egui::Window::new("Confirm Removal")
                    .collapsible(false)
                    .resizable(false)
                    .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                    .show(ctx, |ui| {
                        ui.add_enabled_ui(!notice_open, |ui| {
                            ui.label(format!("Are you sure you want to remove {resident}?"));
                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                if ui.button("Yes").clicked() {
                                    outcome = DialogOutcome::Dispatch(
                                        BackendCommand::RemoveResident(RemoveResidentRequest {
                                            facility: facility.clone(),
                                            room: *room,
                                            resident: resident.clone(),
                                        }),
                                    );
                                }
                                if ui.button("No").clicked() {
                                    outcome = DialogOutcome::Close;
                                }
                            });
                        });
                    });
            }
        }

        match outcome {
            DialogOutcome::Keep => self.dialog = Some(dialog),
            DialogOutcome::Close => {}
            // The form stays open until the backend reports the outcome.
            DialogOutcome::Dispatch(cmd) => {
                dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status);
                self.dialog = Some(dialog);
            }
            DialogOutcome::Notice(notice) => {
                self.notice = Some(notice);
                self.dialog = Some(dialog);
            }
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notice.clone() else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(notice.title)
            .id(egui::Id::new("notice_dialog"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(notice.message);
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }
}

fn tile_fill(color: RoomColor) -> egui::Color32 {
    match color {
        RoomColor::Red => egui::Color32::from_rgb(205, 92, 92),
        RoomColor::Yellow => egui::Color32::from_rgb(222, 199, 69),
        RoomColor::Green => egui::Color32::from_rgb(96, 176, 112),
    }
}

impl eframe::App for LedgerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let blocked = self.dialog.is_some() || self.notice.is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                match self.current_screen() {
                    Screen::Overview => self.show_overview(ui, ctx),
                    Screen::FacilityDetail { facility } => {
                        self.show_facility_detail(ui, &facility)
                    }
                    Screen::RoomDetail { facility, room } => {
                        self.show_room_detail(ui, &facility, room)
                    }
                }
                ui.separator();
                ui.small(&self.status);
            });
        });

        self.show_dialog(ctx);
        self.show_notice(ctx);

        // Keep polling backend events while the window is idle.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_core::ViewState;
    use crossbeam_channel::bounded;
    use shared::protocol::FacilityInfo;

    fn test_app() -> (
        LedgerApp,
        Sender<UiEvent>,
        Receiver<BackendCommand>,
    ) {
        let (cmd_tx, cmd_rx) = bounded(8);
        let (ui_tx, ui_rx) = bounded(8);
        (LedgerApp::new(cmd_tx, ui_rx), ui_tx, cmd_rx)
    }

    #[test]
    fn starts_on_the_overview_screen() {
        let (app, _ui_tx, _cmd_rx) = test_app();
        assert_eq!(app.current_screen(), Screen::Overview);
    }

    #[test]
    fn back_never_pops_the_overview() {
        let (mut app, _ui_tx, _cmd_rx) = test_app();
        app.push_screen(Screen::FacilityDetail {
            facility: FacilityName::from("Cedar House"),
        });
        app.push_screen(Screen::RoomDetail {
            facility: FacilityName::from("Cedar House"),
            room: RoomNumber(101),
        });

        app.pop_screen();
        assert_eq!(
            app.current_screen(),
            Screen::FacilityDetail {
                facility: FacilityName::from("Cedar House"),
            }
        );
        app.pop_screen();
        app.pop_screen();
        app.pop_screen();
        assert_eq!(app.current_screen(), Screen::Overview);
    }

    #[test]
    fn navigation_clears_the_resident_selection() {
        let (mut app, _ui_tx, _cmd_rx) = test_app();
        app.selected_resident = Some(ResidentName::from("Ada Byron"));
        app.push_screen(Screen::FacilityDetail {
            facility: FacilityName::from("Cedar House"),
        });
        assert!(app.selected_resident.is_none());

        app.selected_resident = Some(ResidentName::from("Ada Byron"));
        app.pop_screen();
        assert!(app.selected_resident.is_none());
    }

    #[test]
    fn snapshot_loaded_replaces_the_view_state() {
        let (mut app, ui_tx, _cmd_rx) = test_app();
        let mut state = ViewState::default();
        state
            .facility_info
            .insert(FacilityName::from("Cedar House"), FacilityInfo { total_beds: 10 });
        ui_tx
            .send(UiEvent::SnapshotLoaded(state))
            .expect("send event");

        app.process_ui_events();
        assert_eq!(app.snapshot.facility_info.len(), 1);
        assert_eq!(app.status, "Data loaded");
    }

    #[test]
    fn successful_mutation_closes_the_dialog_and_shows_a_notice() {
        let (mut app, ui_tx, _cmd_rx) = test_app();
        app.dialog = Some(Dialog::AddFacility(AddFacilityForm::default()));
        ui_tx
            .send(UiEvent::MutationSucceeded {
                notice: "Facility added successfully!".to_string(),
                snapshot: ViewState::default(),
            })
            .expect("send event");

        app.process_ui_events();
        assert!(app.dialog.is_none());
        let notice = app.notice.expect("notice");
        assert_eq!(notice.title, "Success");
        assert_eq!(notice.message, "Facility added successfully!");
    }

    #[test]
    fn mutation_errors_keep_the_form_open() {
        use crate::controller::events::{UiError, UiErrorContext};

        let (mut app, ui_tx, _cmd_rx) = test_app();
        app.dialog = Some(Dialog::AddRoom(AddRoomForm::new(FacilityName::from(
            "Cedar House",
        ))));
        ui_tx
            .send(UiEvent::Error(UiError::new(
                UiErrorContext::Mutation,
                "Room already exists",
            )))
            .expect("send event");

        app.process_ui_events();
        assert!(app.dialog.is_some());
        let notice = app.notice.expect("notice");
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.message, "Error: Room already exists");
    }

    #[test]
    fn locator_results_render_as_notices() {
        let (mut app, ui_tx, _cmd_rx) = test_app();
        ui_tx
            .send(UiEvent::ResidentLocated {
                name: "Ada Byron".to_string(),
                facility: FacilityName::from("Cedar House"),
                room: RoomNumber(102),
            })
            .expect("send event");
        app.process_ui_events();
        let notice = app.notice.take().expect("notice");
        assert_eq!(notice.title, "Resident Found");
        assert_eq!(notice.message, "Ada Byron is in Cedar House, Room 102");

        ui_tx
            .send(UiEvent::ResidentNotFound {
                name: "Nobody".to_string(),
            })
            .expect("send event");
        app.process_ui_events();
        let notice = app.notice.expect("notice");
        assert_eq!(notice.title, "Resident Not Found");
        assert_eq!(notice.message, "Nobody not found in the system.");
    }
}

//! Windowed front end for the to-do list.
//!
//! An eframe shell around [`TaskBoard`]: this file only draws widgets and
//! forwards clicks; every decision about what the list shows and what a
//! button does lives in the library.

use eframe::egui;
use todo_tracker::error::Result;
use todo_tracker::models::Priority;
use todo_tracker::ops;
use todo_tracker::store::JsonTaskStore;
use todo_tracker::view::{ListMode, TaskBoard};

struct TodoApp {
    board: TaskBoard<JsonTaskStore>,
    confirming_delete: bool,
}

impl TodoApp {
    fn new(board: TaskBoard<JsonTaskStore>) -> Self {
        Self { board, confirming_delete: false }
    }

    fn add_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let field = ui.add(
                egui::TextEdit::singleline(&mut self.board.description_draft)
                    .hint_text("What needs doing?")
                    .desired_width(240.0),
            );

            egui::ComboBox::from_id_salt("priority")
                .selected_text(self.board.priority_draft.as_str())
                .show_ui(ui, |ui| {
                    for priority in Priority::ALL {
                        ui.selectable_value(
                            &mut self.board.priority_draft,
                            priority,
                            priority.as_str(),
                        );
                    }
                });

            let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button("Add").clicked() || submitted {
                check(self.board.add_task());
            }
        });
    }

    fn task_list(&mut self, ui: &mut egui::Ui) {
        if let ListMode::Filtered { keyword } = self.board.mode() {
            ui.label(format!("Showing matches for \"{keyword}\""));
        }

        egui::ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
            let mut clicked = None;
            for (position, task) in self.board.visible_rows() {
                let selected = self.board.selected_id() == Some(task.id);
                let row = ui.selectable_label(selected, ops::display_line(position, task));
                if row.clicked() {
                    clicked = Some(task.id);
                }
            }
            if let Some(id) = clicked {
                self.board.select(id);
            }
        });
    }

    fn action_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Complete").clicked() {
                check(self.board.complete_selected());
            }
            if ui.button("Delete").clicked() {
                if self.board.selected_task().is_some() {
                    self.confirming_delete = true;
                } else {
                    // Let the board produce its no-selection notice.
                    check(self.board.delete_selected());
                }
            }

            ui.separator();
            ui.add(
                egui::TextEdit::singleline(&mut self.board.search_draft)
                    .hint_text("keyword")
                    .desired_width(120.0),
            );
            if ui.button("Search").clicked() {
                check(self.board.apply_search());
            }
            if ui.button("Show All").clicked() {
                check(self.board.show_all());
            }
        });

        if let Some(notice) = self.board.notice() {
            ui.label(notice);
        }
    }

    fn delete_confirmation(&mut self, ctx: &egui::Context) {
        let Some(description) = self.board.selected_task().map(|t| t.description.clone()) else {
            self.confirming_delete = false;
            return;
        };

        egui::Window::new("Confirm delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Delete: {description}?"));
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        check(self.board.delete_selected());
                        self.confirming_delete = false;
                    }
                    if ui.button("Cancel").clicked() {
                        self.confirming_delete = false;
                    }
                });
            });
    }
}

impl eframe::App for TodoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("add_row").show(ctx, |ui| {
            ui.add_space(4.0);
            self.add_row(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(4.0);
            self.action_row(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.task_list(ui);
        });

        if self.confirming_delete {
            self.delete_confirmation(ctx);
        }
    }
}

/// A store failure is fatal, matching the console front end.
fn check(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn main() -> std::result::Result<(), eframe::Error> {
    let board = JsonTaskStore::new()
        .and_then(TaskBoard::new)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_title("To-Do List (GUI)"),
        ..Default::default()
    };

    eframe::run_native(
        "To-Do List (GUI)",
        options,
        Box::new(|_cc| Ok(Box::new(TodoApp::new(board)))),
    )
}

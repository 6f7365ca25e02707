use egui;

use crate::api::Match;
use crate::format::format_code;
use crate::state::Action;

/// What the detail window shows, in priority order.
#[derive(Debug, PartialEq)]
pub enum DetailBody<'a> {
    Code(String),
    Summary(&'a str),
    Empty,
}

pub fn detail_body(m: &Match) -> DetailBody<'_> {
    if let Some(code) = m.code.as_deref() {
        DetailBody::Code(format_code(code))
    } else if let Some(summary) = m.summary.as_deref() {
        DetailBody::Summary(summary)
    } else {
        DetailBody::Empty
    }
}

pub fn show(ctx: &egui::Context, m: &Match, copied: bool) -> Vec<Action> {
    let mut actions = Vec::new();
    let mut open = true;

    egui::Window::new(m.repo.as_str())
        .id(egui::Id::new("match_detail"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([640.0, 420.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(file) = m.file.as_deref() {
                ui.horizontal(|ui| {
                    ui.label("File:");
                    ui.monospace(file);
                });
                ui.separator();
            }

            let body = detail_body(m);
            let has_code = matches!(body, DetailBody::Code(_));

            egui::ScrollArea::vertical()
                .max_height(320.0)
                .show(ui, |ui| match &body {
                    DetailBody::Code(code) => {
                        ui.add(
                            egui::TextEdit::multiline(&mut code.as_str())
                                .code_editor()
                                .desired_width(f32::INFINITY),
                        );
                    }
                    DetailBody::Summary(summary) => {
                        ui.label(*summary);
                    }
                    DetailBody::Empty => {
                        ui.weak("No content available");
                    }
                });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if has_code {
                    let label = if copied { "Copied!" } else { "Copy code" };
                    if ui.button(label).clicked() {
                        actions.push(Action::CopyCode);
                    }
                }
                if ui.button("Close (Esc)").clicked() {
                    actions.push(Action::CloseOverlay);
                }
            });
        });

    let escape = ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::Escape));
    if (!open || escape) && !actions.iter().any(|a| matches!(a, Action::CloseOverlay)) {
        actions.push(Action::CloseOverlay);
    }

    actions
}

use egui;
use egui_extras::{Column, TableBuilder};

use crate::api::{Match, MatchKind};
use crate::state::{pluralize_matches, Action, ViewState};

pub fn show(ui: &mut egui::Ui, state: &ViewState) -> Vec<Action> {
    let mut actions = Vec::new();

    let Some(response) = state.response.as_ref() else {
        ui.label("Enter a keyword and press Search to find partner resources.");
        return actions;
    };

    ui.strong(header_text(state.match_count(), &response.keyword));
    ui.add_space(6.0);

    if response.matches.is_empty() {
        return actions;
    }

    let table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(180.0))
        .column(Column::remainder())
        .min_scrolled_height(300.0);

    table
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Repository"); });
            header.col(|ui| { ui.strong("Details"); });
        })
        .body(|body| {
            body.rows(44.0, response.matches.len(), |mut row| {
                let index = row.index();
                let Some(m) = response.matches.get(index) else {
                    return;
                };

                row.col(|ui| {
                    if ui.link(row_label(m)).clicked() {
                        actions.push(Action::OpenMatch(index));
                    }
                });

                row.col(|ui| {
                    ui.vertical(|ui| match m.kind() {
                        MatchKind::File => {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new(m.file.as_deref().unwrap_or_default())
                                        .monospace(),
                                )
                                .truncate(),
                            );
                            ui.add(
                                egui::Label::new(m.explanation.as_deref().unwrap_or_default())
                                    .truncate(),
                            );
                        }
                        MatchKind::Summary => {
                            ui.add(
                                egui::Label::new(m.summary.as_deref().unwrap_or_default())
                                    .truncate(),
                            );
                        }
                    });
                });
            });
        });

    actions
}

pub fn header_text(count: usize, keyword: &str) -> String {
    format!("{} found for \"{}\"", pluralize_matches(count), keyword)
}

/// Clickable label that opens the detail window for a match.
pub fn row_label(m: &Match) -> String {
    match m.kind() {
        MatchKind::File => m.repo.clone(),
        MatchKind::Summary => format!("Summary - {}", m.repo),
    }
}

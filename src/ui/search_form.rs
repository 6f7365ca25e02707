use egui;

use crate::repos::RepoFilter;
use crate::state::{Action, ViewState};

pub struct SearchFormState {
    first_frame: bool,
}

impl Default for SearchFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFormState {
    pub fn new() -> Self {
        Self { first_frame: true }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &ViewState) -> Vec<Action> {
        let mut actions = Vec::new();

        ui.heading("Partner Resource Search");
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Keyword:");
            let mut keyword = state.keyword.clone();
            let keyword_response = ui.add(
                egui::TextEdit::singleline(&mut keyword)
                    .hint_text("e.g. BCCD_SIC_DESIGNATION_ID")
                    .desired_width(280.0),
            );

            if self.first_frame {
                keyword_response.request_focus();
                self.first_frame = false;
            }

            if keyword_response.changed() {
                actions.push(Action::KeywordChanged(keyword));
            }
            let enter_pressed =
                keyword_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            let mut selected = state.repo;
            egui::ComboBox::from_id_salt("repository")
                .selected_text(selected.map_or("Select a repository", |r| r.label()))
                .width(220.0)
                .show_ui(ui, |ui| {
                    for option in RepoFilter::options() {
                        ui.selectable_value(&mut selected, Some(option), option.label());
                    }
                });
            if selected != state.repo {
                if let Some(repo) = selected {
                    actions.push(Action::RepoSelected(repo));
                }
            }

            let button_label = if state.is_loading() { "Searching..." } else { "Search" };
            let clicked = ui
                .add_enabled(state.can_submit(), egui::Button::new(button_label))
                .clicked();
            if state.is_loading() {
                ui.spinner();
            }

            if clicked || (enter_pressed && state.can_submit()) {
                actions.push(Action::Submit);
            }
        });

        actions
    }
}

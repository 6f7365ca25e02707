use std::time::{Duration, Instant};

use egui;

use crate::state::{Level, Notification};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

struct Toast {
    id: u64,
    notification: Notification,
    expires_at: Instant,
}

/// Stack of dismissible notifications drawn in the bottom-right corner.
#[derive(Default)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, notification: Notification, now: Instant) {
        self.items.push(Toast {
            id: self.next_id,
            notification,
            expires_at: now + TOAST_LIFETIME,
        });
        self.next_id += 1;
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context, now: Instant) {
        self.prune(now);
        if self.is_empty() {
            return;
        }

        let mut dismissed = None;
        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for toast in &self.items {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let color = match toast.notification.level {
                                Level::Success => egui::Color32::from_rgb(60, 160, 90),
                                Level::Error => egui::Color32::from_rgb(200, 70, 70),
                            };
                            ui.label(egui::RichText::new(&toast.notification.message).color(color));
                            if ui.small_button("x").clicked() {
                                dismissed = Some(toast.id);
                            }
                        });
                    });
                    ui.add_space(4.0);
                }
            });

        if let Some(id) = dismissed {
            self.dismiss(id);
        }

        if let Some(next) = self.items.iter().map(|t| t.expires_at).min() {
            ctx.request_repaint_after(next.saturating_duration_since(now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire() {
        let mut toasts = Toasts::default();
        let now = Instant::now();
        toasts.push(Notification::success("Found 2 matches"), now);
        toasts.push(Notification::error("Search failed"), now + Duration::from_secs(1));

        toasts.prune(now + TOAST_LIFETIME);
        assert_eq!(toasts.items.len(), 1);

        toasts.prune(now + TOAST_LIFETIME + Duration::from_secs(1));
        assert!(toasts.is_empty());
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut toasts = Toasts::default();
        let now = Instant::now();
        toasts.push(Notification::success("a"), now);
        toasts.push(Notification::success("b"), now);

        toasts.dismiss(0);
        assert_eq!(toasts.items.len(), 1);
        assert_eq!(toasts.items[0].notification.message, "b");
    }
}

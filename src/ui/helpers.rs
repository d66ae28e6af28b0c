// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

use crate::view_models::{Performance, ProgressMarker};

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Tira de progreso: un símbolo por pregunta.
pub fn progress_strip(ui: &mut Ui, markers: &[ProgressMarker]) {
    ui.horizontal_wrapped(|ui| {
        for (i, marker) in markers.iter().enumerate() {
            ui.label(marker.symbol())
                .on_hover_text(format!("Question {}", i + 1));
        }
    });
}

pub fn feedback_color(correct: bool) -> Color32 {
    if correct {
        Color32::from_rgb(46, 160, 67)
    } else {
        Color32::from_rgb(218, 54, 51)
    }
}

pub fn performance_text(performance: Performance) -> RichText {
    let color = match performance {
        Performance::Excellent => Color32::from_rgb(46, 160, 67),
        Performance::Good => Color32::from_rgb(210, 153, 34),
        Performance::KeepStudying => Color32::from_rgb(218, 54, 51),
    };
    RichText::new(performance.message()).color(color).heading().strong()
}

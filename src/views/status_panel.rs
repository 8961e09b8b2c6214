use iced::widget::text::Wrapping;
use iced::widget::{column, text};
use iced::Element;

use crate::message::Message;
use crate::model::ModelSummary;

pub fn status_panel<'a>(
    last_loaded: Option<&'a ModelSummary>,
    open_viewers: usize,
    last_error: Option<&'a str>,
) -> Element<'a, Message> {
    let mut panel = column![];

    if let Some(summary) = last_loaded {
        panel = panel.push(
            text(format!(
                "Loaded {} {}: {} vertices, {} triangles",
                summary.category, summary.file_name, summary.vertices, summary.triangles
            ))
            .size(14),
        );
    }

    if open_viewers > 0 {
        let suffix = if open_viewers == 1 { "" } else { "s" };
        panel = panel.push(text(format!("{open_viewers} viewer window{suffix} open")).size(14));
    }

    if let Some(error) = last_error {
        panel = panel.push(text(error).size(16).wrapping(Wrapping::Word));
    }

    panel.spacing(8).into()
}

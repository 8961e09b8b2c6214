use iced::widget::{button, column, pick_list, text};
use iced::Element;

use crate::message::Message;
use crate::model::Category;

pub fn control_panel(selected: Option<Category>) -> Element<'static, Message> {
    column![
        text("Choose a Body Part"),
        pick_list(Category::ALL, selected, Message::CategorySelected)
            .placeholder("Select Body Part"),
        text("Load a High-Detail 3D Model"),
        button("Upload 3D Model").on_press(Message::UploadPressed),
        button("Exit").on_press(Message::Exit),
    ]
    .spacing(10)
    .into()
}

mod app;
mod config;
mod error;
mod message;
mod model;
mod viewer;
mod views;

pub fn main() -> iced::Result {
    app::run()
}

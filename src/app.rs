use iced::widget::column;
use iced::{application, Alignment, Element, Task, Theme};
use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageLevel};

use crate::config::LibraryConfig;
use crate::message::Message;
use crate::model::{loader, BrowseOutcome, ModelSummary, Selection};
use crate::viewer::{ViewerRegistry, ViewerScene};
use crate::views::{control_panel, status_panel};

const APP_TITLE: &str = "Anatomancer";

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let library = LibraryConfig::load_or_default();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run_with(move || (App::new(library), Task::none()))
}

pub struct App {
    library: LibraryConfig,
    selection: Selection,
    viewers: ViewerRegistry,
    last_loaded: Option<ModelSummary>,
    last_error: Option<String>,
}

impl App {
    fn new(library: LibraryConfig) -> Self {
        App {
            library,
            selection: Selection::default(),
            viewers: ViewerRegistry::new(),
            last_loaded: None,
            last_error: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategorySelected(category) => {
                log::debug!("category selected: {category}");
                self.selection.set(category);
                Task::none()
            }
            Message::UploadPressed => match self.selection.resolve_directory(&self.library) {
                Ok((category, directory)) => Task::perform(
                    async move {
                        match AsyncFileDialog::new()
                            .set_title("Select a 3D Model")
                            .add_filter("3D Models", &["stl", "obj"])
                            .set_directory(&directory)
                            .pick_file()
                            .await
                        {
                            Some(handle) => {
                                loader::open_model(category, handle.path().to_path_buf())
                            }
                            None => BrowseOutcome::Cancelled,
                        }
                    },
                    Message::BrowseFinished,
                ),
                Err(err) => self.report_error(err.to_string()),
            },
            Message::BrowseFinished(outcome) => {
                self.viewers.reap_finished();
                match outcome {
                    BrowseOutcome::Cancelled => {
                        log::debug!("file dialog dismissed");
                        Task::none()
                    }
                    BrowseOutcome::Failed(message) => self.report_error(message),
                    BrowseOutcome::Loaded(model) => {
                        let summary = model.summary();
                        match self.viewers.spawn(ViewerScene::new(model)) {
                            Ok(()) => {
                                self.last_loaded = Some(summary);
                                self.last_error = None;
                                Task::none()
                            }
                            Err(err) => self.report_error(err.to_string()),
                        }
                    }
                }
            }
            Message::Exit => iced::exit(),
        }
    }

    fn report_error(&mut self, message: String) -> Task<Message> {
        log::error!("{message}");
        self.last_error = Some(message.clone());
        Task::future(async move {
            AsyncMessageDialog::new()
                .set_level(MessageLevel::Error)
                .set_title("Error")
                .set_description(message.as_str())
                .show()
                .await;
        })
        .discard()
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![
            control_panel(self.selection.current()),
            status_panel(
                self.last_loaded.as_ref(),
                self.viewers.open_count(),
                self.last_error.as_deref(),
            ),
        ]
        .padding(20)
        .spacing(20)
        .align_x(Alignment::Start)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

use crate::model::{BrowseOutcome, Category};

#[derive(Debug, Clone)]
pub enum Message {
    CategorySelected(Category),
    UploadPressed,
    BrowseFinished(BrowseOutcome),
    Exit,
}

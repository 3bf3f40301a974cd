//! Transient toast notices raised by session operations and forms.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: Option<String>,
    pub variant: NoticeVariant,
}

impl Notice {
    #[must_use]
    pub fn info(title: &str) -> Self {
        Self { title: title.to_owned(), description: None, variant: NoticeVariant::Default }
    }

    #[must_use]
    pub fn success(title: &str, description: impl Into<String>) -> Self {
        Self { title: title.to_owned(), description: Some(description.into()), variant: NoticeVariant::Default }
    }

    #[must_use]
    pub fn error(title: &str, description: impl Into<String>) -> Self {
        Self { title: title.to_owned(), description: Some(description.into()), variant: NoticeVariant::Destructive }
    }

    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }
}

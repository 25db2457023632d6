#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Transient user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    SameLanguageTwice,
    ChooseTwoLanguages,
    EmptyText,
    RequestFailed,
    Copied,
}

impl Notice {
    pub fn level(&self) -> NoticeLevel {
        match self {
            Notice::SameLanguageTwice => NoticeLevel::Warning,
            Notice::ChooseTwoLanguages | Notice::EmptyText => NoticeLevel::Info,
            Notice::RequestFailed => NoticeLevel::Error,
            Notice::Copied => NoticeLevel::Success,
        }
    }

    /// i18n key for the message text.
    pub fn key(&self) -> &'static str {
        match self {
            Notice::SameLanguageTwice => "notice_same_language",
            Notice::ChooseTwoLanguages => "notice_choose_languages",
            Notice::EmptyText => "notice_empty_text",
            Notice::RequestFailed => "notice_request_failed",
            Notice::Copied => "notice_copied",
        }
    }
}

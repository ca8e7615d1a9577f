use crate::api::ApiError;

/// Lifecycle of one command-backed request, echoed with its request id so the
/// UI reacts to each outcome exactly once.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending,
    Done(T),
    Failed(ApiError),
}

impl<T> RequestState<T> {
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Done(_) | Self::Failed(_))
    }
}

/// Status of a list reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(ApiError),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Status line of a file import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImportStatus {
    #[default]
    Idle,
    Parsed { file: String, count: usize },
    Uploading { file: String, count: usize },
    Failed(String),
}

impl ImportStatus {
    pub fn text(&self) -> String {
        match self {
            Self::Idle => "Supports .xlsx / .csv files".to_owned(),
            Self::Parsed { file, count } => format!("{count} rows parsed from {file} (not saved)"),
            Self::Uploading { file, count } => format!("Uploading {count} rows from {file}…"),
            Self::Failed(reason) => reason.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::Parsed { count: 0, .. })
    }
}

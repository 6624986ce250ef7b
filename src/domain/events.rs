/// Terminal outcome of a single login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    InputTooShort,
    LoginFailed { message: String },
    Success,
}

/// Whether a connect call is currently outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    Loading,
    #[default]
    NotLoading,
}

impl LoadingState {
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Terminal outcome of a single channel creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelCreationEvent {
    Error { message: String },
    Success,
}

/// Lifecycle of one screen's data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    /// Carries the message shown to the user. Terminal until remount.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadEvent<T> {
    Started,
    Succeeded(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn advance(self, event: LoadEvent<T>) -> Self {
        match (self, event) {
            (state @ LoadState::Failed(_), _) => state,
            (LoadState::Idle | LoadState::Loaded(_), LoadEvent::Started) => LoadState::Loading,
            (LoadState::Loading, LoadEvent::Succeeded(data)) => LoadState::Loaded(data),
            (LoadState::Loading, LoadEvent::Failed(message)) => LoadState::Failed(message),
            (state, _) => state,
        }
    }

    /// Apply the outcome of a fetch, turning an error into its user message.
    pub fn settle<E>(self, result: Result<T, E>, describe: impl FnOnce(&E) -> String) -> Self {
        let event = match result {
            Ok(data) => LoadEvent::Succeeded(data),
            Err(err) => LoadEvent::Failed(describe(&err)),
        };
        self.advance(event)
    }
}

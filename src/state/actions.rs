use crate::state::tasks::Task;

/// Partial update to the auth dialog fields. Only the fields that are
/// `Some` are merged; everything else is left as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogChanges {
    pub email: Option<String>,
    pub password: Option<String>,
    pub error_message: Option<String>,
}

/// Every action that can flow through the store. Reducers that do not
/// recognize a variant treat it as an identity transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Auth slice
    OpenAuthDialog,
    CloseAuthDialog,
    ChangeAuthDialog(DialogChanges),
    SubmitAuthDialog,
    AuthSubmitFailed { error_message: String },
    ReceiveAuthToken { token: String, expiration: i64 },
    ClearAuthToken,

    // Tasks slice
    RequestTasks,
    ReceiveTasks(Vec<Task>),
    TasksRequestFailed { error_message: String },
}

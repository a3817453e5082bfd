use crate::state::actions::Action;

/// UI state of the login dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogState {
    pub is_open: bool,
    pub is_submitting: bool,
    pub email: String,
    pub password: String,
    pub error_message: String,
}

/// An issued token together with its expiration (unix seconds).
///
/// Holding the pair as one value makes the "token and expiration are both
/// present or both absent" invariant structural rather than checked.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthToken {
    pub token: String,
    pub expires: i64,
}

/// Auth slice of the store: dialog state plus the current session token.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub dialog: DialogState,
    session: Option<AuthToken>,
}

impl AuthState {
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn token_expiration(&self) -> Option<i64> {
        self.session.as_ref().map(|s| s.expires)
    }
}

/// Pure transition function for the auth slice. Actions outside the auth
/// slice return the input state unchanged.
pub fn auth_reducer(state: &AuthState, action: &Action) -> AuthState {
    match action {
        Action::OpenAuthDialog => AuthState {
            dialog: DialogState {
                is_open: true,
                ..state.dialog.clone()
            },
            ..state.clone()
        },
        Action::CloseAuthDialog => AuthState {
            dialog: DialogState::default(),
            ..state.clone()
        },
        Action::ChangeAuthDialog(changes) => {
            let mut dialog = state.dialog.clone();
            if let Some(email) = &changes.email {
                dialog.email = email.clone();
            }
            if let Some(password) = &changes.password {
                dialog.password = password.clone();
            }
            if let Some(error_message) = &changes.error_message {
                dialog.error_message = error_message.clone();
            }
            AuthState {
                dialog,
                ..state.clone()
            }
        }
        Action::SubmitAuthDialog => AuthState {
            dialog: DialogState {
                is_submitting: true,
                ..state.dialog.clone()
            },
            ..state.clone()
        },
        Action::AuthSubmitFailed { error_message } => AuthState {
            dialog: DialogState {
                is_submitting: false,
                error_message: error_message.clone(),
                ..state.dialog.clone()
            },
            ..state.clone()
        },
        Action::ReceiveAuthToken { token, expiration } => AuthState {
            dialog: DialogState {
                is_open: false,
                is_submitting: false,
                email: String::new(),
                password: String::new(),
                // error_message deliberately carried over: only
                // CloseAuthDialog or an explicit edit clears it.
                ..state.dialog.clone()
            },
            session: Some(AuthToken {
                token: token.clone(),
                expires: *expiration,
            }),
        },
        Action::ClearAuthToken => AuthState {
            session: None,
            ..state.clone()
        },
        _ => state.clone(),
    }
}

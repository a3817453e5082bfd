use std::sync::Arc;

use reqwest::Client;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::auth::{encode_basic_auth, TokenResponse};
use crate::error::RequestError;
use crate::state::{Action, Store};

/// Side-effect handler for the login dialog.
///
/// Observes the store's action stream. Each `SubmitAuthDialog` starts an
/// independent token exchange that races against cancellation;
/// `CloseAuthDialog` cancels every exchange whose submission preceded it.
/// Submissions are deliberately not deduplicated: a rapid double submit
/// runs two exchanges, each individually racing the same cancellation
/// signal.
pub struct AuthFlowController {
    store: Arc<Store>,
    client: Client,
    api_base_url: String,
}

impl AuthFlowController {
    pub fn new(store: Arc<Store>, client: Client, api_base_url: String) -> Self {
        Self {
            store,
            client,
            api_base_url,
        }
    }

    /// Subscribes to the store and spawns the controller loop. The
    /// subscription is taken before spawning, so actions dispatched after
    /// this call returns are never missed.
    pub fn spawn(self) -> JoinHandle<()> {
        let actions = self.store.subscribe();
        tokio::spawn(self.run(actions))
    }

    async fn run(self, mut actions: tokio::sync::broadcast::Receiver<Action>) {
        // Current cancellation generation. Every in-flight submission
        // holds a clone; CloseAuthDialog cancels the generation and
        // starts a fresh one so later submissions are unaffected.
        let mut cancel = CancellationToken::new();
        loop {
            match actions.recv().await {
                Ok(Action::SubmitAuthDialog) => {
                    let dialog = self.store.state().auth.dialog;
                    let authorization = encode_basic_auth(&dialog.email, &dialog.password);
                    debug!("Starting token exchange for email: {}", dialog.email);
                    tokio::spawn(submit(
                        Arc::clone(&self.store),
                        self.client.clone(),
                        self.api_base_url.clone(),
                        authorization,
                        cancel.clone(),
                    ));
                }
                Ok(Action::CloseAuthDialog) => {
                    debug!("Auth dialog closed, cancelling in-flight submissions");
                    cancel.cancel();
                    cancel = CancellationToken::new();
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Auth flow controller lagged, skipped {} actions", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

/// One submission: the exchange raced against cancellation. If the
/// cancellation wins, nothing is dispatched and the flow ends silently.
async fn submit(
    store: Arc<Store>,
    client: Client,
    api_base_url: String,
    authorization: String,
    cancelled: CancellationToken,
) {
    tokio::select! {
        biased;
        _ = cancelled.cancelled() => {
            debug!("Token exchange cancelled before completion");
        }
        result = exchange_token(&client, &api_base_url, &authorization) => {
            // The cancellation may have fired while the completed branch
            // was being scheduled; a cancelled submission must never
            // dispatch its result.
            if cancelled.is_cancelled() {
                debug!("Token exchange completed after cancellation, discarding result");
                return;
            }
            match result {
                Ok(body) => {
                    info!("Token exchange succeeded");
                    store.dispatch(Action::ReceiveAuthToken {
                        token: body.token,
                        expiration: body.token_expiration,
                    });
                }
                Err(e) => {
                    warn!("Token exchange failed: {}", e);
                    store.dispatch(Action::AuthSubmitFailed {
                        error_message: e.to_string(),
                    });
                }
            }
        }
    }
}

/// Performs the outbound credential exchange.
async fn exchange_token(
    client: &Client,
    api_base_url: &str,
    authorization: &str,
) -> Result<TokenResponse, RequestError> {
    let response = client
        .get(format!("{}/api/auth/token", api_base_url))
        .header("Authorization", authorization)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Status {
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            code: status.as_u16(),
        });
    }

    Ok(response.json::<TokenResponse>().await?)
}

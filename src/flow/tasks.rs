use std::sync::Arc;

use reqwest::Client;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::RequestError;
use crate::state::{Action, Store, Task};

/// Side-effect handler for the task list: `RequestTasks` triggers a fetch
/// and the outcome comes back as `ReceiveTasks` or `TasksRequestFailed`.
/// Nothing in the UI cancels a fetch, so there is no race here.
pub struct TasksFlowController {
    store: Arc<Store>,
    client: Client,
    api_base_url: String,
}

impl TasksFlowController {
    pub fn new(store: Arc<Store>, client: Client, api_base_url: String) -> Self {
        Self {
            store,
            client,
            api_base_url,
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        let actions = self.store.subscribe();
        tokio::spawn(self.run(actions))
    }

    async fn run(self, mut actions: tokio::sync::broadcast::Receiver<Action>) {
        loop {
            match actions.recv().await {
                Ok(Action::RequestTasks) => {
                    debug!("Fetching task list");
                    match fetch_tasks(&self.client, &self.api_base_url).await {
                        Ok(tasks) => {
                            self.store.dispatch(Action::ReceiveTasks(tasks));
                        }
                        Err(e) => {
                            warn!("Task fetch failed: {}", e);
                            self.store.dispatch(Action::TasksRequestFailed {
                                error_message: e.to_string(),
                            });
                        }
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Tasks flow controller lagged, skipped {} actions", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

async fn fetch_tasks(client: &Client, api_base_url: &str) -> Result<Vec<Task>, RequestError> {
    let response = client.get(format!("{}/tasks", api_base_url)).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::Status {
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            code: status.as_u16(),
        });
    }

    Ok(response.json::<Vec<Task>>().await?)
}

//! The task list endpoint. Data is an in-memory mock; persistence is out
//! of scope.

use actix_web::HttpResponse;

use crate::state::Task;

/// The fixed task list the API serves.
pub fn mock_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "3l2ei3hf3iw".to_string(),
            title: "Collect underpants".to_string(),
            is_complete: false,
        },
        Task {
            id: "2l2ei323xze".to_string(),
            title: "???".to_string(),
            is_complete: false,
        },
        Task {
            id: "1z2ei32cx7e".to_string(),
            title: "Profit!".to_string(),
            is_complete: false,
        },
    ]
}

/// `GET /tasks`
pub async fn list_tasks() -> HttpResponse {
    HttpResponse::Ok().json(mock_tasks())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_tasks_are_stable() {
        let tasks = mock_tasks();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title, "Collect underpants");
        assert_eq!(tasks[2].id, "1z2ei32cx7e");
        assert!(tasks.iter().all(|t| !t.is_complete));
    }
}

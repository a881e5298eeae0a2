#[cfg(test)]
mod tests {
    use crate::tasks::{NewTask, Task};
    use chrono::NaiveDate;

    fn task(due_date: &str, status: &str) -> Task {
        Task {
            id: 1,
            client_id: Some(1),
            interaction_id: None,
            title: "Send proposal".to_string(),
            due_date: due_date.to_string(),
            status: status.to_string(),
            assigned_to: None,
            created_at: "2025-06-01 09:00:00".to_string(),
        }
    }

    #[test]
    fn overdue_when_due_date_has_passed() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert!(task("2025-06-14", "Open").is_overdue(today));
        assert!(!task("2025-06-15", "Open").is_overdue(today));
        assert!(!task("2025-06-16", "Open").is_overdue(today));
    }

    #[test]
    fn done_tasks_are_never_overdue() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert!(!task("2025-01-01", "Done").is_overdue(today));
    }

    #[test]
    fn validation_requires_title_and_parseable_due_date() {
        let mut missing_title = NewTask {
            client_id: None,
            interaction_id: None,
            title: "  ".to_string(),
            due_date: "2025-06-20".to_string(),
            assigned_to: None,
        };
        assert!(missing_title.validate().is_err());

        let mut bad_date = NewTask {
            client_id: None,
            interaction_id: None,
            title: "Call back".to_string(),
            due_date: "20-06-2025".to_string(),
            assigned_to: None,
        };
        assert!(bad_date.validate().is_err());
    }
}

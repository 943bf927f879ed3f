use crate::models::{ActivityItem, Event, EventKind};

pub fn format_event_action(event: &Event) -> String {
    match event.kind() {
        EventKind::Push => format!("Pushed {} commit(s)", event.push_size()),
        EventKind::Create => format!(
            "Created {}",
            event.payload_str("ref_type").unwrap_or("repository")
        ),
        EventKind::Watch => "Starred repository".to_string(),
        EventKind::Fork => "Forked repository".to_string(),
        EventKind::Issues => format!("{} issue", event.payload_str("action").unwrap_or("updated")),
        EventKind::PullRequest => format!(
            "{} pull request",
            event.payload_str("action").unwrap_or("updated")
        ),
        EventKind::IssueComment => "Commented on issue".to_string(),
        EventKind::PullRequestReview => "Reviewed pull request".to_string(),
        EventKind::Unknown(tag) => tag,
    }
}

pub fn recent_activity(events: &[Event], limit: usize) -> Vec<ActivityItem> {
    events
        .iter()
        .take(limit)
        .map(|event| ActivityItem {
            event_type: event.event_type.clone(),
            repo: event.repo.name.clone(),
            created: event.created_at,
            action: format_event_action(event),
        })
        .collect()
}

use crate::{ApiError, BuildRequest};

fn request(task: Option<&str>, plan: Option<&str>, webhook: Option<&str>) -> BuildRequest {
    BuildRequest {
        task: task.map(String::from),
        plan: plan.map(String::from),
        webhook_url: webhook.map(String::from),
    }
}

#[test]
fn test_task_and_plan_present_is_valid() {
    let req = request(Some("Build a blog"), Some("Markdown posts"), None);
    let (task, plan) = req.required_fields().unwrap();

    assert_eq!(task, "Build a blog");
    assert_eq!(plan, "Markdown posts");
}

#[test]
fn test_missing_task_is_validation_error() {
    let req = request(None, Some("Markdown posts"), None);
    assert!(matches!(
        req.required_fields(),
        Err(ApiError::Validation { .. })
    ));
}

#[test]
fn test_missing_plan_is_validation_error() {
    let req = request(Some("Build a blog"), None, None);
    assert!(matches!(
        req.required_fields(),
        Err(ApiError::Validation { .. })
    ));
}

#[test]
fn test_empty_strings_are_validation_errors() {
    assert!(request(Some(""), Some("plan"), None).required_fields().is_err());
    assert!(request(Some("task"), Some(""), None).required_fields().is_err());
}

#[test]
fn test_empty_webhook_url_is_ignored() {
    assert_eq!(request(None, None, Some("")).webhook_url(), None);
    assert_eq!(
        request(None, None, Some("https://hooks.example/x")).webhook_url(),
        Some("https://hooks.example/x")
    );
}

#[test]
fn test_deserializes_wire_field_names() {
    let req: BuildRequest = serde_json::from_str(
        r#"{"v0_task":"t","development_plan":"p","n8n_webhook_url":"https://h"}"#,
    )
    .unwrap();

    assert_eq!(req.task.as_deref(), Some("t"));
    assert_eq!(req.plan.as_deref(), Some("p"));
    assert_eq!(req.webhook_url.as_deref(), Some("https://h"));
}

#[test]
fn test_deserializes_empty_object() {
    let req: BuildRequest = serde_json::from_str("{}").unwrap();

    assert!(req.task.is_none());
    assert!(req.plan.is_none());
    assert!(req.webhook_url.is_none());
}

use axum::response::Response;
use serde_json::Value;

use crate::registry::{HiringRegistry, SharedRegistry};

/// Skills `java`, `python`, `sql`; positions `backend` (java, sql) and `data` (python, sql).
pub(super) fn staffed_registry() -> HiringRegistry {
    let mut registry = HiringRegistry::new();
    registry
        .add_skills(["java", "python", "sql"])
        .expect("skills register");
    registry
        .add_position("backend", ["java", "sql"])
        .expect("backend registers");
    registry
        .add_position("data", ["python", "sql"])
        .expect("data registers");
    registry
}

/// [`staffed_registry`] plus applicants at the winning boundary for `backend`.
pub(super) fn registry_with_applicants() -> HiringRegistry {
    let mut registry = staffed_registry();
    registry
        .add_applicant("alice", "java:6,sql:7")
        .expect("alice registers");
    registry
        .add_applicant("bob", "java:6,sql:6")
        .expect("bob registers");
    registry
        .add_applicant("carol", "python:9,sql:8,java:2")
        .expect("carol registers");
    registry
        .add_applicant("dave", "python:10")
        .expect("dave registers");
    registry
}

pub(super) fn shared(registry: HiringRegistry) -> SharedRegistry {
    SharedRegistry::new(registry)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

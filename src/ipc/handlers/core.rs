use std::path::Path;

use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::helpers::HandlerErr;
use crate::ipc::types::{AppState, Request};
use crate::model::{initials, Dataset};
use crate::seed;

fn dataset_counts(data: &Dataset) -> serde_json::Value {
    json!({
        "students": data.students.len(),
        "attendance": data.attendance.len(),
        "grades": data.grades.len()
    })
}

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "dataset": dataset_counts(&state.data)
        }),
    )
}

fn dataset_load(params: &serde_json::Value) -> Result<Dataset, HandlerErr> {
    if let Some(path) = params.get("path").and_then(|v| v.as_str()) {
        return seed::load_from_file(Path::new(path)).map_err(|e| HandlerErr {
            code: "dataset_load_failed",
            message: format!("{e:#}"),
            details: None,
        });
    }
    if let Some(inline) = params.get("data") {
        let mut parsed: Dataset =
            serde_json::from_value(inline.clone()).map_err(|e| HandlerErr {
                code: "dataset_load_failed",
                message: e.to_string(),
                details: None,
            })?;
        parsed.assign_missing_ids();
        return Ok(parsed);
    }
    Err(HandlerErr::bad_params("missing params.path or params.data"))
}

fn handle_dataset_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    match dataset_load(&req.params) {
        Ok(data) => {
            log::info!(
                "dataset loaded: {} students, {} attendance records, {} grade records",
                data.students.len(),
                data.attendance.len(),
                data.grades.len()
            );
            state.data = data;
            ok(&req.id, dataset_counts(&state.data))
        }
        Err(error) => error.response(&req.id),
    }
}

fn handle_user_current(state: &mut AppState, req: &Request) -> serde_json::Value {
    let user = &state.data.current_user;
    ok(
        &req.id,
        json!({
            "id": user.id,
            "name": user.name,
            "email": user.email,
            "role": user.role,
            "profileImage": user.profile_image,
            "initials": initials(&user.name)
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "dataset.load" => Some(handle_dataset_load(state, req)),
        "user.current" => Some(handle_user_current(state, req)),
        _ => None,
    }
}

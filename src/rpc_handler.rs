//! RPC method handler for the Bookmark Saver JSON-RPC protocol.
//!
//! Kept apart from `main.rs` so it can be unit-tested against a fake backend.
//! `handle_method` dispatches a method name to the application shell.

use serde_json::{json, Map, Value};

use crate::app::{App, SubmitOutcome, CREATE_FAILED_MESSAGE};
use crate::managers::add_bookmark_form::AddBookmarkFormTrait;
use crate::managers::bookmark_list::BookmarkList;
use crate::managers::search_bar::SearchBarTrait;
use crate::services::api_client::BookmarkApi;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::toast_center::ToastCenterTrait;
use crate::types::validation::{Field, FieldErrors};

/// Field errors as a `{field: message}` object.
fn errors_json(errors: &FieldErrors) -> Value {
    let map: Map<String, Value> = errors
        .iter()
        .map(|e| (e.field.as_str().to_string(), Value::String(e.message.clone())))
        .collect();
    Value::Object(map)
}

fn form_json<A: BookmarkApi>(app: &App<A>) -> Value {
    json!({
        "values": app.form.values(),
        "errors": errors_json(app.form.errors()),
    })
}

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

/// Dispatch a JSON-RPC method call to the application shell.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
/// Backend failures are not RPC errors: they show up as toasts.
pub async fn handle_method<A: BookmarkApi>(
    app: &mut App<A>,
    settings: &mut SettingsEngine,
    method: &str,
    params: &Value,
) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        "app.state" => Ok(json!({
            "state": app.state().as_str(),
            "total": app.bookmarks().len(),
            "visible": app.filtered().len(),
            "query": app.search_bar.query(),
        })),

        // ─── Form ───
        "form.get" => Ok(form_json(app)),
        "form.set" => {
            let name = str_param(params, "field")?;
            let field = Field::parse(name).ok_or_else(|| format!("unknown field: {}", name))?;
            let value = str_param(params, "value")?;
            app.form.set_field(field, value);
            Ok(form_json(app))
        }
        "form.submit" => match app.submit_form().await {
            SubmitOutcome::Invalid(errors) => Ok(json!({"ok": false, "errors": errors_json(&errors)})),
            SubmitOutcome::Added(bookmark) => Ok(json!({"ok": true, "bookmark": bookmark})),
            SubmitOutcome::Failed(_) => Ok(json!({"ok": false, "error": CREATE_FAILED_MESSAGE})),
        },

        // ─── Search & list ───
        "search" => {
            let query = params.get("query").and_then(|v| v.as_str()).unwrap_or("");
            app.search(query);
            Ok(json!({"items": app.list().rows()}))
        }
        "list.render" => Ok(json!({"items": app.list().rows()})),
        "list.text" => Ok(json!({"text": app.list().render_text()})),
        "bookmarks.all" => Ok(json!({"items": BookmarkList::new(app.bookmarks()).rows()})),
        "bookmark.delete" => {
            let id = str_param(params, "id")?;
            let ok = app.delete_bookmark(id).await.is_ok();
            Ok(json!({"ok": ok}))
        }

        // ─── Toasts ───
        "toasts.list" => Ok(json!(app.toasts.visible())),
        "toast.dismiss" => {
            let id = params.get("id").and_then(|v| v.as_u64()).ok_or("missing id")?;
            Ok(json!({"ok": app.toasts.dismiss(id)}))
        }

        // ─── Settings ───
        "settings.get" => serde_json::to_value(settings.get_settings()).map_err(|e| e.to_string()),
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            settings.set_value(key, value).map_err(|e| e.to_string())?;
            // Only the toast cap applies live; API and logging changes take effect on restart.
            app.toasts.set_limit(settings.get_settings().toasts.limit);
            serde_json::to_value(settings.get_settings()).map_err(|e| e.to_string())
        }
        "settings.reset" => {
            settings.reset().map_err(|e| e.to_string())?;
            app.toasts.set_limit(settings.get_settings().toasts.limit);
            serde_json::to_value(settings.get_settings()).map_err(|e| e.to_string())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}

//! Bookmark Saver: JSON-RPC over stdin/stdout.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"form.set", "params":{"field":"title","value":"Rust"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! The initial bookmark fetch happens before the ready event is printed.

use serde_json::{json, Value};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use bookmark_saver::app::App;
use bookmark_saver::logging;
use bookmark_saver::rpc_handler::handle_method;
use bookmark_saver::services::api_client::HttpBookmarkApi;
use bookmark_saver::services::settings_engine::{SettingsEngine, SettingsEngineTrait, API_URL_ENV};

const CONFIG_ENV: &str = "BOOKMARK_SAVER_CONFIG";

/// `--config <path>` wins over `BOOKMARK_SAVER_CONFIG`; `None` means the platform default.
fn config_path_from_args() -> Option<String> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next();
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(path.to_string());
        }
    }
    std::env::var(CONFIG_ENV).ok().filter(|p| !p.is_empty())
}

async fn write_line(out: &mut io::Stdout, value: &Value) -> io::Result<()> {
    let mut line = value.to_string();
    line.push('\n');
    out.write_all(line.as_bytes()).await?;
    out.flush().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(config_path_from_args());
    let load_result = settings_engine.load();

    logging::init_subscriber(&settings_engine.get_settings().logging.level);
    if let Err(e) = load_result {
        tracing::warn!(error = %e, path = settings_engine.get_config_path(), "using default settings");
    }
    settings_engine.apply_api_url_override(std::env::var(API_URL_ENV).ok());
    let settings = settings_engine.get_settings();

    let api = HttpBookmarkApi::new(&settings.api.base_url)?;
    let mut app = App::new(api, settings.toasts.limit);
    app.mount().await;

    let mut stdout = io::stdout();
    write_line(
        &mut stdout,
        &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}),
    )
    .await?;

    let mut lines = BufReader::new(io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                write_line(&mut stdout, &json!({"id": null, "error": format!("parse error: {}", e)}))
                    .await?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&mut app, &mut settings_engine, method, &params).await {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        write_line(&mut stdout, &response).await?;
    }

    tracing::debug!("stdin closed, exiting");
    Ok(())
}

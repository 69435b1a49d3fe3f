use anyhow::Context;
use k5_documents::{config, logger, Session};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    logger::init_logging();
    tracing::info!("k5-documents starting...");

    let config = config::load_config().context("failed to load config")?;
    let mut session = Session::new(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(request) => match session.handle_request(request) {
                Ok(result) => json!({ "ok": true, "result": result }),
                Err(e) => json!({ "ok": false, "error": e }),
            },
            Err(e) => json!({ "ok": false, "error": format!("Malformed request: {}", e) }),
        };

        writeln!(stdout, "{}", response).context("failed to write response")?;
        stdout.flush()?;
    }

    tracing::info!("k5-documents input closed, exiting");
    Ok(())
}

use std::io::{self, BufRead, Write};

use serde::Deserialize;
use serde_json::{Value, json};
use simple_base32::{
    logger::setup_logger,
    service::{Base32Service, Code},
};

#[derive(Deserialize)]
struct Request {
    method: String,
    #[serde(default = "empty_args")]
    args: Value,
}

fn empty_args() -> Value {
    json!({})
}

fn main() -> anyhow::Result<()> {
    let name = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    setup_logger();
    log::info!("{name} has started v{version}...");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(&line) {
            Ok(req) => Base32Service::call(&req.method, &req.args),
            Err(e) => {
                log::warn!("Malformed request: {e}");
                json!({
                    "code": Code::InvalidArgumentsError,
                    "error": format!("Malformed request: {e}"),
                })
            }
        };
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }

    log::info!("{name} has ended...");
    Ok(())
}

//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` on a local HTTP server so the works document can
//! be fetched (browsers refuse `fetch` on `file://` pages).

use std::process::{Command, ExitCode, Stdio};

const ADDR: &str = "127.0.0.1";
const PORT: &str = "8000";

fn build_wasm() -> Result<(), String> {
    println!("Building WASM pkg …");
    let status = Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
        .map_err(|_| {
            "wasm-pack not found in PATH. Install it from https://rustwasm.github.io/wasm-pack/."
                .to_string()
        })?;
    if status.success() {
        Ok(())
    } else {
        Err("wasm-pack finished with errors.".to_string())
    }
}

fn serve() -> Result<(), String> {
    println!("Serving static/ at http://{ADDR}:{PORT} (Ctrl-C to stop) …");
    let status = Command::new("python3")
        .args(["-m", "http.server", PORT, "--bind", ADDR, "--directory", "static"])
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| format!("failed to start http server: {e}"))?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("http server exited with {status}"))
    }
}

fn main() -> ExitCode {
    if let Err(err) = build_wasm() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    match serve() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

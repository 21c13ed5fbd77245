//! `kadro estimate` — Token estimate for text, a file, or stdin.

use super::CmdResult;
use kadro_telemetry::estimate_tokens;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

pub async fn run(text: Option<String>, file: Option<PathBuf>) -> CmdResult {
    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    println!("{} chars, ~{} tokens", text.chars().count(), estimate_tokens(&text));
    Ok(())
}

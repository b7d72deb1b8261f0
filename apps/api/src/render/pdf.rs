//! PDF rendering via wkhtmltopdf.
//!
//! The binary location is environment-specific and comes from `Config`;
//! HTML goes in over stdin, PDF bytes come back over stdout. No temp files.

use std::process::Stdio;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Fixed page options: A4, 15mm margins on all four sides, UTF-8 input.
const PAGE_ARGS: &[&str] = &[
    "--quiet",
    "--encoding",
    "utf-8",
    "--page-size",
    "A4",
    "--margin-top",
    "15mm",
    "--margin-right",
    "15mm",
    "--margin-bottom",
    "15mm",
    "--margin-left",
    "15mm",
];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to spawn '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stream HTML to renderer: {0}")]
    Io(#[from] std::io::Error),

    #[error("renderer exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("renderer produced no output")]
    EmptyOutput,
}

/// Converts an HTML document into PDF bytes by invoking the configured
/// wkhtmltopdf binary (`- -`: read stdin, write stdout).
pub async fn html_to_pdf(binary: &str, html: &str) -> Result<Vec<u8>, RenderError> {
    let mut cmd = Command::new(binary);
    cmd.args(PAGE_ARGS).arg("-").arg("-");
    run_renderer(cmd, html).await
}

/// Spawns the renderer command and streams HTML in over stdin while the
/// output pipes are drained. The stdin write and `wait_with_output` run
/// concurrently: a renderer that fills its stderr pipe before consuming
/// stdin must not deadlock against our write.
async fn run_renderer(mut cmd: Command, html: &str) -> Result<Vec<u8>, RenderError> {
    let binary = cmd.as_std().get_program().to_string_lossy().into_owned();

    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| RenderError::Spawn { binary, source: e })?;

    // Child always has piped stdin here; dropping it after the write closes
    // the pipe so the renderer sees EOF and starts converting.
    let mut stdin = child.stdin.take().expect("stdin was piped");

    let (write_result, output) = tokio::join!(
        async move {
            let result = stdin.write_all(html.as_bytes()).await;
            drop(stdin);
            result
        },
        child.wait_with_output()
    );
    let output = output?;

    if !output.status.success() {
        return Err(RenderError::Failed {
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    // Renderer succeeded; a failed stdin write would still mean it converted
    // truncated input, so surface it.
    write_result?;

    if output.stdout.is_empty() {
        return Err(RenderError::EmptyOutput);
    }

    debug!("Rendered PDF: {} bytes", output.stdout.len());

    Ok(output.stdout)
}

//! `ggscope inspect` handler.
//!
//! Each path is read on its own blocking worker so slow disks do not stall
//! the runtime, and all paths are read concurrently. Envelopes are printed
//! in argument order regardless of completion order.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use ggscope_core::{GgufInfoResponse, GgufInspectorPort};
use tracing::{debug, warn};

use crate::error::CliError;

/// Execute the inspect command.
///
/// Prints one envelope per path and fails with `CliError::Inspection` when
/// any envelope is a failure.
pub async fn execute(
    inspector: Arc<dyn GgufInspectorPort>,
    paths: &[PathBuf],
    pretty: bool,
    timeout: Option<Duration>,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let responses = inspect_paths(inspector, paths, timeout).await;
    let failed = write_envelopes(&responses, pretty, out)?;

    if failed > 0 {
        return Err(CliError::Inspection {
            failed,
            total: responses.len(),
        });
    }
    Ok(())
}

/// Inspect every path concurrently, returning envelopes in input order.
pub async fn inspect_paths(
    inspector: Arc<dyn GgufInspectorPort>,
    paths: &[PathBuf],
    timeout: Option<Duration>,
) -> Vec<GgufInfoResponse> {
    let handles: Vec<_> = paths
        .iter()
        .map(|path| tokio::spawn(inspect_one(Arc::clone(&inspector), path.clone(), timeout)))
        .collect();

    let mut responses = Vec::with_capacity(handles.len());
    for (handle, path) in handles.into_iter().zip(paths) {
        let response = match handle.await {
            Ok(response) => response,
            Err(e) => task_failed(path, &e),
        };
        responses.push(response);
    }
    responses
}

async fn inspect_one(
    inspector: Arc<dyn GgufInspectorPort>,
    path: PathBuf,
    timeout: Option<Duration>,
) -> GgufInfoResponse {
    let worker_path = path.clone();
    let task = tokio::task::spawn_blocking(move || inspector.inspect(&worker_path));

    // The deadline only stops us waiting; the worker runs to completion.
    let joined = match timeout {
        Some(limit) => match tokio::time::timeout(limit, task).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(path = %path.display(), limit = ?limit, "GGUF inspection timed out");
                return GgufInfoResponse::failure(path, format!("timed out after {limit:?}"));
            }
        },
        None => task.await,
    };

    match joined {
        Ok(result) => {
            if let Ok(info) = &result {
                debug!(
                    path = %path.display(),
                    tensors = info.tensor_count(),
                    dominant_type = ?info.dominant_tensor_type(),
                    file_type = ?info.file_type_name,
                    "Inspected GGUF file"
                );
            }
            GgufInfoResponse::from(result)
        }
        Err(e) => task_failed(&path, &e),
    }
}

fn task_failed(path: &Path, err: &tokio::task::JoinError) -> GgufInfoResponse {
    warn!(path = %path.display(), error = %err, "GGUF inspection task failed");
    GgufInfoResponse::failure(path, format!("inspection task failed: {err}"))
}

/// Write one envelope per line and return how many were failures.
///
/// Each envelope is rendered in full before any of it is written, so a
/// serialization error never leaves a partial line on `out`.
pub fn write_envelopes(
    responses: &[GgufInfoResponse],
    pretty: bool,
    out: &mut impl Write,
) -> Result<usize, CliError> {
    for response in responses {
        let line = if pretty {
            serde_json::to_vec_pretty(response)?
        } else {
            serde_json::to_vec(response)?
        };
        out.write_all(&line)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(responses.iter().filter(|r| !r.is_ok()).count())
}

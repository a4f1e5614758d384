//! The `.timestamp` sidecar that keeps exported symbols stable across runs

use gobridge_model::{BridgeError, BridgeResult};
use log::{debug, info};
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Read the timestamp stored in `dir/file_name`, or create it.
///
/// A missing file or one that does not hold a positive integer is replaced by
/// the current time in milliseconds since the epoch.
pub fn load_or_persist(dir: &Path, file_name: &str) -> BridgeResult<i64> {
    let path = dir.join(file_name);

    if let Ok(content) = fs::read_to_string(&path) {
        if let Ok(timestamp) = content.trim().parse::<i64>() {
            if timestamp > 0 {
                debug!("Using timestamp {timestamp} from {}", path.display());
                return Ok(timestamp);
            }
        }
    }

    let timestamp = now_millis();
    fs::write(&path, timestamp.to_string()).map_err(|e| BridgeError::Io(path.clone(), e))?;
    info!("Wrote new timestamp {timestamp} to {}", path.display());
    Ok(timestamp)
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(1)
}

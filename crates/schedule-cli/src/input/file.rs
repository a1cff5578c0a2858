use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON file and deserialise it into a typed input.
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let (canonical, value) = load(path)?;
    let typed = serde_json::from_value(value)
        .map_err(|e| format!("Invalid parameters in '{}': {}", canonical.display(), e))?;
    Ok(typed)
}

/// Read a JSON file as an untyped value (call params, limits overrides).
pub fn read_json_value(path: &str) -> Result<Value, Box<dyn std::error::Error>> {
    let (_, value) = load(path)?;
    Ok(value)
}

fn load(path: &str) -> Result<(PathBuf, Value), Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;
    let value = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?;
    Ok((canonical, value))
}

/// Resolve the path against the working directory and require a regular file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.exists() {
        return Err(format!("File not found: {}", canonical.display()).into());
    }
    if !canonical.is_file() {
        return Err(format!("Not a file: {}", canonical.display()).into());
    }

    Ok(canonical)
}

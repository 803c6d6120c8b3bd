//! `package.json` rewriting

use crate::error::{Error, Result};
use camino::Utf8Path;
use serde_json::Value;
use tracing::{debug, info};

/// Set the `name` field of the metadata file at `path`.
///
/// Every other field is kept as-is and in its original order. The file is
/// written back with 2-space indentation. Returns `false` without touching
/// anything when the file does not exist.
pub async fn rewrite_name(path: &Utf8Path, name: &str) -> Result<bool> {
    if !tokio::fs::try_exists(path).await? {
        debug!("No metadata file at {}, skipping rename", path);
        return Ok(false);
    }

    let content = tokio::fs::read_to_string(path).await?;
    let updated = set_name(&content, name)
        .map_err(|message| Error::invalid_metadata(path.as_str(), message))?;
    tokio::fs::write(path, updated).await?;

    info!("Set project name in {} to {}", path, name);
    Ok(true)
}

/// Replace the `name` field in a JSON document and re-serialize it
fn set_name(content: &str, name: &str) -> std::result::Result<String, String> {
    let mut document: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let object = document
        .as_object_mut()
        .ok_or_else(|| "expected a JSON object".to_string())?;
    object.insert("name".to_string(), Value::String(name.to_string()));

    let mut rendered = serde_json::to_string_pretty(&document).map_err(|e| e.to_string())?;
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_set_name_preserves_other_fields_in_order() {
        let content = r#"{"version":"0.1.0","name":"boilerplate","scripts":{"dev":"bun run dev"}}"#;
        let updated = set_name(content, "my-app").unwrap();

        assert_eq!(
            updated,
            "{\n  \"version\": \"0.1.0\",\n  \"name\": \"my-app\",\n  \"scripts\": {\n    \"dev\": \"bun run dev\"\n  }\n}\n"
        );
    }

    #[test]
    fn test_set_name_adds_missing_field() {
        let updated = set_name(r#"{"private":true}"#, "fresh").unwrap();
        let parsed: Value = serde_json::from_str(&updated).unwrap();
        assert_eq!(parsed["name"], "fresh");
        assert_eq!(parsed["private"], true);
    }

    #[test]
    fn test_set_name_rejects_non_object() {
        let err = set_name("[1, 2, 3]", "my-app").unwrap_err();
        assert_eq!(err, "expected a JSON object");
    }

    #[tokio::test]
    async fn test_rewrite_missing_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().join("package.json")).unwrap();

        assert!(!rewrite_name(&path, "my-app").await.unwrap());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_rewrite_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(temp.path().join("package.json")).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let err = rewrite_name(&path, "my-app").await.unwrap_err();
        assert!(matches!(err, Error::InvalidMetadata { .. }));
    }
}

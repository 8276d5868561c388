//! `package.json` patching.

use serde_json::{Map, Value};

use crate::domain::ManifestPatch;

/// Merge `patch` into the manifest text and return the new text.
///
/// Key order of the existing document is kept and new keys go last.
/// Existing entries with the same name are overwritten. Output is
/// two-space indented, like npm writes it.
pub fn apply_patch(manifest: &str, patch: &ManifestPatch) -> Result<String, String> {
    let mut document: Value = serde_json::from_str(manifest).map_err(|e| e.to_string())?;
    let root = document
        .as_object_mut()
        .ok_or_else(|| "top level is not an object".to_owned())?;

    merge_section(root, "scripts", &patch.scripts)?;
    merge_section(root, "dependencies", &patch.dependencies)?;
    merge_section(root, "devDependencies", &patch.dev_dependencies)?;

    let mut out = serde_json::to_string_pretty(&document).map_err(|e| e.to_string())?;
    out.push('\n');
    Ok(out)
}

fn merge_section(
    root: &mut Map<String, Value>,
    key: &str,
    entries: &[(String, String)],
) -> Result<(), String> {
    if entries.is_empty() {
        return Ok(());
    }
    let section = root
        .entry(key)
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| format!("\"{key}\" is not an object"))?;
    for (name, value) in entries {
        section.insert(name.clone(), Value::String(value.clone()));
    }
    Ok(())
}

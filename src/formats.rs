//! Pixel-format enum generation from the format-mapping table.
//!
//! The table is a JSON object whose keys are the backend's internal format
//! identifiers. Only the key set and its file order matter here; the values
//! belong to the runtime mapping loader.

use anyhow::{Context, Result};
use std::path::Path;

/// Load the format table and return its keys in file order.
///
/// Key uniqueness is the table's own guarantee and is not re-checked.
pub fn load_format_table(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read format table {}", path.display()))?;

    let table: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse format table {}", path.display()))?;

    Ok(table.keys().cloned().collect())
}

/// Render the FormatID enum block consumed by the internal shaders.
///
/// Enumerators appear in table order so shader-side ordinals line up with
/// the format table the backend loads at runtime.
pub fn generate_format_enum(formats: &[String]) -> String {
    let mut code = String::new();

    code.push_str("// Pixel-format identifiers shared with the internal shaders.\n");
    code.push_str("//\n");
    code.push_str("namespace gfx\n");
    code.push_str("{\n");
    code.push_str("namespace mtl_shader\n");
    code.push_str("{\n");
    code.push_str("\n");
    code.push_str("namespace FormatID\n");
    code.push_str("{\n");
    code.push_str("enum\n");
    code.push_str("{\n");
    for name in formats {
        code.push_str("    ");
        code.push_str(name);
        code.push_str(",\n");
    }
    code.push_str("};\n\n");
    code.push_str("}\n");
    code.push_str("\n");
    code.push_str("}\n");
    code.push_str("}\n");

    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_format_table_keeps_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("format_map.json");
        // Deliberately not alphabetical: file order must win.
        std::fs::write(
            &path,
            r#"{"R8G8B8A8_UNORM": "GL_RGBA8", "A8_UNORM": "GL_ALPHA8", "D24_UNORM_S8_UINT": "GL_DEPTH24_STENCIL8"}"#,
        )
        .unwrap();

        let formats = load_format_table(&path).unwrap();
        assert_eq!(formats, ["R8G8B8A8_UNORM", "A8_UNORM", "D24_UNORM_S8_UINT"]);
    }

    #[test]
    fn test_load_format_table_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_format_table(&dir.path().join("nope.json"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read format table"));
    }

    #[test]
    fn test_load_format_table_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("format_map.json");
        std::fs::write(&path, r#"["R8G8B8A8_UNORM"]"#).unwrap();

        let result = load_format_table(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse format table"));
    }

    #[test]
    fn test_generate_format_enum_members_in_table_order() {
        let formats = vec!["B".to_string(), "A".to_string(), "C".to_string()];
        let code = generate_format_enum(&formats);

        let b = code.find("    B,\n").unwrap();
        let a = code.find("    A,\n").unwrap();
        let c = code.find("    C,\n").unwrap();
        assert!(b < a && a < c);
    }

    #[test]
    fn test_generate_format_enum_scaffolding() {
        let code = generate_format_enum(&["R8_UNORM".to_string()]);
        assert!(code.contains("namespace gfx\n{\n"));
        assert!(code.contains("namespace mtl_shader\n{\n"));
        assert!(code.contains("namespace FormatID\n{\nenum\n{\n"));
        assert!(code.ends_with("};\n\n}\n\n}\n}\n"));
    }

    #[test]
    fn test_generate_format_enum_deterministic() {
        let formats = vec!["X".to_string(), "Y".to_string()];
        assert_eq!(generate_format_enum(&formats), generate_format_enum(&formats));
    }
}

//! Declared inputs and outputs of the generator.
//!
//! The build orchestrator consumes these lists verbatim through query mode,
//! so the filenames here are contract, not convention.

/// Shader fragments combined into the internal shader library.
// Order is significant; later fragments call helpers declared by earlier
// ones, and the combined output preserves this exact sequence.
pub const SHADER_FRAGMENTS: &[&str] = &[
    "blit.metal",
    "clear.metal",
    "gen_indices.metal",
    "gen_mipmap.metal",
    "copy_buffer.metal",
    "visibility.metal",
    "rewrite_indices.metal",
];

/// Headers the fragments pull in during preprocessing.
pub const SHARED_HEADERS: &[&str] = &["common.h", "constants.h"];

/// Pixel-format mapping table consumed by the enum generator.
pub const FORMAT_TABLE: &str = "format_map.json";

/// Generated enum header.
pub const ENUM_HEADER: &str = "format_id_autogen.h";

/// Generated embedding of the combined source (raw string literal).
pub const EMBEDDED_SOURCE: &str = "internal_shaders_src_autogen.inc";

/// Generated standalone copy of the combined source.
pub const STANDALONE_SOURCE: &str = "internal_shaders_src_autogen.metal";

/// Comma-joined list of every file the generation pipeline reads.
pub fn declared_inputs() -> String {
    let mut names = vec![FORMAT_TABLE];
    names.extend_from_slice(SHADER_FRAGMENTS);
    names.extend_from_slice(SHARED_HEADERS);
    names.join(",")
}

/// Comma-joined list of every file the generation pipeline writes.
pub fn declared_outputs() -> String {
    [ENUM_HEADER, EMBEDDED_SOURCE, STANDALONE_SOURCE].join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_inputs_cover_table_fragments_and_headers() {
        let inputs = declared_inputs();
        let names: Vec<&str> = inputs.split(',').collect();

        assert_eq!(names[0], FORMAT_TABLE);
        for fragment in SHADER_FRAGMENTS {
            assert!(names.contains(fragment), "missing fragment {}", fragment);
        }
        for header in SHARED_HEADERS {
            assert!(names.contains(header), "missing header {}", header);
        }
        assert_eq!(names.len(), 1 + SHADER_FRAGMENTS.len() + SHARED_HEADERS.len());
    }

    #[test]
    fn test_declared_inputs_preserve_fragment_order() {
        let inputs = declared_inputs();
        let mut last = 0;
        for fragment in SHADER_FRAGMENTS {
            let pos = inputs.find(fragment).expect("fragment listed");
            assert!(pos > last, "{} out of order", fragment);
            last = pos;
        }
    }

    #[test]
    fn test_declared_outputs() {
        assert_eq!(
            declared_outputs(),
            "format_id_autogen.h,internal_shaders_src_autogen.inc,internal_shaders_src_autogen.metal"
        );
    }
}

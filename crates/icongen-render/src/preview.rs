//! Renderer for the browsable preview page.
//!
//! The page itself is an embedded template; this module's job is the text
//! construction around it: sorting entries, escaping them into an inlined
//! literal data array, and splicing the control-model constants into the
//! template's placeholders.

use icongen_core::IconEntry;

use crate::controls::{DEFAULT_SWATCH, ROTATE_LIMIT_DEG, ROTATE_STEP_DEG};

/// The embedded preview page, with `{{...}}` injection placeholders.
const PREVIEW_PAGE_TEMPLATE: &str = include_str!("templates/preview_page.vue");

/// Renders the preview page component for the given entries.
///
/// Entries are sorted by `name` (ordinal) before being embedded; grouping by
/// category is the page's own concern and happens in the browser. Single
/// quotes in embedded fields are escaped so the literal array stays valid.
#[must_use]
pub fn build_preview_component(entries: &[IconEntry]) -> String {
    let mut sorted: Vec<&IconEntry> = entries.iter().collect();
    sorted.sort_unstable_by(|a, b| a.name.cmp(&b.name));

    let icon_array = if sorted.is_empty() {
        "[] as const".to_owned()
    } else {
        let items: Vec<String> = sorted
            .iter()
            .map(|entry| {
                format!(
                    "  {{ name: '{}', path: '{}', category: '{}' }},",
                    escape_single_quotes(&entry.name),
                    escape_single_quotes(&entry.path),
                    escape_single_quotes(&entry.category),
                )
            })
            .collect();
        format!("[\n{}\n] as const", items.join("\n"))
    };

    PREVIEW_PAGE_TEMPLATE
        .replace("{{ICON_ARRAY}}", &icon_array)
        .replace("{{HEX_PLACEHOLDER}}", &DEFAULT_SWATCH.to_hex())
        .replace("{{RGB_PLACEHOLDER}}", &DEFAULT_SWATCH.to_css())
        .replace("{{ROTATE_STEP}}", &ROTATE_STEP_DEG.to_string())
        .replace("{{ROTATE_LIMIT}}", &ROTATE_LIMIT_DEG.to_string())
}

fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, path: &str, category: &str) -> IconEntry {
        IconEntry {
            name: name.to_owned(),
            path: path.to_owned(),
            category: category.to_owned(),
        }
    }

    #[test]
    fn test_empty_entries_embed_empty_array() {
        let rendered = build_preview_component(&[]);
        assert!(rendered.contains("const icons: readonly IconItem[] = [] as const;"));
    }

    #[test]
    fn test_entries_sorted_by_name() {
        let rendered = build_preview_component(&[
            entry("b", "b", "root"),
            entry("a", "a", "root"),
        ]);
        let a = rendered.find("name: 'a'").expect("entry a embedded");
        let b = rendered.find("name: 'b'").expect("entry b embedded");
        assert!(a < b);
    }

    #[test]
    fn test_entry_fields_embedded() {
        let rendered = build_preview_component(&[entry("arrows-left", "arrows/left", "arrows")]);
        assert!(rendered.contains("{ name: 'arrows-left', path: 'arrows/left', category: 'arrows' },"));
    }

    #[test]
    fn test_single_quotes_escaped() {
        let rendered = build_preview_component(&[entry("it's", "it's", "root")]);
        assert!(rendered.contains("name: 'it\\'s'"));
    }

    #[test]
    fn test_no_placeholders_survive_rendering() {
        let rendered = build_preview_component(&[entry("a", "a", "root")]);
        assert!(!rendered.contains("{{ICON_ARRAY}}"));
        assert!(!rendered.contains("{{HEX_PLACEHOLDER}}"));
        assert!(!rendered.contains("{{RGB_PLACEHOLDER}}"));
        assert!(!rendered.contains("{{ROTATE_STEP}}"));
        assert!(!rendered.contains("{{ROTATE_LIMIT}}"));
    }

    #[test]
    fn test_control_constants_injected() {
        let rendered = build_preview_component(&[]);
        assert!(rendered.contains("'#38bdf8'"));
        assert!(rendered.contains("'rgb(56, 189, 248)'"));
        assert!(rendered.contains("step=\"45\""));
        assert!(rendered.contains("value >= 360 || value <= -360"));
    }

    #[test]
    fn test_page_starts_with_generated_banner() {
        let rendered = build_preview_component(&[]);
        assert!(rendered.starts_with("<!-- !!! 此文件由插件自动生成，请勿手动修改 !!! -->"));
    }
}

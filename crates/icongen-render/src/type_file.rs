//! Renderer for the generated identifier union type.
//!
//! Output shape, with names sorted ordinally:
//!
//! ```text
//! // ⚠️ 此文件为自动生成，请勿手动修改
//! export type SvgIconName =
//!   | 'arrows-left'
//!   | 'close';
//! ```
//!
//! With no icons the union degenerates to `never`, which tells type-checking
//! consumers that no valid identifier exists yet.

/// Warning header emitted at the top of the generated declaration file.
pub const FILE_HEADER: &str = "// ⚠️ 此文件为自动生成，请勿手动修改";

/// Renders the type declaration for the given identifiers.
///
/// Names are sorted with an ordinal string sort. Duplicates are kept: two
/// files that derive the same identifier both appear in the union.
#[must_use]
pub fn build_type_file(names: &[String]) -> String {
    if names.is_empty() {
        return format!("{FILE_HEADER}\nexport type SvgIconName = never;\n");
    }

    let mut sorted = names.to_vec();
    sorted.sort_unstable();

    let lines: Vec<String> = sorted.iter().map(|name| format!("  | '{name}'")).collect();
    format!("{FILE_HEADER}\nexport type SvgIconName =\n{};\n", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn test_empty_renders_never() {
        insta::assert_snapshot!(build_type_file(&[]), @r"
        // ⚠️ 此文件为自动生成，请勿手动修改
        export type SvgIconName = never;
        ");
    }

    #[test]
    fn test_names_sorted_ordinally() {
        insta::assert_snapshot!(build_type_file(&names(&["b", "a", "c"])), @r"
        // ⚠️ 此文件为自动生成，请勿手动修改
        export type SvgIconName =
          | 'a'
          | 'b'
          | 'c';
        ");
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let rendered = build_type_file(&names(&["a-b", "a-b"]));
        assert_eq!(rendered.matches("'a-b'").count(), 2);
    }

    #[test]
    fn test_header_always_first_line() {
        let rendered = build_type_file(&names(&["close"]));
        assert!(rendered.starts_with(FILE_HEADER));
    }
}

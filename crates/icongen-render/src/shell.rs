//! Renderers for the preview bootstrap script and the HTML shell.

use camino::Utf8Path;

/// Renders the fixed preview bootstrap script.
///
/// The script mounts the preview page into the host's rendering root and
/// imports the scanned-icon registration side effect. It always imports the
/// component by its fixed sibling name, independent of where the component
/// artifact is configured to land.
#[must_use]
pub fn build_preview_main() -> String {
    let script = r"import { createApp } from 'vue';
import 'virtual:svg-icons-register';
import Preview from './generated-preview.vue';

createApp(Preview).mount('#app');
";
    script.to_owned()
}

/// Renders the minimal HTML shell referencing the bootstrap script.
///
/// The module-script `src` is the bootstrap path relative to the project
/// root, forced to begin with `/` and forward-slash normalized.
#[must_use]
pub fn build_preview_html(preview_main_file: &Utf8Path, root: &Utf8Path) -> String {
    let main_path = to_public_path(preview_main_file, root);
    format!(
        r#"<!doctype html>
<html lang="zh-CN">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>SVG Icon Preview</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="{main_path}"></script>
  </body>
</html>
"#
    )
}

/// Root-relative URL for a file, with a leading slash enforced.
fn to_public_path(file: &Utf8Path, root: &Utf8Path) -> String {
    let relative = file
        .strip_prefix(root)
        .map_or_else(|_| file.as_str().to_owned(), |rel| rel.as_str().to_owned())
        .replace('\\', "/");
    if relative.starts_with('/') {
        relative
    } else {
        format!("/{relative}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bootstrap_is_fixed_text() {
        let script = build_preview_main();
        assert!(script.contains("import 'virtual:svg-icons-register';"));
        assert!(script.contains("import Preview from './generated-preview.vue';"));
        assert!(script.contains("createApp(Preview).mount('#app');"));
        assert_eq!(script, build_preview_main());
    }

    #[test]
    fn test_shell_references_root_relative_bootstrap() {
        let html = build_preview_html(
            Utf8Path::new("/project/icon-preview/main.ts"),
            Utf8Path::new("/project"),
        );
        assert!(html.contains("<script type=\"module\" src=\"/icon-preview/main.ts\"></script>"));
    }

    #[test]
    fn test_shell_is_minimal_document() {
        let html = build_preview_html(
            Utf8Path::new("/project/icon-preview/main.ts"),
            Utf8Path::new("/project"),
        );
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("<div id=\"app\"></div>"));
        assert!(html.contains("<title>SVG Icon Preview</title>"));
    }

    #[test]
    fn test_public_path_leading_slash_enforced() {
        assert_eq!(
            to_public_path(Utf8Path::new("/p/a/main.ts"), Utf8Path::new("/p")),
            "/a/main.ts"
        );
        // A bootstrap file outside the root keeps its own absolute path.
        assert_eq!(
            to_public_path(Utf8Path::new("/elsewhere/main.ts"), Utf8Path::new("/p")),
            "/elsewhere/main.ts"
        );
    }

    #[test]
    fn test_public_path_normalizes_backslashes() {
        assert_eq!(
            to_public_path(Utf8Path::new("a\\main.ts"), Utf8Path::new("/p")),
            "/a/main.ts"
        );
    }
}

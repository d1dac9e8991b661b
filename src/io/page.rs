// src/io/page.rs

use log::info;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Multi-Agent Inventory Visuals</title>
  <style>
    body { font-family: Arial, sans-serif; padding: 20px; }
    img { max-width: 90%; margin-bottom: 20px; border: 1px solid #ccc; }
    h2 { color: #333; }
  </style>
</head>
<body>
  <h1>Multi-Agent Inventory Visuals</h1>
"#;

/// Writes the static index page into `output_dir`.
///
/// Images are linked relative to `output_dir` in the order given.
pub fn write_index_page(
    output_dir: &Path,
    page_name: &str,
    day_charts: &[PathBuf],
    behavior_charts: &[PathBuf],
    report_name: &str,
) -> Result<PathBuf> {
    let mut html = String::from(HEAD);

    html.push_str("  <div id=\"charts\">\n");
    push_images(&mut html, output_dir, day_charts);
    html.push_str("  </div>\n");

    if !behavior_charts.is_empty() {
        html.push_str("  <div id=\"behavior\">\n    <h2>Store Behavior</h2>\n");
        push_images(&mut html, output_dir, behavior_charts);
        html.push_str("  </div>\n");
    }

    let report = escape(report_name);
    let _ = write!(
        html,
        "  <div>\n    <h2>Download Report</h2>\n    <a href=\"{report}\" download>Download CSV Report</a>\n  </div>\n</body>\n</html>\n"
    );

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(page_name);
    fs::write(&path, html)?;
    info!("Index page written to {}", path.display());
    Ok(path)
}

fn push_images(html: &mut String, output_dir: &Path, images: &[PathBuf]) {
    for image in images {
        let name = escape(&image.file_name().unwrap_or_default().to_string_lossy());
        let src = escape(&relative_src(output_dir, image));
        let _ = writeln!(html, "    <h2>{name}</h2>");
        let _ = writeln!(html, "    <img src=\"{src}\" alt=\"{name}\">");
    }
}

fn relative_src(output_dir: &Path, image: &Path) -> String {
    let relative = image.strip_prefix(output_dir).unwrap_or(image);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_lists_images_and_report_link() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("docs");
        let days = vec![
            out.join("visualizations").join("day_1.svg"),
            out.join("visualizations").join("day_2.svg"),
        ];
        let behavior = vec![out.join("visualizations").join("behavior_9286.svg")];

        let path = write_index_page(&out, "index.html", &days, &behavior, "simulation_report.csv").unwrap();
        let html = fs::read_to_string(path).unwrap();

        let first = html.find("visualizations/day_1.svg").unwrap();
        let second = html.find("visualizations/day_2.svg").unwrap();
        assert!(first < second);
        assert!(html.contains("<h2>Store Behavior</h2>"));
        assert!(html.contains("<img src=\"visualizations/behavior_9286.svg\" alt=\"behavior_9286.svg\">"));
        assert!(html.contains("<a href=\"simulation_report.csv\" download>"));
    }

    #[test]
    fn behavior_section_is_omitted_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_index_page(dir.path(), "index.html", &[], &[], "r.csv").unwrap();
        let html = fs::read_to_string(path).unwrap();
        assert!(!html.contains("Store Behavior"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn markup_in_names_is_escaped() {
        assert_eq!(escape("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}

//! Directory listing page for directory shares.

use std::path::Path;

use axum::response::Html;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use linkdrop_core::error::{AppError, ErrorKind};

/// Characters escaped inside a single URL path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    /// File name within the directory.
    pub name: String,
    /// Whether the item is itself a directory.
    pub is_dir: bool,
}

/// Reads the immediate children of `dir`, sorted by name.
pub async fn read_listing(dir: &Path) -> Result<Vec<ListingItem>, AppError> {
    let mut entries = tokio::fs::read_dir(dir).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::not_found("Not found")
        } else {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read directory: {}", dir.display()),
                e,
            )
        }
    })?;

    let mut items = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        items.push(ListingItem {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    items.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(items)
}

/// Renders the listing with links of the form `/{token}/{name}`.
pub fn render_listing(token: &str, dir: &Path, items: &[ListingItem]) -> Html<String> {
    let title = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "/".to_string());

    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(&title)));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>Files in {}</h1>\n<ul>\n", escape_html(&title)));

    for item in items {
        let suffix = if item.is_dir { "/" } else { "" };
        html.push_str(&format!(
            "<li><a href=\"/{}/{}\">{}{}</a></li>\n",
            utf8_percent_encode(token, SEGMENT),
            utf8_percent_encode(&item.name, SEGMENT),
            escape_html(&item.name),
            suffix
        ));
    }

    html.push_str("</ul>\n</body>\n</html>\n");
    Html(html)
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

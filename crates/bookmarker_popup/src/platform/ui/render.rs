use bookmarker_core::{Notice, PopupViewModel};

use super::constants::{DUPLICATE_MESSAGE, SAVED_MESSAGE};

/// Projects the view model onto terminal lines. Pure; the caller decides
/// when to repaint.
pub fn render(view: &PopupViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Page URL: {}", view.page_url));

    if view.busy {
        lines.push("Analyzing...".to_string());
    }
    if let Some(error) = &view.error {
        lines.push(error.clone());
    }
    if let Some(notice) = &view.notice {
        lines.push(notice_line(notice));
    }

    if let Some(results) = &view.results {
        lines.push(format!("{} | {}", results.site_name, results.title));
        lines.push(format!("Favicon: {}", results.favicon_url));
        lines.push(format!(
            "Category: {}",
            results.category.as_deref().unwrap_or("(not set)")
        ));
        lines.push(format!("Options: {}", results.category_options.join(" | ")));
        let rows = results
            .tags
            .iter()
            .map(|row| format!("[{}]", row.tag))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("Tags: {rows}"));
        lines.push(format!("Tag field: {}", results.tags_delimited));
        lines.push(format!("Content: {}", results.content));
        lines.push(format!("Visit: {}", results.visit_url));
    }

    lines
}

fn notice_line(notice: &Notice) -> String {
    match notice {
        Notice::Saved => SAVED_MESSAGE.to_string(),
        Notice::AlreadySaved => DUPLICATE_MESSAGE.to_string(),
        Notice::SaveFailed(message) => format!("Error: {message}"),
    }
}

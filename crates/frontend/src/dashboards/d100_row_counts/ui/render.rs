//! Markup of the row-counts panel
//!
//! Every function returns the complete content of the display region, so a
//! render is one write that replaces whatever was there before.

use crate::dashboards::d100_row_counts::config::Labels;
use crate::shared::html::html_escape;
use contracts::dashboards::d100_row_counts::{RowCountResponse, RowCountSummary, Section};

/// Render a decoded payload
pub fn render_response(response: &RowCountResponse, labels: &Labels) -> String {
    match response {
        RowCountResponse::Success(summary) => render_summary(summary, labels),
        RowCountResponse::Failure { error } => render_error(error),
    }
}

/// Heading with the total followed by one block per section
pub fn render_summary(summary: &RowCountSummary, labels: &Labels) -> String {
    let mut html = String::from("<div class=\"row-counts\">");

    html.push_str(&format!(
        "<h2>{}{}</h2>",
        labels.total_rows, summary.total_rows
    ));

    html.push_str("<div class=\"sections\">");
    for section in &summary.sections {
        html.push_str(&render_section(section, labels));
    }
    html.push_str("</div>");

    html.push_str("</div>");
    html
}

fn render_section(section: &Section, labels: &Labels) -> String {
    let mut html = String::from("<div class=\"section\">");
    html.push_str(&format!("<h3>{}</h3>", html_escape(&section.section_title)));
    html.push_str(&format!("<p>{}{}</p>", labels.row_count, section.row_count));

    if let Some(start) = section.visible_start_row() {
        html.push_str(&format!("<p>{}{}</p>", labels.start_row, start));
    }
    if let Some(end) = section.visible_end_row() {
        html.push_str(&format!("<p>{}{}</p>", labels.end_row, end));
    }

    html.push_str("</div>");
    html
}

/// Single error paragraph
pub fn render_error(message: &str) -> String {
    format!("<p class=\"error\">{}</p>", html_escape(message))
}

/// Generic message for a failed load
pub fn render_load_failure(labels: &Labels) -> String {
    render_error(labels.load_failed)
}

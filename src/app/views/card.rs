//! # Profile Card
//!
//! Pure formatting of a [`CompanyProfile`] into text lines, shared by the
//! interactive screen and one-shot mode. Absent scalar fields render as
//! empty, never as a placeholder; sequence fields render as a bulleted
//! list, zero items rendering as an empty list.

use crate::app::models::CompanyProfile;

/// Section order follows the card layout: title row, then the left
/// column, then the right column of the original two-column design.
pub fn profile_card_lines(profile: &CompanyProfile) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(profile.name.clone().unwrap_or_default());
    if let Some(website) = &profile.website {
        lines.push(website_link(website));
    }
    lines.push(String::new());

    push_scalar(&mut lines, "Description", &profile.description);
    push_scalar(&mut lines, "Founded", &profile.founded);
    push_scalar(&mut lines, "Headquarters", &profile.headquarters);
    push_scalar(&mut lines, "Employees", &profile.employees);
    push_scalar(&mut lines, "Industry", &profile.industry);
    push_sequence(&mut lines, "Products", &profile.products);
    push_sequence(&mut lines, "Competitors", &profile.competitors);
    push_scalar(&mut lines, "Revenue", &profile.revenue);

    lines
}

/// Outbound link for the website field
///
/// The `https://` prefix is fixed regardless of the field's content; a
/// value that already carries a scheme produces a doubled-scheme link.
pub fn website_link(website: &str) -> String {
    format!("https://{website}")
}

fn push_scalar(lines: &mut Vec<String>, label: &str, value: &Option<String>) {
    lines.push(label.to_uppercase());
    match value {
        Some(text) => lines.push(format!("  {text}")),
        None => lines.push(String::new()),
    }
    lines.push(String::new());
}

fn push_sequence(lines: &mut Vec<String>, label: &str, items: &Option<Vec<String>>) {
    lines.push(label.to_uppercase());
    if let Some(items) = items {
        for item in items {
            lines.push(format!("  - {item}"));
        }
    }
    lines.push(String::new());
}

// src/digest.rs
//
// Render a change list as the plain-text body of the alert mail.

use crate::config::consts::MISSING;
use crate::detect::ChangeRecord;
use crate::snapshot::SnapshotEntry;

fn or_missing(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

fn price_text(value: Option<f64>) -> String {
    match value {
        Some(p) => p.to_string(),
        None => s!(MISSING),
    }
}

fn category_text(entry: &SnapshotEntry) -> String {
    if entry.category_name.is_empty() {
        entry.category_id.to_string()
    } else {
        entry.category_name.clone()
    }
}

/// One paragraph per change, blank line between paragraphs, in the order
/// the detector produced them. Absent fields render as the placeholder
/// token instead of failing.
pub fn format_digest(changes: &[ChangeRecord]) -> String {
    let mut paragraphs = Vec::with_capacity(changes.len());
    for change in changes {
        let prev = &change.previous;
        let curr = &change.current;
        paragraphs.push(format!(
            "{} ({})\nStatus: {} -> {}\nPrice: {} -> {}\nLink: {}\n",
            or_missing(&curr.name),
            category_text(curr),
            or_missing(&prev.status),
            or_missing(&curr.status),
            price_text(prev.price),
            price_text(curr.price),
            curr.url,
        ));
    }
    paragraphs.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(key: &str, name: Option<&str>, prev_status: Option<&str>, curr_status: Option<&str>,
              prev_price: Option<f64>, curr_price: Option<f64>) -> ChangeRecord {
        let base = SnapshotEntry {
            name: name.map(String::from),
            category_id: 6,
            category_name: s!("MERCH"),
            url: format!("https://example.com/{key}"),
            ..Default::default()
        };
        ChangeRecord {
            key: s!(key),
            previous: SnapshotEntry {
                status: prev_status.map(String::from),
                price: prev_price,
                ..base.clone()
            },
            current: SnapshotEntry {
                status: curr_status.map(String::from),
                price: curr_price,
                ..base
            },
        }
    }

    #[test]
    fn renders_name_category_status_price_and_link() {
        let text = format_digest(&[change(
            "6:100", Some("Hoodie"), Some("SOLD_OUT"), Some("IN_STOCK"), Some(20.0), Some(15.0),
        )]);
        assert_eq!(
            text,
            "Hoodie (MERCH)\nStatus: SOLD_OUT -> IN_STOCK\nPrice: 20 -> 15\nLink: https://example.com/6:100\n"
        );
    }

    #[test]
    fn absent_fields_render_as_placeholder() {
        let text = format_digest(&[change("6:100", None, None, Some("IN_STOCK"), None, Some(5.0))]);
        assert!(text.starts_with("n/a (MERCH)\n"));
        assert!(text.contains("Status: n/a -> IN_STOCK\n"));
        assert!(text.contains("Price: n/a -> 5\n"));
    }

    #[test]
    fn empty_category_name_falls_back_to_id() {
        let mut c = change("6:100", Some("Hoodie"), None, None, Some(20.0), Some(10.0));
        c.current.category_name = s!();
        let text = format_digest(&[c]);
        assert!(text.starts_with("Hoodie (6)\n"));
    }

    #[test]
    fn paragraphs_keep_input_order_with_blank_line_between() {
        let text = format_digest(&[
            change("6:100", Some("First"), Some("SOLD_OUT"), Some("IN_STOCK"), None, None),
            change("5:200", Some("Second"), None, None, Some(9.0), Some(8.0)),
        ]);
        let first_pos = text.find("First").unwrap();
        let second_pos = text.find("Second").unwrap();
        assert!(first_pos < second_pos);
        assert!(text.contains("\n\n"));
    }

    #[test]
    fn no_changes_renders_empty_body() {
        assert_eq!(format_digest(&[]), "");
    }
}

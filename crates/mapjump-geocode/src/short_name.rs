//! Condenses a full geocoder address into a label that fits a slot button.

const MAX_LABEL_CHARS: usize = 20;
const LONG_FIRST_PART_CHARS: usize = 25;

/// Picks the most useful comma-separated component of a full address and
/// truncates it to button width.
///
/// The first component is preferred (it is usually the street or landmark);
/// when it is unusually long the second component (typically the locality)
/// reads better. Truncation is by character, with an ellipsis suffix.
#[must_use]
pub fn short_name(full_name: &str) -> String {
    let parts: Vec<&str> = full_name
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let picked = match parts.as_slice() {
        [] => return String::new(),
        [only] => *only,
        [first, second, ..] => {
            if first.chars().count() > LONG_FIRST_PART_CHARS {
                *second
            } else {
                *first
            }
        }
    };

    truncate_label(picked)
}

fn truncate_label(part: &str) -> String {
    if part.chars().count() > MAX_LABEL_CHARS {
        let head: String = part.chars().take(MAX_LABEL_CHARS - 3).collect();
        format!("{head}...")
    } else {
        part.to_owned()
    }
}

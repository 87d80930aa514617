use serde::Serialize;
use std::fmt;

pub const MARKER_ICON: &str = "🏖️";
pub const GENERIC_AMENITY_ICON: &str = "✨";

/// Icon and human-readable name for an amenity tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmenityLabel {
    pub icon: &'static str,
    pub text: String,
}

impl fmt::Display for AmenityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.text)
    }
}

pub fn amenity_icon(tag: &str) -> &'static str {
    match tag {
        "infinity-pool" => "🏊",
        "spa" => "🧘",
        "chef" => "👨‍🍳",
        "gym" => "💪",
        "yacht" => "🛥️",
        "helipad" => "🚁",
        _ => GENERIC_AMENITY_ICON,
    }
}

/// `"private-island"` -> `"Private Island"`.
pub fn format_tag(tag: &str) -> String {
    tag.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn amenity_display_label(tag: &str) -> AmenityLabel {
    AmenityLabel {
        icon: amenity_icon(tag),
        text: format_tag(tag),
    }
}

/// Dollar amount with thousands separators, e.g. `$8,500`.
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

pub fn nightly_price_label(amount: u32) -> String {
    format!("{}/night", format_price(amount))
}

pub fn guest_label(guests: u16) -> String {
    format!("{guests} guests")
}

pub fn results_count_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} villa{suffix} found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_amenity_uses_table_icon() {
        let label = amenity_display_label("infinity-pool");
        assert_eq!(label.icon, "🏊");
        assert_eq!(label.text, "Infinity Pool");
        assert_eq!(label.to_string(), "🏊 Infinity Pool");
    }

    #[test]
    fn unknown_amenity_falls_back_to_generic_icon() {
        let label = amenity_display_label("unknown-tag");
        assert_eq!(label.icon, GENERIC_AMENITY_ICON);
        assert_eq!(label.text, "Unknown Tag");
    }

    #[test]
    fn format_tag_handles_odd_input() {
        assert_eq!(format_tag(""), "");
        assert_eq!(format_tag("wine--cellar"), "Wine  Cellar");
        assert_eq!(format_tag("éclair"), "Éclair");
    }

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(950), "$950");
        assert_eq!(format_price(2000), "$2,000");
        assert_eq!(format_price(1_234_567), "$1,234,567");
        assert_eq!(nightly_price_label(8500), "$8,500/night");
    }

    #[test]
    fn results_label_pluralizes() {
        assert_eq!(results_count_label(0), "0 villas found");
        assert_eq!(results_count_label(1), "1 villa found");
        assert_eq!(results_count_label(15), "15 villas found");
        assert_eq!(guest_label(2), "2 guests");
    }
}

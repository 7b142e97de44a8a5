//! Placeholder avatars for images that fail to load.

/// Up to two uppercase initials: first letter of the first and last words.
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace().filter_map(|w| w.chars().next());
    let first = match words.next() {
        Some(c) => c,
        None => return "?".to_string(),
    };
    let mut out: String = first.to_uppercase().collect();
    if let Some(last) = words.last() {
        out.extend(last.to_uppercase());
    }
    out
}

/// Stable hue in 0..360 so the same person always gets the same color.
pub fn hue(name: &str) -> u16 {
    let h = name
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    (h % 360) as u16
}

/// Inline SVG data URL used as a drop-in `src` replacement.
pub fn placeholder_data_url(name: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='96' height='96' viewBox='0 0 96 96'>\
         <rect width='96' height='96' rx='48' fill='hsl({hue},55%,45%)'/>\
         <text x='50%' y='54%' dominant-baseline='middle' text-anchor='middle' \
         font-family='sans-serif' font-size='36' fill='white'>{initials}</text></svg>",
        hue = hue(name),
        initials = escape(&initials(name)),
    );
    format!("data:image/svg+xml;utf8,{}", svg.replace('#', "%23"))
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
}

/// Filled and empty star counts for a rating, clamped to 1..=5.
pub fn stars(rating: u8) -> (usize, usize) {
    let filled = rating.clamp(1, 5) as usize;
    (filled, 5 - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("  maria  de la   santos "), "MS");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "?");
        assert_eq!(initials("élodie martin"), "ÉM");
    }

    #[test]
    fn test_hue_stable_and_bounded() {
        assert_eq!(hue("David Chen"), hue("David Chen"));
        assert!(hue("David Chen") < 360);
        assert!(hue("") < 360);
    }

    #[test]
    fn test_placeholder_contains_initials() {
        let url = placeholder_data_url("Ada Lovelace");
        assert!(url.starts_with("data:image/svg+xml"));
        assert!(url.contains(">AL<"));
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), (4, 1));
        assert_eq!(stars(0), (1, 4));
        assert_eq!(stars(7), (5, 0));
    }
}

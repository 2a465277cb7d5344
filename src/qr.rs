//! Placeholder QR image
//!
//! A fixed 100x100 module pattern rendered as an inline SVG data URI.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Top-left corners of the dark modules
const MODULES: &[(u32, u32)] = &[
    (10, 10), (20, 10), (30, 10), (50, 10), (70, 10), (80, 10),
    (10, 20), (80, 20),
    (10, 30), (25, 30), (35, 30), (55, 30), (80, 30),
    (10, 40), (25, 40), (35, 40), (55, 40), (80, 40),
    (10, 50), (25, 50), (35, 50), (55, 50), (80, 50),
    (10, 60), (80, 60),
    (10, 70), (20, 70), (30, 70), (50, 70), (70, 70), (80, 70),
];

const MODULE_SIZE: u32 = 5;

pub fn placeholder_svg() -> String {
    let cells: String = MODULES
        .iter()
        .map(|(x, y)| {
            format!(
                r#"<rect x="{}" y="{}" width="{s}" height="{s}"/>"#,
                x,
                y,
                s = MODULE_SIZE
            )
        })
        .collect();
    format!(
        r#"<svg width="100" height="100" xmlns="http://www.w3.org/2000/svg"><rect width="100" height="100" fill="white"/><g fill="black">{}</g></svg>"#,
        cells
    )
}

/// `src` value for an `<img>` showing the placeholder
pub fn placeholder_data_uri() -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        utf8_percent_encode(&placeholder_svg(), NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_has_every_module() {
        let svg = placeholder_svg();
        // One background rect plus the modules
        assert_eq!(svg.matches("<rect").count(), MODULES.len() + 1);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_data_uri_is_percent_encoded() {
        let uri = placeholder_data_uri();
        assert!(uri.starts_with("data:image/svg+xml;charset=utf-8,%3Csvg"));
        assert!(!uri.contains('<'));
        assert!(!uri.contains('"'));
        assert!(!uri.contains(' '));
    }
}

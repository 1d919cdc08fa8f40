/// Product shade names accepted in place of a color code.
pub const PALETTE: &[(&str, &str)] = &[
    ("red", "#FF0000"),
    ("pink", "#FF69B4"),
    ("nude", "#E3BC9A"),
    ("coral", "#FF7F50"),
    ("burgundy", "#800020"),
    ("light", "#FFE4E1"),
    ("medium", "#DEB887"),
    ("dark", "#4B0082"),
    ("tan", "#D2B48C"),
    ("beige", "#F5F5DC"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("blue", "#0000FF"),
    ("green", "#008000"),
    ("yellow", "#FFFF00"),
    ("purple", "#800080"),
    ("orange", "#FFA500"),
    ("brown", "#A52A2A"),
    ("gray", "#808080"),
    ("gold", "#FFD700"),
    ("silver", "#C0C0C0"),
    ("rose gold", "#B76E79"),
];

/// Case-insensitive name lookup returning the palette's hex code.
pub fn lookup(name: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, hex)| *hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("Rose Gold"), Some("#B76E79"));
        assert_eq!(lookup("NUDE"), Some("#E3BC9A"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("chartreuse"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_names_are_unique_lowercase() {
        for (i, (name, _)) in PALETTE.iter().enumerate() {
            assert_eq!(*name, name.to_lowercase());
            assert!(PALETTE[i + 1..].iter().all(|(other, _)| other != name));
        }
    }
}

//! Pin Registry - ordered set of pinned tag names

use shared::models::Preset;

/// Toggle `tag` in the pin list; returns true when the tag is now pinned
///
/// New pins are appended so the list keeps pin order.
pub fn toggle_pin(pinned: &mut Vec<String>, tag: &str) -> bool {
    if let Some(pos) = pinned.iter().position(|p| p == tag) {
        pinned.remove(pos);
        false
    } else {
        pinned.push(tag.to_string());
        true
    }
}

/// Position of the earliest pinned tag the preset carries
pub fn pin_rank(preset: &Preset, pinned: &[String]) -> Option<usize> {
    pinned.iter().position(|tag| preset.has_category(tag))
}

/// Drop every name in `names` from the pin list
pub fn remove_pins(pinned: &mut Vec<String>, names: &[String]) {
    pinned.retain(|p| !names.contains(p));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tag_index::tests::preset;

    #[test]
    fn test_toggle_keeps_insertion_order() {
        let mut pinned = Vec::new();
        assert!(toggle_pin(&mut pinned, "Z"));
        assert!(toggle_pin(&mut pinned, "A"));
        assert!(toggle_pin(&mut pinned, "M"));
        assert_eq!(pinned, vec!["Z", "A", "M"]);

        assert!(!toggle_pin(&mut pinned, "A"));
        assert_eq!(pinned, vec!["Z", "M"]);
    }

    #[test]
    fn test_pin_rank_uses_registry_order() {
        let pinned = vec!["X".to_string(), "Y".to_string()];
        assert_eq!(pin_rank(&preset("1", &["Y", "X"], None), &pinned), Some(0));
        assert_eq!(pin_rank(&preset("2", &["Y"], None), &pinned), Some(1));
        assert_eq!(pin_rank(&preset("3", &["Z"], None), &pinned), None);
    }

    #[test]
    fn test_remove_pins() {
        let mut pinned = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        remove_pins(&mut pinned, &["C".to_string(), "A".to_string(), "Q".to_string()]);
        assert_eq!(pinned, vec!["B"]);
    }
}

//! Bootstrap tooltip attribute set for elements that only carry `data-title`.

use crate::consts::{TOOLTIP_CUSTOM_CLASS, TOOLTIP_PLACEMENT};

/// Attributes (name, value) that turn an element into a Bootstrap tooltip
/// trigger showing `title` below it.
#[must_use]
pub fn tooltip_attrs(title: &str) -> [(&'static str, String); 4] {
    [
        ("data-bs-toggle", "tooltip".to_owned()),
        ("data-bs-title", title.to_owned()),
        ("data-bs-placement", TOOLTIP_PLACEMENT.to_owned()),
        ("data-bs-custom-class", TOOLTIP_CUSTOM_CLASS.to_owned()),
    ]
}

/// Run `attach` on every trigger, logging failures instead of stopping at
/// the first one. Returns how many succeeded.
pub fn attach_all<T, E: std::fmt::Display>(triggers: &[T], mut attach: impl FnMut(&T) -> Result<(), E>) -> usize {
    let mut attached = 0;
    for (i, trigger) in triggers.iter().enumerate() {
        match attach(trigger) {
            Ok(()) => attached += 1,
            Err(err) => log::warn!("tooltip trigger {i}: {err}"),
        }
    }
    attached
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attrs_carry_title_and_fixed_styling() {
        let attrs = tooltip_attrs("HyperText Markup Language");
        assert_eq!(attrs[0], ("data-bs-toggle", "tooltip".to_owned()));
        assert_eq!(attrs[1], ("data-bs-title", "HyperText Markup Language".to_owned()));
        assert_eq!(attrs[2], ("data-bs-placement", "bottom".to_owned()));
        assert_eq!(attrs[3], ("data-bs-custom-class", "themed-tooltip".to_owned()));
    }

    #[test]
    fn failing_trigger_does_not_stop_the_rest() {
        let triggers = ["a", "broken", "c", "d"];
        let mut seen = Vec::new();
        let attached = attach_all(&triggers, |t| {
            seen.push(*t);
            if *t == "broken" { Err("constructor threw") } else { Ok(()) }
        });
        assert_eq!(attached, 3);
        assert_eq!(seen, triggers);
    }

    #[test]
    fn empty_title_is_kept_verbatim() {
        let attrs = tooltip_attrs("");
        assert_eq!(attrs[1].1, "");
    }
}

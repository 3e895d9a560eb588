//! Looping carousel strips.
//!
//! The CSS marquee scrolls `.carousel__inner` by half its width, so the
//! content has to appear twice. Clones are decorative and hidden from
//! assistive technology.

/// Attribute that marks a carousel as animated. Its presence also means the
/// content has already been duplicated.
pub const ANIMATED_ATTR: &str = "data-animated";
pub const ARIA_HIDDEN_ATTR: &str = "aria-hidden";

/// Whether carousels should animate at all.
#[must_use]
pub fn should_animate(prefers_reduced_motion: bool) -> bool {
    !prefers_reduced_motion
}

/// Whether a carousel still needs its content duplicated.
#[must_use]
pub fn needs_duplication(animated_attr: Option<&str>) -> bool {
    animated_attr != Some("true")
}

/// How many decorative copies to append to a strip of `child_count` items.
///
/// A strip is doubled once: every original gets one copy, unless motion is
/// reduced or the carousel was already animated.
#[must_use]
pub fn copies_to_append(prefers_reduced_motion: bool, animated_attr: Option<&str>, child_count: usize) -> usize {
    if should_animate(prefers_reduced_motion) && needs_duplication(animated_attr) { child_count } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_motion_disables_animation() {
        assert!(should_animate(false));
        assert!(!should_animate(true));
    }

    #[test]
    fn animated_carousel_is_not_duplicated_again() {
        assert!(needs_duplication(None));
        assert!(needs_duplication(Some("false")));
        assert!(!needs_duplication(Some("true")));
    }

    #[test]
    fn strip_doubles_when_motion_allowed() {
        for count in [0, 1, 4, 9] {
            assert_eq!(count + copies_to_append(false, None, count), 2 * count);
        }
    }

    #[test]
    fn strip_unchanged_with_reduced_motion() {
        assert_eq!(copies_to_append(true, None, 4), 0);
    }

    #[test]
    fn second_run_adds_nothing() {
        let first = copies_to_append(false, None, 4);
        let after_first = 4 + first;
        assert_eq!(copies_to_append(false, Some("true"), after_first), 0);
    }
}

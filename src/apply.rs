//! Presentation applier
//!
//! The only code that writes to a [`Surface`]. Resolved state flows one way,
//! controller to surface; nothing here reads back or fails.

use tracing::debug;

use crate::constants::transition;
use crate::surface::Surface;
use crate::types::{Preferences, RevealOrigin, Theme};

/// Push all three preference properties at the surface
pub fn apply<V: Surface>(surface: &mut V, prefs: Preferences) {
    surface.show_theme(prefs.theme);
    surface.show_font_family(prefs.font_family);
    surface.show_font_size(prefs.font_size);
}

/// Startup entry point: push the resolved document text and preferences
pub fn apply_full<V: Surface>(surface: &mut V, text: &str, prefs: Preferences) {
    surface.show_content(text);
    apply(surface, prefs);
}

/// Switch themes, wrapped in an animated reveal when the surface has one
///
/// On a surface without transition support this is a plain theme switch.
/// The reveal is fire-and-forget; the switch itself is never conditional on
/// the animation.
pub fn apply_theme_transition<V: Surface>(
    surface: &mut V,
    from: Theme,
    to: Theme,
    origin: RevealOrigin,
) {
    if surface.supports_transitions() {
        debug!(from = from.as_str(), to = to.as_str(), x = origin.x, y = origin.y, "Starting theme reveal");
        surface.begin_transition(origin, transition::DURATION_MS);
    } else {
        debug!(from = from.as_str(), to = to.as_str(), "No transition support, switching instantly");
    }
    surface.show_theme(to);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use crate::types::FontFamily;

    #[test]
    fn test_apply_pushes_all_three_properties() {
        let mut surface = RecordingSurface::default();
        apply(
            &mut surface,
            Preferences {
                theme: Theme::Dark,
                font_family: FontFamily::Serif,
                font_size: 22,
            },
        );

        assert_eq!(surface.theme, Some(Theme::Dark));
        assert_eq!(surface.font_family, Some(FontFamily::Serif));
        assert_eq!(surface.font_size, Some(22));
        assert_eq!(surface.content, None);
    }

    #[test]
    fn test_apply_full_includes_content() {
        let mut surface = RecordingSurface::default();
        apply_full(&mut surface, "resolved text", Preferences::default());

        assert_eq!(surface.content.as_deref(), Some("resolved text"));
        assert_eq!(surface.theme, Some(Theme::Light));
    }

    #[test]
    fn test_transition_runs_reveal_when_supported() {
        let mut surface = RecordingSurface {
            transition_capable: true,
            ..Default::default()
        };
        let origin = RevealOrigin::new(40, 40);
        apply_theme_transition(&mut surface, Theme::Light, Theme::Dark, origin);

        assert_eq!(surface.transitions, vec![origin]);
        assert_eq!(surface.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_transition_degrades_to_plain_switch() {
        let mut surface = RecordingSurface::default();
        apply_theme_transition(
            &mut surface,
            Theme::Dark,
            Theme::Light,
            RevealOrigin::new(0, 0),
        );

        assert!(surface.transitions.is_empty());
        assert_eq!(surface.theme, Some(Theme::Light));
    }
}

//! Form configuration.
//!
//! `FormStyle` is an explicit, immutable snapshot of the presentation
//! options, constructed at form-build time and passed into the controller.
//! There is no process-wide mutable default state; `Default` carries the
//! documented defaults and callers override fields with struct update
//! syntax.
//!
//! The core reads only the behavioral fields (`display_bottom_navigation`,
//! `include_confirmation_step`, `confirmation_step_title`); everything else
//! is consumed by the rendering collaborator.

use serde::{Deserialize, Serialize};

/// An RGB color, kept platform-neutral for the rendering collaborator.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Presentation and behavior options for a form instance.
///
/// Immutable once the form is initialized.
///
/// # Example
///
/// ```rust
/// use stepform::config::FormStyle;
///
/// let style = FormStyle {
///     step_button_text: "Next".to_string(),
///     include_confirmation_step: false,
///     ..FormStyle::default()
/// };
///
/// assert_eq!(style.last_step_button_text, "Confirm");
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FormStyle {
    /// Text of the per-step "next" button.
    pub step_button_text: String,
    /// Text of the "next" button on the last step.
    pub last_step_button_text: String,
    /// Title of the synthetic confirmation step.
    pub confirmation_step_title: String,
    /// Alpha applied by the renderer to disabled elements, in `[0, 1]`.
    pub alpha_of_disabled_elements: f32,
    pub step_number_background_color: Rgb,
    pub button_background_color: Rgb,
    pub button_pressed_background_color: Rgb,
    pub step_number_text_color: Rgb,
    pub step_title_text_color: Rgb,
    pub step_subtitle_text_color: Rgb,
    pub button_text_color: Rgb,
    pub button_pressed_text_color: Rgb,
    pub error_message_text_color: Rgb,
    /// Whether the bottom previous/next navigation bar is shown.
    pub display_bottom_navigation: bool,
    /// Whether the vertical connector line is drawn between collapsed steps.
    pub display_vertical_line_when_steps_are_collapsed: bool,
    /// Whether each step carries its own "next" button.
    pub display_step_buttons: bool,
    /// Whether a synthetic confirmation step is appended to the form.
    pub include_confirmation_step: bool,
}

impl Default for FormStyle {
    fn default() -> Self {
        Self {
            step_button_text: "Continue".to_string(),
            last_step_button_text: "Confirm".to_string(),
            confirmation_step_title: "Confirmation".to_string(),
            alpha_of_disabled_elements: 0.25,
            step_number_background_color: Rgb::new(63, 81, 181),
            button_background_color: Rgb::new(63, 81, 181),
            button_pressed_background_color: Rgb::new(48, 63, 159),
            step_number_text_color: Rgb::new(255, 255, 255),
            step_title_text_color: Rgb::new(33, 33, 33),
            step_subtitle_text_color: Rgb::new(162, 162, 162),
            button_text_color: Rgb::new(255, 255, 255),
            button_pressed_text_color: Rgb::new(255, 255, 255),
            error_message_text_color: Rgb::new(175, 18, 18),
            display_bottom_navigation: true,
            display_vertical_line_when_steps_are_collapsed: true,
            display_step_buttons: true,
            include_confirmation_step: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let style = FormStyle::default();

        assert_eq!(style.step_button_text, "Continue");
        assert_eq!(style.last_step_button_text, "Confirm");
        assert_eq!(style.confirmation_step_title, "Confirmation");
        assert_eq!(style.alpha_of_disabled_elements, 0.25);
        assert_eq!(style.step_number_background_color, Rgb::new(63, 81, 181));
        assert!(style.display_bottom_navigation);
        assert!(style.display_step_buttons);
        assert!(style.include_confirmation_step);
    }

    #[test]
    fn overrides_leave_other_defaults_intact() {
        let style = FormStyle {
            display_bottom_navigation: false,
            ..FormStyle::default()
        };

        assert!(!style.display_bottom_navigation);
        assert!(style.include_confirmation_step);
    }

    #[test]
    fn style_serializes_correctly() {
        let style = FormStyle::default();

        let json = serde_json::to_string(&style).unwrap();
        let deserialized: FormStyle = serde_json::from_str(&json).unwrap();

        assert_eq!(style, deserialized);
    }
}

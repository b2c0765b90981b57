//! A three-step signup form driven from the terminal.
//!
//! Shows the basic loop: implement `FormRenderer` for your UI, build the
//! form, and call transition methods as "events" arrive.

use stepform::builder::FormBuilder;
use stepform::config::FormStyle;
use stepform::form_steps;
use stepform::render::{ButtonKind, ContentHandle, FormRenderer};

struct ConsoleRenderer;

impl FormRenderer for ConsoleRenderer {
    fn render_step_opened(&mut self, index: usize, _animate: bool) {
        println!("-> step {index} opened");
    }

    fn render_step_closed(&mut self, index: usize, _animate: bool) {
        println!("<- step {index} closed");
    }

    fn request_step_content(&mut self, index: usize) -> Option<ContentHandle> {
        // A real UI would inflate a view here and hand back its id.
        Some(ContentHandle(index as u64))
    }

    fn on_form_completed(&mut self) {
        println!("** form completed, submitting **");
    }

    fn render_progress(&mut self, completed: usize) {
        println!("   progress: {completed} completed");
    }

    fn render_button_enabled(&mut self, button: ButtonKind, enabled: bool) {
        println!("   {button:?} button enabled = {enabled}");
    }
}

fn main() {
    let mut form = FormBuilder::new()
        .steps(form_steps![
            "Account" => "Email and password",
            "Profile",
            "Review",
        ])
        .style(FormStyle {
            include_confirmation_step: false,
            ..FormStyle::default()
        })
        .build(ConsoleRenderer)
        .expect("at least one step declared");

    // A jump ahead is silently rejected while step 0 is incomplete.
    assert!(!form.go_to_step(2, true));

    // The host validates each step's content, then advances.
    form.mark_open_step_as_completed(true);
    form.update_open_step_subtitle("jane@example.com");
    form.go_to_next_step(true);

    form.mark_open_step_as_uncompleted("Display name is required", true);
    println!(
        "validation error: {:?}",
        form.steps().step(1).error_message()
    );
    form.mark_open_step_as_completed(true);
    form.go_to_next_step(true);

    form.mark_open_step_as_completed(true);

    // Advancing past the last step fires the completion callback.
    form.go_to_next_step(true);

    println!("visited steps: {:?}", form.navigation_log().path());
}

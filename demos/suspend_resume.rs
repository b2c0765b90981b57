//! Suspend a half-finished form to JSON and resume it in a fresh process.
//!
//! The snapshot is a plain serializable value; where it gets stored
//! (disk, saved-instance bundle, database row) is up to the host.

use stepform::builder::FormBuilder;
use stepform::controller::FormController;
use stepform::form_steps;
use stepform::render::NullRenderer;
use stepform::snapshot::FormSnapshot;

fn build_checkout() -> FormController<NullRenderer> {
    FormBuilder::new()
        .steps(form_steps![
            "Account" => "Who is ordering",
            "Shipping address",
            "Payment",
        ])
        .build(NullRenderer)
        .expect("at least one step declared")
}

fn main() {
    // First session: the user gets halfway through checkout.
    let mut form = build_checkout();
    form.mark_open_step_as_completed(false);
    form.update_open_step_subtitle("jane@example.com");
    form.go_to_next_step(false);
    form.mark_open_step_as_uncompleted("Postal code is required", false);

    let json = FormSnapshot::capture(&form).to_json().expect("encodable");
    println!("suspended: {json}");

    // Second session: an identical form is rebuilt and state re-applied.
    let snapshot = FormSnapshot::from_json(&json).expect("decodable");
    let mut resumed = build_checkout();
    resumed.restore(&snapshot).expect("snapshot matches the form");

    assert_eq!(resumed.open_step_index(), Some(1));
    assert!(resumed.is_step_completed(0));
    assert_eq!(
        resumed.steps().step(1).error_message(),
        Some("Postal code is required")
    );
    println!(
        "resumed at step {:?} with progress {}",
        resumed.open_step_index(),
        resumed.progress()
    );
}

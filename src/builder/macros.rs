//! Macros for ergonomic step declaration.

/// Declare a step list as `"Title"` or `"Title" => "Subtitle"` entries.
///
/// Expands to a `Vec<StepDescriptor>` suitable for
/// [`FormBuilder::steps`](crate::builder::FormBuilder::steps).
///
/// # Example
///
/// ```
/// use stepform::form_steps;
/// use stepform::builder::FormBuilder;
/// use stepform::render::NullRenderer;
///
/// let form = FormBuilder::new()
///     .steps(form_steps![
///         "Account" => "Email and password",
///         "Address",
///         "Payment" => "Card details",
///     ])
///     .build(NullRenderer)
///     .unwrap();
///
/// assert_eq!(form.steps().step(1).title(), "Address");
/// ```
#[macro_export]
macro_rules! form_steps {
    ($($title:expr $(=> $subtitle:expr)?),* $(,)?) => {
        vec![
            $(
                $crate::builder::StepDescriptor::new(
                    $title,
                    $crate::form_steps!(@subtitle $($subtitle)?),
                )
            ),*
        ]
    };
    (@subtitle $subtitle:expr) => {
        $subtitle
    };
    (@subtitle) => {
        ""
    };
}

//! Blocking yes/no prompt.

/// Asks the visitor to confirm a destructive action.
///
/// In the browser this is `window.confirm`; tests pass a closure.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

//! Transition observers.

/// Notified after every successful transition.
///
/// The machine calls `state_changed` exactly once per accepted input, after
/// its own state has been updated. Closures of the matching shape implement
/// this trait directly.
pub trait TransitionObserver<S, I> {
    fn state_changed(&mut self, from: &S, to: &S, input: &I);
}

impl<S, I, F> TransitionObserver<S, I> for F
where
    F: FnMut(&S, &S, &I),
{
    fn state_changed(&mut self, from: &S, to: &S, input: &I) {
        self(from, to, input)
    }
}

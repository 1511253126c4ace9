//! Input predicates attached to transition rules.
//!
//! A guard decides whether a given input satisfies a rule. Guards are pure:
//! they see the input only, never the machine.

use std::fmt;

/// Pure predicate over machine input.
///
/// # Example
///
/// ```rust
/// use reckon::core::Guard;
///
/// let is_number = Guard::new(|input: &String| input.parse::<f64>().is_ok());
///
/// assert!(is_number.check(&"4.5".to_string()));
/// assert!(!is_number.check(&"SUM".to_string()));
/// ```
pub struct Guard<I> {
    predicate: Box<dyn Fn(&I) -> bool + Send + Sync>,
}

impl<I> Guard<I> {
    /// Create a guard from a predicate.
    ///
    /// The predicate must be deterministic and thread-safe (`Send + Sync`),
    /// since rule tables are shared between machines.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// A guard that accepts every input.
    pub fn always() -> Self {
        Guard::new(|_| true)
    }

    /// Check whether the input satisfies this guard.
    pub fn check(&self, input: &I) -> bool {
        (self.predicate)(input)
    }
}

impl<I> fmt::Debug for Guard<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_accepts_matching_input() {
        let guard = Guard::new(|n: &i32| *n > 0);

        assert!(guard.check(&1));
        assert!(!guard.check(&0));
        assert!(!guard.check(&-3));
    }

    #[test]
    fn always_accepts_anything() {
        let guard: Guard<&str> = Guard::always();

        assert!(guard.check(&""));
        assert!(guard.check(&"anything"));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|s: &String| s.eq_ignore_ascii_case("sum"));
        let input = "Sum".to_string();

        assert_eq!(guard.check(&input), guard.check(&input));
    }

    #[test]
    fn guard_can_capture_environment() {
        let allowed = vec!["A", "B"];
        let guard = Guard::new(move |s: &&str| allowed.contains(s));

        assert!(guard.check(&"A"));
        assert!(!guard.check(&"C"));
    }
}

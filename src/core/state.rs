//! The `State` trait implemented by every machine state.
//!
//! States are plain values: the machine compares them against rule sources,
//! records them in its history and reports them in errors.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the machine hands out copies of its current state
/// - `PartialEq`: rule sources are matched by equality
/// - `Debug`: states appear in `NoMatchingRule` diagnostics
/// - `Serialize` + `Deserialize`: states appear in the serialisable history
///
/// # Example
///
/// ```rust
/// use reckon::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Welded,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Welded => "Welded",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Welded)
///     }
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
/// assert!(Door::Welded.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Human readable name, used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Whether the machine is expected to stop here.
    ///
    /// Purely informational: the machine does not refuse input in a final
    /// state, it simply will not find a rule for it unless one is declared.
    fn is_final(&self) -> bool {
        false
    }
}

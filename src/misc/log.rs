/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [building a formula](crate::builder)
    pub const PARSE: &str = "parse";

    /// Logs related to restarts, and improvements to the best valuation found
    pub const RESTART: &str = "restart";

    /// Logs related to the [tracker](crate::db::tracker)
    pub const FLIP: &str = "flip";

    /// Logs related to [heuristics](crate::heuristics)
    pub const SELECTION: &str = "selection";

    /// Logs related to [checks](crate::procedures::check)
    pub const CHECK: &str = "check";
}

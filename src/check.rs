//! Accumulated post-coercion checks.
//!
//! Every chaining operation on a primitive or array schema appends one
//! [`Check`] to an ordered list. A check pairs a data-carrying rule with
//! an optional caller message override; on parse, all checks run against
//! the coerced value and every failing check contributes its message.

/// A single validation rule attached to a schema.
pub(crate) trait CheckRule {
    /// The coerced value the rule inspects.
    type Target: ?Sized;

    /// Whether the value satisfies the rule.
    fn holds(&self, value: &Self::Target) -> bool;

    /// The message reported when the rule fails and no override is set.
    fn default_message(&self) -> String;
}

/// A rule plus an optional caller-supplied message override.
#[derive(Debug, Clone)]
pub(crate) struct Check<R> {
    rule: R,
    message: Option<String>,
}

impl<R: CheckRule> Check<R> {
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            message: None,
        }
    }

    /// Run the check, returning the failure message if it does not hold.
    pub fn run(&self, value: &R::Target) -> Option<String> {
        if self.rule.holds(value) {
            None
        } else {
            Some(
                self.message
                    .clone()
                    .unwrap_or_else(|| self.rule.default_message()),
            )
        }
    }
}

/// Run every check and collect all failure messages, in order.
pub(crate) fn run_all<R: CheckRule>(checks: &[Check<R>], value: &R::Target) -> Vec<String> {
    checks.iter().filter_map(|check| check.run(value)).collect()
}

/// Override the message of the most recently appended check.
///
/// A no-op when no check has been appended yet.
pub(crate) fn override_last<R>(checks: &mut [Check<R>], message: impl Into<String>) {
    if let Some(last) = checks.last_mut() {
        last.message = Some(message.into());
    }
}

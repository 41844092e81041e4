//! Two-step removal protocol
//!
//! Deleting an item is split into `request_removal`, which hands out a
//! pending-confirmation token, and `confirm_removal`, which consumes it and
//! issues the DELETE. The decision point stays testable without a blocking
//! prompt; `Confirm` adapts an interactive prompt onto the protocol.

use uuid::Uuid;

/// Token for a removal awaiting the user's decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub token: Uuid,
    pub id: i64,
    /// Question to show the user
    pub prompt: String,
}

impl PendingRemoval {
    pub(crate) fn new(id: i64, singular: &str) -> Self {
        Self {
            token: Uuid::new_v4(),
            id,
            prompt: format!("Are you sure you want to delete this {}?", singular),
        }
    }
}

/// Answers a confirmation prompt
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_the_resource() {
        let pending = PendingRemoval::new(4, "category");
        assert_eq!(pending.id, 4);
        assert_eq!(pending.prompt, "Are you sure you want to delete this category?");
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(PendingRemoval::new(1, "event").token, PendingRemoval::new(1, "event").token);
    }

    #[test]
    fn test_closures_confirm() {
        let yes = |_: &str| true;
        let no = |_: &str| false;
        assert!(yes.confirm("?"));
        assert!(!no.confirm("?"));
    }
}

//! Connection-recommendation data model. Scores are seeded/ingested by
//! offline tooling; the service only lists recommendations and tracks their
//! status.

pub mod handlers;

/// Allowed recommendation statuses.
pub const RECOMMENDATION_STATUSES: &[&str] = &["pending", "accepted", "rejected", "sent"];

pub fn is_valid_status(status: &str) -> bool {
    RECOMMENDATION_STATUSES.contains(&status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_accepted() {
        for status in RECOMMENDATION_STATUSES {
            assert!(is_valid_status(status));
        }
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(!is_valid_status("archived"));
        assert!(!is_valid_status("Pending"));
    }
}

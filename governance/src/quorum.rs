//! Majority threshold calculation

/// Votes required for a strict majority of `voter_count` voters:
/// `floor(voter_count / 2) + 1`. Recomputed at every vote against the
/// voter set as it stands then, never the set at proposal creation.
pub fn majority_threshold(voter_count: usize) -> usize {
    voter_count / 2 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_thresholds() {
        assert_eq!(majority_threshold(1), 1);
        assert_eq!(majority_threshold(2), 2, "two voters must both approve");
        assert_eq!(majority_threshold(3), 2);
        assert_eq!(majority_threshold(4), 3);
        assert_eq!(majority_threshold(5), 3);
        assert_eq!(majority_threshold(100), 51);
    }
}

use crate::error::ContributionError;
use fxhash::FxHashSet;
use splitpot_domain::Contributor;

/// Checks that `name` is non-empty after trimming and not already taken,
/// case-insensitively, within `contributors`. Returns the trimmed name.
pub fn validate_new_name<'a>(
    contributors: &[Contributor],
    name: &'a str,
) -> Result<&'a str, ContributionError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ContributionError::EmptyName);
    }

    let taken: FxHashSet<String> = contributors
        .iter()
        .map(|contributor| contributor.name.to_lowercase())
        .collect();
    if taken.contains(&trimmed.to_lowercase()) {
        return Err(ContributionError::DuplicateName(trimmed.to_string()));
    }

    Ok(trimmed)
}

pub fn validate_amount(name: &str, amount: f64) -> Result<(), ContributionError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ContributionError::InvalidAmount {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Validates a whole contributor list at once (parsed files, imports).
pub fn validate_contributions(contributors: &[Contributor]) -> Result<(), ContributionError> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    for contributor in contributors {
        let trimmed = contributor.name.trim();
        if trimmed.is_empty() {
            return Err(ContributionError::EmptyName);
        }
        if !seen.insert(trimmed.to_lowercase()) {
            return Err(ContributionError::DuplicateName(trimmed.to_string()));
        }
        validate_amount(trimmed, contributor.amount_paid)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::fresh_name(&["Alice"], "Bob", Ok("Bob"))]
    #[case::trims_whitespace(&[], "  Carol  ", Ok("Carol"))]
    #[case::empty(&[], "   ", Err(ContributionError::EmptyName))]
    #[case::duplicate(&["Alice"], "Alice", Err(ContributionError::DuplicateName("Alice".to_string())))]
    #[case::duplicate_case_insensitive(
        &["Alice"],
        "ALICE",
        Err(ContributionError::DuplicateName("ALICE".to_string()))
    )]
    fn validate_new_name_cases(
        #[case] existing: &[&str],
        #[case] candidate: &str,
        #[case] expected: Result<&str, ContributionError>,
    ) {
        let contributors: Vec<Contributor> = existing
            .iter()
            .map(|&name| Contributor::new(name, 0.0))
            .collect();
        assert_eq!(validate_new_name(&contributors, candidate), expected);
    }

    #[rstest]
    #[case::zero(0.0, true)]
    #[case::positive(12.34, true)]
    #[case::negative(-0.01, false)]
    #[case::nan(f64::NAN, false)]
    #[case::infinite(f64::INFINITY, false)]
    fn validate_amount_cases(#[case] amount: f64, #[case] ok: bool) {
        assert_eq!(validate_amount("Alice", amount).is_ok(), ok);
    }

    #[rstest]
    #[case::clean(vec![("Alice", 10.0), ("Bob", 0.0)], true)]
    #[case::duplicate_across_case(vec![("Alice", 10.0), ("alice", 5.0)], false)]
    #[case::negative_amount(vec![("Alice", -1.0)], false)]
    fn validate_contributions_cases(#[case] entries: Vec<(&str, f64)>, #[case] ok: bool) {
        let contributors: Vec<Contributor> = entries
            .into_iter()
            .map(|(name, amount)| Contributor::new(name, amount))
            .collect();
        assert_eq!(validate_contributions(&contributors).is_ok(), ok);
    }
}

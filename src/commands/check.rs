//! `keymint check`: validate identifiers supplied by a caller.

use crate::identifier::Identifier;

/// Validate each identifier, printing one verdict per line.
///
/// # Errors
///
/// Returns an error string if any identifier is malformed.
pub fn run(ids: &[String]) -> Result<(), String> {
    let verdicts = verdicts(ids);
    let invalid = verdicts.iter().filter(|(_, ok)| !ok).count();
    for (line, _) in &verdicts {
        println!("{line}");
    }
    if invalid > 0 {
        return Err(format!("{invalid} of {} identifiers are invalid", ids.len()));
    }
    Ok(())
}

fn verdicts(ids: &[String]) -> Vec<(String, bool)> {
    ids.iter()
        .map(|id| match Identifier::parse(id) {
            Ok(_) => (format!("{id}: ok"), true),
            Err(e) => (format!("{id}: {e}"), false),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_each_identifier() {
        let ids = vec!["3fa85f64-aaaa-bbbb-cccc-0123456789ab".to_string(), "nope".to_string()];
        let v = verdicts(&ids);
        assert_eq!(v[0], ("3fa85f64-aaaa-bbbb-cccc-0123456789ab: ok".to_string(), true));
        assert_eq!(v[1], ("nope: expected 36 characters, found 4".to_string(), false));
    }

    #[test]
    fn run_fails_when_any_identifier_is_invalid() {
        let err = run(&["nope".to_string()]).unwrap_err();
        assert_eq!(err, "1 of 1 identifiers are invalid");
        assert!(run(&["3fa85f64-aaaa-bbbb-cccc-0123456789ab".to_string()]).is_ok());
    }
}

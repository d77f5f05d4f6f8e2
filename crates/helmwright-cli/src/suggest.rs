//! "Did you mean" suggestions for mistyped task names

/// Maximum Levenshtein distance to consider for suggestions
const MAX_SUGGESTION_DISTANCE: usize = 5;

/// Find the closest known task names to a mistyped one
pub fn closest_task_names(input: &str, candidates: &[String], max_results: usize) -> Vec<String> {
    let mut scored: Vec<(usize, &String)> = candidates
        .iter()
        .filter_map(|candidate| {
            let distance = strsim::levenshtein(input, candidate);
            (distance > 0 && distance <= MAX_SUGGESTION_DISTANCE).then_some((distance, candidate))
        })
        .collect();

    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .into_iter()
        .take(max_results)
        .map(|(_, name)| name.clone())
        .collect()
}

/// Help text for an unknown task, if anything is close enough
pub fn suggest_task(input: &str, candidates: &[String]) -> Option<String> {
    let matches = closest_task_names(input, candidates, 3);
    if matches.is_empty() {
        return None;
    }
    let quoted: Vec<String> = matches.iter().map(|m| format!("`{}`", m)).collect();
    Some(format!("Did you mean {}?", quoted.join(" or ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggests_close_name() {
        let candidates = vec![
            "helmPackageFooChart".to_string(),
            "helmLintFooChart".to_string(),
        ];

        let help = suggest_task("helmPackageFoChart", &candidates).unwrap();
        assert!(help.contains("helmPackageFooChart"));
    }

    #[test]
    fn test_no_suggestion_for_distant_name() {
        let candidates = vec!["helmPackageFooChart".to_string()];
        assert!(suggest_task("compileJava", &candidates).is_none());
    }

    #[test]
    fn test_best_match_first() {
        let candidates = vec![
            "helmPublishFooChart".to_string(),
            "helmPackageFooChart".to_string(),
        ];

        let matches = closest_task_names("helmPackagFooChart", &candidates, 3);
        assert_eq!(matches[0], "helmPackageFooChart");
    }
}

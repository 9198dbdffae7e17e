//! Command palette filtering

use crate::catalog::Command;

/// Filter commands by a case-insensitive substring query.
///
/// A command matches when its name, description, command text or category
/// contains the query verbatim (whitespace included). Matches keep their
/// original relative order and only the empty query returns everything.
pub fn filter_commands<'a>(query: &str, commands: &'a [Command]) -> Vec<&'a Command> {
    if query.is_empty() {
        return commands.iter().collect();
    }
    let needle = query.to_lowercase();

    commands
        .iter()
        .filter(|cmd| matches_command(cmd, &needle))
        .collect()
}

fn matches_command(cmd: &Command, needle: &str) -> bool {
    [cmd.name, cmd.description, cmd.command, cmd.category.as_str()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::COMMANDS;

    fn names(results: &[&Command]) -> Vec<&'static str> {
        results.iter().map(|c| c.name).collect()
    }

    #[test]
    fn test_empty_query_returns_catalog_in_order() {
        let results = filter_commands("", COMMANDS);
        assert_eq!(results.len(), 12);
        for (result, cmd) in results.iter().zip(COMMANDS) {
            assert_eq!(result.name, cmd.name);
        }
    }

    #[test]
    fn test_push_query() {
        let results = filter_commands("push", COMMANDS);
        assert_eq!(names(&results), vec!["Push Changes"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            names(&filter_commands("PUSH", COMMANDS)),
            names(&filter_commands("push", COMMANDS))
        );
    }

    #[test]
    fn test_category_match_keeps_catalog_order() {
        let results = filter_commands("remote", COMMANDS);
        assert_eq!(
            names(&results),
            vec!["Clone Repository", "Push Changes", "Pull Changes"]
        );
    }

    #[test]
    fn test_matches_command_text() {
        let results = filter_commands("checkout -b", COMMANDS);
        assert_eq!(names(&results), vec!["Create Branch"]);
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        assert!(filter_commands("zzz", COMMANDS).is_empty());
    }

    #[test]
    fn test_branch_query_spans_fields() {
        // "branch" hits names, descriptions, command text and the category
        let results = filter_commands("branch", COMMANDS);
        assert_eq!(
            names(&results),
            vec![
                "Create Branch",
                "Push Changes",
                "Pull Changes",
                "Merge Branch",
                "Rebase Branch"
            ]
        );
    }

    #[test]
    fn test_trailing_space_is_part_of_the_query() {
        let results = filter_commands("branch ", COMMANDS);
        assert_eq!(names(&results), vec!["Merge Branch"]);
    }

    #[test]
    fn test_whitespace_only_query_matches_nothing() {
        assert!(filter_commands("   ", COMMANDS).is_empty());
    }
}

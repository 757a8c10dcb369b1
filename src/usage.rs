//! Command index rendering for the no-argument invocation.

use itertools::Itertools;

use crate::gates::Gate;
use crate::translate::to_user_form;

/// All commands the gate declares, as `(user-form command, description)`
/// pairs sorted lexicographically by command name.
pub fn render(gate: &dyn Gate) -> Vec<(String, String)> {
    gate.commands()
        .iter()
        .map(|(operation, description)| (to_user_form(operation), description.to_string()))
        .sorted()
        .collect()
}

/// Width of the widest command name, for table padding.
pub fn column_width(entries: &[(String, String)]) -> usize {
    entries.iter().map(|(command, _)| command.len()).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gates::postgres::PostgresGate;

    #[test]
    fn given_gate_when_render_then_sorted_and_complete() {
        let gate = PostgresGate::create(&Config::default()).unwrap();
        let entries = render(gate.as_ref());

        assert_eq!(entries.len(), gate.commands().len());
        let commands: Vec<&String> = entries.iter().map(|(command, _)| command).collect();
        let mut sorted = commands.clone();
        sorted.sort();
        assert_eq!(commands, sorted);
    }

    #[test]
    fn given_entries_when_column_width_then_longest_command_length() {
        let entries = vec![
            ("db-start".to_string(), "Start the database".to_string()),
            ("space-overview".to_string(), "Show tablespace usage".to_string()),
        ];
        assert_eq!(column_width(&entries), "space-overview".len());
    }

    #[test]
    fn given_no_entries_when_column_width_then_zero() {
        assert_eq!(column_width(&[]), 0);
    }
}

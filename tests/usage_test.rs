//! Integration tests for the command index rendering.

use rstest::rstest;

use dbctl::config::Config;
use dbctl::gates::GateRegistry;
use dbctl::{translate, usage};

#[rstest]
#[case("postgresql")]
#[case("oracle")]
fn given_builtin_gate_when_render_then_sorted_with_one_entry_per_command(#[case] backend: &str) {
    let registry = GateRegistry::with_builtin();
    let config = Config::parse([format!("db_backend = {backend}").as_str()]);
    let gate = registry
        .resolve(&config, std::path::Path::new("rhn.conf"))
        .expect("resolve builtin gate");

    let entries = usage::render(gate.as_ref());

    assert_eq!(entries.len(), gate.commands().len());

    let commands: Vec<&String> = entries.iter().map(|(command, _)| command).collect();
    let mut sorted = commands.clone();
    sorted.sort();
    assert_eq!(commands, sorted, "entries must be sorted by command name");
}

#[test]
fn given_rendered_entries_then_commands_are_in_user_form() {
    let registry = GateRegistry::with_builtin();
    let config = Config::parse(["db_backend = postgresql"]);
    let gate = registry
        .resolve(&config, std::path::Path::new("rhn.conf"))
        .unwrap();

    for (command, description) in usage::render(gate.as_ref()) {
        assert!(!command.starts_with(translate::OPERATION_PREFIX));
        assert!(!command.contains('_'));
        assert!(!description.is_empty());
    }
}

#[test]
fn given_rendered_entries_then_each_maps_back_to_a_declared_operation() {
    let registry = GateRegistry::with_builtin();
    let config = Config::parse(["db_backend = oracle"]);
    let gate = registry
        .resolve(&config, std::path::Path::new("rhn.conf"))
        .unwrap();

    let declared = gate.commands();
    for (command, _) in usage::render(gate.as_ref()) {
        let operation = translate::to_backend_form(&command);
        assert!(declared.contains_key(operation.as_str()));
    }
}

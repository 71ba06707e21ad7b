use super::*;
use pretty_assertions::assert_eq;

#[test]
fn first_sighting_creates_entry() {
    let mut table = SymbolTable::new();
    table.record("Count", "IDENTIFIER", 4);

    let symbol = table.get("Count");
    assert_eq!(
        symbol,
        Some(&Symbol {
            kind: "IDENTIFIER".to_string(),
            first_line: 4,
            frequency: 1,
        })
    );
}

#[test]
fn repeat_sightings_keep_first_line() {
    let mut table = SymbolTable::new();
    table.record("Foo", "IDENTIFIER", 2);
    table.record("Foo", "IDENTIFIER", 5);
    table.record("Foo", "OTHER", 9);

    let symbol = table.get("Foo").map(|s| (s.kind(), s.first_line(), s.frequency()));
    assert_eq!(symbol, Some(("IDENTIFIER", 2, 3)));
    assert_eq!(table.len(), 1);
}

#[test]
fn names_are_case_sensitive() {
    let mut table = SymbolTable::new();
    table.record("Foo", "IDENTIFIER", 1);
    table.record("FOO", "IDENTIFIER", 1);
    assert_eq!(table.len(), 2);
    assert!(table.get("foo").is_none());
}

#[test]
fn iteration_follows_first_sighting() {
    let mut table = SymbolTable::new();
    table.record("Zeta", "IDENTIFIER", 1);
    table.record("Alpha", "IDENTIFIER", 2);
    table.record("Zeta", "IDENTIFIER", 3);
    table.record("Mid", "IDENTIFIER", 4);

    let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn render_lists_every_entry_once() {
    let mut table = SymbolTable::new();
    table.record("Total", "IDENTIFIER", 1);
    table.record("Total", "IDENTIFIER", 2);

    let expected = format!(
        "--- Symbol Table ---\n{:<20} {:<15} {:<10} {:<10}\n{:<20} {:<15} {:<10} {:<10}\n",
        "Name", "Type", "First Line", "Frequency", "Total", "IDENTIFIER", 1, 2
    );
    assert_eq!(table.render(), expected);
}

#[test]
fn empty_table_renders_header_only() {
    let table = SymbolTable::new();
    assert!(table.is_empty());
    assert_eq!(table.render().lines().count(), 2);
}

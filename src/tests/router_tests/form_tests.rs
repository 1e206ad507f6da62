// src/tests/router_tests/form_tests.rs

use crate::router::parse_materials;

#[test]
fn parses_description_and_quantity_per_line() {
    let materials = parse_materials("Folha de MDF;2\nVerniz (litros);1.5\n").unwrap();
    assert_eq!(materials.len(), 2);
    assert_eq!(materials[0].description, "Folha de MDF");
    assert_eq!(materials[0].quantity, 2.0);
    assert_eq!(materials[1].quantity, 1.5);
}

#[test]
fn line_without_separator_defaults_to_quantity_one() {
    let materials = parse_materials("Cola de madeira").unwrap();
    assert_eq!(materials[0].description, "Cola de madeira");
    assert_eq!(materials[0].quantity, 1.0);
}

#[test]
fn blank_lines_are_skipped() {
    let materials = parse_materials("\n  \nParafusos;40\n\n").unwrap();
    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0].description, "Parafusos");
}

#[test]
fn bad_quantity_is_rejected() {
    let err = parse_materials("Dobradiça;duas").unwrap_err();
    assert!(err.contains("quantidade inválida"));
}

#[test]
fn empty_description_is_rejected() {
    assert!(parse_materials(";3").is_err());
}

#[test]
fn empty_body_replaces_with_an_empty_list() {
    // Clearing the textarea is how a user removes all materials.
    assert!(parse_materials("").unwrap().is_empty());
}

//! End-to-end check that every solution registers and solves through the
//! registry, the same path the CLI takes.

use puzzle_solver::RegistryBuilder;

// Link the solutions so their plugin submissions are collected.
use puzzle_solutions as _;

#[test]
fn all_solutions_are_registered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let expected = [(2023u16, 1u8, 1u8), (2023, 2, 2), (2023, 3, 2), (2023, 4, 2), (2024, 1, 2)];
    for (year, day, parts) in expected {
        let info = registry
            .storage()
            .get_info(year, day)
            .unwrap_or_else(|| panic!("{}/{} not registered", year, day));
        assert_eq!(info.parts, parts, "{}/{} parts", year, day);
    }
}

#[test]
fn registry_solves_the_grid_sample() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let input = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    let mut solver = registry.create_solver(2023, 3, input).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "4361");
    assert_eq!(solver.solve(2).unwrap().answer, "467835");
}

#[test]
fn year_tag_selects_one_event() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"2024"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2024, 1));
    assert!(!registry.storage().contains(2023, 1));
}

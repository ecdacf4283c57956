use labyrinth_core::{GridLimits, ValidationError};
use labyrinth_system_connectivity::Connectivity;
use labyrinth_world::{loader, Grid};

fn grid_from(text: &str) -> Grid {
    loader::parse(text.as_bytes(), GridLimits::default()).expect("test map loads")
}

#[test]
fn accepts_a_single_connected_region() {
    let grid = grid_from("..#\n..#\n###\n");
    assert_eq!(Connectivity::default().validate(&grid), Ok(()));
}

#[test]
fn rejects_regions_split_by_walls() {
    let grid = grid_from("..#\n###\n#..\n");
    assert_eq!(
        Connectivity::default().validate(&grid),
        Err(ValidationError::MultipleEmptyAreas),
    );
}

#[test]
fn accepts_a_grid_without_empty_cells() {
    let grid = grid_from("###\n###\n");
    assert_eq!(Connectivity::default().validate(&grid), Ok(()));
}

#[test]
fn player_digits_bridge_otherwise_split_floor() {
    // With the digit treated as a wall, the two dots would be separate areas.
    let grid = grid_from("#.#\n#0#\n#.#\n");
    assert_eq!(Connectivity::default().validate(&grid), Ok(()));
}

#[test]
fn diagonal_adjacency_does_not_connect_regions() {
    let grid = grid_from(".#\n#.\n");
    assert_eq!(
        Connectivity::default().validate(&grid),
        Err(ValidationError::MultipleEmptyAreas),
    );
}

#[test]
fn walls_surrounding_one_corridor_are_valid() {
    let grid = grid_from("#####\n#1..#\n#####\n");
    assert_eq!(Connectivity::default().validate(&grid), Ok(()));
}

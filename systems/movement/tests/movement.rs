use labyrinth_core::{CellCoord, Command, GridLimits, MoveError, PlayerId, Tile};
use labyrinth_system_movement::Movement;
use labyrinth_world::{self as world, loader, query, Grid};

fn grid_from(text: &str) -> Grid {
    loader::parse(text.as_bytes(), GridLimits::default()).expect("test map loads")
}

fn player(digit: char) -> PlayerId {
    PlayerId::from_digit(digit).expect("test digit is valid")
}

#[test]
fn plans_a_step_onto_open_floor() {
    let mut grid = grid_from("1..\n...\n");
    let movement = Movement::default();

    let command = movement
        .plan(&grid, player('1'), "right")
        .expect("step onto floor is planned");
    assert_eq!(
        command,
        Command::MovePlayer {
            player: player('1'),
            from: CellCoord::new(0, 0),
            to: CellCoord::new(1, 0),
        }
    );

    let mut events = Vec::new();
    world::apply(&mut grid, command, &mut events);
    assert_eq!(query::tile(&grid, CellCoord::new(0, 0)), Some(Tile::Floor));
    assert_eq!(
        query::tile(&grid, CellCoord::new(1, 0)),
        Some(Tile::Player(player('1')))
    );
}

#[test]
fn refuses_steps_off_the_grid_edge() {
    let grid = grid_from("1..\n...\n");
    let movement = Movement::default();

    assert_eq!(
        movement.plan(&grid, player('1'), "up"),
        Err(MoveError::OutOfBounds)
    );
    assert_eq!(
        movement.plan(&grid, player('1'), "left"),
        Err(MoveError::OutOfBounds)
    );
}

#[test]
fn refuses_steps_into_walls() {
    let grid = grid_from("1#.\n...\n");
    assert_eq!(
        Movement::default().plan(&grid, player('1'), "right"),
        Err(MoveError::Blocked)
    );
}

#[test]
fn refuses_steps_onto_other_players() {
    let grid = grid_from("12.\n...\n");
    assert_eq!(
        Movement::default().plan(&grid, player('1'), "right"),
        Err(MoveError::Blocked)
    );
}

#[test]
fn rejects_unknown_direction_tokens() {
    let grid = grid_from("1..\n...\n");
    assert_eq!(
        Movement::default().plan(&grid, player('1'), "north"),
        Err(MoveError::UnknownDirection("north".to_owned()))
    );
}

#[test]
fn unknown_tokens_fail_even_when_the_player_is_absent() {
    let grid = grid_from("...\n");
    assert_eq!(
        Movement::default().plan(&grid, player('7'), "sideways"),
        Err(MoveError::UnknownDirection("sideways".to_owned()))
    );
}

#[test]
fn places_absent_players_at_the_first_open_floor_cell() {
    let mut grid = grid_from("#..\n...\n");
    let before = grid.clone();
    let command = Movement::default()
        .plan(&grid, player('5'), "down")
        .expect("placement is planned");
    assert_eq!(
        command,
        Command::PlacePlayer {
            player: player('5'),
            cell: CellCoord::new(1, 0),
        }
    );

    let mut events = Vec::new();
    world::apply(&mut grid, command, &mut events);
    assert_eq!(
        query::tile(&grid, CellCoord::new(1, 0)),
        Some(Tile::Player(player('5')))
    );
    for row in 0..2 {
        for column in 0..3 {
            let cell = CellCoord::new(column, row);
            if cell != CellCoord::new(1, 0) {
                assert_eq!(query::tile(&grid, cell), query::tile(&before, cell));
            }
        }
    }
}

#[test]
fn placement_fails_without_any_open_floor() {
    let grid = grid_from("##\n##\n");
    assert_eq!(
        Movement::default().plan(&grid, player('5'), "down"),
        Err(MoveError::NoOpenFloor)
    );
}

#[test]
fn duplicate_digits_resolve_to_the_first_occurrence() {
    let grid = grid_from("..2\n2..\n");
    let command = Movement::default()
        .plan(&grid, player('2'), "left")
        .expect("first occurrence moves");
    assert_eq!(
        command,
        Command::MovePlayer {
            player: player('2'),
            from: CellCoord::new(2, 0),
            to: CellCoord::new(1, 0),
        }
    );
}

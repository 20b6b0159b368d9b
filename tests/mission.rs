// tests/mission.rs
use rover_sim::{
    Command, GridDimensions, Mission, MissionReport, MissionRunner, Orientation, Position,
    RoverResult, RoverSimulation, RoverSpec, RoverState, parse_arguments, parse_commands,
};

fn rover(x: i32, y: i32, orientation: Orientation, commands: &str) -> RoverSpec {
    RoverSpec::new(
        Position::new(x, y, orientation),
        parse_commands(commands).unwrap(),
    )
}

fn result(x: i32, y: i32, orientation: Orientation, lost: bool) -> RoverResult {
    RoverResult {
        position: Position::new(x, y, orientation),
        lost,
    }
}

#[test]
fn test_single_rover_scenarios() {
    let cases = [
        // (grid, rover, expected)
        ((4, 8), rover(2, 3, Orientation::E, "LFRFF"), result(4, 4, Orientation::E, false)),
        ((5, 5), rover(1, 1, Orientation::N, "RRFLLF"), result(1, 1, Orientation::N, false)),
        ((3, 3), rover(0, 0, Orientation::W, "F"), result(0, 0, Orientation::W, true)),
        ((10, 10), rover(5, 5, Orientation::N, "FRFRFLFLF"), result(7, 6, Orientation::N, false)),
        (
            (10, 10),
            rover(5, 5, Orientation::N, "FRFRFLFLFFFFFF"),
            result(7, 10, Orientation::N, true),
        ),
        ((10, 10), rover(5, 5, Orientation::N, "RRRR"), result(5, 5, Orientation::N, false)),
    ];

    for ((w, h), spec, expected) in cases {
        let runner = MissionRunner::new(GridDimensions::new(w, h));
        assert_eq!(runner.simulate_rover(&spec), expected, "rover {spec:?}");
    }
}

#[test]
fn test_commands_after_loss_are_ignored() {
    let runner = MissionRunner::new(GridDimensions::new(10, 10));
    let lost = runner.simulate_rover(&rover(5, 5, Orientation::N, "FRFRFLFLFFFFFF"));
    let with_tail = runner.simulate_rover(&rover(5, 5, Orientation::N, "FRFRFLFLFFFFFFFLF"));

    assert_eq!(lost, result(7, 10, Orientation::N, true));
    assert_eq!(with_tail, lost);
}

#[test]
fn test_step_state_machine() {
    let mut sim = RoverSimulation::new(
        GridDimensions::new(2, 2),
        Position::new(0, 2, Orientation::E),
    );
    assert_eq!(sim.state(), RoverState::Active);

    assert_eq!(sim.step(Command::RotateLeft), RoverState::Active);
    assert_eq!(sim.step(Command::Forward), RoverState::Lost);
    assert_eq!(sim.position(), Position::new(0, 2, Orientation::N));

    // Turns and moves after loss change nothing.
    for command in [Command::RotateRight, Command::Forward, Command::RotateLeft] {
        assert_eq!(sim.step(command), RoverState::Lost);
        assert_eq!(sim.position(), Position::new(0, 2, Orientation::N));
    }

    assert_eq!(sim.finish(), result(0, 2, Orientation::N, true));
}

#[test]
fn test_rotation_never_loses_a_rover() {
    // A rover sitting on the corner can spin freely.
    let mut sim = RoverSimulation::new(
        GridDimensions::new(0, 0),
        Position::new(0, 0, Orientation::S),
    );
    for _ in 0..8 {
        assert_eq!(sim.step(Command::RotateRight), RoverState::Active);
    }
    assert!(!sim.is_lost());
}

#[test]
fn test_start_off_grid_is_not_validated() {
    let runner = MissionRunner::new(GridDimensions::new(3, 3));

    // The first forward step still lands off the grid, so the rover is lost in place.
    assert_eq!(
        runner.simulate_rover(&rover(-5, -5, Orientation::N, "RF")),
        result(-5, -5, Orientation::E, true)
    );

    // Turning never checks bounds.
    assert_eq!(
        runner.simulate_rover(&rover(-5, -5, Orientation::N, "LLR")),
        result(-5, -5, Orientation::W, false)
    );
}

#[test]
fn test_step_past_i32_max_is_lost() {
    let runner = MissionRunner::new(GridDimensions::new(u32::MAX, 0));
    assert_eq!(
        runner.simulate_rover(&rover(i32::MAX, 0, Orientation::E, "FL")),
        result(i32::MAX, 0, Orientation::E, true)
    );
}

#[test]
fn test_empty_command_sequence() {
    let runner = MissionRunner::new(GridDimensions::new(4, 8));
    assert_eq!(
        runner.simulate_rover(&rover(1, 2, Orientation::W, "")),
        result(1, 2, Orientation::W, false)
    );
}

#[test]
fn test_multiple_rovers_keep_input_order() {
    let specs: Vec<RoverSpec> = (0..3)
        .flat_map(|_| {
            [
                rover(2, 3, Orientation::E, "LFRFF"),
                rover(1, 1, Orientation::N, "RRFLLF"),
            ]
        })
        .collect();

    let report = Mission::new(GridDimensions::new(10, 10), specs).run();

    let expected: MissionReport = (0..3)
        .flat_map(|_| {
            [
                result(4, 4, Orientation::E, false),
                result(1, 1, Orientation::N, false),
            ]
        })
        .collect();
    assert_eq!(report, expected);
    assert_eq!(report.lost_count(), 0);
}

#[test]
fn test_lost_rover_does_not_stop_others() {
    let mission = parse_arguments(&["3", "3", "(0,0,W)", "F", "(1,1,N)", "FF"]).unwrap();
    let report = mission.run();

    assert_eq!(
        report.results,
        vec![
            result(0, 0, Orientation::W, true),
            result(1, 3, Orientation::N, false),
        ]
    );
    assert_eq!(report.lost_count(), 1);
}

#[test]
fn test_report_text() {
    assert_eq!(result(4, 4, Orientation::E, false).to_string(), "(4, 4, E)");
    assert_eq!(result(0, 4, Orientation::E, true).to_string(), "(0, 4, E) LOST");

    let report: MissionReport = [
        result(4, 4, Orientation::E, false),
        result(0, 4, Orientation::E, true),
    ]
    .into_iter()
    .collect();
    assert_eq!(report.to_string(), "(4, 4, E)\n(0, 4, E) LOST");
    assert_eq!(MissionReport::new().to_string(), "");
}

#[test]
fn test_report_json() {
    let mission = parse_arguments(&["4", "8", "(2,3,E)", "LFRFF", "(0,0,S)", "F"]).unwrap();
    let report = mission.run();

    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["results"][0]["position"]["x"], 4);
    assert_eq!(value["results"][0]["position"]["orientation"], "E");
    assert_eq!(value["results"][1]["lost"], true);

    let back: MissionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

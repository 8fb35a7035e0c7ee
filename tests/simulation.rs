// tests/simulation.rs
use glam::IVec2;
use mower_sim::{Lawn, MowerDefinition, MowingPlan, Orientation, Pose, parse, run, simulate};

fn mower(x: i32, y: i32, orientation: Orientation, instructions: &str) -> MowerDefinition {
    MowerDefinition {
        start: Pose {
            position: IVec2::new(x, y),
            orientation,
        },
        instructions: instructions.to_owned(),
    }
}

#[test]
fn crosses_the_lawn_and_turns_right() {
    // (1,2,N) -F-> (1,3) -F-> (1,4) -R-> E -F-> (2,4) -F-> (3,4)
    let end = simulate(&mower(1, 2, Orientation::North, "FFRFF"), &Lawn::new(5, 5));

    assert_eq!(end.position, IVec2::new(3, 4));
    assert_eq!(end.orientation, Orientation::East);
}

#[test]
fn walks_the_east_and_south_edges() {
    // (3,3,E) -FF-> (5,3) -R-> S -FF-> (5,1) -R-> W -F-> (4,1) -RR-> E
    let end = simulate(
        &mower(3, 3, Orientation::East, "FFRFFRFRR"),
        &Lawn::new(5, 5),
    );

    assert_eq!(end.position, IVec2::new(4, 1));
    assert_eq!(end.orientation, Orientation::East);
}

#[test]
fn single_cell_lawn_absorbs_every_forward_step() {
    let end = simulate(&mower(0, 0, Orientation::North, "FFFF"), &Lawn::new(0, 0));

    assert_eq!(end.position, IVec2::ZERO);
    assert_eq!(end.orientation, Orientation::North);
}

#[test]
fn forward_is_blocked_at_each_edge() {
    let lawn = Lawn::new(2, 2);

    for (x, y, orientation) in [
        (0, 0, Orientation::South),
        (0, 0, Orientation::West),
        (2, 2, Orientation::North),
        (2, 2, Orientation::East),
    ] {
        let end = simulate(&mower(x, y, orientation, "F"), &lawn);
        assert_eq!(
            end.position,
            IVec2::new(x, y),
            "step {orientation:?} from ({x}, {y}) should be absorbed"
        );
    }
}

#[test]
fn empty_instructions_return_the_starting_pose() {
    let start = mower(2, 3, Orientation::West, "");
    let end = simulate(&start, &Lawn::new(5, 5));

    assert_eq!(end, start.start);
}

#[test]
fn unknown_instruction_characters_change_nothing() {
    let start = mower(2, 3, Orientation::West, "XYZ*7 f");
    let end = simulate(&start, &Lawn::new(5, 5));

    assert_eq!(end, start.start);
}

#[test]
fn opposite_turns_cancel_out() {
    for orientation in [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ] {
        let end = simulate(&mower(2, 2, orientation, "LLRR"), &Lawn::new(5, 5));
        assert_eq!(end.orientation, orientation);
        assert_eq!(end.position, IVec2::new(2, 2));
    }
}

#[test]
fn run_keeps_plan_order() {
    let plan = MowingPlan {
        lawn: Lawn::new(5, 5),
        mowers: vec![
            mower(1, 2, Orientation::North, "FFRFF"),
            mower(3, 3, Orientation::East, "FFRFFRFRR"),
        ],
    };

    let poses = run(&plan);

    assert_eq!(poses.len(), 2);
    assert_eq!(poses[0].position, IVec2::new(3, 4));
    assert_eq!(poses[1].position, IVec2::new(4, 1));
}

#[test]
fn parse_then_run_end_to_end() {
    let plan = parse("55\n12 N\nFFRFF\n33 E\nFFRFFRFRR\n").unwrap();
    let poses = run(&plan);

    assert_eq!(
        poses,
        vec![
            Pose {
                position: IVec2::new(3, 4),
                orientation: Orientation::East,
            },
            Pose {
                position: IVec2::new(4, 1),
                orientation: Orientation::East,
            },
        ]
    );
}

// tests/scent_ordering.rs
use glam::IVec2;
use martian_robots::{
    Instruction, Orientation, ParseError, Planet, Robot, Size, Status, Transform, parse_planet,
};

const F: Instruction = Instruction::MoveForward;
const L: Instruction = Instruction::TurnLeft;

fn edge_runner(program: Vec<Instruction>) -> Robot {
    Robot::new(Transform::new(5, 0, Orientation::East), program)
}

#[test]
fn test_scent_saves_every_later_robot() {
    let area = Size::new(5, 3).unwrap();
    let report = Planet::new(area)
        .with_robots(vec![
            edge_runner(vec![F, L, F]),
            edge_runner(vec![F, L, F]),
            edge_runner(vec![F, F, F, L, F]),
        ])
        .simulate();

    let lost: Vec<bool> = report.robots.iter().map(|r| r.lost).collect();
    assert_eq!(lost, vec![true, false, false]);
    assert_eq!(report.robots[0].to_string(), "5 0 E LOST");
    assert_eq!(report.robots[1].to_string(), "5 1 N");
    assert_eq!(report.robots[2].to_string(), "5 1 N");
    assert_eq!(report.scents, vec![[5, 0]]);
}

#[test]
fn test_scent_only_covers_its_own_point() {
    let area = Size::new(5, 3).unwrap();
    let mut planet = Planet::new(area).with_robots(vec![
        edge_runner(vec![F]),
        Robot::new(Transform::new(5, 1, Orientation::East), vec![F]),
    ]);
    planet.run();

    assert!(planet.robots().iter().all(|r| r.status == Status::Lost));
    assert!(planet.scents().has_scent(IVec2::new(5, 0)));
    assert!(planet.scents().has_scent(IVec2::new(5, 1)));
}

#[test]
fn test_corner_scent_protects_both_edges() {
    let area = Size::new(2, 2).unwrap();
    let report = Planet::new(area)
        .with_robots(vec![
            Robot::new(Transform::new(2, 2, Orientation::North), vec![F]),
            Robot::new(Transform::new(2, 2, Orientation::East), vec![F, L, F]),
        ])
        .simulate();

    assert!(report.robots[0].lost);
    assert_eq!(report.robots[1].to_string(), "2 2 N");
}

#[test]
fn test_later_robots_never_change_earlier_outcomes() {
    let area = Size::new(3, 3).unwrap();
    let robots = vec![
        Robot::new(Transform::new(0, 0, Orientation::South), vec![F]),
        Robot::new(Transform::new(0, 0, Orientation::South), vec![F]),
        Robot::new(Transform::new(3, 3, Orientation::East), vec![F]),
        Robot::new(Transform::new(0, 0, Orientation::West), vec![F, L]),
    ];

    let mut previous: Option<(Vec<String>, usize)> = None;
    for count in 1..=robots.len() {
        let report = Planet::new(area)
            .with_robots(robots[..count].to_vec())
            .simulate();
        let lines: Vec<String> = report.robots.iter().map(|r| r.to_string()).collect();

        if let Some((earlier, scents)) = &previous {
            assert_eq!(&lines[..earlier.len()], earlier.as_slice());
            assert!(report.scents.len() >= *scents);
        }
        previous = Some((lines, report.scents.len()));
    }

    let (lines, scents) = previous.unwrap();
    assert_eq!(lines, vec!["0 0 S LOST", "0 0 S", "3 3 E LOST", "0 0 S"]);
    assert_eq!(scents, 2);
}

#[test]
fn test_parser_recovers_and_mission_still_runs() {
    let input = "\
5 3
1 1 E
RFRFRFRF

9 x N
FFF

3 2 N
FRRFLLFFRRFLL

0 3 W
LLFFFLFLFL
";
    let parsed = parse_planet(input).unwrap();
    assert_eq!(parsed.rejected.len(), 1);
    assert!(matches!(
        parsed.rejected[0],
        ParseError::InvalidPosition { line: 5, .. }
    ));

    let report = parsed.planet.simulate();
    assert_eq!(report.to_text(), "1 1 E\n3 3 N LOST\n2 3 S\n");
}

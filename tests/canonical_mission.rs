// tests/canonical_mission.rs
use martian_robots::{
    Orientation, Planet, Robot, SAMPLE_INPUT, Size, Status, Transform, parse_planet,
};

#[test]
fn test_sample_mission_text_output() {
    let parsed = parse_planet(SAMPLE_INPUT).unwrap();
    assert!(parsed.rejected.is_empty());

    let report = parsed.planet.simulate();
    assert_eq!(report.to_text(), "1 1 E\n3 3 N LOST\n2 3 S\n");
    assert_eq!(report.scents, vec![[3, 3]]);
}

#[test]
fn test_sample_mission_built_by_hand() {
    let parsed = parse_planet(SAMPLE_INPUT).unwrap();
    let programs: Vec<_> = parsed
        .planet
        .robots()
        .iter()
        .map(|r| r.program().to_vec())
        .collect();

    let mut planet = Planet::new(Size::new(5, 3).unwrap());
    planet.add_robot(Robot::new(
        Transform::new(1, 1, Orientation::East),
        programs[0].clone(),
    ));
    planet.add_robot(Robot::new(
        Transform::new(3, 2, Orientation::North),
        programs[1].clone(),
    ));
    planet.add_robot(Robot::new(
        Transform::new(0, 3, Orientation::West),
        programs[2].clone(),
    ));
    planet.run();

    let robots = planet.robots();
    assert_eq!(robots[0].transform, Transform::new(1, 1, Orientation::East));
    assert_eq!(robots[0].status, Status::Ok);

    // Lost robots report the pose before the fatal step.
    assert_eq!(robots[1].transform, Transform::new(3, 3, Orientation::North));
    assert_eq!(robots[1].status, Status::Lost);

    // Saved by the scent at (3, 3) on its way west.
    assert_eq!(robots[2].transform, Transform::new(2, 3, Orientation::South));
    assert_eq!(robots[2].status, Status::Ok);
}

#[test]
fn test_third_robot_falls_without_the_second() {
    let input = "5 3\n0 3 W\nLLFFFLFLFL\n";
    let report = parse_planet(input).unwrap().planet.simulate();
    assert_eq!(report.to_text(), "3 3 N LOST\n");
}

#[test]
fn test_json_report() {
    let report = parse_planet(SAMPLE_INPUT).unwrap().planet.simulate();
    let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(value["robots"].as_array().unwrap().len(), 3);
    assert_eq!(value["robots"][1]["x"], 3);
    assert_eq!(value["robots"][1]["y"], 3);
    assert_eq!(value["robots"][1]["orientation"], "N");
    assert_eq!(value["robots"][1]["lost"], true);
}

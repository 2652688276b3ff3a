use std::process::Command;

fn run(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_fleet-odds"))
        .args(args)
        .output()
        .expect("failed to run fleet-odds binary");
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    (output.status.success(), stdout)
}

#[test]
fn count_fleet_names_ships_in_order() {
    let (ok, stdout) = run(&["count-fleet", "1", "2"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "Placements for Destroyer, Submarine: 27336");
}

#[test]
fn count_ship_prints_carrier_placements() {
    let (ok, stdout) = run(&["count-ship", "5"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "Placements for ship 5: 120");
}

#[test]
fn count_fleet_rejects_unknown_ship() {
    let (ok, _) = run(&["count-fleet", "1", "6"]);
    assert!(!ok);
}

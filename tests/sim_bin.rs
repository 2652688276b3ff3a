use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["3", "5"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["seed"], 3);
    assert_eq!(v["trials"], 5);
    for name in ["random", "hunt", "probability"] {
        assert!(v["strategies"][name]["mean"].is_number());
        let total: u64 = v["strategies"][name]["frequencies"]
            .as_object()
            .expect("frequency table")
            .values()
            .map(|n| n.as_u64().expect("count"))
            .sum();
        assert_eq!(total, 5);
    }
    assert!(v["best"].is_string());
}

#[test]
fn sim_binary_rejects_single_argument() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .arg("3")
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("<seed> <trials>"));
}

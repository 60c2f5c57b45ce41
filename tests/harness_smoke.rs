//! End-to-end smoke test: run the harness binary over a small scene and
//! a drag script, then check the report it emits.

use serde_json::json;
use std::process::Command;

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("gazecast_smoke_{}_{name}", std::process::id()))
}

#[test]
fn scripted_run_selects_and_activates() {
    // A panel dead ahead that activates on dwell, and a second panel a
    // quarter turn to the right that the script never looks at.
    let scene = json!({
        "nodes": [
            {
                "label": "front-panel",
                "rect": { "top": -50.0, "left": -50.0, "width": 100.0, "height": 100.0 },
                "transform": "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, -200, 1)",
                "activates": true
            },
            {
                "label": "side-panel",
                "rect": { "top": -50.0, "left": 350.0, "width": 100.0, "height": 100.0 },
                "interactable": false
            }
        ]
    });
    // Hold still long enough for the dwell to fire, then drag away.
    let script = json!({
        "steps": [
            { "duration_ms": 2000.0 },
            { "duration_ms": 500.0, "drag_dx": -450.0 }
        ]
    });

    let scene_path = temp_path("scene.json");
    let script_path = temp_path("script.json");
    let report_path = temp_path("report.json");
    std::fs::write(&scene_path, scene.to_string()).expect("write scene");
    std::fs::write(&script_path, script.to_string()).expect("write script");

    let bin = env!("CARGO_BIN_EXE_gazecast");
    let status = Command::new(bin)
        .args([
            scene_path.to_str().unwrap(),
            "--script",
            script_path.to_str().unwrap(),
            "--frames",
            "200",
            "--dt-ms",
            "16",
            "--report",
            report_path.to_str().unwrap(),
        ])
        .status()
        .expect("spawn gazecast");
    assert!(status.success());

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");

    let events = report["events"].as_array().expect("events");
    let kinds: Vec<&str> = events
        .iter()
        .map(|event| event["kind"].as_str().unwrap())
        .collect();
    // Select the front panel, dwell-activate it, then lose it to the
    // drag.
    assert_eq!(kinds, vec!["select", "activate", "clear"]);
    assert_eq!(events[0]["node"], "front-panel");
    assert_eq!(events[1]["node"], "front-panel");
    assert_eq!(report["final_selection"], serde_json::Value::Null);
    // The drag left the camera yawed a quarter turn.
    assert_eq!(report["final_camera"]["rotation"]["y"].as_f64(), Some(90.0));

    for path in [scene_path, script_path, report_path] {
        let _ = std::fs::remove_file(path);
    }
}

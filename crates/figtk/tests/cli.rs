use std::path::Path;
use std::process::{Command, Output};

const SAVED_RESPONSE: &str = r#"{
    "name": "App",
    "document": {
        "id": "0:0",
        "type": "DOCUMENT",
        "children": [{
            "id": "0:1",
            "type": "CANVAS",
            "name": "Page 1",
            "children": [
                {
                    "id": "1:1",
                    "type": "FRAME",
                    "name": "Login",
                    "absoluteBoundingBox": {"x": 100, "y": 200, "width": 300, "height": 150},
                    "children": [{
                        "id": "1:2",
                        "type": "TEXT",
                        "name": "Input Username",
                        "absoluteBoundingBox": {"x": 120, "y": 220, "width": 200, "height": 30}
                    }]
                },
                {"id": "2:1", "type": "FRAME", "name": ""}
            ]
        }]
    }
}"#;

fn figtk(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_figtk"))
        .args(args)
        .env_remove("FIGMA_TOKEN")
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn saved_response(dir: &Path) -> String {
    let path = dir.join("app.json");
    std::fs::write(&path, SAVED_RESPONSE).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_frames_lists_names() {
    let dir = tempfile::tempdir().unwrap();
    let input = saved_response(dir.path());

    let output = figtk(&["frames", "--input", &input]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Login\nUnnamed Frame\n");
}

#[test]
fn test_generate_writes_program_preview_and_plan() {
    let dir = tempfile::tempdir().unwrap();
    let input = saved_response(dir.path());
    let out = dir.path().join("login");
    let preview = dir.path().join("login.svg");
    let plan = dir.path().join("plan.json");

    let output = figtk(&[
        "generate",
        "--input",
        &input,
        "--frame",
        "Login",
        "--out",
        out.to_str().unwrap(),
        "--preview",
        preview.to_str().unwrap(),
        "--plan",
        plan.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let program = std::fs::read_to_string(dir.path().join("login.py")).unwrap();
    assert!(program.contains("entry_1.place(x=20, y=20, width=200, height=30)"));
    assert!(std::fs::read_to_string(preview).unwrap().contains("<svg"));

    let plan: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(plan).unwrap()).unwrap();
    assert_eq!(plan["widgets"].as_array().unwrap().len(), 2);
    assert_eq!(plan["widgets"][1]["kind"], "entry");
}

#[test]
fn test_generate_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let input = saved_response(dir.path());

    let output = figtk(&["generate", "--input", &input, "--all", "--title", "Demo"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("root.title(\"Demo\")"));
    assert!(stdout.contains("container_2 = tk.Frame(root)"));
}

#[test]
fn test_missing_selection_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = saved_response(dir.path());

    let output = figtk(&["generate", "--input", &input]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("select at least one frame"));
}

#[test]
fn test_missing_token_fails_without_network() {
    let output = figtk(&["frames", "--file-id", "AbC", "--base-url", "http://127.0.0.1:9"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("an access token is required"));
}

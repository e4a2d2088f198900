// tests/cli_commands.rs
#![cfg(feature = "cli")]

use clap::Parser;
use fastener_gallery::cli::{execute, Cli};
use fastener_gallery::Error;

fn run(args: &[&str]) -> Result<String, Error> {
    let cli = Cli::try_parse_from(std::iter::once("cli").chain(args.iter().copied())).unwrap();
    execute(&cli)
}

#[test]
fn list_prints_id_name_lines() {
    let out = run(&["list"]).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "hex-bolt,Hex Bolt");
    assert_eq!(lines[4], "blind-rivet,Blind Rivet");
}

#[test]
fn list_json_is_an_array_of_records() {
    let out = run(&["list", "--json"]).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 5);
    assert_eq!(v[2]["id"], "hex-nut");
}

#[test]
fn show_prints_specs_in_order() {
    let out = run(&["show", "hex-nut"]).unwrap();
    assert!(out.starts_with("Hex Nut (hex-nut)\n"));
    let thread = out.find("Thread").unwrap();
    let finish = out.find("Finish").unwrap();
    assert!(thread < finish);
    assert!(out.contains("  python/python_fastener_export.py --fastener hex_nut --diameter 16\n"));
}

#[test]
fn show_unknown_id_errors() {
    assert!(matches!(run(&["show", "nope"]), Err(Error::UnknownFastener(_))));
}

#[test]
fn command_without_overrides_echoes_record_script() {
    let out = run(&["command", "blind-rivet"]).unwrap();
    assert_eq!(out, "python/python_fastener_export.py --fastener blind_rivet --diameter 4.8 --grip 6.0\n");
}

#[test]
fn command_with_overrides_is_composed() {
    let out = run(&["command", "hex-bolt", "--diameter", "10", "--length", "60"]).unwrap();
    assert_eq!(out, "python/python_fastener_export.py --fastener hex_bolt --diameter 10 --length 60\n");

    let out = run(&["command", "hex_nut", "--thickness", "9.5"]).unwrap();
    assert_eq!(out, "python/python_fastener_export.py --fastener hex_nut --thickness 9.5\n");
}

#[test]
fn command_rejects_irrelevant_flag() {
    let err = run(&["command", "hex-nut", "--grip", "3"]).unwrap_err();
    assert!(matches!(err, Error::IrrelevantArgument { .. }));
}

#[test]
fn render_writes_into_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("gallery");
    let out = run(&["render", "-o", out_dir.to_str().unwrap(), "--select", "hex-nut", "--no-styles"]).unwrap();
    assert_eq!(out.lines().count(), 1);
    let index = std::fs::read_to_string(out_dir.join("index.html")).unwrap();
    assert!(index.contains("<option value=\"hex-nut\" selected>"));
}

#[test]
fn custom_catalog_replaces_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"id":"u-bolt","name":"U-Bolt","description":"Bent bolt.","applications":["Pipes"],
             "materials":["Steel"],"specs":{"Thread":"M8"},"image":"u.svg","script":"echo u"}]"#,
    )
    .unwrap();
    let out = run(&["--catalog", path.to_str().unwrap(), "list"]).unwrap();
    assert_eq!(out, "u-bolt,U-Bolt\n");
}

#[test]
fn missing_catalog_file_is_reported() {
    let err = run(&["--catalog", "/definitely/not/here.json", "list"]).unwrap_err();
    assert!(matches!(err, Error::CatalogFile { .. }));
}

#[test]
fn overrides_start_from_helper_defaults_not_record_values() {
    let out = run(&["command", "hex-nut", "--thickness", "10"]).unwrap();
    assert_eq!(out, "python/python_fastener_export.py --fastener hex_nut --thickness 10\n");

    let out = run(&["command", "hex-nut", "--diameter", "16", "--thickness", "10"]).unwrap();
    assert_eq!(out, "python/python_fastener_export.py --fastener hex_nut --diameter 16 --thickness 10\n");
}

#[test]
fn custom_catalog_id_with_overrides_names_the_missing_kind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"[{"id":"u-bolt","name":"U-Bolt","description":"Bent bolt.","applications":["Pipes"],
             "materials":["Steel"],"specs":{"Thread":"M8"},"image":"u.svg","script":"echo u"}]"#,
    )
    .unwrap();
    let catalog = path.to_str().unwrap();

    assert_eq!(run(&["--catalog", catalog, "command", "u-bolt"]).unwrap(), "echo u\n");

    let err = run(&["--catalog", catalog, "command", "u-bolt", "--diameter", "8"]).unwrap_err();
    assert!(matches!(err, Error::NoHelperKind(ref id) if id == "u-bolt"));
    assert!(err.to_string().contains("hex_bolt"));

    assert!(matches!(run(&["command", "toggle_bolt", "--diameter", "8"]), Err(Error::UnknownKind(_))));
}

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::contains;

fn fixture_versions() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures/versions")
        .canonicalize()
        .expect("fixture versions present")
}

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("tiship");
    cmd.env("RUST_LOG", "error")
        .arg("--data-dir")
        .arg(fixture_versions());
    cmd
}

#[test]
fn lists_fixture_versions() {
    cli()
        .arg("versions")
        .assert()
        .success()
        .stdout(contains("Available versions (1):"))
        .stdout(contains("0.4.117"));
}

#[test]
fn lists_drive_families_with_derived_values() {
    cli()
        .args(["drives", "--version", "0.4.117"])
        .assert()
        .success()
        .stdout(contains("Drive families for 0.4.117 (3):"))
        .stdout(contains("NervaSolidCore_"))
        .stdout(contains("Solid Core Fission Reactor II"))
        .stdout(contains("ChemicalRocket_ [no required power plant]"));
}

#[test]
fn evaluates_fixture_configuration() {
    cli()
        .args([
            "evaluate",
            "--version",
            "0.4.117",
            "--payload",
            "150",
            "--radiator",
            "AluminumPanelRadiator",
            "--fuel-tanks",
            "3",
            "--hull",
            "EscortHull",
            "--armor",
            "SteelArmor",
            "--default-power-plant",
            "SolidCoreFissionReactorII",
        ])
        .assert()
        .success()
        .stdout(contains("fuel "))
        .stdout(contains("300.000 t"))
        .stdout(contains("NervaSolidCore_x1"))
        .stdout(contains("FirestarFusion_x1"));
}

#[test]
fn evaluate_emits_json_when_requested() {
    cli()
        .args([
            "evaluate",
            "--version",
            "0.4.117",
            "--radiator",
            "AluminumPanelRadiator",
            "--hull",
            "EscortHull",
            "--armor",
            "SteelArmor",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"version\": \"0.4.117\""))
        .stdout(contains("\"pairings\""))
        .stdout(contains("\"fuel_mass_tons\""));
}

#[test]
fn unknown_radiator_fails_with_lookup_error() {
    cli()
        .args([
            "evaluate",
            "--version",
            "0.4.117",
            "--radiator",
            "NoSuchRadiator",
            "--hull",
            "EscortHull",
            "--armor",
            "SteelArmor",
        ])
        .assert()
        .failure()
        .stderr(contains("unknown radiator: NoSuchRadiator"));
}

#[test]
fn missing_version_fails_cleanly() {
    cli()
        .args(["drives", "--version", "9.9.9"])
        .assert()
        .failure()
        .stderr(contains("version directory not found"));
}

#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn agrocat_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("agrocat"));
    cmd.env("AGROCAT_HOME", home)
        .env_remove("AGROCAT_LOG")
        .args(["--color", "never"]);
    cmd
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

const TWO_COURSES: &str = r#"[
  {
    "id": "loc-1",
    "title": "Cours local A",
    "description": "Premier cours",
    "instructor": "Fatou Sarr",
    "category": "Élevage",
    "level": "Débutant",
    "duration_hours": 3,
    "price": 0,
    "rating": 4.2,
    "enrolled_students": 12,
    "published_at": "2024-03-01"
  },
  {
    "id": "loc-2",
    "title": "Cours local B",
    "description": "Second cours",
    "instructor": "Fatou Sarr",
    "category": "Élevage",
    "level": "Avancé",
    "duration_hours": 8,
    "price": 2000,
    "rating": 4.8,
    "enrolled_students": 40,
    "published_at": "2024-04-01"
  }
]"#;

#[test]
fn list_shows_first_page_with_summary() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["list", "courses"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "14 of 14 · page 1/2 · sorted by popular · grid view",
        ))
        .stdout(predicate::str::contains("next: --page 2"));
}

#[test]
fn filter_narrows_the_listing() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["ls", "courses", "-f", "level=Débutant", "--view", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 of 14"))
        .stdout(predicate::str::contains("1 active filter"))
        .stdout(predicate::str::contains("crs-013"))
        .stdout(predicate::str::contains("crs-002").not());
}

#[test]
fn empty_result_shows_clear_hint_and_succeeds() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["list", "courses", "-f", "level=Avancé", "-f", "price=free"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No courses match the current filters."))
        .stdout(predicate::str::contains(
            "14 courses in the catalog. Clear all filters: agrocat list courses",
        ));
}

#[test]
fn unknown_filter_key_warns_and_is_ignored() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["list", "courses", "-f", "colour=rouge"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown filter \"colour\""))
        .stdout(predicate::str::contains("14 of 14"));
}

#[test]
fn invalid_filter_value_fails() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["list", "courses", "-f", "rating=beaucoup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid filter \"rating\""));
}

#[test]
fn unsupported_sort_fails() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["list", "news", "--sort", "price-asc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Sort \"price-asc\" is not available for news",
        ));
}

#[test]
fn json_output_carries_the_page() {
    let home = TempDir::new().unwrap();

    let page = json_output(
        agrocat_cmd(home.path()).args(["list", "courses", "-f", "price=free", "--json"]),
    );

    assert_eq!(page["total_filtered"], 2);
    assert_eq!(page["catalog_size"], 14);
    assert_eq!(page["active_filter_count"], 1);
    assert_eq!(page["is_empty"], false);
    let ids: Vec<&str> = page["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&"crs-001"));
    assert!(ids.contains(&"crs-009"));
}

#[test]
fn out_of_range_page_is_clamped_with_warning() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["list", "courses", "-p", "9"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Page 9 is out of range, showing page 2 of 2",
        ))
        .stdout(predicate::str::contains("page 2/2"));
}

#[test]
fn show_prints_one_item() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["show", "courses", "crs-003"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrepreneuriat Agricole"))
        .stdout(predicate::str::contains("crs-003"));
}

#[test]
fn show_unknown_id_fails() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["show", "courses", "crs-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: No item with id \"crs-999\" in courses",
        ));
}

#[test]
fn filters_lists_keys_with_counts() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["filters", "courses"])
        .assert()
        .success()
        .stdout(predicate::str::contains("level"))
        .stdout(predicate::str::contains("Débutant"))
        .stdout(predicate::str::contains("(4)"))
        .stdout(predicate::str::contains("sorts"));
}

#[test]
fn config_page_size_changes_pagination() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["config", "page_size.courses.grid", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size.courses.grid set to 5"));

    agrocat_cmd(home.path())
        .args(["config", "page_size.courses.grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5"));

    let page = json_output(agrocat_cmd(home.path()).args(["list", "courses", "--json"]));
    assert_eq!(page["page_size"], 5);
    assert_eq!(page["total_pages"], 3);
}

#[test]
fn config_rejects_zero_page_size() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["config", "page_size.news.list", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Config error"));
}

#[test]
fn config_show_all_lists_keys() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_view"))
        .stdout(predicate::str::contains("(embedded)"))
        .stdout(predicate::str::contains("config.json"));
}

#[test]
fn data_dir_overrides_embedded_catalogs() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("courses.json"), TWO_COURSES).unwrap();

    agrocat_cmd(home.path())
        .args(["config", "data_dir", data.to_str().unwrap()])
        .assert()
        .success();

    let courses = json_output(agrocat_cmd(home.path()).args(["list", "courses", "--json"]));
    assert_eq!(courses["catalog_size"], 2);
    assert_eq!(courses["items"][0]["id"], "loc-2");

    // Files missing from the directory come from the embedded data.
    let programs = json_output(agrocat_cmd(home.path()).args(["list", "programs", "--json"]));
    assert_eq!(programs["catalog_size"], 10);
}

#[test]
fn broken_data_dir_can_be_reset_through_config() {
    let home = TempDir::new().unwrap();
    let data = home.path().join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(data.join("courses.json"), "[{\"id\": 1}]").unwrap();

    agrocat_cmd(home.path())
        .args(["config", "data_dir", data.to_str().unwrap()])
        .assert()
        .success();

    agrocat_cmd(home.path())
        .args(["list", "courses"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));

    agrocat_cmd(home.path())
        .args(["config", "data_dir", "embedded"])
        .assert()
        .success();

    agrocat_cmd(home.path())
        .args(["list", "courses"])
        .assert()
        .success();
}

#[test]
fn out_of_range_config_file_is_repaired_through_config() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.json"),
        r#"{"page_sizes":{"news":{"grid":0,"list":2}}}"#,
    )
    .unwrap();

    agrocat_cmd(home.path())
        .args(["list", "programs"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: Config error: page_size.news.grid must be at least 1",
        ));

    agrocat_cmd(home.path())
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size.news.grid must be at least 1"));

    agrocat_cmd(home.path())
        .args(["config", "page_size.news.grid", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size.news.grid set to 5"))
        .stdout(predicate::str::contains("must be at least 1").not());

    let page = json_output(agrocat_cmd(home.path()).args(["list", "news", "--json"]));
    assert_eq!(page["page_size"], 5);
}

#[test]
fn clear_hint_keeps_sort_and_view() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["list", "courses", "-f", "level=Avancé", "-f", "price=free"])
        .args(["--sort", "price-asc", "--view", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Clear all filters: agrocat list courses --sort price-asc --view list",
        ));
}

#[test]
fn unknown_sort_names_the_sort() {
    let home = TempDir::new().unwrap();

    agrocat_cmd(home.path())
        .args(["list", "courses", "--sort", "cheapest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown sort: cheapest"))
        .stderr(predicate::str::contains("Invalid filter").not());
}

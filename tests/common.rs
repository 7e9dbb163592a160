#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtrainer::models::Record;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const CUSTOMERS_JSON: &str = r#"{
  "_embedded": {
    "customers": [
      {
        "firstname": "Ann",
        "lastname": "Lee",
        "streetaddress": "Main Street 1",
        "postcode": "00100",
        "city": "Helsinki",
        "email": "ann@example.com",
        "phone": "040-123456",
        "_links": {
          "self": { "href": "https://api.example.com/api/customers/1" },
          "customer": { "href": "https://api.example.com/api/customers/1" },
          "trainings": { "href": "https://api.example.com/api/customers/1/trainings" }
        }
      },
      {
        "firstname": "John",
        "lastname": "\"JJ\" Doe",
        "streetaddress": "Side Road 5, B 12",
        "postcode": "02100",
        "city": "Espoo",
        "email": "john@example.com",
        "phone": "050-987654",
        "_links": {
          "self": { "href": "https://api.example.com/api/customers/2" }
        }
      }
    ]
  },
  "_links": { "self": { "href": "https://api.example.com/api/customers" } }
}"#;

pub const TRAININGS_JSON: &str = r#"[
  {
    "id": 1,
    "date": "2024-05-10T09:00:00.000+00:00",
    "duration": 60,
    "activity": "Spinning",
    "customer": { "id": 1, "firstname": "Ann", "lastname": "Lee", "city": "Helsinki" }
  },
  {
    "id": 2,
    "date": "2024-05-10T23:30:00.000+00:00",
    "duration": 45,
    "activity": "Morning Yoga",
    "customer": { "id": 2, "firstname": "John", "lastname": "Doe", "city": "Espoo" }
  },
  {
    "id": 3,
    "date": "2024-05-12T18:00:00.000+00:00",
    "duration": 90,
    "activity": "Gym training",
    "customer": null
  },
  {
    "id": 4,
    "date": "not a date",
    "duration": 30,
    "activity": "Zumba"
  }
]"#;

pub fn rtr() -> Command {
    cargo_bin_cmd!("rtrainer")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtrainer.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the customer and training fixtures; returns `(customers, trainings)`.
pub fn write_fixtures(name: &str) -> (String, String) {
    let customers = temp_path(&format!("{name}_customers"), "json");
    let trainings = temp_path(&format!("{name}_trainings"), "json");
    fs::write(&customers, CUSTOMERS_JSON).expect("write customers fixture");
    fs::write(&trainings, TRAININGS_JSON).expect("write trainings fixture");
    (customers, trainings)
}

/// Command with a non-existent config (defaults) and the fixture files.
pub fn rtr_with_fixtures(name: &str) -> Command {
    let (customers, trainings) = write_fixtures(name);
    let config = temp_path(&format!("{name}_config"), "conf");
    let mut cmd = rtr();
    cmd.args([
        "--config",
        &config,
        "--customers-file",
        &customers,
        "--trainings-file",
        &trainings,
    ]);
    cmd
}

pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("not an object: {other}"),
    }
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command under test, with the config directory redirected into the
/// system temp dir so tests never read or clear a real user session.
pub fn mtk() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("messtrack_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("messtrack");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Write a menu capture file with the given JSON body inside the system
/// temp dir and return its path.
pub fn write_menu_file(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_messtrack.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, json).expect("failed to write menu fixture");
    p
}

/// Create a menu directory with per-day capture files; `days` pairs a file
/// name (e.g. "mon.json") with its JSON body.
pub fn write_menu_dir(name: &str, days: &[(&str, &str)]) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_messtrack_menu", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("failed to create menu fixture dir");
    for (file, json) in days {
        fs::write(path.join(file), json).expect("failed to write day fixture");
    }
    path.to_string_lossy().to_string()
}

/// A week capture in the upstream wire shape: two Monday meals availed,
/// one Monday meal not availed, one Friday meal not availed.
pub const WEEK_FIXTURE: &str = r#"[
  {"msCde":"Breakfast(Mon)","mealTm":"Breakfast 07:30 AM - 09:30 AM","srvSts":"C","srvDte":"2025-09-29 08:15","msNme":"Idli\nSambar\nChutney"},
  {"msCde":"Lunch(Mon)","mealTm":"Lunch 12:00 PM - 02:00 PM","srvSts":"C","srvDte":"2025-09-29 12:40","msNme":"Rice\nDal\nCurd"},
  {"msCde":"Dinner(Mon)","mealTm":"Dinner 07:00 PM - 09:00 PM","srvSts":"P","msNme":"Roti\nPaneer"},
  {"msCde":"Lunch(Fri)","mealTm":"Lunch 12:00 PM - 02:00 PM","srvSts":"P","msNme":"Veg Biryani\nRaita"}
]"#;

use anyhow::Result;
use reportsplit::{config::Config, driver, ReportError};
use std::{fs, path::Path};
use tempfile::tempdir;

fn write_report(path: &Path, property_line: Option<&str>, rows: &[(&str, &str)]) -> Result<()> {
    let mut bytes = Vec::new();
    for i in 0..32 {
        bytes.extend_from_slice(format!("Field {i:02} : value\r\n").as_bytes());
    }
    bytes.extend_from_slice(property_line.unwrap_or("Operator : K. \u{3a0}.").as_bytes());
    bytes.extend_from_slice(b"\r\n");
    bytes.extend_from_slice(b"Time, Brd Reslt, Brd Load, Remark\r\n");
    for (i, (reslt, load)) in rows.iter().enumerate() {
        bytes.extend_from_slice(format!("{i}, {reslt}, {load}, ").as_bytes());
        bytes.extend_from_slice(b"\xE4\xF6\r\n");
    }
    fs::create_dir_all(path.parent().unwrap())?;
    fs::write(path, bytes)?;
    Ok(())
}

fn layout(root: &Path) -> Result<Config> {
    let cfg = Config::from_root(root);
    write_report(
        &cfg.input_dir.join("line-a").join("pump.csv"),
        Some("Max Broadband Resultant  : 42.5 dB"),
        &[("10", "1"), ("bad", "2"), ("20", "6")],
    )?;
    write_report(
        &cfg.input_dir.join("line-b").join("valve.txt"),
        None,
        &[("n/a", "4"), ("", "4 kN")],
    )?;
    fs::create_dir_all(cfg.input_dir.join("line-b").join("nested"))?;
    Ok(cfg)
}

const EXPECTED: &str = "Item: pump
Μέση τιμή (mean) της στήλης Brd Reslt: 15.0
Μαξ τιμή (max) της στήλης Brd Reslt: 20.0
Μέση τιμή (mean) της στήλης Brd Load: 3.0
Μαξ τιμή (max) της στήλης Brd Load: 6.0
Max Broadband Resultant  : 42.5 dB
Item: valve.txt
Μέση τιμή (mean) της στήλης Brd Reslt: nan
Μαξ τιμή (max) της στήλης Brd Reslt: nan
Μέση τιμή (mean) της στήλης Brd Load: 4.0
Μαξ τιμή (max) της στήλης Brd Load: 4.0
Max Broadband Resultant  : not found
";

#[test]
fn full_run_writes_splits_and_summary() -> Result<()> {
    let dir = tempdir()?;
    let cfg = layout(dir.path())?;

    let summary = driver::run(&cfg)?;
    assert_eq!(summary.lines().len(), 12);
    assert_eq!(fs::read_to_string(&cfg.summary_file)?, EXPECTED);

    let mut outputs: Vec<String> = fs::read_dir(&cfg.output_dir)?
        .map(|e| e.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<_>>()?;
    outputs.sort();
    assert_eq!(
        outputs,
        [
            "pump-csv.csv",
            "pump-properties.csv",
            "valve.txt-csv.csv",
            "valve.txt-properties.csv",
        ]
    );

    let original = fs::read(cfg.input_dir.join("line-a").join("pump.csv"))?;
    let header = fs::read(cfg.output_dir.join("pump-properties.csv"))?;
    let data = fs::read(cfg.output_dir.join("pump-csv.csv"))?;
    assert_eq!([header, data].concat(), original);
    Ok(())
}

#[test]
fn second_run_is_byte_identical() -> Result<()> {
    let dir = tempdir()?;
    let cfg = layout(dir.path())?;

    driver::run(&cfg)?;
    let snapshot = |cfg: &Config| -> Result<Vec<Vec<u8>>> {
        let mut paths: Vec<_> = fs::read_dir(&cfg.output_dir)?
            .map(|e| e.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        paths.sort();
        let mut all = paths.iter().map(fs::read).collect::<std::io::Result<Vec<_>>>()?;
        all.push(fs::read(&cfg.summary_file)?);
        Ok(all)
    };
    let first = snapshot(&cfg)?;
    driver::run(&cfg)?;
    assert_eq!(snapshot(&cfg)?, first);
    Ok(())
}

#[test]
fn no_save_leaves_summary_file_alone() -> Result<()> {
    let dir = tempdir()?;
    let mut cfg = layout(dir.path())?;
    cfg.save = false;

    let summary = driver::run(&cfg)?;
    assert!(summary.lines().is_empty());
    assert!(!cfg.summary_file.exists());
    assert!(cfg.output_dir.join("pump-csv.csv").exists());
    Ok(())
}

#[test]
fn short_report_aborts_the_run() -> Result<()> {
    let dir = tempdir()?;
    let cfg = layout(dir.path())?;
    let short: String = (0..10).map(|i| format!("row {i}\n")).collect();
    fs::write(cfg.input_dir.join("line-a").join("aaa-short.csv"), short)?;

    let err = driver::run(&cfg).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ReportError>(),
        Some(ReportError::TooShort { lines: 10, needed: 33, .. })
    ));
    assert!(!cfg.output_dir.join("aaa-short-properties.csv").exists());
    assert!(!cfg.summary_file.exists());
    Ok(())
}

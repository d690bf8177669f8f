use std::io::{Error, Write};
use tempfile::{Builder, NamedTempFile};

/// Menu input that logs in and then runs `steps`, ending with Exit.
pub fn session_input(steps: &[&str]) -> String {
    let mut input = String::from("1\nalice secret\n");
    for step in steps {
        input.push_str(step);
        input.push('\n');
    }
    input.push_str("6\n");
    input
}

/// Writes `rows` under an `id,name,price` header into a temporary `.csv` file.
pub fn csv_catalog(rows: &[(&str, &str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = Builder::new().suffix(".csv").tempfile()?;
    let mut wtr = csv::Writer::from_writer(file.as_file_mut());
    wtr.write_record(["id", "name", "price"])?;
    for (id, name, price) in rows {
        wtr.write_record([id, name, price])?;
    }
    wtr.flush()?;
    drop(wtr);
    Ok(file)
}

pub fn json_catalog(body: &str) -> Result<NamedTempFile, Error> {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    file.write_all(body.as_bytes())?;
    file.flush()?;
    Ok(file)
}

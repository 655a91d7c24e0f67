//! Workflow output variables

use crate::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Publish an output variable for downstream workflow steps.
///
/// Appends to the file named by `GITHUB_OUTPUT` when the runner provides
/// one; older runners get the legacy workflow command on stdout.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    let path = std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from);
    write_output(path.as_deref(), name, value)
}

fn write_output(path: Option<&Path>, name: &str, value: &str) -> Result<()> {
    match path {
        Some(path) => {
            let mut file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
            writeln!(file, "{name}={value}")?;
        }
        None => {
            println!("::set-output name={name}::{value}");
        }
    }
    Ok(())
}

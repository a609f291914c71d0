use std::{error::Error, io::Read};

use jdiff::serialize::pretty_lines;

use crate::cli::FmtArgs;

pub fn handle_fmt_command(args: FmtArgs) -> Result<(), Box<dyn Error>> {
    let json = if let Some(file_path) = args.file {
        load_json_file(&file_path)?
    } else {
        read_from_stdin()?
    };

    println!("{}", pretty_lines(&json).join("\n"));
    Ok(())
}

fn load_json_file(path: &std::path::Path) -> Result<serde_json::Value, Box<dyn Error>> {
    let data = std::fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&data)?;
    Ok(json)
}

fn read_from_stdin() -> Result<serde_json::Value, Box<dyn Error>> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    let json: serde_json::Value = serde_json::from_str(&buffer)?;
    Ok(json)
}

use std::error::Error;

use jdiff::path::Jpath;
use jdiff::project::{self, CompareError, Comparison, Side};
use jdiff::render;

use crate::cli::{CompareArgs, OutputFormat};

pub fn handle_compare_command(args: CompareArgs) -> Result<(), Box<dyn Error>> {
    let left_text = std::fs::read_to_string(&args.file1)?;
    let right_text = std::fs::read_to_string(&args.file2)?;

    let comparison = compare(&left_text, &right_text, args.under.as_deref())?;

    match args.format {
        OutputFormat::View => {
            print!("{}", render::side_by_side(&comparison));
            println!();
            println!("{}", render::summary(&comparison.summary));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&comparison.diff)?);
        }
    }

    Ok(())
}

fn compare(
    left_text: &str,
    right_text: &str,
    under: Option<&str>,
) -> Result<Comparison, Box<dyn Error>> {
    let Some(raw) = under else {
        return Ok(project::compare_texts(left_text, right_text)?);
    };

    let root = Jpath::try_from(raw)?;
    let left: serde_json::Value =
        serde_json::from_str(left_text).map_err(|e| CompareError::parse(Side::Left, e))?;
    let right: serde_json::Value =
        serde_json::from_str(right_text).map_err(|e| CompareError::parse(Side::Right, e))?;

    Ok(project::compare_values_under(&left, &right, &root))
}

use std::path::Path;

use gbln::Gbln;

use crate::{fail, OutputFormat};

pub(crate) fn cmd_validate(gbln: &Gbln, path: &Path, output: OutputFormat, quiet: bool) {
    if let Err(e) = gbln.parse_file(path) {
        fail(&e, output, quiet);
    }
    if !quiet {
        match output {
            OutputFormat::Text => println!("valid"),
            OutputFormat::Json => println!("{}", serde_json::json!({ "valid": true })),
        }
    }
}

use std::path::Path;

use gbln::Gbln;

use crate::{fail, report_error, OutputFormat};

pub(crate) fn cmd_roundtrip(gbln: &Gbln, json: &Path, output: OutputFormat, quiet: bool) {
    let ok = match gbln
        .read_json(json)
        .and_then(|native| gbln.verify_round_trip(&native))
    {
        Ok(ok) => ok,
        Err(e) => fail(&e, output, quiet),
    };

    if !ok {
        report_error(
            &format!("round trip changed the value in '{}'", json.display()),
            output,
            quiet,
        );
        std::process::exit(1);
    }
    if !quiet {
        match output {
            OutputFormat::Text => println!("round trip ok"),
            OutputFormat::Json => println!("{}", serde_json::json!({ "round_trip": true })),
        }
    }
}

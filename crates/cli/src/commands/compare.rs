use std::path::Path;

use gbln::Gbln;

use crate::{fail, OutputFormat};

pub(crate) fn cmd_compare(gbln: &Gbln, json: &Path, output: OutputFormat, quiet: bool) {
    let cmp = match gbln.read_json(json).and_then(|native| gbln.compare_sizes(&native)) {
        Ok(c) => c,
        Err(e) => fail(&e, output, quiet),
    };
    match output {
        OutputFormat::Text => {
            println!("gbln (compact): {} bytes", cmp.compact_bytes);
            println!("json (compact): {} bytes", cmp.json_bytes);
            println!("savings: {:.2}%", cmp.savings_percent);
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&cmp) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                crate::report_error(&format!("serialization error: {}", e), output, quiet);
                std::process::exit(1);
            }
        },
    }
}

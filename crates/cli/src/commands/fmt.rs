use std::path::Path;

use gbln::{Engine, Gbln, Profile};

use crate::{fail, report_error, OutputFormat};

pub(crate) fn cmd_fmt(
    gbln: &Gbln,
    path: &Path,
    compact: bool,
    indent: u32,
    out: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let defaults = Profile::source_default();
    let profile = match Profile::new(
        compact,
        defaults.compress(),
        defaults.compression_level(),
        indent,
        defaults.strip_comments(),
    ) {
        Ok(p) => p,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            std::process::exit(1);
        }
    };

    let value = match gbln.parse_file(path) {
        Ok(v) => v,
        Err(e) => fail(&e, output, quiet),
    };

    match out {
        Some(out) => {
            if let Err(e) = gbln.write_value(out, &value, Some(&profile)) {
                fail(&e, output, quiet);
            }
            if !quiet {
                match output {
                    OutputFormat::Text => println!("wrote {}", out.display()),
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::json!({ "written": out.display().to_string() })
                    ),
                }
            }
        }
        None => {
            let text = gbln.engine().print(&value, &profile);
            if text.ends_with('\n') {
                print!("{}", text);
            } else {
                println!("{}", text);
            }
        }
    }
}

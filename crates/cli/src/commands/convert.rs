use std::path::Path;

use gbln::Gbln;

use crate::profile::resolve_profile;
use crate::{fail, report_error, OutputFormat, Preset};

pub(crate) fn cmd_from_json(
    gbln: &Gbln,
    json: &Path,
    out: &Path,
    preset: Option<Preset>,
    profile_file: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let profile = match resolve_profile(preset, profile_file) {
        Ok(p) => p,
        Err(msg) => {
            report_error(&msg, output, quiet);
            std::process::exit(1);
        }
    };
    tracing::debug!(?profile, "resolved profile");

    if let Err(e) = gbln.convert_from_json(json, out, Some(&profile)) {
        fail(&e, output, quiet);
    }
    report_written(out, output, quiet);
}

pub(crate) fn cmd_to_json(
    gbln: &Gbln,
    path: &Path,
    out: &Path,
    pretty: bool,
    output: OutputFormat,
    quiet: bool,
) {
    if let Err(e) = gbln.convert_to_json(path, out, pretty) {
        fail(&e, output, quiet);
    }
    report_written(out, output, quiet);
}

fn report_written(out: &Path, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => println!("wrote {}", out.display()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "written": out.display().to_string() })
        ),
    }
}

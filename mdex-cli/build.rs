use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of inspect::AVAILABLE_VIEWS
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_VIEWS: &[&str] = &["events", "tree"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mdex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Round-trip Markdown documents with front matter")
        .arg(
            Arg::new("config")
                .long("config")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("roundtrip").arg(input_arg()).arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(
            Command::new("header")
                .arg(input_arg())
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("inspect").arg(input_arg()).arg(
                Arg::new("view")
                    .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                    .index(2),
            ),
        );

    generate_to(Bash, &mut cmd, "mdex", &outdir)?;
    generate_to(Zsh, &mut cmd, "mdex", &outdir)?;
    generate_to(Fish, &mut cmd, "mdex", &outdir)?;

    Ok(())
}

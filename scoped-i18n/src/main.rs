use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use scoped_i18n::{I18n, ISO_639_1, LanguageRegistry, STANDARDS, load_from_paths, write_json_file};
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("scoped-i18n")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and merge scoped message stores")
        .arg(
            Arg::new("standard")
                .long("standard")
                .short('s')
                .global(true)
                .help("Language naming standard used to resolve languages")
                .value_parser(STANDARDS)
                .default_value(ISO_639_1),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .global(true)
                .help("Message file or directory; later ones override earlier ones")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("get")
                .about("Print one message")
                .arg(
                    Arg::new("language")
                        .help("Language name or code (e.g., english, en, eng)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("scopes")
                        .help("Scope path, outermost first")
                        .required(true)
                        .num_args(1..)
                        .index(2),
                ),
        )
        .subcommand(Command::new("dump").about("Print every message as a tab-separated record"))
        .subcommand(
            Command::new("merge")
                .about("Merge all inputs into one JSON store")
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Destination file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(Command::new("languages").about("List the built-in languages"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("warn".parse()?),
        )
        .init();

    let matches = cli().get_matches();
    let registry = LanguageRegistry::shared();

    match matches.subcommand() {
        Some(("get", sub)) => get(&load(sub)?, registry, sub),
        Some(("dump", sub)) => {
            dump(&load(sub)?);
            Ok(())
        }
        Some(("merge", sub)) => merge(&load(sub)?, sub),
        Some(("languages", _)) => {
            languages(registry);
            Ok(())
        }
        _ => unreachable!("subcommand_required is set"),
    }
}

fn load(matches: &ArgMatches) -> Result<I18n> {
    let standard = matches
        .get_one::<String>("standard")
        .map(String::as_str)
        .unwrap_or(ISO_639_1);
    let files: Vec<PathBuf> = matches
        .get_many::<PathBuf>("file")
        .map(|files| files.cloned().collect())
        .unwrap_or_default();
    load_from_paths(standard, files.as_slice()).context("Failed to load message files")
}

fn get(i18n: &I18n, registry: &LanguageRegistry, matches: &ArgMatches) -> Result<()> {
    let language = matches
        .get_one::<String>("language")
        .context("missing language")?;
    let scopes: Vec<&str> = matches
        .get_many::<String>("scopes")
        .map(|scopes| scopes.map(String::as_str).collect())
        .unwrap_or_default();

    let message = match registry.find(language) {
        Some(key) => i18n.message(key, scopes.as_slice()),
        None => i18n.message_by_string(&language.to_lowercase(), scopes.as_slice()),
    };
    match message {
        Some(text) => {
            println!("{}", text);
            Ok(())
        }
        None => bail!("No message for '{}' at {}", language, scopes.join("/")),
    }
}

fn dump(i18n: &I18n) {
    i18n.walk_records(|language, text, scopes| {
        println!("{}\t{}\t{}", language, scopes.join("/"), text);
    });
}

fn merge(i18n: &I18n, matches: &ArgMatches) -> Result<()> {
    let output = matches
        .get_one::<PathBuf>("output")
        .context("missing output path")?;
    write_json_file(output, i18n)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;
    eprintln!(
        "Wrote {} messages to {}",
        i18n.record_count(),
        output.display()
    );
    Ok(())
}

fn languages(registry: &LanguageRegistry) {
    for (name, key) in registry.languages() {
        let codes: Vec<String> = key
            .variants()
            .iter()
            .map(|(standard, value)| format!("{}={}", standard, value))
            .collect();
        println!("{}\t{}", name, codes.join(", "));
    }
}

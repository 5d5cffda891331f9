use super::render::{
    print_messages, render_config, render_conversion, render_conversion_error, render_entry,
    render_entry_list, render_languages, render_menu,
};
use super::setup::{Cli, Commands, OutputFormat};
use clap::Parser;
use colored::Colorize;
use devkit::api::{CmdResult, ConfigAction, DevkitApi};
use devkit::error::{ConversionError, DevkitError, Result};
use devkit::paths;
use devkit::radix::Radix;
use serde::Serialize;
use serde_json::json;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DEVKIT_LOG";

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let resources = paths::resource_dir()?;
    let mut api = DevkitApi::open(resources, cli.lang.as_deref())?;
    let output = cli.output;

    let outcome = dispatch(&mut api, cli.command, cli.verbose, output);

    // Written back whether or not the command succeeded.
    if let Err(e) = api.persist() {
        warn!(error = %e, "failed to save config");
    }
    outcome
}

fn dispatch(
    api: &mut DevkitApi,
    command: Option<Commands>,
    verbose: bool,
    output: OutputFormat,
) -> Result<ExitCode> {
    match command {
        None => handle_menu(api, output),
        Some(Commands::Convert { number, base }) => match number {
            Some(number) => handle_convert(api, &number, base, output),
            None => handle_convert_stream(api, base, output),
        },
        Some(Commands::Ref { name }) => handle_ref(api, name, output),
        Some(Commands::Lang { code }) => handle_lang(api, code, output),
        Some(Commands::Config { key, value }) => handle_config(api, key, value, output),
        Some(Commands::Init { force }) => handle_init(api, force, verbose, output),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

fn handle_menu(api: &DevkitApi, output: OutputFormat) -> Result<ExitCode> {
    match output {
        OutputFormat::Text => print!("{}", render_menu(api)),
        OutputFormat::Json => print_json(
            &json!({
                "title": api.tr("title"),
                "version": api.config().version,
                "language": api.translations().code(),
                "tools": ["convert", "ref"],
            }),
            true,
        )?,
    }
    Ok(ExitCode::SUCCESS)
}

fn print_conversion(
    api: &DevkitApi,
    result: &CmdResult,
    output: OutputFormat,
    pretty: bool,
) -> Result<()> {
    let Some(conversion) = &result.conversion else {
        return Ok(());
    };
    match output {
        OutputFormat::Text => print!("{}", render_conversion(api, result.source_radix, conversion)),
        OutputFormat::Json => print_json(result, pretty)?,
    }
    Ok(())
}

fn print_conversion_error(
    api: &DevkitApi,
    input: &str,
    error: &ConversionError,
    output: OutputFormat,
) -> Result<()> {
    match output {
        OutputFormat::Text => eprintln!("{}", render_conversion_error(api, error)),
        OutputFormat::Json => print_json(
            &json!({ "input": input.trim(), "error": error.to_string() }),
            false,
        )?,
    }
    Ok(())
}

fn handle_convert(
    api: &DevkitApi,
    number: &str,
    base: Radix,
    output: OutputFormat,
) -> Result<ExitCode> {
    match api.convert(number, base) {
        Ok(result) => {
            print_conversion(api, &result, output, true)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(DevkitError::Conversion(e)) => {
            print_conversion_error(api, number, &e, output)?;
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e),
    }
}

/// One conversion per stdin line. A bad line is reported and the loop goes on.
/// Blank lines are skipped unless stdin is a terminal.
fn handle_convert_stream(api: &DevkitApi, base: Radix, output: OutputFormat) -> Result<ExitCode> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut input = stdin.lock();

    loop {
        if interactive {
            print!("{} ({}): ", api.tr("number-converter.input"), base.name());
            io::stdout().flush()?;
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if !interactive && line.trim().is_empty() {
            continue;
        }

        match api.convert(&line, base) {
            Ok(result) => print_conversion(api, &result, output, false)?,
            Err(DevkitError::Conversion(e)) => print_conversion_error(api, &line, &e, output)?,
            Err(e) => return Err(e),
        }
    }

    if interactive {
        println!();
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_ref(api: &DevkitApi, name: Option<String>, output: OutputFormat) -> Result<ExitCode> {
    match name {
        None => {
            let result = api.list_references()?;
            match output {
                OutputFormat::Text => print!("{}", render_entry_list(api, &result.entries)),
                OutputFormat::Json => print_json(&result.entries, true)?,
            }
        }
        Some(name) => {
            let result = api.describe(&name)?;
            for entry in &result.entries {
                match output {
                    OutputFormat::Text => print!("{}", render_entry(api, entry)),
                    OutputFormat::Json => print_json(entry, true)?,
                }
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_lang(api: &mut DevkitApi, code: Option<String>, output: OutputFormat) -> Result<ExitCode> {
    let result = match code {
        None => {
            let result = api.languages()?;
            if output == OutputFormat::Text {
                print!("{}", render_languages(api, &result.languages));
            }
            result
        }
        Some(code) => {
            let result = api.switch_language(&code)?;
            if output == OutputFormat::Text {
                print_messages(&result.messages);
            }
            result
        }
    };
    if output == OutputFormat::Json {
        print_json(&result, true)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_config(
    api: &mut DevkitApi,
    key: Option<String>,
    value: Option<String>,
    output: OutputFormat,
) -> Result<ExitCode> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = api.config_action(action)?;
    match output {
        OutputFormat::Text => {
            if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
                print!("{}", render_config(config));
            }
            print_messages(&result.messages);
        }
        OutputFormat::Json => print_json(&result, true)?,
    }
    Ok(ExitCode::SUCCESS)
}

fn handle_init(
    api: &mut DevkitApi,
    force: bool,
    verbose: bool,
    output: OutputFormat,
) -> Result<ExitCode> {
    let result = api.init(force)?;
    match output {
        OutputFormat::Text => {
            if verbose {
                for path in &result.written_files {
                    println!("{}", format!("wrote {}", path.display()).dimmed());
                }
            }
            print_messages(&result.messages);
        }
        OutputFormat::Json => print_json(&result, true)?,
    }
    Ok(ExitCode::SUCCESS)
}

//! # Rendering
//!
//! Turns `CmdResult` values into terminal text. Column layout is computed
//! with display widths so Chinese and English labels line up.

use colored::Colorize;
use devkit::api::{CmdMessage, DevkitApi, LanguageListing, MessageLevel};
use devkit::config::AppConfig;
use devkit::error::ConversionError;
use devkit::numeric::Conversion;
use devkit::radix::Radix;
use devkit::reference::LocalizedEntry;
use unicode_width::UnicodeWidthStr;

const INDENT: &str = "  ";
const COLUMN_GAP: usize = 2;

/// Right-pads `s` to `width` display columns.
fn pad_to(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

fn column_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(|s| s.width()).max().unwrap_or(0)
}

/// The start screen: title, version and the tool list.
pub fn render_menu(api: &DevkitApi) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n\n",
        api.tr("title").bold(),
        api.config().version.dimmed()
    ));
    out.push_str(&format!("{}:\n", api.tr("select-tool")));

    let tools = [("convert", api.tr("btn-hex")), ("ref", api.tr("btn-cpp"))];
    let width = column_width(tools.iter().map(|(cmd, _)| *cmd)) + COLUMN_GAP;
    for (cmd, label) in tools {
        out.push_str(&format!("{}{}{}\n", INDENT, pad_to(cmd, width).yellow(), label));
    }
    out.push('\n');
    out.push_str(&format!(
        "{}: {}\n",
        api.tr("lang-selector"),
        api.translations().code()
    ));
    out
}

pub fn render_conversion(api: &DevkitApi, source: Option<Radix>, conversion: &Conversion) -> String {
    let mut out = format!("{}:\n", api.tr("number-converter.results"));
    let width = column_width(Radix::ALL.iter().map(|r| r.name())) + 1 + COLUMN_GAP;
    for radix in Radix::ALL {
        let label = pad_to(&format!("{}:", radix.name()), width);
        let marker = if source == Some(radix) { "*" } else { " " };
        out.push_str(&format!(
            "{}{}{}{}\n",
            INDENT,
            marker.dimmed(),
            label,
            conversion.get(radix).blue().bold()
        ));
    }
    out
}

pub fn render_conversion_error(api: &DevkitApi, error: &ConversionError) -> String {
    let text = match error {
        ConversionError::InvalidDigits {
            radix: Radix::Decimal,
            input,
        } => format!("{}: '{}'", api.tr("number-converter.invalid-input"), input),
        _ => format!("{}: {}", api.tr("number-converter.error"), error),
    };
    text.red().to_string()
}

/// Sorted overview: one line per structure.
pub fn render_entry_list(api: &DevkitApi, entries: &[LocalizedEntry]) -> String {
    let mut out = format!("{}:\n", api.tr("cpp-reference.data-structures"));
    let width = column_width(entries.iter().map(|e| e.name)) + COLUMN_GAP;
    for entry in entries {
        out.push_str(&format!(
            "{}{}{}\n",
            INDENT,
            pad_to(entry.name, width).yellow(),
            entry.description
        ));
    }
    out
}

/// One structure: description followed by the operation table.
pub fn render_entry(api: &DevkitApi, entry: &LocalizedEntry) -> String {
    let fn_heading = api.tr("cpp-reference.functions");
    let desc_heading = api.tr("cpp-reference.description");

    let mut out = format!("{}\n", entry.name.bold());
    out.push_str(&format!("{}{}\n\n", INDENT, entry.description));

    let width = column_width(
        entry
            .operations
            .iter()
            .map(|op| op.signature)
            .chain(std::iter::once(fn_heading)),
    ) + COLUMN_GAP;

    out.push_str(&format!(
        "{}{}{}\n",
        INDENT,
        pad_to(fn_heading, width).underline(),
        desc_heading.underline()
    ));
    for op in &entry.operations {
        out.push_str(&format!(
            "{}{}{}\n",
            INDENT,
            pad_to(op.signature, width).cyan(),
            op.description
        ));
    }
    out
}

pub fn render_languages(api: &DevkitApi, languages: &[LanguageListing]) -> String {
    let mut out = format!("{}:\n", api.tr("lang-selector"));
    for lang in languages {
        let marker = if lang.active { "*" } else { " " };
        let line = format!("{}{} {:<4}{}", INDENT, marker, lang.code, lang.name);
        if lang.active {
            out.push_str(&format!("{}\n", line.green()));
        } else {
            out.push_str(&format!("{}\n", line));
        }
    }
    out
}

pub fn render_config(config: &AppConfig) -> String {
    AppConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}\n", key, value)))
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devkit::numeric::convert;
    use devkit::reference::{describe, Locale};
    use tempfile::TempDir;

    fn english_api() -> (TempDir, DevkitApi) {
        let dir = TempDir::new().unwrap();
        let mut api = DevkitApi::open(dir.path(), None).unwrap();
        api.init(false).unwrap();
        let api = DevkitApi::open(dir.path(), Some("en")).unwrap();
        (dir, api)
    }

    #[test]
    fn test_pad_to_counts_wide_chars() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        assert_eq!(pad_to("描述", 6), "描述  ");
        assert_eq!(pad_to("toolong", 3), "toolong");
    }

    #[test]
    fn test_render_conversion_lists_every_radix() {
        let (_dir, api) = english_api();
        let conversion = convert("1010", Radix::Binary).unwrap();
        let out = render_conversion(&api, Some(Radix::Binary), &conversion);
        assert!(out.starts_with("Results:"));
        for needle in ["Binary:", "Octal:", "Decimal:", "Hexadecimal:", "0o12", "0xa"] {
            assert!(out.contains(needle), "missing {}", needle);
        }
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn test_render_conversion_error_labels() {
        let (_dir, api) = english_api();
        let err = convert("12", Radix::Binary).unwrap_err();
        let out = render_conversion_error(&api, &err);
        assert!(out.contains("Conversion Error: Binary can only contain 0 and 1"));

        let err = convert("1x", Radix::Decimal).unwrap_err();
        assert!(render_conversion_error(&api, &err).contains("Invalid input: '1x'"));
    }

    #[test]
    fn test_render_entry_table() {
        let (_dir, api) = english_api();
        let entry = describe("map").unwrap().localized(Locale::En);
        let out = render_entry(&api, &entry);
        assert!(out.contains("associative container"));
        assert!(out.contains("find(key)"));
        assert!(out.contains("Find the element with a key"));
        assert!(out.contains("Functions"));
    }

    #[test]
    fn test_render_config() {
        let out = render_config(&AppConfig::default());
        assert_eq!(out, "language = zh\nversion = Unknown\n");
    }

    #[test]
    fn test_render_menu_shows_tools() {
        let (_dir, api) = english_api();
        let out = render_menu(&api);
        assert!(out.contains("Developer Toolbox"));
        assert!(out.contains("Number Base Converter"));
        assert!(out.contains("C++ Data Structure Reference"));
    }
}

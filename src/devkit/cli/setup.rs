use clap::{Parser, Subcommand, ValueEnum};
use devkit::radix::Radix;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "1.0.0" for releases, "1.0.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "devkit", bin_name = "devkit", version = get_version())]
#[command(
    about = "Number-base converter and C++ container reference",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this language for this run only (e.g. zh, en)
    #[arg(long, global = true, value_name = "CODE", help_heading = "Options")]
    pub lang: Option<String>,

    /// Output format
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Options"
    )]
    pub output: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a number between binary, octal, decimal and hexadecimal.
    /// Without NUMBER, reads one number per line from stdin.
    #[command(alias = "c")]
    Convert {
        /// The number to convert (use `--` before values like -0x1f)
        #[arg(allow_negative_numbers = true)]
        number: Option<String>,

        /// Number system of the input: binary, octal, decimal, hexadecimal (or 2/8/10/16)
        #[arg(short, long, default_value = "decimal", value_parser = parse_radix)]
        base: Radix,
    },

    /// Show the C++ container reference
    #[command(alias = "reference")]
    Ref {
        /// Structure to describe (vector, list, map, string, array, set)
        name: Option<String>,
    },

    /// List languages, or switch to one
    Lang {
        /// Language code (zh, en)
        code: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (language, version)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Write the default config and language files
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn parse_radix(s: &str) -> Result<Radix, String> {
    s.parse::<Radix>().map_err(|e| e.to_string())
}

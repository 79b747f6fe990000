//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};

/// Loresmith CLI - Draft fictional characters with a text generation service.
#[derive(Debug, Parser)]
#[command(name = "loresmith")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LORESMITH_CONFIG")]
    pub config: Option<String>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tell whether text is a character sheet or plain conversation
    Classify(InputArgs),

    /// Extract character fields from text
    Extract(ExtractArgs),

    /// Chat with the generation service to draft a character
    Chat,

    /// Show a stored character
    Show(ShowArgs),

    /// List stored characters
    List,

    /// Write a stored character out as JSON or as a sheet
    Export(ExportArgs),

    /// Plan how a rendered sheet of the given size splits into A4 pages
    Paginate(PaginateArgs),

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Where text input comes from.
#[derive(Debug, Parser)]
pub struct InputArgs {
    /// Text to read (instead of --file or --stdin)
    pub text: Option<String>,

    /// Read text from a file
    #[arg(long)]
    pub file: Option<String>,

    /// Read text from stdin
    #[arg(long)]
    pub stdin: bool,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Merge over this stored character instead of a blank one
    #[arg(short, long)]
    pub base: Option<String>,

    /// Save the result
    #[arg(short, long)]
    pub save: bool,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Character ID
    pub id: String,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Character ID
    pub id: String,

    /// Export representation
    #[arg(long = "as", value_enum, default_value = "json")]
    pub kind: ExportKind,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,
}

/// Export representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportKind {
    /// The record as JSON
    Json,
    /// The record as a character sheet
    Sheet,
}

/// Arguments for the paginate command.
#[derive(Debug, Parser)]
pub struct PaginateArgs {
    /// Rendered width in pixels
    #[arg(long)]
    pub width: u32,

    /// Rendered height in pixels
    #[arg(long)]
    pub height: u32,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// Generation endpoint URL
        #[arg(short, long)]
        endpoint: String,
        /// Model name
        #[arg(short, long)]
        model: String,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

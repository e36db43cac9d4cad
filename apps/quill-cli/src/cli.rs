//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(about = "Write, score and publish blog posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Blog backend base URL (overrides QUILL_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides QUILL_TIMEOUT_SECS)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Use an in-memory backend instead of the HTTP API
    #[arg(long, global = true)]
    pub demo: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a post's SEO
    Analyze(AnalyzeArgs),

    /// Render a markdown file the way the editor preview does
    Preview {
        /// Markdown file, or `-` for stdin
        file: PathBuf,

        /// Print the source instead of the rendered HTML
        #[arg(long)]
        source: bool,
    },

    /// List the suggested generation prompts
    Prompts,

    /// Generate post content with the AI assistant
    Generate {
        /// Custom prompt
        #[arg(required_unless_present = "suggestion")]
        prompt: Option<String>,

        /// Use suggested prompt N (see `quill prompts`)
        #[arg(long, short = 's', conflicts_with = "prompt", value_name = "N")]
        suggestion: Option<usize>,

        /// Write the generated markdown to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Create and publish a post
    Create(CreateArgs),

    /// List published posts
    Posts,

    /// Show a single post
    Show {
        id: String,

        /// Render the content as HTML
        #[arg(long)]
        html: bool,
    },

    /// Check backend, database and AI service status
    Status,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Markdown file with the post body, or `-` for stdin
    pub content: PathBuf,

    #[arg(long, short = 't', default_value = "")]
    pub title: String,

    /// Meta description; derived from the content when omitted
    #[arg(long, short = 'd')]
    pub description: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(long, short = 't')]
    pub title: String,

    /// Markdown file with the post body, or `-` for stdin
    #[arg(long, short = 'c', value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Generate the body from this prompt instead of reading a file
    #[arg(long, short = 'g', conflicts_with = "content", value_name = "PROMPT")]
    pub generate: Option<String>,

    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,

    #[arg(long, short = 'a')]
    pub author: Option<String>,

    /// URL slug; derived from the title when omitted
    #[arg(long)]
    pub slug: Option<String>,

    /// Validate and print the draft without publishing
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["quill", "posts", "--demo", "--format", "json"]);
        assert!(cli.demo);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Command::Posts));
    }

    #[test]
    fn test_generate_requires_prompt_or_suggestion() {
        assert!(Cli::try_parse_from(["quill", "generate"]).is_err());
        assert!(Cli::try_parse_from(["quill", "generate", "x", "--suggestion", "1"]).is_err());

        let cli = Cli::parse_from(["quill", "generate", "-s", "2"]);
        match cli.command {
            Command::Generate { prompt, suggestion, .. } => {
                assert_eq!(prompt, None);
                assert_eq!(suggestion, Some(2));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_create_args() {
        let cli = Cli::parse_from([
            "quill", "create", "-t", "Hello", "-c", "post.md", "--tags", "a, b", "--dry-run",
        ]);
        let Command::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.title, "Hello");
        assert_eq!(args.content, Some(PathBuf::from("post.md")));
        assert_eq!(args.tags, "a, b");
        assert!(args.dry_run);
        assert!(args.slug.is_none());
    }

    #[test]
    fn test_create_content_and_generate_conflict() {
        let result = Cli::try_parse_from([
            "quill", "create", "-t", "T", "-c", "post.md", "-g", "write",
        ]);
        assert!(result.is_err());
    }
}

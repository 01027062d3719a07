//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "md-render",
    version,
    about = "Render a Markdown document to HTML using a template."
)]
pub struct Cli {
    /// Path to the input Markdown file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output HTML path. [default: the input path with a .html extension]
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// HTML template containing {{CONTENT}} and {{TITLE}} placeholders.
    #[arg(short, long, value_name = "TEMPLATE", default_value = "template.html")]
    pub template: PathBuf,

    /// Title used when the document has no level-1 heading.
    #[arg(long, value_name = "TITLE", default_value = "Document")]
    pub title: String,

    /// Print the rendered page to stdout instead of writing the output file.
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_input_is_given() {
        let cli = Cli::try_parse_from(["md-render", "notes.md"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("notes.md"));
        assert_eq!(cli.output, None);
        assert_eq!(cli.template, PathBuf::from("template.html"));
        assert_eq!(cli.title, "Document");
        assert!(!cli.dry_run);
    }

    #[test]
    fn short_and_long_flags_are_accepted() {
        let cli = Cli::try_parse_from([
            "md-render",
            "in.md",
            "-o",
            "out/page.html",
            "--template",
            "page.tpl",
            "--title",
            "Report",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out/page.html")));
        assert_eq!(cli.template, PathBuf::from("page.tpl"));
        assert_eq!(cli.title, "Report");
    }

    #[test]
    fn missing_input_is_a_usage_error() {
        let err = Cli::try_parse_from(["md-render"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}

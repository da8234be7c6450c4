//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Certificate Service - registration, login and PDF certificates
#[derive(Parser, Debug)]
#[command(name = "certificate-service")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Render a certificate to a local PDF file
    Render(RenderArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_SERVER_HOST, env = "SERVER_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT, env = "PORT")]
    pub port: u16,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Name of the certificate holder
    #[arg(long)]
    pub user_name: String,

    /// Name of the instructor
    #[arg(long)]
    pub instructor_name: String,

    /// Where to write the PDF
    #[arg(short, long, default_value = "certificate.pdf")]
    pub output: PathBuf,

    /// Template to use instead of the configured one
    #[arg(short, long)]
    pub template: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "certificate-service",
            "render",
            "--user-name",
            "Alice Example",
            "--instructor-name",
            "Dr. Bob",
            "-o",
            "/tmp/out.pdf",
        ])
        .unwrap();

        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.user_name, "Alice Example");
                assert_eq!(args.instructor_name, "Dr. Bob");
                assert_eq!(args.output, PathBuf::from("/tmp/out.pdf"));
                assert!(args.template.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_requires_names() {
        let result = Cli::try_parse_from(["certificate-service", "render", "--user-name", "A"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

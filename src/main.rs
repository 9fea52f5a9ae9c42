use clap::{Parser, Subcommand};
use std::path::PathBuf;
use works_pages::{derive, output};

#[derive(Parser)]
#[command(name = "works-pages")]
#[command(about = "Derive the projects, gallery, and media pages from the works template")]
#[command(long_about = "\
Derive the projects, gallery, and media pages from the works template

Reads the works page once and writes three sibling pages, each produced by a
fixed sequence of textual substitutions: page title, navbar (with the page's
own link highlighted), article heading, grid class, optional extra styles,
and a narrowed loader script that shows a single work-item type.

The template must contain the markers the substitutions target:

  <title>My Works - Sridhar Portfolio</title>     title tag
  <nav class=\"navbar\"> ... </nav>                 the two-link works navbar
  <h2 class=\"h2 article-title\">My Works</h2>      article heading
  <div class=\"filter-buttons\"> ... </div>         filter UI (removed)
  class=\"projects-grid\"                           works grid class
  </style>                                        extra-style insertion point
  // Filter Logic ... // Initial Load             filter script (removed)
  // Fetch works ... // Render works              loader (replaced)
  // Auto-trigger project filter on load ... });  load trigger (removed)

A marker missing from the template is a silent no-op by default. Run
'works-pages check' to verify all markers are present without writing
anything, or 'works-pages build --strict' to fail the build on the first
missing marker.")]
#[command(version)]
struct Cli {
    /// Works page template to derive from
    #[arg(long, default_value = "works.html", global = true)]
    source: PathBuf,

    /// Directory the derived pages are written to
    #[arg(long, default_value = ".", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive and write projects.html, gallery.html, and media.html
    Build {
        /// Fail on the first substitution whose marker is missing
        #[arg(long)]
        strict: bool,
    },
    /// Verify every substitution marker without writing pages
    Check {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The one hard failure: an unreadable template aborts the whole run.
    let base = std::fs::read_to_string(&cli.source)?;

    match cli.command {
        Command::Build { strict } => {
            let results = derive::build(&base, &cli.output, strict)?;
            output::print_build_output(&cli.source, &results);
        }
        Command::Check { json } => {
            let results = derive::check(&base);
            let report = output::CheckReport::new(&cli.source, &results);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_check_output(&report);
            }
            if !report.ok {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

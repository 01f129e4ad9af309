use clap::Parser;
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;

#[derive(Parser, Debug)]
#[command(name = "gh-open")]
#[command(about = "Open a git repository's remote hosting page in the browser", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the git repository
    repo: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    // Usage errors exit 1, not clap's default 2
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.use_stderr() {
                eprint!("{}", e);
                std::process::exit(EXIT_FAILURE);
            }
            // --help / --version
            e.exit();
        }
    };

    let remotes = match gh_open::remote::list_remotes(&cli.repo) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    if cli.verbose {
        eprintln!("Found {} remote entries in {}", remotes.len(), cli.repo.display());
        for remote in &remotes {
            eprintln!("  {} {} ({})", remote.name, remote.url, remote.kind);
        }
    }

    let config = gh_open::gitconfig::GitConfig;

    for remote in &remotes {
        match gh_open::mangle::mangle_url(&remote.url, &config) {
            Ok(url) => {
                if cli.verbose {
                    eprintln!("Opening {} (remote:{})", url, remote.name);
                }
                // Best-effort: a missing browser handler is not fatal
                if let Err(e) = gh_open::browser::open_url(&url) {
                    eprintln!("Warning: {}", e);
                }
                println!("{}", url);
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("remote:{}, {}", remote.name, e);
            }
        }
    }

    eprintln!("Error: no such usable remote");
    std::process::exit(EXIT_FAILURE);
}

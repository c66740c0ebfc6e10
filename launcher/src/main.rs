use argh::{EarlyExit, FromArgs};
use query_launcher::{Blocklist, Launcher, LauncherError, SearchQuery, SystemOpener};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the program used to open URLs.
const OPENER_VAR: &str = "QUERY_LAUNCHER_OPENER";

const PROGRAM: &str = "query_launcher";

#[derive(FromArgs, Debug, PartialEq)]
/// Search YouTube for the given words in the default browser.
/// Options are only recognised before the first word; `--` ends them.
struct Cli {
    #[argh(switch, short = 'n')]
    /// print the search URL instead of opening it.
    dry_run: bool,

    #[argh(switch)]
    /// exit with the opener's status when the browser could not be opened.
    strict: bool,

    #[argh(option)]
    /// program to open the URL with instead of the platform default.
    /// Falls back to $QUERY_LAUNCHER_OPENER.
    opener: Option<String>,
}

/// Split `args` into the leading options and the search words.
///
/// Scanning stops at the first argument that is not a known option, so words
/// such as `-5` or `help` reach the query unchanged. A `--` separator is
/// dropped and everything after it is a word.
fn split_options(args: &[String]) -> (Vec<&str>, Vec<&str>) {
    let mut options = Vec::new();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--" => {
                i += 1;
                break;
            }
            "-n" | "--dry-run" | "--strict" | "--help" => options.push(arg),
            "--opener" => {
                options.push(arg);
                if let Some(value) = args.get(i + 1) {
                    options.push(value.as_str());
                    i += 1;
                }
            }
            _ => break,
        }
        i += 1;
    }
    let words = args[i..].iter().map(String::as_str).collect();
    (options, words)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (options, words) = split_options(&args);

    let cli = match Cli::from_args(&[PROGRAM], &options) {
        Ok(cli) => cli,
        Err(EarlyExit { output, status }) => {
            if status.is_err() {
                eprintln!("{}", output);
                std::process::exit(1);
            }
            println!("{}", output);
            return Ok(());
        }
    };

    let query = match SearchQuery::from_words(&words) {
        Ok(q) => q,
        Err(e @ LauncherError::EmptyQuery) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let opener = match cli.opener.or_else(|| std::env::var(OPENER_VAR).ok()) {
        Some(program) if !program.is_empty() => SystemOpener::with_program(program),
        _ => SystemOpener::default(),
    };
    tracing::debug!(platform = ?opener.platform(), "selected url opener");

    let launcher = Launcher::new(Blocklist::default(), opener).dry_run(cli.dry_run);
    let outcome = launcher.run(&query, &mut std::io::stdout(), &mut std::io::stderr())?;

    let code = outcome.exit_code(cli.strict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

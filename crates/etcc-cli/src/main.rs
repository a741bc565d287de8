use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use etcc_core::category::{PathClassifier, OTHERS_CATEGORY};
use etcc_core::config::Config;
use etcc_core::detector::DetectorRegistry;
use etcc_core::report::{to_json_pretty, write_report};
use etcc_core::{ClassificationEngine, EtccError, FileRecord, Result, Walker};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);

    let result = match cli.command {
        Some(Commands::Classify {
            root,
            output,
            stdout,
            exclude,
        }) => handle_classify(&base_dir, root, output, stdout, &exclude, cli.quiet),
        Some(Commands::Categories) => {
            handle_categories();
            Ok(())
        }
        Some(Commands::Which { paths }) => {
            handle_which(&paths);
            Ok(())
        }
        Some(Commands::Identify { files }) => {
            handle_identify(&files);
            Ok(())
        }
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_env("ETCC_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("ETCC_BASE") {
        return PathBuf::from(base);
    }

    Config::default_base_dir()
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "etcc", &mut io::stdout());
}

fn handle_classify(
    base_dir: &Path,
    root: Option<PathBuf>,
    output: Option<PathBuf>,
    stdout: bool,
    exclude: &[String],
    quiet: bool,
) -> Result<()> {
    let config = Config::load(base_dir)?;
    let root = root.unwrap_or(config.scan.root);
    let output = output.unwrap_or(config.scan.output);

    let mut patterns = config.scan.exclude;
    patterns.extend(exclude.iter().cloned());

    let walker = Walker::new(&root)?.with_excludes(patterns.as_slice())?;
    let result = ClassificationEngine::builtin().run_with(&walker);

    if stdout {
        println!("{}", to_json_pretty(&result)?);
        return Ok(());
    }

    write_report(&result, &output)?;

    if !quiet {
        println!();
        for (category, count) in result.counts() {
            let count = format!("{:>6}", count);
            if category == OTHERS_CATEGORY {
                println!("{}  {}", count.yellow(), category.dimmed());
            } else {
                println!("{}  {}", count.cyan(), category);
            }
        }
        println!();
        println!(
            "{} {} ({} files from {})",
            "Saved:".green(),
            output.display(),
            result.total_files(),
            walker.root().display()
        );
    }

    Ok(())
}

fn handle_categories() {
    let rules = PathClassifier::builtin().rules();
    for (index, rule) in rules.iter().enumerate() {
        println!("{:>2}. {}", index + 1, rule.name.bold());
        println!("    {}", rule.patterns.join(" ").dimmed());
    }
    println!("{:>2}. {}", rules.len() + 1, OTHERS_CATEGORY.bold());
    println!("    {}", "(no pattern matched)".dimmed());
}

fn handle_which(paths: &[String]) {
    let classifier = PathClassifier::builtin();
    for path in paths {
        println!("{}\t{}", classifier.classify(path).cyan(), path);
    }
}

fn handle_identify(files: &[PathBuf]) {
    let registry = DetectorRegistry::builtin();
    for file in files {
        if !file.is_file() {
            eprintln!(
                "{} not a regular file: {}",
                "[WARN]".yellow().bold(),
                file.display()
            );
            continue;
        }
        let record = FileRecord::with_labels(file.to_string_lossy(), registry.identify(file));
        println!("{}", record);
    }
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(EtccError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

use std::{io, path::PathBuf};

use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use itertools::Itertools;
use serde::Serialize;

use crate::{
    app, catalog,
    constants::{APP_NAME, MARKS},
    display,
    domain::{Accent, Category, Checklist, Denomination, ItemId, StyleTag},
    error::AppError,
    logging::{self, LogTarget},
    paths,
};

#[derive(Parser, Debug)]
#[command(name = "tickoff")]
#[command(about = "Denomination checklist for the terminal", long_about = None)]
pub struct Cli {
    #[arg(short, long, action = ArgAction::Count, global = true, help = "Verbosity (-v, -vv, -vvv)")]
    verbose: u8,

    #[arg(long, global = true, help = "Write logs to this file instead of the default")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    #[command(about = "Open the interactive checklist (default)")]
    Ui,

    #[command(about = "Print the checklist in display order")]
    Show {
        #[arg(long, help = "Print JSON instead of text")]
        json: bool,

        #[arg(long, short, help = "Only show this category")]
        category: Option<String>,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Debug, Serialize)]
struct ItemExport<'a> {
    id: &'a ItemId,
    value: Denomination,
    label: String,
    style: StyleTag,
    checked: bool,
}

#[derive(Debug, Serialize)]
struct CategoryExport<'a> {
    name: &'a str,
    color: Accent,
    items: Vec<ItemExport<'a>>,
}

#[derive(Debug, Serialize)]
struct ChecklistExport<'a> {
    categories: Vec<CategoryExport<'a>>,
}

fn selected_categories<'a>(
    checklist: &'a Checklist,
    name: Option<&str>,
) -> Result<Vec<&'a Category>, AppError> {
    match name {
        None => Ok(checklist.categories().iter().collect()),
        Some(name) => checklist
            .categories()
            .iter()
            .find(|category| category.name == name)
            .map(|category| vec![category])
            .ok_or_else(|| AppError::UnknownCategory(name.to_string())),
    }
}

fn export<'a>(categories: &[&'a Category]) -> ChecklistExport<'a> {
    ChecklistExport {
        categories: categories
            .iter()
            .map(|category| CategoryExport {
                name: &category.name,
                color: category.accent,
                items: display::sort_for_display(&category.items)
                    .into_iter()
                    .map(|item| ItemExport {
                        id: &item.id,
                        value: item.value,
                        label: display::format_display(&item.value),
                        style: item.style(),
                        checked: item.checked,
                    })
                    .collect(),
            })
            .collect(),
    }
}

fn render_text(categories: &[&Category]) -> String {
    let mut text = String::new();
    for category in categories {
        let items = display::sort_for_display(&category.items)
            .into_iter()
            .map(|item| {
                let mark = if item.checked {
                    MARKS.checked
                } else {
                    MARKS.unchecked
                };
                let blue = if item.style() == StyleTag::Blue { "*" } else { "" };
                format!("{} {}{}", mark, display::format_display(&item.value), blue)
            })
            .join("  ");
        text.push_str(&format!("{}\n  {}\n", category.name, items));
    }
    text.push_str("(* blue)\n");
    text
}

pub fn show(json: bool, category: Option<&str>) -> Result<(), AppError> {
    let checklist = catalog::build()?;
    let categories = selected_categories(&checklist, category)?;

    if json {
        let json = serde_json::to_string_pretty(&export(&categories))?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&categories));
    }
    Ok(())
}

pub fn print_completions(shell: &str) -> Result<(), AppError> {
    use clap_complete::Shell;
    let shell = match shell {
        "bash" => Shell::Bash,
        "zsh" => Shell::Zsh,
        "fish" => Shell::Fish,
        _ => return Err(AppError::UnsupportedShell(shell.to_string())),
    };
    clap_complete::generate(shell, &mut Cli::command(), APP_NAME, &mut io::stdout());
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    let command = cli.command.unwrap_or(Command::Ui);

    match command {
        Command::Ui => {
            init_ui_logging(cli.verbose, cli.log_file);
            app::run_ui(catalog::build()?)
        }
        Command::Show { json, category } => {
            logging::setup_logging(cli.verbose, stderr_or_file(cli.log_file))?;
            show(json, category.as_deref())
        }
        Command::Completions { shell } => print_completions(&shell),
    }
}

/// Logging is optional for the interactive UI: a log file that cannot be opened
/// is reported once on stderr, before raw mode, and the UI starts without it.
fn init_ui_logging(verbosity: u8, log_file: Option<PathBuf>) -> bool {
    let log_path = log_file.unwrap_or_else(paths::default_log_path);
    match logging::setup_logging(verbosity, LogTarget::File(log_path)) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: {}; continuing without logs", e);
            false
        }
    }
}

fn stderr_or_file(path: Option<PathBuf>) -> LogTarget {
    path.map_or(LogTarget::Stderr, LogTarget::File)
}

pub fn run_cli() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_parse_defaults_to_ui() {
        let cli = Cli::try_parse_from(["tickoff"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_show_flags() {
        let cli = Cli::try_parse_from(["tickoff", "-vv", "show", "--json", "-c", "Busy"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Show { json, category }) => {
                assert!(json);
                assert_eq!(category.as_deref(), Some("Busy"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category() {
        let checklist = catalog::build().unwrap();
        assert!(matches!(
            selected_categories(&checklist, Some("pepsi")),
            Err(AppError::UnknownCategory(_))
        ));
        assert_eq!(selected_categories(&checklist, None).unwrap().len(), 5);
    }

    #[test]
    fn test_render_text_busy() {
        let checklist = catalog::build().unwrap();
        let busy = selected_categories(&checklist, Some("Busy")).unwrap();
        let text = render_text(&busy);

        assert!(text.starts_with("Busy\n  [ ] $40  [ ] $32"));
        assert!(text.contains("[ ] $1*  [ ] delete*  [ ] double\n"));
    }

    #[test]
    fn test_export_json_shape() {
        let checklist = catalog::build().unwrap().toggle(4, &ItemId::new("pepsi-big-50"));
        let pepsi = selected_categories(&checklist, Some("PEPSI")).unwrap();
        let value = serde_json::to_value(export(&pepsi)).unwrap();

        let category = &value["categories"][0];
        assert_eq!(category["name"], "PEPSI");
        assert_eq!(category["color"], "blue");
        assert_eq!(category["items"][0]["id"], "pepsi-big-500");
        assert_eq!(category["items"][0]["value"], 500);
        assert_eq!(category["items"][2]["label"], "$50");
        assert_eq!(category["items"][2]["style"], "blue");
        assert_eq!(category["items"][2]["checked"], true);
    }

    #[test]
    fn test_ui_starts_without_writable_log_file() {
        let path = PathBuf::from("/proc/tickoff-missing/tickoff.log");
        assert!(!init_ui_logging(0, Some(path)));
    }

    #[test]
    fn test_unsupported_shell() {
        assert!(matches!(
            print_completions("tcsh"),
            Err(AppError::UnsupportedShell(_))
        ));
    }
}

#![warn(
    unused_qualifications,
    single_use_lifetimes,
    clippy::uninlined_format_args,
    clippy::semicolon_if_nothing_returned,
    clippy::redundant_closure_for_method_calls
)]

mod args;

use {
    anyhow::{bail, Context},
    args::{Args, Commands},
    clap::Parser,
    deckshelf::{
        application::{Application, EditSession},
        clipboard::SystemClipboard,
        color::{ColorSet, Swatch},
        deck::Deck,
        paths,
        share::Desktop,
    },
    std::io::{self, BufRead, IsTerminal, Read, Write},
};

fn try_main() -> anyhow::Result<()> {
    let args = Args::parse();
    let path = paths::deck_file(args.data_dir.as_deref())?;
    let mut app = Application::open(path);
    match args.command {
        Commands::List { tags, colors } => {
            if !tags.is_empty() || colors.is_some() {
                app.filter.set_active(true);
                app.filter.tags.extend(tags);
                app.filter.colors = colors.unwrap_or_default();
            }
            for deck in app.visible_decks() {
                print_summary(deck);
            }
        }
        Commands::Tags => {
            for tag in app.tags() {
                println!("{tag}");
            }
        }
        Commands::Show { id } => {
            let Some(deck) = app.store.get(id) else {
                bail!("No deck with id {id}");
            };
            print_summary(deck);
            println!();
            println!("{}", deck.contents);
        }
        Commands::Import {
            stdin,
            name,
            colors,
            tags,
        } => {
            let session = if stdin {
                app.import_text(read_stdin()?)
            } else {
                let mut clipboard = SystemClipboard::new()?;
                match app.import_from_clipboard(&mut clipboard) {
                    Some(session) => session,
                    None => bail!("There is no text on the clipboard"),
                }
            };
            apply_fields(session, name, colors, &tags, &[]);
            commit(&mut app)?;
        }
        Commands::Edit {
            id,
            name,
            colors,
            add_tag,
            remove_tag,
            contents_stdin,
        } => {
            let contents = if contents_stdin {
                Some(read_stdin()?)
            } else {
                None
            };
            let Some(session) = app.begin_edit(id) else {
                bail!("No deck with id {id}");
            };
            apply_fields(session, name, colors, &add_tag, &remove_tag);
            if let Some(contents) = contents {
                session.set_contents(contents);
            }
            commit(&mut app)?;
        }
        Commands::Delete { id, yes } => {
            let name = app.request_delete(id).to_owned();
            if app.store.get(id).is_none() {
                bail!("No deck with id {id}");
            }
            if yes || confirm(&format!("Delete {name}?"))? {
                app.confirm_delete()?;
            } else {
                app.cancel_delete();
            }
        }
        Commands::Export { id, stdout } => {
            if stdout {
                app.share_deck(id, &mut Desktop { out: io::stdout() })?;
            } else {
                let mut clipboard = SystemClipboard::new()?;
                app.copy_contents(id, &mut clipboard)?;
            }
        }
        Commands::Share { id } => {
            let mut desktop = Desktop { out: io::stdout() };
            match id {
                Some(id) => app.share_deck(id, &mut desktop)?,
                None => app.share_collection(&mut desktop)?,
            }
        }
        Commands::Path => println!("{}", app.store.path().display()),
    }
    Ok(())
}

fn apply_fields(
    session: &mut EditSession,
    name: Option<String>,
    colors: Option<ColorSet>,
    add_tags: &[String],
    remove_tags: &[String],
) {
    if let Some(name) = name {
        session.set_name(name);
    }
    if let Some(colors) = colors {
        session.set_colors(colors);
    }
    for tag in add_tags {
        session.add_tag(tag);
    }
    for tag in remove_tags {
        session.remove_tag(tag);
    }
}

fn commit(app: &mut Application) -> anyhow::Result<()> {
    if let Some(id) = app.commit_edit().context("Deck was kept, but not saved")? {
        println!("Saved deck {id}");
    }
    Ok(())
}

fn print_summary(deck: &Deck) {
    let name = if deck.name.is_empty() {
        "(unnamed)"
    } else {
        deck.name.as_str()
    };
    let colors = colors_column(deck.colors, io::stdout().is_terminal());
    let tags = deck.sorted_tags();
    if tags.is_empty() {
        println!("{:>4}  {colors}  {name}", deck.id);
    } else {
        println!("{:>4}  {colors}  {name}  [{}]", deck.id, tags.join(", "));
    }
}

/// Color symbols padded to a fixed width, each drawn in its swatch on a terminal
fn colors_column(colors: ColorSet, styled: bool) -> String {
    const WIDTH: usize = 6;
    if !styled || colors.is_empty() {
        return format!("{:<WIDTH$}", colors.to_string());
    }
    let mut out = String::new();
    for color in colors.colors() {
        out.push_str(&format!(
            "\x1b[{}m{}\x1b[0m",
            ansi_code(color.flag().swatch()),
            color.symbol()
        ));
    }
    let used = colors.colors().count();
    out.extend(std::iter::repeat(' ').take(WIDTH - used));
    out
}

fn ansi_code(swatch: Swatch) -> &'static str {
    match swatch {
        Swatch::Yellow => "33",
        Swatch::Blue => "34",
        Swatch::Gray => "90",
        Swatch::Red => "31",
        Swatch::Green => "32",
        Swatch::White => "97",
        Swatch::Brown => "38;5;130",
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read standard input")?;
    Ok(buf)
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn main() {
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

#[test]
fn colors_column_keeps_its_width() {
    assert_eq!(colors_column(ColorSet::WHITE | ColorSet::BLUE, false), "WU    ");
    assert_eq!(colors_column(ColorSet::NONE, true), "-     ");
    let styled = colors_column(ColorSet::RED, true);
    assert_eq!(styled, "\x1b[31mR\x1b[0m     ");
}

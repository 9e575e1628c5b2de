use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use fieldguide::config::AppConfig;
use fieldguide::core::catalog::types::{Category, Scope};
use fieldguide::core::guide::FieldGuide;

/// One parsed console line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Search { scope: Scope, query: &'a str },
    Browse(&'a str),
    Detail(&'a str),
    Reload,
    Help,
    Quit,
    Blank,
}

fn parse_line(line: &str) -> Command<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Blank;
    }

    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    match head.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "help" | "?" => Command::Help,
        "reload" => Command::Reload,
        "browse" => Command::Browse(rest),
        "detail" => Command::Detail(rest),
        _ => {
            // `scope: query` narrows the search; anything else is a query.
            let (scope, query) = match trimmed.split_once(':') {
                Some((prefix, tail)) => match Scope::from_name(prefix) {
                    Some(scope) => (scope, tail.trim()),
                    None => (Scope::All, trimmed),
                },
                None => (Scope::All, trimmed),
            };
            if query.is_empty() {
                Command::Blank
            } else {
                Command::Search { scope, query }
            }
        }
    }
}

fn print_help() {
    println!("commands:");
    println!("  <query>              search all categories");
    println!("  <scope>: <query>     search one category (bugs, animals, plants)");
    println!("  browse <category>    list images for a category");
    println!("  detail <image-path>  show details for an image");
    println!("  reload               reload the keyword index");
    println!("  quit                 exit");
}

async fn run_search(guide: &FieldGuide, query: &str, scope: Scope) {
    match guide.search(query, scope).await {
        Ok(hits) if hits.is_empty() => println!("no matches"),
        Ok(hits) => {
            for (rank, hit) in hits.iter().enumerate() {
                println!(
                    "{:2}. {} [{}] score {}",
                    rank + 1,
                    hit.keyword,
                    hit.category,
                    hit.score
                );
                if let Some(image) = &hit.image {
                    println!("    {}", image);
                }
            }
        }
        Err(e) => println!("keyword index unavailable: {}", e),
    }
}

async fn run_browse(guide: &FieldGuide, name: &str) {
    if name.is_empty() {
        println!("usage: browse <category>");
        return;
    }
    let Some(category) = Category::from_name(name) else {
        println!("unknown category '{}' (bugs, animals, plants)", name);
        return;
    };
    let items = guide.gallery(category).await;
    if items.is_empty() {
        println!("no images found for {}", category);
        return;
    }
    for item in items {
        println!("{}", item.label.replace('\n', " "));
        println!("    {}", item.path);
    }
}

async fn run_detail(guide: &FieldGuide, path: &str) {
    if path.is_empty() {
        println!("usage: detail <image-path>");
        return;
    }
    let Some(found) = guide.detail_for_image(path).await else {
        println!("no details found for {}", path);
        return;
    };
    println!("{}", found.name);
    for section in &found.entry.sections {
        println!("\n[{}]", section.name);
        for item in &section.items {
            println!("- {}", item.title);
            for paragraph in item.paragraphs() {
                println!("    {}", paragraph);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let _log_guard = fieldguide::core::logging::init();
    log::info!("Field Guide v{} starting", fieldguide::VERSION);

    let config = AppConfig::load();
    let guide = FieldGuide::new(&config);

    println!("Field Guide v{}", fieldguide::VERSION);
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("guide> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };

        match parse_line(&line) {
            Command::Blank => println!("enter a search term"),
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Reload => match guide.reload_index().await {
                Ok(count) => println!("index reloaded: {} entries", count),
                Err(e) => println!("keyword index unavailable: {}", e),
            },
            Command::Browse(name) => run_browse(&guide, name).await,
            Command::Detail(path) => run_detail(&guide, path).await,
            Command::Search { scope, query } => run_search(&guide, query, scope).await,
        }
    }

    log::info!("Field Guide shutting down");
    Ok(())
}

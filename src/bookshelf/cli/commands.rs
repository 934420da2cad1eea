//! # CLI Dispatch
//!
//! `run()` parses flags, builds the API over a [`FileStore`], calls exactly
//! one API method and prints the result. Errors go back to `main`, which
//! prints them and exits non-zero.

use super::logging;
use super::render::{
    print_messages, render_book_detail, render_book_list, render_json, use_color,
};
use super::setup::{Action, Cli};
use bookshelf::api::BookshelfApi;
use bookshelf::config::BookshelfConfig;
use bookshelf::error::{BookshelfError, Result};
use bookshelf::model::{BookDraft, BookPatch, Price};
use bookshelf::store::fs::FileStore;
use clap::Parser;
use tracing::debug;

struct AppContext {
    api: BookshelfApi<FileStore>,
    json: bool,
    color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.action() {
        Action::List => handle_list(&ctx),
        Action::Get => handle_get(&ctx, require_id(&cli)?),
        Action::Add => handle_add(&mut ctx, &cli),
        Action::Update => handle_update(&mut ctx, &cli),
        Action::Delete => handle_delete(&mut ctx, require_id(&cli)?),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match cli.config.clone().or_else(BookshelfConfig::default_path) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            BookshelfConfig::load(&path)?
        }
        None => BookshelfConfig::default(),
    };

    let data_file = config.resolve_data_file(cli.file.as_deref());
    debug!(file = %data_file.display(), "using catalog file");
    let store = FileStore::new(data_file).with_create_if_missing(config.create_if_missing);

    Ok(AppContext {
        api: BookshelfApi::new(store),
        json: cli.json,
        color: use_color(),
    })
}

fn require_id(cli: &Cli) -> Result<&str> {
    cli.id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| BookshelfError::Validation("--id is required for this action".into()))
}

/// A blank `--price` counts as not given.
fn parse_price(raw: Option<&str>) -> Result<Option<Price>> {
    raw.filter(|s| !s.trim().is_empty())
        .map(str::parse::<Price>)
        .transpose()
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_books()?;
    let output = if ctx.json {
        render_json(&result.listed_books)?
    } else {
        render_book_list(&result.listed_books, ctx.color)
    };
    print!("{}", output);
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.get_book(id)?;
    for book in &result.listed_books {
        let output = if ctx.json {
            render_json(book)?
        } else {
            render_book_detail(book, ctx.color)
        };
        print!("{}", output);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, cli: &Cli) -> Result<()> {
    let draft = BookDraft {
        id: cli.id.clone(),
        title: cli.title.clone(),
        author: cli.author.clone(),
        price: parse_price(cli.price.as_deref())?,
        image_url: cli.image_url.clone(),
    };
    let result = ctx.api.add_book(draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, cli: &Cli) -> Result<()> {
    let id = require_id(cli)?;
    let patch = BookPatch::new(
        cli.title.clone(),
        cli.author.clone(),
        parse_price(cli.price.as_deref())?,
        cli.image_url.clone(),
    );
    let result = ctx.api.update_book(id, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete_book(id)?;
    print_messages(&result.messages);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_treats_blank_as_absent() {
        assert_eq!(parse_price(None).unwrap(), None);
        assert_eq!(parse_price(Some("  ")).unwrap(), None);
    }

    #[test]
    fn test_parse_price_rejects_text() {
        assert!(matches!(
            parse_price(Some("ten")),
            Err(BookshelfError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_price_reads_decimal() {
        assert_eq!(parse_price(Some("3.5")).unwrap().unwrap().value(), 3.5);
    }
}

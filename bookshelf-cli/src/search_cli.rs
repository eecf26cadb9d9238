//! One-shot search and list commands

use anyhow::Result;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use bookshelf_core::catalog::{Book, SearchService};

/// Table row for search results
#[derive(Tabled)]
struct BookRow {
    #[tabled(rename = "ID")]
    id: u32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Year")]
    year: i32,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.publication_year,
        }
    }
}

pub fn execute_search(service: &SearchService, keyword: &str, json_output: bool) -> Result<()> {
    let results = service.search_books(Some(keyword));
    print_results(&results, json_output)
}

pub fn execute_list(service: &SearchService, json_output: bool) -> Result<()> {
    let results = service.list_all();
    print_results(&results, json_output)
}

fn print_results(results: &[&Book], json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", render_json(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No books found.");
        return Ok(());
    }

    println!("Found {} book(s):\n", results.len());
    println!("{}", render_table(results));
    Ok(())
}

fn render_json(results: &[&Book]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}

fn render_table(results: &[&Book]) -> String {
    let rows: Vec<BookRow> = results.iter().map(|book| BookRow::from(*book)).collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

//! # Seed Data Generator
//!
//! Writes a sample catalogue to the book store for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./biblioteca.txt (refuses if it already has records)
//! cargo run -p biblio-store --bin seed
//!
//! # Specify store path
//! cargo run -p biblio-store --bin seed -- --store ./data/biblioteca.txt
//!
//! # Overwrite an existing catalogue
//! cargo run -p biblio-store --bin seed -- --force
//! ```
//!
//! The catalogue mixes available and exhausted titles so every lending
//! outcome can be tried from the client right away.

use std::env;

use biblio_core::Book;
use biblio_store::{BookStore, StoreConfig, DEFAULT_STORE_PATH};

/// (isbn, title, author, total, borrowed)
const CATALOGUE: &[(&str, &str, &str, i64, i64)] = &[
    ("9780134685991", "Effective Java", "Joshua Bloch", 5, 2),
    ("9781492078005", "Designing Data-Intensive Applications", "Martin Kleppmann", 3, 0),
    ("9780132350884", "Clean Code", "Robert C. Martin", 4, 4),
    ("9780201633610", "Design Patterns", "Erich Gamma", 2, 1),
    ("9781593278281", "The Rust Programming Language", "Steve Klabnik", 6, 0),
    ("9780262033848", "Introduction to Algorithms", "Thomas H. Cormen", 3, 3),
    ("9780131103627", "The C Programming Language", "Brian W. Kernighan", 2, 0),
    ("9780596007126", "Head First Design Patterns", "Eric Freeman", 1, 0),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut store_path = String::from(DEFAULT_STORE_PATH);
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--store" | "-s" => {
                if i + 1 < args.len() {
                    store_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Biblio Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -s, --store <PATH>  Store file path (default: ./{})", DEFAULT_STORE_PATH);
                println!("  -f, --force         Overwrite an existing catalogue");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
        i += 1;
    }

    println!("📚 Biblio Seed Data Generator");
    println!("=============================");
    println!("Store: {}", store_path);
    println!();

    let store = BookStore::open(StoreConfig::new(&store_path)).await?;
    println!("✓ Store opened");

    let session = store.lock().await;

    let existing = session.load().await?;
    if !existing.is_empty() && !force {
        println!("⚠ Store already has {} books", existing.len());
        println!("  Skipping seed to avoid overwriting loans.");
        println!("  Pass --force to replace the catalogue.");
        return Ok(());
    }

    let books = CATALOGUE
        .iter()
        .map(|&(isbn, title, author, total, borrowed)| Book::new(isbn, title, author, total, borrowed))
        .collect::<Result<Vec<_>, _>>()?;

    session.save(&books).await?;

    println!();
    for book in &books {
        println!(
            "  {} {:<40} {}/{} available",
            book.isbn(),
            book.title(),
            book.available(),
            book.total()
        );
    }

    println!();
    println!("✓ Seeded {} books", books.len());

    Ok(())
}

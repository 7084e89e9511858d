//! # Biblio Client
//!
//! Interactive menu against a running Biblio server.
//!
//! ## Usage
//! ```bash
//! cargo run -p biblio-server --bin client
//! BIBLIO_SERVER_URL=http://10.0.0.5:50051 cargo run -p biblio-server --bin client
//! ```

use biblio_core::validation;
use biblio_server::proto::lending_service_client::LendingServiceClient;
use biblio_server::proto::{BorrowByIdRequest, BorrowByTitleRequest, QueryRequest, ReturnRequest};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tonic::transport::Channel;
use tonic::Status;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:50051";

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let url = std::env::var("BIBLIO_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

    println!("📚 Biblio Client");
    println!("================");
    println!("Server: {}", url);

    let mut client = LendingServiceClient::connect(url).await?;
    println!("✓ Connected");

    let mut input = BufReader::new(io::stdin()).lines();

    loop {
        println!();
        println!("1) Query book by ISBN");
        println!("2) Borrow book by ISBN");
        println!("3) Borrow book by title");
        println!("4) Return book by ISBN");
        println!("0) Exit");

        let Some(choice) = prompt(&mut input, "Choose an option: ").await? else {
            break;
        };

        match choice.as_str() {
            "1" => query(&mut client, &mut input).await?,
            "2" => borrow_by_id(&mut client, &mut input).await?,
            "3" => borrow_by_title(&mut client, &mut input).await?,
            "4" => return_by_id(&mut client, &mut input).await?,
            "0" => break,
            _ => println!("Invalid option."),
        }
    }

    println!("Goodbye.");
    Ok(())
}

/// Prints `label` and reads one trimmed line. `None` on end of input.
async fn prompt(input: &mut Input, label: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    stdout.write_all(label.as_bytes()).await?;
    stdout.flush().await?;

    Ok(input.next_line().await?.map(|line| line.trim().to_string()))
}

/// Reads a non-blank ISBN, or reports the blank input.
async fn read_isbn(input: &mut Input) -> io::Result<Option<String>> {
    let line = prompt(input, "ISBN: ").await?.unwrap_or_default();
    match validation::require_isbn(&line) {
        Ok(isbn) => Ok(Some(isbn.to_string())),
        Err(_) => {
            println!("ISBN cannot be empty.");
            Ok(None)
        }
    }
}

fn report(status: Status) {
    println!("✗ [{:?}] {}", status.code(), status.message());
}

async fn query(client: &mut LendingServiceClient<Channel>, input: &mut Input) -> io::Result<()> {
    let Some(isbn) = read_isbn(input).await? else {
        return Ok(());
    };

    match client.query_by_id(QueryRequest { isbn }).await {
        Ok(resp) => {
            let book = resp.into_inner();
            println!("✓ {}", book.message);
            println!("  ISBN:      {}", book.isbn);
            println!("  Title:     {}", book.title);
            println!("  Author:    {}", book.author);
            println!("  Total:     {}", book.total);
            println!("  Borrowed:  {}", book.borrowed);
            println!("  Available: {}", book.available);
        }
        Err(status) => report(status),
    }
    Ok(())
}

async fn borrow_by_id(client: &mut LendingServiceClient<Channel>, input: &mut Input) -> io::Result<()> {
    let Some(isbn) = read_isbn(input).await? else {
        return Ok(());
    };

    match client.borrow_by_id(BorrowByIdRequest { isbn }).await {
        Ok(resp) => {
            let loan = resp.into_inner();
            println!("✓ {}", loan.message);
            println!("  Due date:  {}", loan.due_date);
            println!("  Remaining: {}", loan.remaining_available);
        }
        Err(status) => report(status),
    }
    Ok(())
}

async fn borrow_by_title(client: &mut LendingServiceClient<Channel>, input: &mut Input) -> io::Result<()> {
    let line = prompt(input, "Title: ").await?.unwrap_or_default();
    let title = match validation::require_title(&line) {
        Ok(title) => title.to_string(),
        Err(_) => {
            println!("Title cannot be empty.");
            return Ok(());
        }
    };

    match client.borrow_by_title(BorrowByTitleRequest { title }).await {
        Ok(resp) => {
            let loan = resp.into_inner();
            println!("✓ {}", loan.message);
            println!("  Due date:  {}", loan.due_date);
            println!("  Remaining: {}", loan.remaining_available);
        }
        Err(status) => report(status),
    }
    Ok(())
}

async fn return_by_id(client: &mut LendingServiceClient<Channel>, input: &mut Input) -> io::Result<()> {
    let Some(isbn) = read_isbn(input).await? else {
        return Ok(());
    };

    match client.return_by_id(ReturnRequest { isbn }).await {
        Ok(resp) => {
            let returned = resp.into_inner();
            println!("✓ {}", returned.message);
            println!("  Available: {}", returned.available);
        }
        Err(status) => report(status),
    }
    Ok(())
}

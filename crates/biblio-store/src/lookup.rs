//! # Record Lookup
//!
//! Finding a book inside a loaded collection.
//!
//! ## Matching Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  find_by_id("9780134685991")     trimmed, case-insensitive, exact      │
//! │  find_by_title(" clean code ")   trimmed, case-insensitive, exact      │
//! │                                                                         │
//! │  Titles are not unique: the FIRST record in file order wins.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use biblio_core::Book;

/// Finds a book by identifier.
pub fn find_by_id<'a>(books: &'a [Book], isbn: &str) -> Option<&'a Book> {
    books.iter().find(|book| book.matches_isbn(isbn))
}

/// Mutable variant of [`find_by_id`], for use inside a write session.
pub fn find_by_id_mut<'a>(books: &'a mut [Book], isbn: &str) -> Option<&'a mut Book> {
    books.iter_mut().find(|book| book.matches_isbn(isbn))
}

/// Finds a book by exact title. First match in file order wins.
pub fn find_by_title<'a>(books: &'a [Book], title: &str) -> Option<&'a Book> {
    books.iter().find(|book| book.matches_title(title))
}

/// Mutable variant of [`find_by_title`], for use inside a write session.
pub fn find_by_title_mut<'a>(books: &'a mut [Book], title: &str) -> Option<&'a mut Book> {
    books.iter_mut().find(|book| book.matches_title(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Vec<Book> {
        vec![
            Book::new("9780134685991", "Effective Java", "Joshua Bloch", 5, 2).unwrap(),
            Book::new("9781492078005", "Designing Data-Intensive Applications", "Martin Kleppmann", 3, 0).unwrap(),
            Book::new("9780132350884", "Clean Code", "Robert C. Martin", 4, 4).unwrap(),
            Book::new("9780000000001", "clean code", "Someone Else", 1, 0).unwrap(),
        ]
    }

    #[test]
    fn test_find_by_id() {
        let books = catalogue();
        let found = find_by_id(&books, "9780134685991").unwrap();
        assert_eq!(found.title(), "Effective Java");

        assert!(find_by_id(&books, " 9780134685991 ").is_some());
        assert!(find_by_id(&books, "0000000000000").is_none());
    }

    #[test]
    fn test_find_by_title_case_insensitive() {
        let books = catalogue();
        assert_eq!(find_by_title(&books, "Effective Java").unwrap().isbn(), "9780134685991");
        assert!(find_by_title(&books, "EFFECTIVE JAVA").is_some());
        assert!(find_by_title(&books, "Libro Inexistente").is_none());
    }

    #[test]
    fn test_duplicate_title_first_match_wins() {
        let books = catalogue();
        let found = find_by_title(&books, "CLEAN CODE").unwrap();
        assert_eq!(found.isbn(), "9780132350884");
    }

    #[test]
    fn test_mut_lookup_updates_in_place() {
        let mut books = catalogue();
        find_by_id_mut(&mut books, "9780134685991")
            .unwrap()
            .borrow_one()
            .unwrap();
        assert_eq!(books[0].borrowed(), 3);

        find_by_title_mut(&mut books, "clean code")
            .unwrap()
            .return_one()
            .unwrap();
        assert_eq!(books[2].borrowed(), 3);
        assert_eq!(books[3].borrowed(), 0);
    }
}

use tokio::sync::RwLock;

use super::models::{Book, Review};
use super::seed::seed_catalog;
use crate::error::FolioError;
use crate::modules::users::store::UserStore;

/// The catalog. Books are fixed at construction; only their reviews change.
#[derive(Debug, Default)]
pub struct CatalogStore {
    books: RwLock<Vec<Book>>,
}

impl CatalogStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_catalog())
    }

    /// Every book in storage order.
    pub async fn all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// First book whose ISBN matches exactly.
    pub async fn find_by_isbn(&self, isbn: &str) -> Result<Book, FolioError> {
        let books = self.books.read().await;
        books
            .iter()
            .find(|b| b.isbn == isbn)
            .cloned()
            .ok_or(FolioError::BookNotFound)
    }

    /// Books whose author equals `author`, ignoring case.
    pub async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, FolioError> {
        let needle = author.to_lowercase();
        let books = self.books.read().await;
        non_empty(
            books
                .iter()
                .filter(|b| b.author.to_lowercase() == needle)
                .cloned()
                .collect(),
            FolioError::NoBooksByAuthor,
        )
    }

    /// Books whose title contains `title`, ignoring case.
    pub async fn find_by_title(&self, title: &str) -> Result<Vec<Book>, FolioError> {
        let needle = title.to_lowercase();
        let books = self.books.read().await;
        non_empty(
            books
                .iter()
                .filter(|b| b.title.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
            FolioError::NoBooksWithTitle,
        )
    }

    /// Reviews of one book; an empty list is a valid answer.
    pub async fn reviews(&self, isbn: &str) -> Result<Vec<Review>, FolioError> {
        let books = self.books.read().await;
        books
            .iter()
            .find(|b| b.isbn == isbn)
            .map(|b| b.reviews.clone())
            .ok_or(FolioError::BookNotFound)
    }

    /// Append a review. The reviewer must be registered; proof of identity is not checked.
    ///
    /// Existing reviews by the same user are kept.
    pub async fn add_review(
        &self,
        isbn: &str,
        review: Review,
        users: &UserStore,
    ) -> Result<(), FolioError> {
        // Lock order: catalog, then users. Held across the user check so the
        // whole mutation is atomic.
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or(FolioError::BookNotFound)?;

        if !users.is_registered(&review.username).await {
            return Err(FolioError::UnregisteredUser);
        }

        book.reviews.push(review);
        Ok(())
    }

    /// Drop every review `username` left on the book and return how many went.
    ///
    /// Removing nothing is still a success.
    pub async fn remove_reviews_by(
        &self,
        isbn: &str,
        username: &str,
        users: &UserStore,
    ) -> Result<usize, FolioError> {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.isbn == isbn)
            .ok_or(FolioError::BookNotFound)?;

        if !users.is_registered(username).await {
            return Err(FolioError::UnregisteredUser);
        }

        let before = book.reviews.len();
        book.reviews.retain(|r| r.username != username);
        Ok(before - book.reviews.len())
    }
}

fn non_empty(books: Vec<Book>, err: FolioError) -> Result<Vec<Book>, FolioError> {
    if books.is_empty() {
        Err(err)
    } else {
        Ok(books)
    }
}

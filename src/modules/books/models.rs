use serde::{Deserialize, Serialize};

/// A catalog entry. Field names on the wire follow the public JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Primary lookup key, immutable once seeded
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Reviews in insertion order
    #[serde(rename = "review")]
    pub reviews: Vec<Review>,
    /// Username associated with the listing; informational only
    #[serde(rename = "username")]
    pub owner_username: String,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        owner_username: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            reviews: Vec::new(),
            owner_username: owner_username.into(),
        }
    }

    pub fn with_review(mut self, review: Review) -> Self {
        self.reviews.push(review);
        self
    }
}

/// A single review left on a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub username: String,
    #[serde(flatten)]
    pub kind: ReviewKind,
}

impl Review {
    pub fn freeform(username: impl Into<String>, review: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            kind: ReviewKind::Freeform {
                review: review.into(),
            },
        }
    }

    pub fn rated(username: impl Into<String>, rating: u8, comment: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            kind: ReviewKind::Rated {
                rating,
                comment: comment.into(),
            },
        }
    }
}

/// Review payload. Both shapes live side by side in one book's review list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewKind {
    /// Seeded reviews carry a score and a comment
    Rated { rating: u8, comment: String },
    /// Reviews added over HTTP carry free text
    Freeform { review: String },
}

/// Request body for adding a review.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddReview {
    pub username: Option<String>,
    pub review: Option<String>,
}

/// Request body for deleting a user's reviews.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoveReviews {
    pub username: Option<String>,
}

use super::models::{Book, Review};

/// Catalog the service boots with, in storage order.
pub fn seed_catalog() -> Vec<Book> {
    vec![
        Book::new("113", "Atomic Habits", "James Clear", "jamesc"),
        Book::new("221", "The Power of Now", "Eckhart Tolle", "eckhart5"),
        Book::new("432", "Think and Grow Rich", "Napoleon Hill", "hillnap"),
        Book::new(
            "531",
            "The 7 Habits of Highly Effective People",
            "Stephen R. Covey",
            "stephencon",
        )
        .with_review(Review::rated(
            "user7",
            5,
            "Essential habits for personal and professional success.",
        ))
        .with_review(Review::rated(
            "user8",
            4,
            "Practical advice that resonates deeply.",
        )),
        Book::new("455", "Outwitting the Devil", "Napoleon Hill", "hillnap"),
    ]
}

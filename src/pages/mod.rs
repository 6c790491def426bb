pub mod books;
pub mod front;

pub use books::BooksPage;
pub use front::FrontPage;

pub mod book_list;

pub use book_list::{seed_titles, BookList, BookListAction};

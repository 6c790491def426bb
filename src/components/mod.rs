pub mod book;
pub mod book_shelf;
pub mod button;
pub mod nav_bar;

pub use book::Book;
pub use book_shelf::BookShelf;
pub use button::{Button, ButtonColor, ButtonVariant};
pub use nav_bar::NavBar;

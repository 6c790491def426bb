use std::rc::Rc;

use yew::prelude::*;

/// Titles shown on the books page. Stands in for a catalogue lookup.
const SEED_TITLES: [&str; 3] = ["The Hobbit", "The Lord of the Rings", "The Silmarillion"];

pub fn seed_titles() -> Vec<String> {
    SEED_TITLES.iter().map(|t| t.to_string()).collect()
}

/// Page-local list of book titles, in display order. Starts empty.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BookList {
    titles: Vec<String>,
}

pub enum BookListAction {
    /// Replace the whole list.
    Load(Vec<String>),
}

impl Reducible for BookList {
    type Action = BookListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BookListAction::Load(titles) => Rc::new(BookList { titles }),
        }
    }
}

impl BookList {
    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

pub mod game_card;
pub mod page_size_selector;
pub mod pagination;
pub mod search_bar;
pub mod summary_tables;

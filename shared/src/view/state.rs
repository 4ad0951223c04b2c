use std::rc::Rc;

use log::{debug, warn};

use crate::models::game::GameRecord;
use crate::view::card::GameCard;
use crate::view::pagination::{self, PageControl};
use crate::view::search;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Everything that changes the list on screen
#[derive(Debug, Clone, PartialEq)]
pub enum ViewAction {
    Loaded(Vec<GameRecord>),
    Search(String),
    GoToPage(usize),
    PreviousPage,
    NextPage,
    SetPageSize(usize),
}

impl ViewAction {
    /// Action triggered by clicking a pagination control; `None` for
    /// disabled controls and ellipses
    pub fn from_control(control: &PageControl) -> Option<Self> {
        match *control {
            PageControl::Previous { disabled: false, .. } => Some(ViewAction::PreviousPage),
            PageControl::Next { disabled: false, .. } => Some(ViewAction::NextPage),
            PageControl::Page { number, .. } => Some(ViewAction::GoToPage(number)),
            _ => None,
        }
    }
}

/// Full list, active subset and paging position.
///
/// Never mutated in place: `apply` returns the next state. `revision` grows
/// with every applied action so renderers can start each pass from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    games: Rc<Vec<GameRecord>>,
    active: Rc<Vec<usize>>,
    query: String,
    page: usize,
    page_size: usize,
    revision: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            games: Rc::new(Vec::new()),
            active: Rc::new(Vec::new()),
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            revision: 0,
        }
    }

    pub fn apply(&self, action: ViewAction) -> Self {
        let mut next = self.clone();
        next.revision += 1;

        match action {
            ViewAction::Loaded(games) => {
                let total = games.len();
                let games: Vec<GameRecord> = games.into_iter().filter(GameRecord::is_renderable).collect();
                if games.len() < total {
                    warn!("Dropped {} incomplete games before pagination", total - games.len());
                }
                next.active = Rc::new(search::filter_indices(&games, &next.query));
                next.games = Rc::new(games);
                next.page = 1;
            }
            ViewAction::Search(raw) => {
                next.query = search::normalize_query(&raw);
                next.active = Rc::new(search::filter_indices(&next.games, &next.query));
                next.page = 1;
                debug!("Search {:?} matched {} of {} games", next.query, next.active.len(), next.games.len());
            }
            ViewAction::GoToPage(page) => {
                next.page = pagination::clamp_page(page, self.total_pages());
            }
            ViewAction::PreviousPage => {
                next.page = pagination::clamp_page(self.page.saturating_sub(1), self.total_pages());
            }
            ViewAction::NextPage => {
                next.page = pagination::clamp_page(self.page + 1, self.total_pages());
            }
            ViewAction::SetPageSize(size) => {
                if size == 0 {
                    warn!("Ignoring page size 0");
                    next.revision = self.revision;
                    return next;
                }
                next.page_size = size;
                next.page = 1;
            }
        }

        next
    }

    pub fn games(&self) -> &Rc<Vec<GameRecord>> {
        &self.games
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_filtering(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.active.len(), self.page_size)
    }

    /// Records on the current page, in list order
    pub fn page_games(&self) -> Vec<&GameRecord> {
        let bounds = pagination::page_bounds(self.page, self.page_size, self.active.len());
        self.active[bounds].iter().map(|&index| &self.games[index]).collect()
    }

    pub fn page_cards(&self) -> Vec<GameCard> {
        self.page_games().into_iter().filter_map(GameCard::from_record).collect()
    }

    pub fn page_controls(&self) -> Vec<PageControl> {
        pagination::page_controls(self.page, self.total_pages())
    }

    pub fn pagination_info(&self) -> String {
        let filtered_from = self.is_filtering().then_some(self.games.len());
        pagination::pagination_info(self.page, self.page_size, self.active.len(), filtered_from)
    }
}

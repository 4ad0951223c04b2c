use std::rc::Rc;

use log::debug;
use shared::{ViewAction, ViewState};
use yew::Reducible;

/// Reducer wrapper so the page can drive `ViewState` through `use_reducer`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsStore(pub ViewState);

impl ResultsStore {
    pub fn new(page_size: usize) -> Self {
        Self(ViewState::new(page_size))
    }
}

impl Reducible for ResultsStore {
    type Action = ViewAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match &action {
            ViewAction::Loaded(games) => debug!("Applying Loaded with {} games", games.len()),
            other => debug!("Applying {:?}", other),
        }
        Rc::new(Self(self.0.apply(action)))
    }
}

impl std::ops::Deref for ResultsStore {
    type Target = ViewState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

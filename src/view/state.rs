// src/view/state.rs
// =============================================================================
// Application state for one run: the fetched repositories plus the curated
// list they are ordered against.
//
// The state is built once from the fetch result and never changes after
// that. Every view (sort mode / forks toggle) is computed fresh from it, so
// showing the same state in several orders never requires another fetch.
// =============================================================================

use tracing::debug;

use super::sort::{select, ViewState};
use crate::config::CurationList;
use crate::github::{FetchError, RepositoryRecord};
use crate::render::Grid;

#[derive(Debug)]
pub struct AppState {
    curated: CurationList,
    repositories: Vec<RepositoryRecord>,
    failed: bool,
}

impl AppState {
    /// Stores the outcome of the fetch. A failed fetch leaves the
    /// collection empty and marks the state as failed.
    pub fn new(curated: CurationList, fetched: Result<Vec<RepositoryRecord>, FetchError>) -> Self {
        match fetched {
            Ok(repositories) => Self {
                curated,
                repositories,
                failed: false,
            },
            Err(_) => Self {
                curated,
                repositories: Vec::new(),
                failed: true,
            },
        }
    }

    pub fn repositories(&self) -> &[RepositoryRecord] {
        &self.repositories
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Repositories for `view`, in display order
    pub fn select(&self, view: &ViewState) -> Vec<&RepositoryRecord> {
        select(&self.repositories, &self.curated, view)
    }

    /// Recomputes the view and mounts it into `grid`
    pub fn show(&self, view: &ViewState, grid: &mut Grid) {
        if self.failed {
            grid.fail();
            return;
        }

        let selected = self.select(view);
        debug!(mode = %view.mode, show_forks = view.show_forks, shown = selected.len(), "mounting view");
        grid.mount(&selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Overrides};
    use crate::github::fetch_all;
    use crate::render::Status;
    use crate::testing::{fork, names, offline_error, repo, FakeApi, Reply};
    use crate::view::SortMode;

    fn view(mode: SortMode, show_forks: bool) -> ViewState {
        ViewState { mode, show_forks }
    }

    #[test]
    fn test_failed_fetch_shows_failure() {
        let state = AppState::new(CurationList::new(["A"]), Err(offline_error()));
        let mut grid = Grid::new();

        state.show(&ViewState::default(), &mut grid);
        assert!(state.failed());
        assert!(state.repositories().is_empty());
        assert!(grid.cards().is_empty());
        assert_eq!(grid.status().to_string(), "Couldn’t load repositories right now.");
    }

    #[test]
    fn test_empty_selection_is_not_a_failure() {
        let state = AppState::new(CurationList::default(), Ok(vec![fork("only-fork", 1)]));
        let mut grid = Grid::new();

        state.show(&view(SortMode::Stars, false), &mut grid);
        assert_eq!(grid.status(), Status::Empty);
    }

    #[test]
    fn test_changing_view_reorders_without_touching_state() {
        let state = AppState::new(CurationList::new(["A", "B"]), Ok(vec![repo("A", 5), repo("B", 10)]));
        let mut grid = Grid::new();

        state.show(&view(SortMode::Curated, true), &mut grid);
        let curated: Vec<_> = grid.cards().iter().map(|c| c.name.clone()).collect();
        assert_eq!(curated, ["A", "B"]);

        state.show(&view(SortMode::Stars, true), &mut grid);
        let by_stars: Vec<_> = grid.cards().iter().map(|c| c.name.clone()).collect();
        assert_eq!(by_stars, ["B", "A"]);

        // Stored order is still the fetch order
        assert_eq!(names(state.repositories()), ["A", "B"]);
    }

    #[tokio::test]
    async fn test_missing_curated_repository_is_left_out_of_the_page() {
        let overrides = Overrides {
            account: Some("someone".to_string()),
            curated: vec!["A".to_string(), "B".to_string()],
            ..Overrides::default()
        };
        let config = Config::resolve(None, overrides).unwrap();
        let api = FakeApi::default()
            .with("A", Reply::Found(repo("A", 3)))
            .with("B", Reply::NotFound);

        let fetched = fetch_all(&api, &config).await;
        let state = AppState::new(config.curated.clone(), fetched.repositories);
        let mut grid = Grid::new();
        state.show(&ViewState::default(), &mut grid);

        assert!(!state.failed());
        assert_eq!(names(state.repositories()), ["A"]);
        assert_eq!(grid.cards().len(), 1);
        assert_eq!(grid.cards()[0].name, "A");
        assert_eq!(grid.status().to_string(), "Showing 1 selected repositories.");
    }
}

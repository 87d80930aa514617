use std::collections::BTreeSet;

use super::common::*;
use crate::listings::domain::Category;
use crate::listings::filter::FilterCriteria;
use crate::map::presenter::{MapPresenter, PresenterOptions, WORLD_CENTER, WORLD_ZOOM};
use crate::map::recording::{MapCommand, RecordingSurface};

#[test]
fn new_presenter_shows_full_catalog() {
    let presenter = presenter();

    assert_eq!(presenter.filtered().len(), 15);
    assert_eq!(presenter.bound_ids(), id_set(&(1..=15).collect::<Vec<_>>()));
    assert_eq!(presenter.surface().live_count(), 15);
    assert_eq!(presenter.results_label(), "15 villas found");
}

#[test]
fn apply_filters_syncs_bindings_and_label() {
    let mut presenter = presenter();

    let criteria = FilterCriteria::default().with_max_price(2200).with_guests(2);
    let ids: Vec<u32> = presenter
        .apply_filters(criteria)
        .iter()
        .map(|listing| listing.id.0)
        .collect();

    assert_eq!(ids, vec![3, 12, 14]);
    assert_eq!(presenter.bound_ids(), id_set(&[3, 12, 14]));
    assert_eq!(presenter.surface().live_count(), 3);
    assert_eq!(presenter.results_label(), "3 villas found");
}

#[test]
fn single_match_uses_singular_label() {
    let mut presenter = presenter();
    presenter.apply_filters(FilterCriteria::default().with_category(Category::PrivateIsland));
    assert_eq!(presenter.results_label(), "1 villa found");
    assert_eq!(presenter.bound_ids(), id_set(&[9]));
}

#[test]
fn latest_criteria_win_across_rapid_changes() {
    let mut presenter = presenter();

    presenter.apply_filters(FilterCriteria::default().with_location("tulum"));
    presenter.apply_filters(FilterCriteria::default().with_location("ibiza"));
    presenter.apply_filters(FilterCriteria::default().with_location("lisboa"));

    assert_eq!(presenter.bound_ids(), id_set(&[13, 14, 15]));
    assert_eq!(presenter.surface().live_count(), 3);
    assert_eq!(
        presenter.criteria().location.as_deref(),
        Some("lisboa"),
        "only the final snapshot is kept"
    );
}

#[test]
fn bindings_track_filtered_ids_after_every_change() {
    let mut presenter = presenter();
    let steps = vec![
        FilterCriteria::default().with_amenity("gym"),
        FilterCriteria::default().with_activity("nightlife"),
        FilterCriteria::default().with_amenity("yacht"),
        FilterCriteria::default().with_guests(10).with_max_price(4000),
        FilterCriteria::default(),
    ];

    for criteria in steps {
        presenter.apply_filters(criteria);
        let expected: BTreeSet<_> = presenter
            .filtered()
            .iter()
            .map(|listing| listing.id)
            .collect();
        assert_eq!(presenter.bound_ids(), expected);
        let live: Vec<_> = presenter.surface().live_markers().keys().copied().collect();
        let bound: Vec<_> = {
            let mut handles: Vec<_> = presenter
                .bindings()
                .iter()
                .map(|binding| binding.marker)
                .collect();
            handles.sort();
            handles
        };
        assert_eq!(live, bound, "surface holds exactly the bound markers");
    }
}

#[test]
fn empty_result_clears_map_without_fitting() {
    let mut presenter = presenter();
    presenter.surface_mut().drain_commands();

    presenter.apply_filters(FilterCriteria::default().with_location("reykjavik"));

    assert!(presenter.bindings().is_empty());
    assert_eq!(presenter.results_label(), "0 villas found");
    assert_eq!(fit_count(presenter.surface().commands()), 0);
    assert_eq!(removed_handles(presenter.surface().commands()).len(), 15);
}

#[test]
fn reset_restores_defaults_and_full_catalog() {
    let mut presenter = presenter();
    presenter.apply_filters(
        FilterCriteria::default()
            .with_location("ibiza")
            .with_amenity("helipad"),
    );
    assert_eq!(presenter.filtered().len(), 1);

    let restored = presenter.reset_filters().len();

    assert_eq!(restored, 15);
    assert_eq!(presenter.criteria(), &FilterCriteria::default());
    assert_eq!(presenter.filtered(), presenter.catalog());
    assert_eq!(presenter.surface().live_count(), 15);
}

#[test]
fn view_controls_reach_the_surface() {
    let mut presenter = presenter();
    presenter.surface_mut().drain_commands();

    presenter.zoom_in();
    presenter.zoom_in();
    presenter.zoom_out();
    presenter.reset_view();

    let commands = presenter.surface().commands();
    assert_eq!(commands[0], MapCommand::ZoomIn);
    assert_eq!(commands[2], MapCommand::ZoomOut);
    assert_eq!(
        commands[3],
        MapCommand::SetCenter {
            center: WORLD_CENTER,
            zoom: WORLD_ZOOM,
            duration_ms: 2000,
        }
    );
    assert_eq!(presenter.surface().zoom(), WORLD_ZOOM);
}

#[test]
fn unchanged_criteria_create_no_new_markers() {
    let mut presenter = presenter();
    let criteria = FilterCriteria::default().with_location("tulum");
    presenter.apply_filters(criteria.clone());
    presenter.surface_mut().drain_commands();

    presenter.apply_filters(criteria);

    let commands = presenter.surface().commands();
    assert!(created_handles(commands).is_empty());
    assert!(removed_handles(commands).is_empty());
    assert_eq!(fit_count(commands), 1);
}

#[test]
fn reset_view_flies_for_the_configured_duration() {
    let options = PresenterOptions {
        reset_view_duration_ms: 0,
        ..PresenterOptions::default()
    };
    let mut presenter = MapPresenter::new(RecordingSurface::default(), catalog(), options);
    presenter.surface_mut().drain_commands();

    presenter.zoom_in();
    presenter.reset_view();

    assert_eq!(
        presenter.surface().commands().last(),
        Some(&MapCommand::SetCenter {
            center: WORLD_CENTER,
            zoom: WORLD_ZOOM,
            duration_ms: 0,
        })
    );
    assert_eq!(presenter.surface().center(), WORLD_CENTER);
}

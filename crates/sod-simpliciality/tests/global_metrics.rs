mod common;

use sod_simpliciality::{
    count_simplices, edit_counts, edit_simpliciality, face_edit_simpliciality,
    mean_face_edit_distance, potential_simplices, simplicial_edit_distance, simplicial_fraction,
    EditCounts, SimplicialityOptions, SimplicialityReport,
};

use common::{
    assert_close, graph, h1, h_links_and_triangles, h_links_and_triangles2,
    h_missing_one_link, h_missing_one_singleton, opts, sc1_with_singletons,
};

#[test]
fn simplicial_fraction_of_fixtures() {
    let sc1 = sc1_with_singletons();
    assert_close(simplicial_fraction(&sc1, &SimplicialityOptions::default()).unwrap(), 1.0);
    assert_close(simplicial_fraction(&sc1, &opts(1, true)).unwrap(), 1.0);
    assert_close(simplicial_fraction(&sc1, &opts(1, false)).unwrap(), 1.0);
    assert_eq!(count_simplices(&sc1, &opts(1, true)).unwrap(), 4);
    assert_eq!(count_simplices(&sc1, &opts(1, false)).unwrap(), 7);
    assert_eq!(count_simplices(&sc1, &SimplicialityOptions::default()).unwrap(), 1);

    let h = h_missing_one_singleton();
    assert_close(simplicial_fraction(&h, &SimplicialityOptions::default()).unwrap(), 1.0);
    assert_close(simplicial_fraction(&h, &opts(1, true)).unwrap(), 0.25);
    assert_close(simplicial_fraction(&h, &opts(1, false)).unwrap(), 0.5);

    let h = h_missing_one_link();
    assert_close(simplicial_fraction(&h, &SimplicialityOptions::default()).unwrap(), 0.0);
    assert_close(simplicial_fraction(&h, &opts(1, true)).unwrap(), 2.0 / 3.0);
    assert_eq!(potential_simplices(&h, &opts(1, true)).unwrap(), 3);
}

#[test]
fn simplicial_fraction_without_candidates_is_nan() {
    let links = graph(&[&[1, 2], &[2, 3]]);
    assert!(simplicial_fraction(&links, &SimplicialityOptions::default())
        .unwrap()
        .is_nan());
    assert_eq!(potential_simplices(&links, &SimplicialityOptions::default()).unwrap(), 0);
}

#[test]
fn zero_min_size_is_rejected() {
    let h = h1();
    for err in [
        simplicial_fraction(&h, &opts(0, true)).unwrap_err(),
        simplicial_edit_distance(&h, &opts(0, true), true).unwrap_err(),
        mean_face_edit_distance(&h, &opts(0, false), true).unwrap_err(),
    ] {
        assert_eq!(err.info().code, "invalid-min-size");
    }
}

#[test]
fn edit_distance_of_fixtures() {
    let default = SimplicialityOptions::default();

    let sc1 = sc1_with_singletons();
    for options in [default, opts(1, true), opts(1, false)] {
        assert_close(simplicial_edit_distance(&sc1, &options, true).unwrap(), 0.0);
        assert_close(edit_simpliciality(&sc1, &options).unwrap(), 1.0);
    }

    let h = h_missing_one_singleton();
    assert_close(simplicial_edit_distance(&h, &default, true).unwrap(), 0.0);
    assert_close(simplicial_edit_distance(&h, &opts(1, true), true).unwrap(), 1.0 / 6.0);
    assert_close(simplicial_edit_distance(&h, &opts(1, false), true).unwrap(), 1.0 / 6.0);

    let h = h_missing_one_link();
    assert_close(simplicial_edit_distance(&h, &default, true).unwrap(), 1.0 / 3.0);
    assert_close(simplicial_edit_distance(&h, &opts(1, true), true).unwrap(), 1.0 / 6.0);

    let h = h_links_and_triangles();
    assert_close(simplicial_edit_distance(&h, &default, true).unwrap(), 1.0 / 3.0);

    let h = h_links_and_triangles2();
    assert_close(simplicial_edit_distance(&h, &default, true).unwrap(), 1.0 / 3.0);
    assert_close(simplicial_edit_distance(&h, &opts(1, true), true).unwrap(), 2.0 / 3.0);
    assert_close(simplicial_edit_distance(&h, &opts(2, false), true).unwrap(), 2.0 / 5.0);
    assert_close(edit_simpliciality(&h, &opts(2, false)).unwrap(), 3.0 / 5.0);
}

#[test]
fn shared_missing_faces_are_counted_once() {
    let h = h1();
    assert_eq!(
        edit_counts(&h, &SimplicialityOptions::default()).unwrap(),
        EditCounts {
            missing: 14,
            qualifying: 4,
            maximal: 3,
        }
    );
    assert_close(
        simplicial_edit_distance(&h, &SimplicialityOptions::default(), true).unwrap(),
        14.0 / 15.0,
    );
    assert_close(simplicial_edit_distance(&h, &opts(1, true), true).unwrap(), 21.0 / 22.0);
    assert_close(simplicial_edit_distance(&h, &opts(2, false), true).unwrap(), 14.0 / 15.0);
    assert_close(simplicial_edit_distance(&h, &opts(2, false), false).unwrap(), 14.0);
    assert_close(edit_simpliciality(&h, &SimplicialityOptions::default()).unwrap(), 1.0 / 15.0);
}

#[test]
fn duplicate_edges_count_once_for_edits_but_not_for_fraction() {
    let h = graph(&[&[1, 2, 3], &[3, 2, 1], &[1, 2]]);
    let default = SimplicialityOptions::default();
    assert_eq!(
        edit_counts(&h, &default).unwrap(),
        EditCounts {
            missing: 2,
            qualifying: 2,
            maximal: 1,
        }
    );
    assert_close(edit_simpliciality(&h, &default).unwrap(), 1.0 / 3.0);
    assert_eq!(potential_simplices(&h, &default).unwrap(), 2);
    assert_close(simplicial_fraction(&h, &default).unwrap(), 0.0);
}

#[test]
fn edit_distance_is_nan_without_maximal_candidates() {
    let links = graph(&[&[1, 2], &[2, 3]]);
    let default = SimplicialityOptions::default();
    assert!(simplicial_edit_distance(&links, &default, true).unwrap().is_nan());
    assert!(simplicial_edit_distance(&links, &default, false).unwrap().is_nan());
    assert!(edit_simpliciality(&links, &default).unwrap().is_nan());

    // A lone link evaluated at its own size has nothing to add and nothing to normalise by.
    let link = graph(&[&[1, 2]]);
    assert!(simplicial_edit_distance(&link, &opts(2, false), true)
        .unwrap()
        .is_nan());
    assert_close(simplicial_edit_distance(&link, &opts(2, false), false).unwrap(), 0.0);
}

#[test]
fn face_edit_simpliciality_of_fixtures() {
    let default = SimplicialityOptions::default();

    let sc1 = sc1_with_singletons();
    for options in [default, opts(1, true), opts(1, false)] {
        assert_close(face_edit_simpliciality(&sc1, &options).unwrap(), 1.0);
    }

    let h = h_missing_one_singleton();
    assert_close(face_edit_simpliciality(&h, &default).unwrap(), 1.0);
    assert_close(face_edit_simpliciality(&h, &opts(1, true)).unwrap(), 5.0 / 6.0);
    assert_close(face_edit_simpliciality(&h, &opts(1, false)).unwrap(), 5.0 / 6.0);

    let h = h_missing_one_link();
    assert_close(face_edit_simpliciality(&h, &default).unwrap(), 2.0 / 3.0);
    assert_close(face_edit_simpliciality(&h, &opts(1, true)).unwrap(), 5.0 / 6.0);

    let h = h_links_and_triangles2();
    assert_close(face_edit_simpliciality(&h, &default).unwrap(), 2.0 / 3.0);
    assert_close(face_edit_simpliciality(&h, &opts(1, true)).unwrap(), 2.0 / 9.0);
    assert_close(face_edit_simpliciality(&h, &opts(2, false)).unwrap(), 7.0 / 9.0);
    assert_close(mean_face_edit_distance(&h, &default, false).unwrap(), 1.0);
    assert_close(mean_face_edit_distance(&h, &opts(1, true), false).unwrap(), 10.0 / 3.0);

    assert_close(face_edit_simpliciality(&h1(), &default).unwrap(), 1.0 / 9.0);
}

#[test]
fn face_edit_is_nan_without_maximal_candidates() {
    let links = graph(&[&[1, 2], &[2, 3]]);
    let default = SimplicialityOptions::default();
    assert!(mean_face_edit_distance(&links, &default, true).unwrap().is_nan());
    assert!(face_edit_simpliciality(&links, &default).unwrap().is_nan());
}

#[test]
fn report_collects_every_metric() {
    let report = SimplicialityReport::compute(&h1(), &SimplicialityOptions::default()).unwrap();
    assert_eq!(report.num_nodes, 7);
    assert_eq!(report.num_edges, 4);
    assert_eq!(report.simplices, 0);
    assert_eq!(report.potential_simplices, 3);
    assert_eq!(report.edit.missing, 14);
    assert_close(report.simplicial_fraction, 0.0);
    assert_close(report.edit_simpliciality, 1.0 / 15.0);
    assert_close(report.face_edit_simpliciality, 1.0 / 9.0);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["options"]["min_size"], 2);
    assert_eq!(value["edit"]["maximal"], 3);
}

#[test]
fn undefined_metrics_serialize_as_null() {
    let links = graph(&[&[1, 2], &[2, 3]]);
    let report = SimplicialityReport::compute(&links, &SimplicialityOptions::default()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["simplicial_fraction"].is_null());
    assert!(value["edit_simpliciality"].is_null());
    assert!(value["face_edit_simpliciality"].is_null());

    let restored: SimplicialityReport = serde_json::from_str(&json).unwrap();
    assert!(restored.edit_simpliciality.is_nan());
    assert_eq!(restored.edit, report.edit);
}

use waypoint_location::{LocationError, PathAttributes, create_path, generate_location_from_path};

fn params(pairs: &[(&str, &str)]) -> std::collections::BTreeMap<String, String> {
    pairs.iter().map(|(key, value)| ((*key).to_owned(), (*value).to_owned())).collect()
}

#[test]
fn substitutes_required_params() {
    let attributes = PathAttributes { params: params(&[("id", "7")]), ..PathAttributes::default() };
    let location = generate_location_from_path("/projects/:id/settings", &attributes).unwrap();
    assert_eq!(location.pathname, "/projects/7/settings");
    assert_eq!(location.search, "");
    assert_eq!(location.hash, "");
}

#[test]
fn prefixes_base_path() {
    let attributes = PathAttributes {
        params: params(&[("id", "7")]),
        base_path: "/app".to_owned(),
        ..PathAttributes::default()
    };
    let location = generate_location_from_path("/projects/:id", &attributes).unwrap();
    assert_eq!(location.pathname, "/app/projects/7");
}

#[test]
fn missing_required_param_is_an_error() {
    let attributes = PathAttributes::default();
    let result = generate_location_from_path("/projects/:id", &attributes);
    assert_eq!(result, Err(LocationError::MissingParam { name: "id".to_owned() }));
}

#[test]
fn optional_param_without_value_drops_the_segment() {
    let attributes = PathAttributes { params: params(&[("id", "7")]), ..PathAttributes::default() };
    let location = generate_location_from_path("/projects/:id/:tab?", &attributes).unwrap();
    assert_eq!(location.pathname, "/projects/7");
}

#[test]
fn optional_param_with_value_is_substituted() {
    let attributes = PathAttributes {
        params: params(&[("id", "7"), ("tab", "activity")]),
        ..PathAttributes::default()
    };
    let location = generate_location_from_path("/projects/:id/:tab?", &attributes).unwrap();
    assert_eq!(location.pathname, "/projects/7/activity");
}

#[test]
fn query_is_percent_encoded_and_deterministic() {
    let attributes = PathAttributes {
        query: params(&[("b", "2"), ("a", "one two")]),
        ..PathAttributes::default()
    };
    let location = generate_location_from_path("/search", &attributes).unwrap();
    assert_eq!(location.search, "?a=one+two&b=2");
    assert_eq!(create_path(&location), "/search?a=one+two&b=2");
}

#[test]
fn query_map_replaces_template_query() {
    let attributes =
        PathAttributes { query: params(&[("page", "2")]), ..PathAttributes::default() };
    let location = generate_location_from_path("/search?page=1", &attributes).unwrap();
    assert_eq!(location.pathname, "/search");
    assert_eq!(location.search, "?page=2");
}

#[test]
fn static_template_passes_through() {
    let location = generate_location_from_path("/about", &PathAttributes::default()).unwrap();
    assert_eq!(create_path(&location), "/about");
}

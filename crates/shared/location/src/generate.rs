use crate::error::LocationError;
use crate::location::{ParsedLocation, parse_path};
use std::borrow::Cow;
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Path parameters substituted into `:name` template segments.
///
/// Ordered map so generated destinations are deterministic.
pub type Params = BTreeMap<String, String>;

/// Query key/value pairs appended to generated destinations.
pub type Query = BTreeMap<String, String>;

/// Inputs for route-template expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathAttributes {
    pub params: Params,
    pub query: Query,
    /// Prefix prepended to the template before expansion.
    pub base_path: String,
}

/// Expands a route path template into a [`ParsedLocation`].
///
/// Template segments of the form `:name` are replaced with the matching
/// value from `attributes.params`; `:name?` segments are optional and
/// dropped when no value is provided. A non-empty query map is serialized
/// percent-encoded into `search`, replacing any query embedded in the
/// template itself.
///
/// # Errors
/// Returns [`LocationError::MissingParam`] when the template references a
/// required parameter with no provided value.
///
/// # Examples
/// ```rust
/// use waypoint_location::{PathAttributes, generate_location_from_path};
///
/// let attributes = PathAttributes {
///     params: [("id".to_owned(), "7".to_owned())].into(),
///     base_path: "/app".to_owned(),
///     ..PathAttributes::default()
/// };
/// let location = generate_location_from_path("/projects/:id", &attributes).unwrap();
/// assert_eq!(location.pathname, "/app/projects/7");
/// ```
pub fn generate_location_from_path(
    template: &str,
    attributes: &PathAttributes,
) -> Result<ParsedLocation, LocationError> {
    let mut full = String::with_capacity(attributes.base_path.len() + template.len());
    full.push_str(&attributes.base_path);
    full.push_str(template);

    let expanded = expand_template(&full, &attributes.params)?;
    let mut location = parse_path(&expanded);

    if !attributes.query.is_empty() {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &attributes.query {
            serializer.append_pair(key, value);
        }
        location.search = format!("?{}", serializer.finish());
    }

    Ok(location)
}

fn expand_template<'a>(template: &'a str, params: &'a Params) -> Result<String, LocationError> {
    let mut segments: Vec<Cow<'a, str>> = Vec::new();

    for segment in template.split('/') {
        let Some(name) = segment.strip_prefix(':') else {
            segments.push(Cow::Borrowed(segment));
            continue;
        };
        let (name, optional) = name.strip_suffix('?').map_or((name, false), |name| (name, true));
        match params.get(name) {
            Some(value) => segments.push(Cow::Borrowed(value.as_str())),
            // Optional segment with no value disappears along with its slash.
            None if optional => {},
            None => return Err(LocationError::MissingParam { name: name.to_owned() }),
        }
    }

    Ok(segments.join("/"))
}

//! Integration tests for include resolution against real files

use propfiles::{
    IncludeRef, IncludeResolver, PropertyError, PropertySet, ResolverOptions, INCLUDE_FILE,
    INCLUDE_RESOURCE,
};
use tempfile::TempDir;

use crate::integration::{fixture_source, fixtures_dir};

fn set(pairs: &[(&str, &str)]) -> PropertySet {
    pairs.iter().copied().collect()
}

#[test]
fn test_simple_file_include() {
    let path = fixtures_dir().join("simple.properties");
    let path_str = path.to_str().unwrap();
    let resolver = IncludeResolver::new(fixture_source());

    let caller = set(&[(INCLUDE_FILE, path_str), ("java.properties.file", path_str)]);
    assert!(caller.get("plop").is_none());

    let resolved = resolver.resolve_properties(caller).unwrap();
    assert_eq!(resolved.get("plop"), Some("onk"));
    assert_eq!(resolved.get("java.properties.file"), Some(path_str));
    assert_eq!(resolved.get(INCLUDE_FILE), Some(path_str));
}

#[test]
fn test_simple_resource_include() {
    let resolver = IncludeResolver::new(fixture_source());
    let resolved = resolver
        .resolve_properties(set(&[(INCLUDE_RESOURCE, "simple.properties")]))
        .unwrap();
    assert_eq!(resolved.get("plop"), Some("onk"));
    assert_eq!(resolved.get(INCLUDE_RESOURCE), Some("simple.properties"));
}

#[test]
fn test_one_level_include_overrides_base() {
    let resolver = IncludeResolver::new(fixture_source());
    let resolved = resolver
        .resolve_properties(set(&[(INCLUDE_RESOURCE, "include.properties")]))
        .unwrap();
    assert_eq!(resolved.get("plop"), Some("gloubi"));
    assert_eq!(resolved.get(INCLUDE_RESOURCE), Some("include.properties"));
}

#[test]
fn test_two_level_include_outermost_wins() {
    let resolver = IncludeResolver::new(fixture_source());
    let resolution = resolver
        .resolve_traced(set(&[(INCLUDE_RESOURCE, "include2.properties")]))
        .unwrap();

    assert_eq!(resolution.properties.get("plop"), Some("grumpf"));
    assert_eq!(
        resolution.properties.get(INCLUDE_RESOURCE),
        Some("include2.properties")
    );
    assert_eq!(
        resolution.chain,
        vec![
            IncludeRef::Resource("include2.properties".to_string()),
            IncludeRef::Resource("include.properties".to_string()),
            IncludeRef::Resource("simple.properties".to_string()),
        ]
    );
}

#[test]
fn test_caller_value_wins_over_every_level() {
    let resolver = IncludeResolver::new(fixture_source());
    let resolved = resolver
        .resolve_properties(set(&[
            (INCLUDE_RESOURCE, "include2.properties"),
            ("plop", "caller"),
        ]))
        .unwrap();
    assert_eq!(resolved.get("plop"), Some("caller"));
}

#[test]
fn test_key_defined_only_deepest_surfaces() {
    let temp_dir = TempDir::new().unwrap();
    let deepest = temp_dir.path().join("deepest.properties");
    let middle = temp_dir.path().join("middle.properties");
    std::fs::write(&deepest, "only.deep=from-deepest\nshared=deep\n").unwrap();
    std::fs::write(
        &middle,
        format!("include.file={}\nshared=middle\n", deepest.display()),
    )
    .unwrap();

    let resolver = IncludeResolver::new(fixture_source());
    let resolved = resolver
        .resolve_properties(set(&[(INCLUDE_FILE, middle.to_str().unwrap())]))
        .unwrap();

    assert_eq!(resolved.get("only.deep"), Some("from-deepest"));
    assert_eq!(resolved.get("shared"), Some("middle"));
}

#[test]
fn test_file_include_can_chain_into_resource() {
    let temp_dir = TempDir::new().unwrap();
    let local = temp_dir.path().join("local.properties");
    std::fs::write(&local, "include.resource=include.properties\nlocal=yes\n").unwrap();

    let resolver = IncludeResolver::new(fixture_source());
    let resolved = resolver
        .resolve_properties(set(&[(INCLUDE_FILE, local.to_str().unwrap())]))
        .unwrap();
    assert_eq!(resolved.get("plop"), Some("gloubi"));
    assert_eq!(resolved.get("local"), Some("yes"));
}

#[test]
fn test_nested_resource_name() {
    let resolver = IncludeResolver::new(fixture_source());
    let resolved = resolver
        .resolve_properties(set(&[(INCLUDE_RESOURCE, "nested/child.properties")]))
        .unwrap();
    assert_eq!(resolved.get("nested"), Some("true"));
    assert_eq!(resolved.get("plop"), Some("onk"));
}

#[test]
fn test_missing_file_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.properties");
    let resolver = IncludeResolver::new(fixture_source());

    let err = resolver
        .resolve_properties(set(&[(INCLUDE_FILE, missing.to_str().unwrap())]))
        .unwrap_err();
    assert!(matches!(err, PropertyError::NotFound(path) if path == missing));
}

#[test]
fn test_directory_include_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let resolver = IncludeResolver::new(fixture_source());

    let err = resolver
        .resolve_properties(set(&[(INCLUDE_FILE, temp_dir.path().to_str().unwrap())]))
        .unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, PropertyError::NotFound(path) if path == temp_dir.path()));
}

#[test]
fn test_missing_resource_is_resource_not_found() {
    let resolver = IncludeResolver::new(fixture_source());
    let err = resolver
        .resolve_properties(set(&[(INCLUDE_RESOURCE, "does-not-exist.properties")]))
        .unwrap_err();
    assert!(matches!(err, PropertyError::ResourceNotFound(name) if name == "does-not-exist.properties"));
}

#[test]
fn test_malformed_resource_aborts_chain() {
    let temp_dir = TempDir::new().unwrap();
    let top = temp_dir.path().join("top.properties");
    std::fs::write(&top, "include.resource=malformed.properties\n").unwrap();

    let resolver = IncludeResolver::new(fixture_source());
    let err = resolver
        .resolve_properties(set(&[(INCLUDE_FILE, top.to_str().unwrap())]))
        .unwrap_err();
    assert!(matches!(err, PropertyError::Malformed { line: 2, .. }));
}

#[test]
fn test_self_include_with_depth_guard() {
    let temp_dir = TempDir::new().unwrap();
    let looping = temp_dir.path().join("loop.properties");
    std::fs::write(&looping, format!("include.file={}\n", looping.display())).unwrap();

    let resolver = IncludeResolver::with_options(
        fixture_source(),
        ResolverOptions {
            max_depth: Some(32),
        },
    );
    let err = resolver
        .resolve_properties(set(&[(INCLUDE_FILE, looping.to_str().unwrap())]))
        .unwrap_err();
    assert!(matches!(
        err,
        PropertyError::IncludeDepthExceeded { depth: 32, reference: IncludeRef::File(_) }
    ));
}

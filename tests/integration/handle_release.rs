//! Stream lifetime tests: every opened stream is dropped before the load
//! returns, and no directive means no I/O.

use propfiles::{
    IncludeResolver, MemoryPropertySource, PropertyError, PropertySet, INCLUDE_FILE,
    INCLUDE_RESOURCE,
};

use crate::integration::CountingSource;

fn chain_source() -> MemoryPropertySource {
    MemoryPropertySource::new()
        .with_resource("simple.properties", "plop=onk\n")
        .with_resource("include.properties", "include.resource=simple.properties\nplop=gloubi\n")
        .with_resource("bad.properties", "ok=1\nbad=\\u12\n")
        .with_file("top.properties", "include.resource=include.properties\n")
}

#[test]
fn test_no_directive_attempts_no_io() {
    let source = CountingSource::new(chain_source());
    let resolver = IncludeResolver::new(&source);

    let input: PropertySet = [("a", "1"), ("include.other", "x")].into_iter().collect();
    let resolved = resolver.resolve_properties(input.clone()).unwrap();

    assert_eq!(resolved, input);
    assert_eq!(source.attempts(), 0);
}

#[test]
fn test_file_directive_never_touches_resource() {
    let source = CountingSource::new(
        MemoryPropertySource::new()
            .with_file("base.properties", "origin=file\n")
            .with_resource("base.properties", "origin=resource\n"),
    );
    let resolver = IncludeResolver::new(&source);

    let input: PropertySet = [
        (INCLUDE_FILE, "base.properties"),
        (INCLUDE_RESOURCE, "base.properties"),
    ]
    .into_iter()
    .collect();
    let resolved = resolver.resolve_properties(input).unwrap();

    assert_eq!(resolved.get("origin"), Some("file"));
    assert_eq!(source.file_opens(), 1);
    assert_eq!(source.resource_opens(), 0);
    assert_eq!(source.opened(), 1);
    assert_eq!(source.closed(), 1);
}

#[test]
fn test_successful_chain_closes_every_stream() {
    let source = CountingSource::new(chain_source());
    let resolver = IncludeResolver::new(&source);

    let input: PropertySet = [(INCLUDE_FILE, "top.properties")].into_iter().collect();
    let resolved = resolver.resolve_properties(input).unwrap();

    assert_eq!(resolved.get("plop"), Some("gloubi"));
    assert_eq!(source.opened(), 3);
    assert_eq!(source.closed(), 3);
}

#[test]
fn test_parse_failure_closes_stream() {
    let source = CountingSource::new(chain_source());
    let resolver = IncludeResolver::new(&source);

    let input: PropertySet = [(INCLUDE_RESOURCE, "bad.properties")].into_iter().collect();
    let err = resolver.resolve_properties(input).unwrap_err();

    assert!(matches!(err, PropertyError::Malformed { .. }));
    assert_eq!(source.opened(), 1);
    assert_eq!(source.closed(), 1);
}

#[test]
fn test_read_failure_closes_stream() {
    let source = CountingSource::new(chain_source()).with_broken_resource("flaky.properties");
    let resolver = IncludeResolver::new(&source);

    let input: PropertySet = [(INCLUDE_RESOURCE, "flaky.properties")].into_iter().collect();
    let err = resolver.resolve_properties(input).unwrap_err();

    assert!(matches!(err, PropertyError::Io { .. }));
    assert_eq!(source.opened(), 1);
    assert_eq!(source.closed(), 1);
}

#[test]
fn test_missing_links_open_nothing() {
    let source = CountingSource::new(chain_source());
    let resolver = IncludeResolver::new(&source);

    let input: PropertySet = [(INCLUDE_RESOURCE, "absent.properties")].into_iter().collect();
    assert!(resolver.resolve_properties(input).is_err());

    assert_eq!(source.attempts(), 1);
    assert_eq!(source.opened(), 0);
    assert_eq!(source.closed(), 0);
}

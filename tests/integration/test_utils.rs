//! Shared test utilities for integration tests
//!
//! Fixture locations, a counting property source for observing stream
//! lifetimes, and serialized access to XDG environment variables.

use propfiles::{FsPropertySource, MemoryPropertySource, PropertyError, PropertySource};
use std::cell::Cell;
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Directory holding simple/include/include2.properties.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("resources")
}

/// Filesystem source rooted at the fixtures directory.
pub fn fixture_source() -> FsPropertySource {
    FsPropertySource::new(vec![fixtures_dir()])
}

/// Write a TOML config pointing resource lookups at the fixtures directory.
pub fn write_fixture_config(dir: &Path, extra: &str) -> PathBuf {
    let config_path = dir.join("propfiles-test.toml");
    let contents = format!(
        "[resolver]\nresource_roots = [{:?}]\n{}\n[logging]\nenabled = false\n",
        fixtures_dir().display().to_string(),
        extra
    );
    std::fs::write(&config_path, contents).unwrap();
    config_path
}

/// Property source that counts opened and dropped streams.
///
/// Resources listed as broken open successfully but fail on first read.
#[derive(Default)]
pub struct CountingSource {
    inner: MemoryPropertySource,
    broken: HashSet<String>,
    attempts: Cell<usize>,
    file_opens: Cell<usize>,
    resource_opens: Cell<usize>,
    opened: Cell<usize>,
    closed: Cell<usize>,
}

impl CountingSource {
    pub fn new(inner: MemoryPropertySource) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn with_broken_resource(mut self, name: &str) -> Self {
        self.broken.insert(name.to_string());
        self
    }

    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }

    /// Calls to `open_file`, successful or not.
    pub fn file_opens(&self) -> usize {
        self.file_opens.get()
    }

    /// Calls to `open_resource`, successful or not.
    pub fn resource_opens(&self) -> usize {
        self.resource_opens.get()
    }

    pub fn opened(&self) -> usize {
        self.opened.get()
    }

    pub fn closed(&self) -> usize {
        self.closed.get()
    }

    fn track<'a>(&'a self, inner: Box<dyn Read + 'a>) -> Box<dyn Read + 'a> {
        self.opened.set(self.opened.get() + 1);
        Box::new(CountingStream {
            inner,
            closed: &self.closed,
        })
    }
}

impl PropertySource for CountingSource {
    fn open_file(&self, path: &Path) -> Result<Box<dyn Read + '_>, PropertyError> {
        self.attempts.set(self.attempts.get() + 1);
        self.file_opens.set(self.file_opens.get() + 1);
        let stream = self.inner.open_file(path)?;
        Ok(self.track(stream))
    }

    fn open_resource(&self, name: &str) -> Result<Option<Box<dyn Read + '_>>, PropertyError> {
        self.attempts.set(self.attempts.get() + 1);
        self.resource_opens.set(self.resource_opens.get() + 1);
        if self.broken.contains(name) {
            return Ok(Some(self.track(Box::new(FailingReader))));
        }
        Ok(self.inner.open_resource(name)?.map(|stream| self.track(stream)))
    }
}

struct CountingStream<'a> {
    inner: Box<dyn Read + 'a>,
    closed: &'a Cell<usize>,
}

impl Read for CountingStream<'_> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Drop for CountingStream<'_> {
    fn drop(&mut self) {
        self.closed.set(self.closed.get() + 1);
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "disk error"))
    }
}

/// Global mutex to serialize XDG environment variable access across tests
static XDG_ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Run `f` with XDG_CONFIG_HOME pointed into `test_dir`, restoring the
/// previous value afterwards.
pub fn with_xdg_env<F, R>(test_dir: &TempDir, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = XDG_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let original = std::env::var("XDG_CONFIG_HOME").ok();

    let config_home = test_dir.path().join("xdg-config");
    std::fs::create_dir_all(&config_home).unwrap();
    std::env::set_var("XDG_CONFIG_HOME", config_home.to_str().unwrap());

    let result = f();

    match original {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }
    result
}

//! One edit pass: load, apply adds then removes, save, reload.

use crate::config::AdlistConfig;
use crate::error::Result;
use crate::list::{AdList, Change};
use crate::reload::{ReloadOutput, Reloader};
use crate::storage;

/// URLs to enable and disable, each applied in the order given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub add: Vec<String>,
    pub remove: Vec<String>,
    /// Skip the reload step after saving.
    pub no_reload: bool,
}

/// Per-URL result of an edit pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub url: String,
    pub change: Change,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Adds first, then removes, in request order.
    pub edits: Vec<Edit>,
    /// `None` when the reload was skipped.
    pub reload: Option<ReloadOutput>,
}

impl Outcome {
    pub fn changed(&self) -> bool {
        self.edits.iter().any(|e| !e.change.is_unchanged())
    }
}

/// Run one edit pass against `cfg.list_path`.
///
/// The file is read once and written once. If the reload fails after the
/// save, the edited file is left in place.
pub fn run(cfg: &AdlistConfig, request: &EditRequest, reloader: &dyn Reloader) -> Result<Outcome> {
    let path = cfg.list_path.as_path();
    let mut list = AdList::parse(&storage::load(path)?);

    let mut edits = Vec::with_capacity(request.add.len() + request.remove.len());
    for url in &request.add {
        let change = list.add(url);
        tracing::info!(url = %url, %change, "add");
        edits.push(Edit {
            url: url.clone(),
            change,
        });
    }
    for url in &request.remove {
        let change = list.remove(url);
        tracing::info!(url = %url, %change, "remove");
        edits.push(Edit {
            url: url.clone(),
            change,
        });
    }

    storage::save(path, &list.to_string())?;

    let reload = if request.no_reload {
        tracing::info!("reload skipped");
        None
    } else {
        Some(reloader.reload()?)
    };

    Ok(Outcome { edits, reload })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;
    use std::io;
    use std::path::PathBuf;

    struct CountingReloader {
        calls: Cell<usize>,
    }

    impl Reloader for CountingReloader {
        fn reload(&self) -> Result<ReloadOutput> {
            self.calls.set(self.calls.get() + 1);
            Ok(ReloadOutput {
                stdout: "  [i] Done.\n".to_string(),
                stderr: String::new(),
                code: Some(0),
            })
        }
    }

    struct FailingReloader;

    impl Reloader for FailingReloader {
        fn reload(&self) -> Result<ReloadOutput> {
            Err(Error::Reload {
                program: PathBuf::from("/usr/local/bin/pihole"),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            })
        }
    }

    fn config_for(path: PathBuf) -> AdlistConfig {
        AdlistConfig {
            list_path: path,
            ..AdlistConfig::default()
        }
    }

    fn counting() -> CountingReloader {
        CountingReloader {
            calls: Cell::new(0),
        }
    }

    #[test]
    fn applies_adds_before_removes_and_reloads_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adlists.list");
        std::fs::write(&path, "http://a.com\n# http://b.com\n").unwrap();

        let request = EditRequest {
            add: vec!["http://b.com".into()],
            remove: vec!["http://a.com".into()],
            no_reload: false,
        };
        let reloader = counting();
        let outcome = run(&config_for(path.clone()), &request, &reloader).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# http://a.com\nhttp://b.com\n"
        );
        assert_eq!(
            outcome.edits,
            vec![
                Edit {
                    url: "http://b.com".into(),
                    change: Change::Enabled
                },
                Edit {
                    url: "http://a.com".into(),
                    change: Change::Disabled(1)
                },
            ]
        );
        assert!(outcome.changed());
        assert_eq!(reloader.calls.get(), 1);
        assert_eq!(outcome.reload.unwrap().stdout, "  [i] Done.\n");
    }

    #[test]
    fn add_and_remove_of_same_url_ends_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adlists.list");
        std::fs::write(&path, "").unwrap();

        let request = EditRequest {
            add: vec!["http://x.com".into()],
            remove: vec!["http://x.com".into()],
            no_reload: true,
        };
        run(&config_for(path.clone()), &request, &counting()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# http://x.com\n");
    }

    #[test]
    fn no_reload_skips_reloader() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adlists.list");
        std::fs::write(&path, "http://a.com\n").unwrap();

        let request = EditRequest {
            add: vec!["http://a.com".into()],
            no_reload: true,
            ..EditRequest::default()
        };
        let reloader = counting();
        let outcome = run(&config_for(path), &request, &reloader).unwrap();
        assert!(outcome.reload.is_none());
        assert!(!outcome.changed());
        assert_eq!(reloader.calls.get(), 0);
    }

    #[test]
    fn missing_list_fails_before_reload() {
        let dir = tempfile::tempdir().unwrap();
        let request = EditRequest {
            add: vec!["http://a.com".into()],
            ..EditRequest::default()
        };
        let reloader = counting();
        let err = run(&config_for(dir.path().join("missing")), &request, &reloader).unwrap_err();
        assert!(matches!(err, Error::OpenRead { .. }));
        assert_eq!(reloader.calls.get(), 0);
    }

    #[test]
    fn reload_failure_keeps_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("adlists.list");
        std::fs::write(&path, "http://a.com\n").unwrap();

        let request = EditRequest {
            remove: vec!["http://a.com".into()],
            ..EditRequest::default()
        };
        let err = run(&config_for(path.clone()), &request, &FailingReloader).unwrap_err();
        assert!(matches!(err, Error::Reload { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# http://a.com\n");
    }
}

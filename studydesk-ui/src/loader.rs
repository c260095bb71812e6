//! Partial Loader & Listener Binder
//!
//! Composes the shared page regions. Both fragments are fetched at the same
//! time; each one that arrives is injected into its placeholder and the
//! user data is re-applied right away. Once both fetches have settled,
//! successfully or not, the listener groups are bound in a fixed order,
//! exactly once.
//!
//! # Failure handling
//!
//! A failed fetch is logged and leaves its container empty. It never stops
//! the other fetch and never prevents binding: groups whose elements did
//! not arrive simply find nothing to bind.
//!
//! The fetch side ([`FragmentSource`]) and the document side
//! ([`PageSurface`]) are traits so the sequencing can be driven without a
//! browser.

use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

use crate::config::SiteConfig;

/// The two shared page regions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fragment {
    Sidebar,
    Header,
}

impl Fragment {
    pub fn name(self) -> &'static str {
        match self {
            Fragment::Sidebar => "sidebar",
            Fragment::Header => "header",
        }
    }
}

/// Why a fragment could not be fetched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("server answered HTTP {status}")]
    Status { status: u16 },

    #[error("could not read response body: {0}")]
    Body(String),
}

/// Settled result of one fetch
pub type FragmentOutcome = Result<String, FragmentError>;

/// Where fragment HTML comes from
#[async_trait(?Send)]
pub trait FragmentSource {
    async fn fetch(&self, url: &str) -> FragmentOutcome;
}

/// Plain `GET` via `fetch()`, relative URLs resolve against the page
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpFragmentSource;

#[async_trait(?Send)]
impl FragmentSource for HttpFragmentSource {
    async fn fetch(&self, url: &str) -> FragmentOutcome {
        let resp = Request::get(url)
            .send()
            .await
            .map_err(|e| FragmentError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(FragmentError::Status {
                status: resp.status(),
            });
        }

        resp.text()
            .await
            .map_err(|e| FragmentError::Body(e.to_string()))
    }
}

/// Listener groups that depend on fragment content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerGroup {
    Header,
    ClickOutside,
    Settings,
    Modal,
    Chat,
}

impl ListenerGroup {
    pub fn name(self) -> &'static str {
        match self {
            ListenerGroup::Header => "header",
            ListenerGroup::ClickOutside => "click-outside",
            ListenerGroup::Settings => "settings",
            ListenerGroup::Modal => "modal",
            ListenerGroup::Chat => "chat",
        }
    }
}

/// Order in which listener groups are bound
pub const BIND_ORDER: [ListenerGroup; 5] = [
    ListenerGroup::Header,
    ListenerGroup::ClickOutside,
    ListenerGroup::Settings,
    ListenerGroup::Modal,
    ListenerGroup::Chat,
];

/// The document operations the loader sequences
pub trait PageSurface {
    /// Replace the fragment container's content verbatim.
    /// Returns `false` when the page has no container for this fragment.
    fn inject(&self, fragment: Fragment, html: &str) -> bool;

    /// Re-apply the saved user data to whatever placeholders now exist
    fn refresh_user_data(&self);

    /// Mark the sidebar link for the current page
    fn mark_active_link(&self);

    /// Bind one listener group. Returns `false` when its elements are absent.
    fn bind(&self, group: ListenerGroup) -> bool;
}

/// What happened to one fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentStatus {
    Injected,
    /// Fetched, but the page has no placeholder for it
    NoContainer,
    Failed(FragmentError),
}

impl FragmentStatus {
    pub fn is_injected(&self) -> bool {
        matches!(self, FragmentStatus::Injected)
    }
}

/// Summary of one load sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub sidebar: FragmentStatus,
    pub header: FragmentStatus,
    /// Groups that found their elements, in bind order
    pub bound: Vec<ListenerGroup>,
}

/// Fetches both fragments, then binds listeners once
pub struct PartialLoader<S, P> {
    source: S,
    surface: P,
    sidebar_url: String,
    header_url: String,
}

impl<S: FragmentSource, P: PageSurface> PartialLoader<S, P> {
    pub fn new(source: S, surface: P, config: &SiteConfig) -> Self {
        Self {
            source,
            surface,
            sidebar_url: config.sidebar_url.clone(),
            header_url: config.header_url.clone(),
        }
    }

    /// Run the whole sequence. Consumes the loader so binding cannot
    /// happen twice.
    pub async fn load(self) -> LoadReport {
        let (sidebar, header) = futures::join!(
            self.load_fragment(Fragment::Sidebar),
            self.load_fragment(Fragment::Header),
        );

        log::info!("Header and Sidebar settled, adding listeners.");
        let bound = self.bind_listeners();

        LoadReport {
            sidebar,
            header,
            bound,
        }
    }

    fn url(&self, fragment: Fragment) -> &str {
        match fragment {
            Fragment::Sidebar => &self.sidebar_url,
            Fragment::Header => &self.header_url,
        }
    }

    async fn load_fragment(&self, fragment: Fragment) -> FragmentStatus {
        let html = match self.source.fetch(self.url(fragment)).await {
            Ok(html) => html,
            Err(e) => {
                log::error!("Error loading {}: {}", fragment.name(), e);
                return FragmentStatus::Failed(e);
            }
        };

        if !self.surface.inject(fragment, &html) {
            log::warn!("No container for {} on this page", fragment.name());
            return FragmentStatus::NoContainer;
        }

        if fragment == Fragment::Sidebar {
            self.surface.mark_active_link();
        }
        self.surface.refresh_user_data();

        FragmentStatus::Injected
    }

    fn bind_listeners(&self) -> Vec<ListenerGroup> {
        let mut bound = Vec::with_capacity(BIND_ORDER.len());
        for group in BIND_ORDER {
            if self.surface.bind(group) {
                log::debug!("{} listeners added", group.name());
                bound.push(group);
            } else {
                log::debug!("{} listeners skipped, elements not on this page", group.name());
            }
        }
        bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Call {
        Inject(Fragment),
        Refresh,
        MarkActive,
        Bind(ListenerGroup),
    }

    /// Answers each URL with a canned outcome
    struct ScriptedSource {
        responses: HashMap<String, FragmentOutcome>,
    }

    impl ScriptedSource {
        fn new(sidebar: FragmentOutcome, header: FragmentOutcome) -> Self {
            let config = SiteConfig::default();
            let mut responses = HashMap::new();
            responses.insert(config.sidebar_url, sidebar);
            responses.insert(config.header_url, header);
            Self { responses }
        }
    }

    #[async_trait(?Send)]
    impl FragmentSource for ScriptedSource {
        async fn fetch(&self, url: &str) -> FragmentOutcome {
            self.responses
                .get(url)
                .cloned()
                .unwrap_or(Err(FragmentError::Status { status: 404 }))
        }
    }

    /// Records calls; groups only find elements when their fragment arrived
    #[derive(Clone, Default)]
    struct RecordingSurface {
        calls: Rc<RefCell<Vec<Call>>>,
        missing_containers: Vec<Fragment>,
    }

    impl RecordingSurface {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn injected(&self, fragment: Fragment) -> bool {
            self.calls.borrow().contains(&Call::Inject(fragment))
        }
    }

    impl PageSurface for RecordingSurface {
        fn inject(&self, fragment: Fragment, _html: &str) -> bool {
            if self.missing_containers.contains(&fragment) {
                return false;
            }
            self.calls.borrow_mut().push(Call::Inject(fragment));
            true
        }

        fn refresh_user_data(&self) {
            self.calls.borrow_mut().push(Call::Refresh);
        }

        fn mark_active_link(&self) {
            self.calls.borrow_mut().push(Call::MarkActive);
        }

        fn bind(&self, group: ListenerGroup) -> bool {
            self.calls.borrow_mut().push(Call::Bind(group));
            match group {
                ListenerGroup::Header | ListenerGroup::ClickOutside => {
                    self.injected(Fragment::Header)
                }
                _ => true,
            }
        }
    }

    fn ok(html: &str) -> FragmentOutcome {
        Ok(html.to_string())
    }

    fn failed() -> FragmentOutcome {
        Err(FragmentError::Network("connection refused".to_string()))
    }

    fn run(source: ScriptedSource, surface: RecordingSurface) -> LoadReport {
        let loader = PartialLoader::new(source, surface, &SiteConfig::default());
        block_on(loader.load())
    }

    #[test]
    fn test_binding_runs_once_after_both_settle_for_every_outcome_pair() {
        let outcomes = [(true, true), (true, false), (false, true), (false, false)];

        for (sidebar_ok, header_ok) in outcomes {
            let source = ScriptedSource::new(
                if sidebar_ok { ok("<nav></nav>") } else { failed() },
                if header_ok { ok("<header></header>") } else { failed() },
            );
            let surface = RecordingSurface::default();
            run(source, surface.clone());

            let calls = surface.calls();
            let binds: Vec<_> = calls
                .iter()
                .filter_map(|c| match c {
                    Call::Bind(g) => Some(*g),
                    _ => None,
                })
                .collect();
            assert_eq!(binds, BIND_ORDER.to_vec(), "pair {sidebar_ok}/{header_ok}");

            // Nothing fragment-related happens after the first bind
            let first_bind = calls
                .iter()
                .position(|c| matches!(c, Call::Bind(_)))
                .unwrap();
            assert!(calls[first_bind..]
                .iter()
                .all(|c| matches!(c, Call::Bind(_))));
        }
    }

    #[test]
    fn test_header_listeners_bind_when_sidebar_fails() {
        let source = ScriptedSource::new(
            Err(FragmentError::Status { status: 404 }),
            ok("<header></header>"),
        );
        let report = run(source, RecordingSurface::default());

        assert_eq!(
            report.sidebar,
            FragmentStatus::Failed(FragmentError::Status { status: 404 })
        );
        assert!(report.header.is_injected());
        assert_eq!(report.bound.first(), Some(&ListenerGroup::Header));
        assert!(report.bound.contains(&ListenerGroup::ClickOutside));
    }

    #[test]
    fn test_header_failure_skips_header_groups_only() {
        let source = ScriptedSource::new(ok("<nav></nav>"), failed());
        let report = run(source, RecordingSurface::default());

        assert!(report.sidebar.is_injected());
        assert_eq!(
            report.bound,
            vec![
                ListenerGroup::Settings,
                ListenerGroup::Modal,
                ListenerGroup::Chat
            ]
        );
    }

    #[test]
    fn test_user_data_refreshed_after_each_injection() {
        let source = ScriptedSource::new(ok("<nav></nav>"), ok("<header></header>"));
        let surface = RecordingSurface::default();
        run(source, surface.clone());

        let calls = surface.calls();
        for fragment in [Fragment::Sidebar, Fragment::Header] {
            let at = calls
                .iter()
                .position(|c| *c == Call::Inject(fragment))
                .unwrap();
            let refresh = calls[at..].iter().position(|c| *c == Call::Refresh);
            assert!(refresh.is_some(), "{} not followed by refresh", fragment.name());
        }
        assert_eq!(calls.iter().filter(|c| **c == Call::Refresh).count(), 2);
    }

    #[test]
    fn test_active_link_marked_only_when_sidebar_loaded() {
        let surface = RecordingSurface::default();
        run(ScriptedSource::new(failed(), ok("<header></header>")), surface.clone());
        assert!(!surface.calls().contains(&Call::MarkActive));

        let surface = RecordingSurface::default();
        run(ScriptedSource::new(ok("<nav></nav>"), failed()), surface.clone());
        assert!(surface.calls().contains(&Call::MarkActive));
    }

    #[test]
    fn test_missing_container_drops_fragment() {
        let surface = RecordingSurface {
            missing_containers: vec![Fragment::Sidebar],
            ..Default::default()
        };
        let report = run(
            ScriptedSource::new(ok("<nav></nav>"), ok("<header></header>")),
            surface.clone(),
        );

        assert_eq!(report.sidebar, FragmentStatus::NoContainer);
        assert!(report.header.is_injected());
        assert!(!surface.calls().contains(&Call::MarkActive));
        assert_eq!(report.bound.len(), BIND_ORDER.len());
    }

    /// The sidebar response only arrives once the header request is in
    /// flight; a serialized loader would never finish.
    struct GatedSource {
        sidebar_gate: RefCell<Option<oneshot::Receiver<()>>>,
        header_started: RefCell<Option<oneshot::Sender<()>>>,
    }

    #[async_trait(?Send)]
    impl FragmentSource for GatedSource {
        async fn fetch(&self, url: &str) -> FragmentOutcome {
            if url.contains("sidebar") {
                let gate = self.sidebar_gate.borrow_mut().take();
                if let Some(gate) = gate {
                    gate.await
                        .map_err(|e| FragmentError::Network(e.to_string()))?;
                }
                Ok("<nav></nav>".to_string())
            } else {
                if let Some(tx) = self.header_started.borrow_mut().take() {
                    let _ = tx.send(());
                }
                Ok("<header></header>".to_string())
            }
        }
    }

    #[test]
    fn test_fetches_run_concurrently() {
        let (tx, rx) = oneshot::channel();
        let source = GatedSource {
            sidebar_gate: RefCell::new(Some(rx)),
            header_started: RefCell::new(Some(tx)),
        };
        let surface = RecordingSurface::default();
        let loader = PartialLoader::new(source, surface.clone(), &SiteConfig::default());

        let report = block_on(loader.load());

        assert!(report.sidebar.is_injected());
        assert!(report.header.is_injected());
        // Header finished first even though the sidebar was issued first
        let injects: Vec<_> = surface
            .calls()
            .into_iter()
            .filter(|c| matches!(c, Call::Inject(_)))
            .collect();
        assert_eq!(
            injects,
            vec![Call::Inject(Fragment::Header), Call::Inject(Fragment::Sidebar)]
        );
    }
}

use crate::config::SiteConfig;
use crate::page::PageId;
use std::path::{Path, PathBuf};

pub mod create;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod nav;
pub mod rename;

/// Resolved locations of the three artifact targets inside one site root.
#[derive(Debug, Clone)]
pub struct SitePaths {
    root: PathBuf,
    pub app: String,
    pub template_ext: String,
    handlers_file: PathBuf,
    routes_file: PathBuf,
    templates_dir: PathBuf,
}

impl SitePaths {
    pub fn new(root: PathBuf, config: &SiteConfig) -> Self {
        Self {
            handlers_file: root.join(&config.handlers_file),
            routes_file: root.join(&config.routes_file),
            templates_dir: root.join(&config.templates_dir),
            app: config.app.clone(),
            template_ext: config.template_ext.clone(),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Handler registry file (e.g. `src/handlers.rs`).
    pub fn handlers_file(&self) -> &Path {
        &self.handlers_file
    }

    /// Route registry file (e.g. `src/routes.rs`).
    pub fn routes_file(&self) -> &Path {
        &self.routes_file
    }

    /// Per-application template directory (`<templates>/<app>`), the
    /// directory whose contents define the page set.
    pub fn app_templates_dir(&self) -> PathBuf {
        self.templates_dir.join(&self.app)
    }

    /// On-disk template file for a page id.
    pub fn template_file(&self, id: &PageId) -> PathBuf {
        let mut path = self.app_templates_dir();
        if let Some(parent) = id.parent() {
            for segment in parent.split('/') {
                path.push(segment);
            }
        }
        path.push(format!("{}{}", id.leaf(), self.template_ext));
        path
    }

    /// Template path as referenced from inside templates (`app/....html`).
    pub fn template_ref(&self, id: &PageId) -> String {
        id.template_ref(&self.app, &self.template_ext)
    }

    /// Base layout as referenced from inside templates (`app/base.html`).
    pub fn base_ref(&self) -> String {
        format!("{}/base{}", self.app, self.template_ext)
    }

    fn fragment_file(&self, name: &str) -> PathBuf {
        self.app_templates_dir()
            .join(format!("{}{}", name, self.template_ext))
    }

    /// Base layout file. Never a page.
    pub fn base_template(&self) -> PathBuf {
        self.fragment_file("base")
    }

    /// Navigation fragment file owning the marker-delimited block.
    pub fn nav_template(&self) -> PathBuf {
        self.fragment_file("nav")
    }

    pub fn footer_template(&self) -> PathBuf {
        self.fragment_file("footer")
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A page paired with its 1-based position in the sorted listing. The
/// position is what index selectors resolve against.
#[derive(Debug, Clone)]
pub struct ListedPage {
    pub index: usize,
    pub id: PageId,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Pages whose artifacts were touched by the command.
    pub affected_pages: Vec<PageId>,
    pub listed_pages: Vec<ListedPage>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_pages(mut self, pages: Vec<ListedPage>) -> Self {
        self.listed_pages = pages;
        self
    }

    /// Folds another result into this one, preserving message order.
    pub fn merge(&mut self, other: CmdResult) {
        self.affected_pages.extend(other.affected_pages);
        self.listed_pages.extend(other.listed_pages);
        self.messages.extend(other.messages);
    }
}

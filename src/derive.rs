//! The page derivation pipeline.
//!
//! Takes the works template text and a [`PageSpec`] and produces the derived
//! page text through a fixed sequence of textual substitutions:
//!
//! 1. Title tag → page title
//! 2. Works navbar → four-link navbar with one highlighted entry
//! 3. Article heading → page title
//! 4. Filter-buttons block removed
//! 5. Grid class → composite class for the page's item type
//! 6. Extra style block injected before `</style>` (if any)
//! 7. Filter-logic script removed; works loader replaced by a
//!    single-type loader
//! 8. On-load filter trigger removed
//!
//! Every stage is a pure `&str -> Option<String>` transform: `Some` with the
//! edited text when its marker matched, `None` when absent. Derivation is a
//! pure function of (base document, spec) — no stage looks at a previously
//! derived page, and deriving twice is byte-identical.
//!
//! ## Missing markers
//!
//! A stage whose marker is absent from the base document is a silent no-op,
//! matching the original behavior of the tool: the page degrades to a
//! partial edit rather than failing the build. [`derive_page`] records which
//! stages applied in a [`DeriveReport`] so the `check` command and
//! `build --strict` can surface drift between this tool's literals and the
//! template without changing the default output.

use crate::pages::{ItemType, PAGES, PageSpec};
use regex::{NoExpand, Regex};
use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeriveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{page}: no match for {stage} substitution in base document")]
    MissingMatch {
        stage: &'static str,
        page: &'static str,
    },
}

/// Title tag of the works page.
const TITLE_OLD: &str = "<title>My Works - Sridhar Portfolio</title>";

/// Article heading of the works page.
const HEADING_OLD: &str = r#"<h2 class="h2 article-title">My Works</h2>"#;

/// Grid class attribute as it appears on the works page.
const GRID_CLASS_OLD: &str = r#"class="projects-grid""#;

/// The two-link navbar of the works page. Must match the template byte for
/// byte, indentation included.
const NAV_OLD: &str = r#"            <nav class="navbar">
                <ul class="navbar-list">
                    <li class="navbar-item">
                        <a href="index.html" class="navbar-link" aria-label="Home">
                            <ion-icon name="home-outline"></ion-icon>
                        </a>
                    </li>
                    <li class="navbar-separator"></li>
                    <li class="navbar-item">
                        <a href="works.html" class="navbar-link active" aria-label="Works">
                            <ion-icon name="briefcase-outline"></ion-icon>
                        </a>
                    </li>
                </ul>
            </nav>"#;

/// Replacement navbar linking all three derived pages. The `{P_ACTIVE}`,
/// `{G_ACTIVE}`, `{M_ACTIVE}` placeholders take the spec's highlight flags.
const NAV_NEW: &str = r#"            <nav class="navbar" style="bottom: auto; top: 0; width: 100%; position: sticky;">
                <ul class="navbar-list" style="justify-content: center;">
                    <li class="navbar-item">
                        <a href="index.html" class="navbar-link" aria-label="Home" title="Home">
                            <ion-icon name="home-outline"></ion-icon>
                        </a>
                    </li>
                    <li class="navbar-separator"></li>
                    <li class="navbar-item">
                        <a href="projects.html" class="navbar-link {P_ACTIVE}" aria-label="Projects" title="Projects">
                            <ion-icon name="laptop-outline"></ion-icon>
                        </a>
                    </li>
                    <li class="navbar-separator"></li>
                    <li class="navbar-item">
                        <a href="gallery.html" class="navbar-link {G_ACTIVE}" aria-label="Gallery" title="Photo Gallery">
                            <ion-icon name="camera-outline"></ion-icon>
                        </a>
                    </li>
                    <li class="navbar-separator"></li>
                    <li class="navbar-item">
                        <a href="media.html" class="navbar-link {M_ACTIVE}" aria-label="Media Output" title="Media">
                            <ion-icon name="videocam-outline"></ion-icon>
                        </a>
                    </li>
                </ul>
            </nav>"#;

// Bounded script/markup regions. All patterns are single-line-flag DOTALL
// with non-greedy bodies: the region ends at the first end marker after the
// start marker.
static FILTER_BUTTONS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)<div class="filter-buttons">.*?</div>"#).unwrap());
static FILTER_LOGIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)// Filter Logic.*?// Initial Load").unwrap());
static WORKS_LOADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)// Fetch works.*?// Render works").unwrap());
static LOAD_TRIGGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)// Auto-trigger project filter on load.*?\}\);").unwrap());

/// Replace every occurrence of an exact literal, or `None` if absent.
fn replace_literal(doc: &str, needle: &str, replacement: &str) -> Option<String> {
    doc.contains(needle)
        .then(|| doc.replace(needle, replacement))
}

/// Replace the first region matched by `re`, or `None` if it never matches.
fn replace_region(doc: &str, re: &Regex, replacement: &str) -> Option<String> {
    match re.replace(doc, NoExpand(replacement)) {
        Cow::Borrowed(_) => None,
        Cow::Owned(edited) => Some(edited),
    }
}

/// Stage 1: retitle the page.
pub fn substitute_title(doc: &str, title: &str) -> Option<String> {
    let new = format!("<title>{title} - Sridhar Portfolio</title>");
    replace_literal(doc, TITLE_OLD, &new)
}

/// Stage 2: swap the works navbar for the four-link navbar, highlighting
/// the link the spec's flags mark.
pub fn substitute_nav(doc: &str, spec: &PageSpec) -> Option<String> {
    let nav = NAV_NEW
        .replace("{P_ACTIVE}", spec.p_active)
        .replace("{G_ACTIVE}", spec.g_active)
        .replace("{M_ACTIVE}", spec.m_active);
    replace_literal(doc, NAV_OLD, &nav)
}

/// Stage 3: retitle the article heading.
pub fn substitute_heading(doc: &str, title: &str) -> Option<String> {
    let new = format!(r#"<h2 class="h2 article-title">{title}</h2>"#);
    replace_literal(doc, HEADING_OLD, &new)
}

/// Stage 4: strip the interactive filter control. Derived pages show a
/// single item type, so the buttons have nothing to select.
pub fn remove_filter_buttons(doc: &str) -> Option<String> {
    replace_region(doc, &FILTER_BUTTONS_RE, "")
}

/// Stage 5: widen the grid class to the item type's composite class.
pub fn substitute_grid_class(doc: &str, item_type: ItemType) -> Option<String> {
    let new = format!(r#"class="{}""#, item_type.grid_class());
    replace_literal(doc, GRID_CLASS_OLD, &new)
}

/// Stage 6: insert the spec's extra style rules just before `</style>`.
pub fn inject_style(doc: &str, extra_style: &str) -> Option<String> {
    let new = format!("{extra_style}\n    </style>");
    replace_literal(doc, "</style>", &new)
}

/// Stage 7a: remove the multi-type filter logic, keeping the initial-load
/// marker that follows it.
pub fn remove_filter_logic(doc: &str) -> Option<String> {
    replace_region(doc, &FILTER_LOGIC_RE, "// Initial Load")
}

/// The single-type `loadWorks()` emitted into each derived page. Calls the
/// same `getWorks()` the works page uses, keeps only items whose `type`
/// matches, and on failure writes a visible fallback into the grid.
fn works_loader(spec: &PageSpec) -> String {
    let title = spec.title;
    let tag = spec.item_type.tag();
    let fallback = title.to_lowercase();
    format!(
        "// Auto Filtering for {title}
        function loadWorks() {{
            try {{
                allWorks = getWorks();
                renderWorks(allWorks.filter(w => w.type === '{tag}'));
            }} catch (err) {{
                console.error('Failed to load {tag}', err);
                worksGrid.innerHTML = '<p style=\"color:var(--white-1);\">Failed to load {fallback}.</p>';
            }}
        }}
    "
    )
}

/// Stage 7b: swap the fetch-everything loader for the single-type loader,
/// keeping the render marker that closes the region.
pub fn replace_works_loader(doc: &str, spec: &PageSpec) -> Option<String> {
    let new = format!("{}\n        // Render works", works_loader(spec));
    replace_region(doc, &WORKS_LOADER_RE, &new)
}

/// Stage 8: remove the on-load trigger of the original multi-type filter,
/// through the end of its statement block.
pub fn remove_load_trigger(doc: &str) -> Option<String> {
    replace_region(doc, &LOAD_TRIGGER_RE, "")
}

/// Which stages applied to a derived page and which found no marker.
///
/// Bookkeeping only — the derived text is identical whether or not anyone
/// looks at the report.
#[derive(Debug, Default, Clone, Serialize)]
pub struct DeriveReport {
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
}

impl DeriveReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

struct Deriver {
    doc: String,
    report: DeriveReport,
}

impl Deriver {
    fn new(base: &str) -> Self {
        Deriver {
            doc: base.to_string(),
            report: DeriveReport::default(),
        }
    }

    fn step(&mut self, stage: &'static str, f: impl FnOnce(&str) -> Option<String>) {
        match f(&self.doc) {
            Some(edited) => {
                self.doc = edited;
                self.report.applied.push(stage);
            }
            None => self.report.skipped.push(stage),
        }
    }
}

/// Derive one page from the base document.
///
/// Stages run in fixed order; each operates on the cumulative result of the
/// ones before it. Missing markers are silent no-ops, recorded in the report.
pub fn derive_page(base: &str, spec: &PageSpec) -> (String, DeriveReport) {
    let mut d = Deriver::new(base);
    d.step("title", |doc| substitute_title(doc, spec.title));
    d.step("navbar", |doc| substitute_nav(doc, spec));
    d.step("heading", |doc| substitute_heading(doc, spec.title));
    d.step("filter-buttons", remove_filter_buttons);
    d.step("grid-class", |doc| substitute_grid_class(doc, spec.item_type));
    if !spec.extra_style.is_empty() {
        d.step("extra-style", |doc| inject_style(doc, spec.extra_style));
    }
    d.step("filter-logic", remove_filter_logic);
    d.step("works-loader", |doc| replace_works_loader(doc, spec));
    d.step("load-trigger", remove_load_trigger);
    (d.doc, d.report)
}

/// Like [`derive_page`], but errors on the first stage whose marker is
/// absent instead of degrading to a partial edit.
pub fn derive_page_strict(
    base: &str,
    spec: &PageSpec,
) -> Result<(String, DeriveReport), DeriveError> {
    let (doc, report) = derive_page(base, spec);
    if let Some(&stage) = report.skipped.first() {
        return Err(DeriveError::MissingMatch {
            stage,
            page: spec.file_name,
        });
    }
    Ok((doc, report))
}

/// Derive all three pages from `base` and write them under `out_dir`,
/// overwriting existing files. UTF-8 in, UTF-8 out.
pub fn build(
    base: &str,
    out_dir: &Path,
    strict: bool,
) -> Result<Vec<(&'static PageSpec, DeriveReport)>, DeriveError> {
    let mut results = Vec::with_capacity(PAGES.len());
    for spec in &PAGES {
        let (doc, report) = if strict {
            derive_page_strict(base, spec)?
        } else {
            derive_page(base, spec)
        };
        fs::write(out_dir.join(spec.file_name), doc)?;
        results.push((spec, report));
    }
    Ok(results)
}

/// Dry-run all three derivations, reporting marker coverage without writing
/// anything.
pub fn check(base: &str) -> Vec<(&'static PageSpec, DeriveReport)> {
    PAGES
        .iter()
        .map(|spec| {
            let (_, report) = derive_page(base, spec);
            (spec, report)
        })
        .collect()
}

//! # works-pages
//!
//! Derives the per-category pages of a portfolio site — projects, gallery,
//! media — from its hand-maintained works page. The works template is read
//! once, and each derived page is the result of a fixed pipeline of textual
//! substitutions over that one document: retitle, swap the navbar, strip the
//! interactive filter UI, widen the grid class, inject page-specific styles,
//! and narrow the embedded script to a single work-item type.
//!
//! The template is treated as opaque text. There is no DOM, no template
//! engine, and no requirement that a substitution succeeds: a marker the
//! template no longer contains is a silent no-op, exactly as the page author
//! expects when hand-editing the works page. The `check` command and
//! `build --strict` exist to surface that drift when you want to know.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pages`] | The static table of derived pages (`PageSpec`, `ItemType`) |
//! | [`derive`] | The ordered substitution pipeline and file writing |
//! | [`output`] | CLI output formatting and the `check` report |
//!
//! # Design Decisions
//!
//! ## Exact Literals Over Parsing
//!
//! Every substitution targets an exact substring or a pair of comment
//! markers in the template. Parsing the HTML would buy nothing here: the
//! template and this tool are maintained together, and the literals *are*
//! the contract between them.
//!
//! ## Best-Effort By Default, Strict On Demand
//!
//! Missing markers never fail a default build — the derived page degrades to
//! a partial edit. Each stage still records whether it applied, so strict
//! builds and the `check` dry run can turn the same bookkeeping into hard
//! errors for CI.

pub mod derive;
pub mod output;
pub mod pages;

//! The static page table.
//!
//! The three derived pages are fixed: there is no configuration surface, so
//! the parameters live here as one literal row per page. Adding a fourth
//! derived page means adding a row, not a new call site.

use serde::Serialize;

/// Classification of the work items a derived page shows.
///
/// Selects both the grid modifier class injected into the markup and the
/// `type` value the generated loader filters the work-item collection on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Project,
    Gallery,
    Output,
}

impl ItemType {
    /// The `type` field value carried by matching work-item records.
    pub fn tag(self) -> &'static str {
        match self {
            ItemType::Project => "project",
            ItemType::Gallery => "gallery",
            ItemType::Output => "output",
        }
    }

    /// Composite class for the works grid: the base class plus a
    /// type-specific modifier. Project pages keep the base grid as-is.
    pub fn grid_class(self) -> &'static str {
        match self {
            ItemType::Project => "projects-grid",
            ItemType::Gallery => "projects-grid gallery-grid",
            ItemType::Output => "projects-grid media-grid",
        }
    }
}

/// Parameters for one derived page.
///
/// The navbar highlight flags map one-to-one onto the `{P_ACTIVE}`,
/// `{G_ACTIVE}`, `{M_ACTIVE}` placeholders in the replacement navbar:
/// `"active"` marks that link, `""` leaves it unmarked.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    /// Output file name, relative to the output directory.
    pub file_name: &'static str,
    /// Display title, used in the `<title>` tag, the article heading, and
    /// the generated loader's fallback message (lowercased there).
    pub title: &'static str,
    pub item_type: ItemType,
    pub p_active: &'static str,
    pub g_active: &'static str,
    pub m_active: &'static str,
    /// Extra CSS inserted before the closing `</style>`. Empty = none.
    pub extra_style: &'static str,
}

/// Masonry-like treatment for the gallery page: denser columns, taller
/// images, zoom on hover.
const GALLERY_STYLE: &str = "
        .gallery-grid {
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
            gap: 20px;
        }
        .gallery-grid .project-card {
            border-radius: 12px;
            overflow: hidden;
        }
        .gallery-grid .project-image {
            height: 300px; /* Taller images for gallery */
        }
        .gallery-grid .project-image img {
            transition: transform 0.4s ease;
        }
        .gallery-grid .project-card:hover .project-image img {
            transform: scale(1.1);
        }
";

/// Video-focused treatment for the media page.
const MEDIA_STYLE: &str = "
        .media-grid .project-card {
            background: var(--bg-gradient-jet);
            border: 1px solid var(--orange-yellow-crayola);
        }
        .media-grid .project-image {
            height: 250px;
        }
        .media-grid .project-image video {
            width: 100%;
            height: 100%;
            object-fit: cover;
            border-bottom: 2px solid var(--orange-yellow-crayola);
        }
";

/// The three pages derived from the works template.
pub static PAGES: [PageSpec; 3] = [
    PageSpec {
        file_name: "projects.html",
        title: "Projects",
        item_type: ItemType::Project,
        p_active: "active",
        g_active: "",
        m_active: "",
        extra_style: "",
    },
    PageSpec {
        file_name: "gallery.html",
        title: "Photo Gallery",
        item_type: ItemType::Gallery,
        p_active: "",
        g_active: "active",
        m_active: "",
        extra_style: GALLERY_STYLE,
    },
    PageSpec {
        file_name: "media.html",
        title: "Media Output",
        item_type: ItemType::Output,
        p_active: "",
        g_active: "",
        m_active: "active",
        extra_style: MEDIA_STYLE,
    },
];

//! `sidebar` navigation tree.
//!
//! Entries are either plain slugs or tables; tables are told apart by the
//! keys they carry.
//!
//! # Example
//!
//! ```toml
//! sidebar = [
//!     "getting-started",
//!     { label = "Packages", items = ["packages/database", "packages/httpserver"] },
//!     { label = "Reference", autogenerate = { directory = "reference" }, collapsed = true },
//!     { label = "GitHub", link = "https://github.com/mishankov/platforma" },
//! ]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Slug prefix under which package documentation lives.
pub const PACKAGES_PREFIX: &str = "packages/";

/// Page extensions the content tree may use.
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

// ============================================================================
// types
// ============================================================================

/// One node of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    /// Shorthand page reference, e.g. `"packages/database"`.
    Slug(String),
    Group(NavGroup),
    Autogenerate(AutogenerateGroup),
    Link(NavLink),
    Page(NavPage),
}

/// Labelled group of nested entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavGroup {
    pub label: String,
    pub items: Vec<NavEntry>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub collapsed: bool,
}

/// Group whose items are derived from a content directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutogenerateGroup {
    pub label: String,
    pub autogenerate: AutogenerateSource,
    #[serde(default, skip_serializing_if = "is_false")]
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutogenerateSource {
    /// Directory relative to the content root.
    pub directory: String,
}

/// External or absolute link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub link: String,
}

/// Page reference with an optional label override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavPage {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ============================================================================
// constructors & accessors
// ============================================================================

impl NavEntry {
    pub fn slug(slug: impl Into<String>) -> Self {
        Self::Slug(slug.into())
    }

    /// Reference to the docs page of a framework package.
    pub fn package(name: &str) -> Self {
        Self::Slug(format!("{PACKAGES_PREFIX}{name}"))
    }

    pub fn page(slug: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Page(NavPage {
            slug: slug.into(),
            label: Some(label.into()),
        })
    }

    pub fn link(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link(NavLink {
            label: label.into(),
            link: link.into(),
        })
    }

    pub fn group(label: impl Into<String>, items: impl IntoIterator<Item = NavEntry>) -> Self {
        Self::Group(NavGroup {
            label: label.into(),
            items: items.into_iter().collect(),
            collapsed: false,
        })
    }

    pub fn autogenerate(label: impl Into<String>, directory: impl Into<String>) -> Self {
        Self::Autogenerate(AutogenerateGroup {
            label: label.into(),
            autogenerate: AutogenerateSource {
                directory: directory.into(),
            },
            collapsed: false,
        })
    }

    /// Page slug for leaf references.
    pub fn page_slug(&self) -> Option<&str> {
        match self {
            Self::Slug(slug) => Some(slug),
            Self::Page(page) => Some(&page.slug),
            _ => None,
        }
    }

    /// Key that must be unique among siblings: the label, or the slug for
    /// unlabelled page references.
    pub fn sibling_key(&self) -> &str {
        match self {
            Self::Slug(slug) => slug,
            Self::Page(page) => page.label.as_deref().unwrap_or(&page.slug),
            Self::Link(link) => &link.label,
            Self::Group(group) => &group.label,
            Self::Autogenerate(group) => &group.label,
        }
    }

    /// Nested entries of a group (empty for everything else).
    pub fn children(&self) -> &[NavEntry] {
        match self {
            Self::Group(group) => &group.items,
            _ => &[],
        }
    }

    pub fn is_package_reference(&self) -> bool {
        self.page_slug()
            .is_some_and(|slug| slug.starts_with(PACKAGES_PREFIX))
    }
}

/// Entry counts of a navigation tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarStats {
    pub pages: usize,
    pub packages: usize,
    pub links: usize,
    pub groups: usize,
}

/// Count entries across the whole tree.
pub fn stats(entries: &[NavEntry]) -> SidebarStats {
    let mut stats = SidebarStats::default();
    walk(entries, &mut |entry: &NavEntry| match entry {
        NavEntry::Slug(_) | NavEntry::Page(_) => {
            stats.pages += 1;
            if entry.is_package_reference() {
                stats.packages += 1;
            }
        }
        NavEntry::Link(_) => stats.links += 1,
        NavEntry::Group(_) | NavEntry::Autogenerate(_) => stats.groups += 1,
    });
    stats
}

/// Depth-first visit of every entry.
fn walk<'a>(entries: &'a [NavEntry], visit: &mut impl FnMut(&'a NavEntry)) {
    for entry in entries {
        visit(entry);
        walk(entry.children(), visit);
    }
}

// ============================================================================
// validation
// ============================================================================

/// Validate the navigation tree.
///
/// # Checks
/// - sibling labels are unique at every level
/// - slugs and autogenerate directories are well-formed relative paths
/// - groups and labels are not empty
/// - links are absolute paths or valid URLs
/// - package references name a known package when `packages` is non-empty
pub fn validate(entries: &[NavEntry], packages: &[String], diag: &mut ConfigDiagnostics) {
    validate_level(entries, &FieldPath::new("sidebar"), packages, diag);
}

fn validate_level(
    entries: &[NavEntry],
    parent: &FieldPath,
    packages: &[String],
    diag: &mut ConfigDiagnostics,
) {
    let mut seen = FxHashSet::default();

    for (i, entry) in entries.iter().enumerate() {
        let field = parent.index(i);

        let key = entry.sibling_key();
        if !key.trim().is_empty() && !seen.insert(key) {
            diag.error_with_hint(
                field.clone(),
                format!("duplicate sibling label `{key}`"),
                "labels must be unique within a group",
            );
        }

        match entry {
            NavEntry::Slug(slug) => validate_slug(slug, &field, packages, diag),
            NavEntry::Page(page) => {
                validate_slug(&page.slug, &field.key("slug"), packages, diag);
                if page.label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                    diag.error(field.key("label"), "label must not be empty");
                }
            }
            NavEntry::Link(link) => {
                validate_label(&link.label, &field, diag);
                validate_link(&link.link, &field.key("link"), diag);
            }
            NavEntry::Group(group) => {
                validate_label(&group.label, &field, diag);
                if group.items.is_empty() {
                    diag.error_with_hint(
                        field.key("items"),
                        format!("group `{}` has no items", group.label),
                        "add entries or remove the group",
                    );
                }
                validate_level(&group.items, &field.key("items"), packages, diag);
            }
            NavEntry::Autogenerate(group) => {
                validate_label(&group.label, &field, diag);
                let dir_field = field.key("autogenerate").key("directory");
                if let Err(reason) = check_relative_path(&group.autogenerate.directory) {
                    diag.error(dir_field, format!("invalid directory: {reason}"));
                }
            }
        }
    }
}

fn validate_label(label: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if label.trim().is_empty() {
        diag.error(field.key("label"), "label must not be empty");
    }
}

fn validate_slug(slug: &str, field: &FieldPath, packages: &[String], diag: &mut ConfigDiagnostics) {
    if let Err(reason) = check_relative_path(slug) {
        diag.error_with_hint(
            field.clone(),
            format!("invalid slug `{slug}`: {reason}"),
            "use a path relative to the content root, e.g.: \"guides/intro\"",
        );
        return;
    }

    if slug.chars().any(char::is_uppercase) {
        diag.warn(field.clone(), format!("slug `{slug}` contains uppercase characters"));
    }

    if let Some(name) = slug.strip_prefix(PACKAGES_PREFIX)
        && !packages.is_empty()
        && !packages.iter().any(|p| p == name)
    {
        diag.error_with_hint(
            field.clone(),
            format!("unknown package `{name}`"),
            format!("known packages: {}", packages.join(", ")),
        );
    }
}

fn validate_link(link: &str, field: &FieldPath, diag: &mut ConfigDiagnostics) {
    if link.starts_with('/') {
        return;
    }
    if let Err(e) = url::Url::parse(link) {
        diag.error_with_hint(
            field.clone(),
            format!("invalid link `{link}`: {e}"),
            "use an absolute path (\"/guides/\") or a full URL",
        );
    }
}

/// Check that `path` is a clean relative path: no leading or trailing `/`,
/// no whitespace, no empty, `.` or `..` segments.
fn check_relative_path(path: &str) -> Result<(), &'static str> {
    if path.is_empty() {
        return Err("must not be empty");
    }
    if path.starts_with('/') {
        return Err("must be relative (no leading `/`)");
    }
    if path.ends_with('/') {
        return Err("must not end with `/`");
    }
    if path.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace");
    }
    if path.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
        return Err("contains an empty, `.` or `..` segment");
    }
    Ok(())
}

// ============================================================================
// content resolution
// ============================================================================

/// Check every page reference against the content tree rooted at `content_dir`.
///
/// A slug resolves when one of `<slug>.md`, `<slug>.mdx`, `<slug>/index.md`
/// or `<slug>/index.mdx` exists. Autogenerate directories must exist.
pub fn resolve(entries: &[NavEntry], content_dir: &Path, diag: &mut ConfigDiagnostics) {
    resolve_level(entries, &FieldPath::new("sidebar"), content_dir, diag);
}

fn resolve_level(
    entries: &[NavEntry],
    parent: &FieldPath,
    content_dir: &Path,
    diag: &mut ConfigDiagnostics,
) {
    for (i, entry) in entries.iter().enumerate() {
        let field = parent.index(i);
        match entry {
            NavEntry::Slug(slug) => resolve_slug(slug, &field, content_dir, diag),
            NavEntry::Page(page) => resolve_slug(&page.slug, &field.key("slug"), content_dir, diag),
            NavEntry::Group(group) => {
                resolve_level(&group.items, &field.key("items"), content_dir, diag);
            }
            NavEntry::Autogenerate(group) => {
                let dir = content_dir.join(&group.autogenerate.directory);
                if !dir.is_dir() {
                    diag.error(
                        field.key("autogenerate").key("directory"),
                        format!("directory `{}` not found", dir.display()),
                    );
                }
            }
            NavEntry::Link(_) => {}
        }
    }
}

fn resolve_slug(slug: &str, field: &FieldPath, content_dir: &Path, diag: &mut ConfigDiagnostics) {
    if page_file(content_dir, slug).is_none() {
        diag.error_with_hint(
            field.clone(),
            format!("no page for slug `{slug}`"),
            format!(
                "create {}/{slug}.md or {}/{slug}/index.md",
                content_dir.display(),
                content_dir.display()
            ),
        );
    }
}

/// Locate the source file backing `slug`.
pub fn page_file(content_dir: &Path, slug: &str) -> Option<std::path::PathBuf> {
    let flat = PAGE_EXTENSIONS
        .iter()
        .map(|ext| content_dir.join(format!("{slug}.{ext}")));
    let index = PAGE_EXTENSIONS
        .iter()
        .map(|ext| content_dir.join(slug).join(format!("index.{ext}")));
    flat.chain(index).find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(toml: &str) -> Vec<NavEntry> {
        #[derive(Deserialize)]
        struct Wrapper {
            sidebar: Vec<NavEntry>,
        }
        toml::from_str::<Wrapper>(toml).unwrap().sidebar
    }

    fn errors(entries: &[NavEntry], packages: &[String]) -> Vec<String> {
        let mut diag = ConfigDiagnostics::new();
        validate(entries, packages, &mut diag);
        diag.errors()
            .iter()
            .map(|e| e.field.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_parse_all_variants() {
        let entries = parse(
            r#"
            sidebar = [
                "getting-started",
                { slug = "guides/intro", label = "Intro" },
                { label = "Packages", items = ["packages/database"], collapsed = true },
                { label = "Reference", autogenerate = { directory = "reference" } },
                { label = "GitHub", link = "https://github.com/mishankov/platforma" },
            ]
            "#,
        );

        assert_eq!(entries[0], NavEntry::slug("getting-started"));
        assert_eq!(entries[1], NavEntry::page("guides/intro", "Intro"));
        assert!(matches!(&entries[2], NavEntry::Group(g) if g.collapsed && g.items.len() == 1));
        assert_eq!(entries[3], NavEntry::autogenerate("Reference", "reference"));
        assert_eq!(
            entries[4],
            NavEntry::link("GitHub", "https://github.com/mishankov/platforma")
        );
    }

    #[test]
    fn test_slug_table_form() {
        let entries = parse("[[sidebar]]\nslug = \"getting-started\"");
        assert_eq!(entries[0].page_slug(), Some("getting-started"));
        assert!(matches!(entries[0], NavEntry::Page(NavPage { label: None, .. })));
    }

    #[test]
    fn test_unknown_entry_shape_rejected() {
        #[derive(Deserialize)]
        #[allow(dead_code)]
        struct Wrapper {
            sidebar: Vec<NavEntry>,
        }
        let result = toml::from_str::<Wrapper>("sidebar = [{ label = \"X\", items = [], bogus = 1 }]");
        assert!(result.is_err());
        let result = toml::from_str::<Wrapper>("sidebar = [42]");
        assert!(result.is_err());
    }

    #[test]
    fn test_valid_tree() {
        let entries = vec![
            NavEntry::slug("getting-started"),
            NavEntry::group(
                "Packages",
                [NavEntry::package("database"), NavEntry::package("queue")],
            ),
        ];
        assert!(errors(&entries, &[]).is_empty());
    }

    #[test]
    fn test_duplicate_sibling_labels() {
        let entries = vec![
            NavEntry::group("Packages", [NavEntry::package("database")]),
            NavEntry::group("Packages", [NavEntry::package("queue")]),
        ];
        assert_eq!(errors(&entries, &[]), vec!["sidebar[1]"]);
    }

    #[test]
    fn test_same_label_in_different_groups_is_fine() {
        let entries = vec![
            NavEntry::group("A", [NavEntry::page("a/intro", "Intro")]),
            NavEntry::group("B", [NavEntry::page("b/intro", "Intro")]),
        ];
        assert!(errors(&entries, &[]).is_empty());
    }

    #[test]
    fn test_duplicate_nested_slug() {
        let entries = vec![NavEntry::group(
            "Packages",
            [NavEntry::package("database"), NavEntry::package("database")],
        )];
        assert_eq!(errors(&entries, &[]), vec!["sidebar[0].items[1]"]);
    }

    #[test]
    fn test_malformed_slugs() {
        for slug in ["", "/abs", "trailing/", "a//b", "../up", "with space"] {
            assert_eq!(
                errors(&[NavEntry::slug(slug)], &[]),
                vec!["sidebar[0]"],
                "slug {slug:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_uppercase_slug_warns() {
        let mut diag = ConfigDiagnostics::new();
        validate(&[NavEntry::slug("Guides/Intro")], &[], &mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_empty_group() {
        let entries = vec![NavEntry::group("Empty", [])];
        assert_eq!(errors(&entries, &[]), vec!["sidebar[0].items"]);
    }

    #[test]
    fn test_links() {
        let entries = vec![
            NavEntry::link("Home", "/"),
            NavEntry::link("Repo", "https://github.com/mishankov/platforma"),
            NavEntry::link("Broken", "not a url"),
            NavEntry::link("", "/empty-label"),
        ];
        assert_eq!(
            errors(&entries, &[]),
            vec!["sidebar[2].link", "sidebar[3].label"]
        );
    }

    #[test]
    fn test_unknown_package() {
        let packages = vec!["database".to_string(), "queue".to_string()];
        let entries = vec![NavEntry::group(
            "Packages",
            [NavEntry::package("database"), NavEntry::package("cache")],
        )];
        let mut diag = ConfigDiagnostics::new();
        validate(&entries, &packages, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("cache"));
    }

    #[test]
    fn test_stats() {
        let entries = vec![
            NavEntry::slug("getting-started"),
            NavEntry::link("Repo", "https://github.com/mishankov/platforma"),
            NavEntry::group(
                "Packages",
                [
                    NavEntry::package("database"),
                    NavEntry::group("Servers", [NavEntry::package("httpserver")]),
                ],
            ),
        ];
        assert_eq!(
            stats(&entries),
            SidebarStats {
                pages: 3,
                packages: 2,
                links: 1,
                groups: 2,
            }
        );
    }

    #[test]
    fn test_resolve_against_content_tree() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("packages/queue")).unwrap();
        fs::create_dir_all(root.join("reference")).unwrap();
        fs::write(root.join("getting-started.md"), "# hi").unwrap();
        fs::write(root.join("packages/database.mdx"), "# db").unwrap();
        fs::write(root.join("packages/queue/index.md"), "# q").unwrap();

        let entries = vec![
            NavEntry::slug("getting-started"),
            NavEntry::group(
                "Packages",
                [
                    NavEntry::package("database"),
                    NavEntry::package("queue"),
                    NavEntry::package("scheduler"),
                ],
            ),
            NavEntry::autogenerate("Reference", "reference"),
            NavEntry::autogenerate("Missing", "missing"),
        ];

        let mut diag = ConfigDiagnostics::new();
        resolve(&entries, root, &mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["sidebar[1].items[2]", "sidebar[3].autogenerate.directory"]
        );
    }

    #[test]
    fn test_page_file_prefers_flat_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("guide")).unwrap();
        fs::write(dir.path().join("guide.md"), "").unwrap();
        fs::write(dir.path().join("guide/index.md"), "").unwrap();
        assert_eq!(
            page_file(dir.path(), "guide"),
            Some(dir.path().join("guide.md"))
        );
    }
}

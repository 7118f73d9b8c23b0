//! Navigation menu state machine.
//!
//! Tracks the scroll-reactive header (full vs compact), the single-open
//! dropdown per surface, and the mobile overlay. While the overlay is
//! open a [`ScrollLock`] is held; the lock is released on every exit
//! path, including dropping the whole [`MenuState`], because the guard
//! releases in its `Drop` impl.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Scroll offset (px) above which the desktop header collapses.
pub const SCROLL_COLLAPSE_THRESHOLD: u32 = 50;

/// A plain navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub label: String,
    pub href: String,
}

impl NavEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A top-level navigation item: either a direct link or a dropdown group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link(NavEntry),
    Dropdown {
        label: String,
        items: Vec<NavEntry>,
    },
}

impl NavItem {
    #[must_use]
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link(NavEntry::new(label, href))
    }

    #[must_use]
    pub fn dropdown(label: impl Into<String>, items: Vec<NavEntry>) -> Self {
        Self::Dropdown {
            label: label.into(),
            items,
        }
    }

    /// Label of the item, used as the dropdown open key.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link(entry) => &entry.label,
            Self::Dropdown { label, .. } => label,
        }
    }

    /// The link targets this item contributes, in order.
    #[must_use]
    pub fn entries(&self) -> Vec<&NavEntry> {
        match self {
            Self::Link(entry) => vec![entry],
            Self::Dropdown { items, .. } => items.iter().collect(),
        }
    }
}

/// Shared counter behind the page scroll lock.
///
/// Cloning shares the counter; the page is locked while at least one
/// [`ScrollLockGuard`] is alive.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    held: Arc<AtomicUsize>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock. Released when the returned guard drops.
    #[must_use]
    pub fn acquire(&self) -> ScrollLockGuard {
        self.held.fetch_add(1, Ordering::SeqCst);
        ScrollLockGuard {
            held: Arc::clone(&self.held),
        }
    }

    /// Whether background scrolling is currently suppressed.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.held.load(Ordering::SeqCst) > 0
    }
}

/// RAII guard pairing every lock acquisition with exactly one release.
#[derive(Debug)]
pub struct ScrollLockGuard {
    held: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.held.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Presentation state of the navigation header.
#[derive(Debug)]
pub struct MenuState {
    scroll_lock: ScrollLock,
    open_desktop_dropdown: Option<String>,
    open_mobile_dropdown: Option<String>,
    mobile_guard: Option<ScrollLockGuard>,
    scrolled: bool,
    hovered: bool,
}

impl MenuState {
    /// Create a closed menu wired to the given page scroll lock.
    #[must_use]
    pub fn new(scroll_lock: ScrollLock) -> Self {
        Self {
            scroll_lock,
            open_desktop_dropdown: None,
            open_mobile_dropdown: None,
            mobile_guard: None,
            scrolled: false,
            hovered: false,
        }
    }

    // --- desktop header visibility -------------------------------------

    /// Track the window scroll offset.
    pub fn on_scroll(&mut self, scroll_y: u32) {
        self.scrolled = scroll_y > SCROLL_COLLAPSE_THRESHOLD;
    }

    /// Track whether the pointer is over the header region.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// The header shows its full content when the page is near the top
    /// OR the pointer hovers the header; the two signals are independent.
    #[must_use]
    pub fn shows_full_header(&self) -> bool {
        !self.scrolled || self.hovered
    }

    // --- desktop dropdowns ----------------------------------------------

    /// Open the dropdown with this label (hover-open). Any other open
    /// dropdown closes: there is a single open key per surface.
    pub fn hover_dropdown(&mut self, label: &str) {
        self.open_desktop_dropdown = Some(label.to_string());
    }

    /// Pointer left the dropdown region.
    pub fn leave_dropdown(&mut self) {
        self.open_desktop_dropdown = None;
    }

    /// Click toggles, so touch devices without hover still work.
    pub fn toggle_dropdown(&mut self, label: &str) {
        if self.open_desktop_dropdown.as_deref() == Some(label) {
            self.open_desktop_dropdown = None;
        } else {
            self.open_desktop_dropdown = Some(label.to_string());
        }
    }

    #[must_use]
    pub fn is_dropdown_open(&self, label: &str) -> bool {
        self.open_desktop_dropdown.as_deref() == Some(label)
    }

    // --- mobile overlay ---------------------------------------------------

    /// Open the full-screen overlay and suppress background scrolling.
    pub fn open_mobile_menu(&mut self) {
        if self.mobile_guard.is_none() {
            self.mobile_guard = Some(self.scroll_lock.acquire());
        }
    }

    /// Close the overlay; releases the scroll lock and collapses any
    /// open mobile dropdown.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_guard = None;
        self.open_mobile_dropdown = None;
    }

    #[must_use]
    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_guard.is_some()
    }

    /// Single-open-key toggle for the mobile dropdown groups.
    pub fn toggle_mobile_dropdown(&mut self, label: &str) {
        if self.open_mobile_dropdown.as_deref() == Some(label) {
            self.open_mobile_dropdown = None;
        } else {
            self.open_mobile_dropdown = Some(label.to_string());
        }
    }

    #[must_use]
    pub fn is_mobile_dropdown_open(&self, label: &str) -> bool {
        self.open_mobile_dropdown.as_deref() == Some(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> (MenuState, ScrollLock) {
        let lock = ScrollLock::new();
        (MenuState::new(lock.clone()), lock)
    }

    #[test]
    fn should_show_full_header_near_top_even_without_hover() {
        let (mut menu, _lock) = menu();
        menu.on_scroll(0);
        assert!(menu.shows_full_header());
        menu.on_scroll(SCROLL_COLLAPSE_THRESHOLD);
        assert!(menu.shows_full_header(), "threshold itself still counts as top");
    }

    #[test]
    fn should_collapse_header_when_scrolled_and_not_hovered() {
        let (mut menu, _lock) = menu();
        menu.on_scroll(200);
        assert!(!menu.shows_full_header());
    }

    #[test]
    fn should_show_full_header_when_hovered_while_scrolled() {
        let (mut menu, _lock) = menu();
        menu.on_scroll(200);
        menu.set_hovered(true);
        assert!(menu.shows_full_header());
        menu.set_hovered(false);
        assert!(!menu.shows_full_header());
    }

    #[test]
    fn should_keep_single_dropdown_open() {
        let (mut menu, _lock) = menu();
        menu.hover_dropdown("About");
        assert!(menu.is_dropdown_open("About"));

        menu.hover_dropdown("Gigs");
        assert!(menu.is_dropdown_open("Gigs"));
        assert!(!menu.is_dropdown_open("About"), "opening one closes the other");
    }

    #[test]
    fn should_toggle_dropdown_on_click() {
        let (mut menu, _lock) = menu();
        menu.toggle_dropdown("Gigs");
        assert!(menu.is_dropdown_open("Gigs"));
        menu.toggle_dropdown("Gigs");
        assert!(!menu.is_dropdown_open("Gigs"));
    }

    #[test]
    fn should_close_dropdown_when_pointer_leaves() {
        let (mut menu, _lock) = menu();
        menu.hover_dropdown("About");
        menu.leave_dropdown();
        assert!(!menu.is_dropdown_open("About"));
    }

    #[test]
    fn should_hold_scroll_lock_while_mobile_menu_open() {
        let (mut menu, lock) = menu();
        assert!(!lock.is_locked());

        menu.open_mobile_menu();
        assert!(menu.is_mobile_menu_open());
        assert!(lock.is_locked());

        menu.close_mobile_menu();
        assert!(!menu.is_mobile_menu_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn should_not_double_acquire_lock_on_repeated_open() {
        let (mut menu, lock) = menu();
        menu.open_mobile_menu();
        menu.open_mobile_menu();
        menu.close_mobile_menu();
        assert!(!lock.is_locked(), "one open acquires at most one lock");
    }

    #[test]
    fn should_release_lock_when_menu_state_dropped_while_open() {
        let lock = ScrollLock::new();
        {
            let mut menu = MenuState::new(lock.clone());
            menu.open_mobile_menu();
            assert!(lock.is_locked());
        }
        assert!(!lock.is_locked(), "teardown releases the lock");
    }

    #[test]
    fn should_keep_single_mobile_dropdown_open() {
        let (mut menu, _lock) = menu();
        menu.toggle_mobile_dropdown("About");
        menu.toggle_mobile_dropdown("Gigs");
        assert!(menu.is_mobile_dropdown_open("Gigs"));
        assert!(!menu.is_mobile_dropdown_open("About"));
    }

    #[test]
    fn should_collapse_mobile_dropdown_when_overlay_closes() {
        let (mut menu, _lock) = menu();
        menu.open_mobile_menu();
        menu.toggle_mobile_dropdown("Gigs");
        menu.close_mobile_menu();
        assert!(!menu.is_mobile_dropdown_open("Gigs"));
    }

    #[test]
    fn should_expose_ordered_entries_from_nav_items() {
        let item = NavItem::dropdown(
            "Gigs",
            vec![
                NavEntry::new("Upcoming", "/gigs/future"),
                NavEntry::new("Archive", "/gigs/past"),
            ],
        );
        assert_eq!(item.label(), "Gigs");
        let hrefs: Vec<&str> = item.entries().iter().map(|e| e.href.as_str()).collect();
        assert_eq!(hrefs, ["/gigs/future", "/gigs/past"]);

        let link = NavItem::link("Home", "/");
        assert_eq!(link.entries().len(), 1);
    }
}

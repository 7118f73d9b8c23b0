//! Gig archive view — filter by year, sort by date, paginate.
//!
//! The view owns an immutable snapshot of past gigs and derives a
//! filtered, sorted, paged projection purely from its local state. No
//! queries are issued after construction; every interaction is a
//! recomputation over already-resident records.

use crate::gig::{Gig, distinct_years};

/// Fixed page size of the archive list.
pub const PAGE_SIZE: usize = 10;

/// Year filter selection: everything, or a single calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(i32),
}

impl YearFilter {
    /// Parse a query-string value. Anything that is not a year is `All`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.parse().map_or(Self::All, Self::Year)
    }
}

impl std::fmt::Display for YearFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Year(year) => write!(f, "{year}"),
        }
    }
}

/// Sort direction over gig dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first (the default presentation).
    #[default]
    Desc,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Parse a query-string value; anything that is not `asc` is `Desc`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// One rendered page of the archive.
#[derive(Debug)]
pub struct ArchivePage<'a> {
    /// The gigs on the current page, in display order.
    pub gigs: Vec<&'a Gig>,
    /// 1-based page number.
    pub number: usize,
    /// Total page count; at least 1 even when the filter matches nothing.
    pub total_pages: usize,
}

impl ArchivePage<'_> {
    /// Whether the filter matched nothing (empty-state message instead
    /// of pagination controls).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gigs.is_empty()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

/// The archive view state machine.
#[derive(Debug, Clone)]
pub struct GigArchive {
    gigs: Vec<Gig>,
    years: Vec<i32>,
    selected_year: YearFilter,
    sort_order: SortOrder,
    current_page: usize,
}

impl GigArchive {
    /// Build the view over an immutable snapshot of past gigs.
    ///
    /// Year facets are derived from the records; initial state is
    /// `{All, Desc, page 1}`.
    #[must_use]
    pub fn new(gigs: Vec<Gig>) -> Self {
        let years = distinct_years(&gigs);
        Self {
            gigs,
            years,
            selected_year: YearFilter::default(),
            sort_order: SortOrder::default(),
            current_page: 1,
        }
    }

    /// Distinct years present in the records, descending.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    #[must_use]
    pub fn selected_year(&self) -> YearFilter {
        self.selected_year
    }

    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Select a year filter. Resets to page 1.
    pub fn set_year(&mut self, year: YearFilter) {
        self.selected_year = year;
        self.current_page = 1;
    }

    /// Flip the sort direction. Resets to page 1.
    pub fn toggle_sort(&mut self) {
        self.set_sort(self.sort_order.toggled());
    }

    /// Select a sort direction explicitly. Resets to page 1.
    pub fn set_sort(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.current_page = 1;
    }

    /// Move to page `page`. Out-of-range requests are no-ops; the
    /// triggering controls are disabled at the boundaries.
    pub fn set_page(&mut self, page: usize) {
        if (1..=self.total_pages()).contains(&page) {
            self.current_page = page;
        }
    }

    /// Total page count under the current filter; at least 1.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.filtered_sorted().len().div_ceil(PAGE_SIZE).max(1)
    }

    /// The current page of the filtered, sorted projection.
    #[must_use]
    pub fn page(&self) -> ArchivePage<'_> {
        let filtered = self.filtered_sorted();
        let total_pages = filtered.len().div_ceil(PAGE_SIZE).max(1);
        let start = (self.current_page - 1) * PAGE_SIZE;
        let gigs = filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect();
        ArchivePage {
            gigs,
            number: self.current_page,
            total_pages,
        }
    }

    /// Filter then stable-sort; records with identical dates keep their
    /// input order.
    fn filtered_sorted(&self) -> Vec<&Gig> {
        let mut gigs: Vec<&Gig> = self
            .gigs
            .iter()
            .filter(|gig| match self.selected_year {
                YearFilter::All => true,
                YearFilter::Year(year) => gig.year() == year,
            })
            .collect();
        match self.sort_order {
            SortOrder::Asc => gigs.sort_by(|a, b| a.date.cmp(&b.date)),
            SortOrder::Desc => gigs.sort_by(|a, b| b.date.cmp(&a.date)),
        }
        gigs
    }
}

//! Gig service — use-cases around the concert archive.

use std::str::FromStr;
use std::sync::Arc;

use bandstand_domain::archive::GigArchive;
use bandstand_domain::error::{NotFoundError, SiteError};
use bandstand_domain::gig::Gig;
use bandstand_domain::time::Timestamp;
use rand::seq::SliceRandom;

use crate::ports::GigRepository;

/// How many related gigs a detail page shows.
pub const RELATED_COUNT: usize = 3;

/// Strategy for picking the related gigs shown under a gig detail page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RelatedSelection {
    /// The newest gigs, excluding the current one.
    #[default]
    Recent,
    /// The gigs immediately preceding the current one chronologically.
    Sequential,
    /// A random sample, excluding the current one.
    Random,
}

impl FromStr for RelatedSelection {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "recent" => Ok(Self::Recent),
            "sequential" => Ok(Self::Sequential),
            "random" => Ok(Self::Random),
            other => Err(format!("unknown related-gig selection: {other:?}")),
        }
    }
}

/// Application service for gig listings, the archive, and detail pages.
pub struct GigService<R> {
    repo: Arc<R>,
    related: RelatedSelection,
}

impl<R: GigRepository> GigService<R> {
    pub fn new(repo: Arc<R>, related: RelatedSelection) -> Self {
        Self { repo, related }
    }

    /// Gigs at or after `now`, soonest first.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn upcoming_gigs(&self, now: Timestamp) -> Result<Vec<Gig>, SiteError> {
        self.repo.upcoming_gigs(now).await
    }

    /// The past-gig archive, loaded once and ready for filtering,
    /// sorting, and paging without further queries.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn archive(&self, now: Timestamp) -> Result<GigArchive, SiteError> {
        let gigs = self.repo.past_gigs(now).await?;
        Ok(GigArchive::new(gigs))
    }

    /// Look up a gig for its detail page.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] when no gig with `slug` exists,
    /// or a content-store error from the repository.
    pub async fn gig_by_slug(&self, slug: &str) -> Result<Gig, SiteError> {
        self.repo.gig_by_slug(slug).await?.ok_or_else(|| {
            NotFoundError {
                resource: "Gig",
                slug: slug.to_owned(),
            }
            .into()
        })
    }

    /// Every gig, newest first (sitemap).
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    pub async fn all_gigs(&self) -> Result<Vec<Gig>, SiteError> {
        self.repo.all_gigs().await
    }

    /// The gigs shown as "other gigs" under a detail page, per the
    /// configured selection strategy. Never includes `current`.
    ///
    /// # Errors
    ///
    /// Returns a content-store error propagated from the repository.
    #[tracing::instrument(skip(self, current), fields(slug = %current.slug))]
    pub async fn related_gigs(&self, current: &Gig) -> Result<Vec<Gig>, SiteError> {
        let pool = self.repo.all_gigs().await?;
        Ok(select_related(pool, current, self.related))
    }
}

/// Pick related gigs out of `pool` (newest first) for `current`.
fn select_related(pool: Vec<Gig>, current: &Gig, strategy: RelatedSelection) -> Vec<Gig> {
    match strategy {
        RelatedSelection::Recent => pool
            .into_iter()
            .filter(|gig| gig.slug != current.slug)
            .take(RELATED_COUNT)
            .collect(),
        RelatedSelection::Sequential => {
            let position = pool.iter().position(|gig| gig.slug == current.slug);
            match position {
                Some(pos) => pool.into_iter().skip(pos + 1).take(RELATED_COUNT).collect(),
                None => pool.into_iter().take(RELATED_COUNT).collect(),
            }
        }
        RelatedSelection::Random => {
            let mut candidates: Vec<Gig> = pool
                .into_iter()
                .filter(|gig| gig.slug != current.slug)
                .collect();
            let mut rng = rand::thread_rng();
            candidates.shuffle(&mut rng);
            candidates.truncate(RELATED_COUNT);
            candidates
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandstand_domain::archive::YearFilter;
    use chrono::TimeZone;
    use std::future::Future;
    use std::sync::Mutex;

    struct InMemoryGigRepo {
        gigs: Mutex<Vec<Gig>>,
    }

    impl InMemoryGigRepo {
        fn with_gigs(gigs: Vec<Gig>) -> Self {
            Self {
                gigs: Mutex::new(gigs),
            }
        }
    }

    impl GigRepository for InMemoryGigRepo {
        fn past_gigs(
            &self,
            now: Timestamp,
        ) -> impl Future<Output = Result<Vec<Gig>, SiteError>> + Send {
            let gigs = self.gigs.lock().unwrap();
            let mut result: Vec<Gig> =
                gigs.iter().filter(|gig| gig.date < now).cloned().collect();
            result.sort_by(|a, b| b.date.cmp(&a.date));
            async { Ok(result) }
        }

        fn upcoming_gigs(
            &self,
            now: Timestamp,
        ) -> impl Future<Output = Result<Vec<Gig>, SiteError>> + Send {
            let gigs = self.gigs.lock().unwrap();
            let mut result: Vec<Gig> =
                gigs.iter().filter(|gig| gig.date >= now).cloned().collect();
            result.sort_by(|a, b| a.date.cmp(&b.date));
            async { Ok(result) }
        }

        fn all_gigs(&self) -> impl Future<Output = Result<Vec<Gig>, SiteError>> + Send {
            let gigs = self.gigs.lock().unwrap();
            let mut result: Vec<Gig> = gigs.clone();
            result.sort_by(|a, b| b.date.cmp(&a.date));
            async { Ok(result) }
        }

        fn gig_by_slug(
            &self,
            slug: &str,
        ) -> impl Future<Output = Result<Option<Gig>, SiteError>> + Send {
            let gigs = self.gigs.lock().unwrap();
            let result = gigs.iter().find(|gig| gig.slug == slug).cloned();
            async { Ok(result) }
        }
    }

    fn gig(slug: &str, year: i32, month: u32, day: u32) -> Gig {
        Gig::builder()
            .id(format!("gig-{slug}"))
            .title(format!("Show {slug}"))
            .date(chrono::Utc.with_ymd_and_hms(year, month, day, 20, 0, 0).unwrap())
            .venue("The Garage")
            .city("Oslo")
            .slug(slug)
            .build()
            .unwrap()
    }

    fn sample_now() -> Timestamp {
        chrono::Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn make_service(gigs: Vec<Gig>, related: RelatedSelection) -> GigService<InMemoryGigRepo> {
        GigService::new(Arc::new(InMemoryGigRepo::with_gigs(gigs)), related)
    }

    #[tokio::test]
    async fn should_split_past_and_upcoming_around_now() {
        let svc = make_service(
            vec![
                gig("past-one", 2024, 3, 10),
                gig("future-one", 2025, 9, 1),
                gig("past-two", 2025, 2, 14),
            ],
            RelatedSelection::default(),
        );

        let upcoming = svc.upcoming_gigs(sample_now()).await.unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].slug, "future-one");

        let archive = svc.archive(sample_now()).await.unwrap();
        assert_eq!(archive.page().gigs.len(), 2);
    }

    #[tokio::test]
    async fn should_build_archive_with_distinct_years() {
        let svc = make_service(
            vec![
                gig("a", 2023, 5, 1),
                gig("b", 2024, 5, 1),
                gig("c", 2024, 6, 1),
            ],
            RelatedSelection::default(),
        );

        let mut archive = svc.archive(sample_now()).await.unwrap();
        assert_eq!(archive.years(), &[2024, 2023]);

        archive.set_year(YearFilter::Year(2024));
        assert_eq!(archive.page().gigs.len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_slug() {
        let svc = make_service(vec![gig("known", 2024, 1, 1)], RelatedSelection::default());

        let result = svc.gig_by_slug("unknown").await;
        assert!(matches!(result, Err(SiteError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_pick_newest_related_excluding_current() {
        let svc = make_service(
            vec![
                gig("first", 2023, 1, 1),
                gig("second", 2023, 6, 1),
                gig("third", 2024, 1, 1),
                gig("fourth", 2024, 6, 1),
                gig("fifth", 2025, 1, 1),
            ],
            RelatedSelection::Recent,
        );

        let current = svc.gig_by_slug("fourth").await.unwrap();
        let related = svc.related_gigs(&current).await.unwrap();

        let slugs: Vec<&str> = related.iter().map(|gig| gig.slug.as_str()).collect();
        assert_eq!(slugs, vec!["fifth", "third", "second"]);
    }

    #[tokio::test]
    async fn should_pick_sequential_related_after_current() {
        let svc = make_service(
            vec![
                gig("first", 2023, 1, 1),
                gig("second", 2023, 6, 1),
                gig("third", 2024, 1, 1),
                gig("fourth", 2024, 6, 1),
            ],
            RelatedSelection::Sequential,
        );

        let current = svc.gig_by_slug("fourth").await.unwrap();
        let related = svc.related_gigs(&current).await.unwrap();

        let slugs: Vec<&str> = related.iter().map(|gig| gig.slug.as_str()).collect();
        assert_eq!(slugs, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn should_never_include_current_in_random_related() {
        let gigs: Vec<Gig> = (1..=8)
            .map(|day| gig(&format!("show-{day}"), 2024, 3, day))
            .collect();
        let svc = make_service(gigs, RelatedSelection::Random);

        let current = svc.gig_by_slug("show-4").await.unwrap();
        for _ in 0..20 {
            let related = svc.related_gigs(&current).await.unwrap();
            assert_eq!(related.len(), RELATED_COUNT);
            assert!(related.iter().all(|gig| gig.slug != "show-4"));
        }
    }

    #[test]
    fn should_parse_related_selection_names() {
        assert_eq!(
            "recent".parse::<RelatedSelection>().unwrap(),
            RelatedSelection::Recent
        );
        assert_eq!(
            "sequential".parse::<RelatedSelection>().unwrap(),
            RelatedSelection::Sequential
        );
        assert_eq!(
            "random".parse::<RelatedSelection>().unwrap(),
            RelatedSelection::Random
        );
        assert!("nearest".parse::<RelatedSelection>().is_err());
    }
}

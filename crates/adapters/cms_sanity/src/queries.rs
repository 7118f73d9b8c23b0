//! GROQ projections.
//!
//! Every query projects exactly the fields the wire documents in
//! [`crate::records`] declare; slugs are flattened with
//! `"slug": slug.current` so no nested slug object crosses the wire.

pub const PAST_GIGS: &str = r#"*[_type == "gig" && date < $now && defined(slug.current)]|order(date desc){
  _id, title, date, venue, city, "slug": slug.current, ticketsUrl,
  "posterUrl": posterImageUrl.asset->url,
  "posterWidth": posterImageUrl.asset->metadata.dimensions.width,
  "posterHeight": posterImageUrl.asset->metadata.dimensions.height
}"#;

pub const FUTURE_GIGS: &str = r#"*[_type == "gig" && date >= $now]|order(date asc){
  _id, title, date, venue, city, "slug": slug.current, ticketsUrl,
  "posterUrl": posterImageUrl.asset->url,
  "posterWidth": posterImageUrl.asset->metadata.dimensions.width,
  "posterHeight": posterImageUrl.asset->metadata.dimensions.height
}"#;

pub const ALL_GIGS: &str = r#"*[_type == "gig" && defined(slug.current)]|order(date desc){
  _id, title, date, venue, city, "slug": slug.current, ticketsUrl,
  "posterUrl": posterImageUrl.asset->url,
  "posterWidth": posterImageUrl.asset->metadata.dimensions.width,
  "posterHeight": posterImageUrl.asset->metadata.dimensions.height
}"#;

pub const GIG_DETAIL: &str = r#"*[_type == "gig" && slug.current == $slug][0]{
  _id,
  title,
  date,
  venue,
  city,
  "slug": slug.current,
  ticketsUrl,
  "posterUrl": posterImageUrl.asset->url,
  "posterWidth": posterImageUrl.asset->metadata.dimensions.width,
  "posterHeight": posterImageUrl.asset->metadata.dimensions.height,
  setlist,
  interestingFacts,
  "photoGallery": photoGallery[].asset->url,
  youtubeUrl
}"#;

pub const LATEST_RELEASES: &str = r#"*[_type == "musicRelease"]|order(releaseDate desc)[0...$limit]{
  _id,
  title,
  "slug": slug.current,
  "artworkUrl": artwork.asset->url,
  smartLink,
  releaseDate,
  "trackCount": count(tracks),
  "firstTrackSlug": tracks[0]->slug.current
}"#;

pub const ALL_RELEASES: &str = r#"*[_type == "musicRelease"]|order(releaseDate desc){
  _id,
  title,
  "slug": slug.current,
  "artworkUrl": artwork.asset->url,
  smartLink,
  releaseDate,
  "trackCount": count(tracks),
  "firstTrackSlug": tracks[0]->slug.current
}"#;

pub const RELEASE_DETAIL: &str = r#"*[_type == "musicRelease" && slug.current == $slug][0]{
  _id,
  title,
  "slug": slug.current,
  "artworkUrl": artwork.asset->url,
  smartLink,
  releaseDate,
  "trackCount": count(tracks),
  "firstTrackSlug": tracks[0]->slug.current
}"#;

pub const RELEASE_TRACKS: &str = r#"*[_type == "musicRelease" && slug.current == $slug][0].tracks[]->{
  _id, title, "slug": slug.current
}"#;

pub const TRACK_DETAIL: &str = r#"*[_type == "track" && slug.current == $slug][0]{
  _id,
  title,
  "slug": slug.current,
  aboutSong,
  aboutInstrumental,
  lyrics,
  "release": *[_type == "musicRelease" && references(^._id)][0]{
    title,
    "artworkUrl": artwork.asset->url,
    smartLink
  }
}"#;

pub const ALL_TRACKS: &str = r#"*[_type == "track" && defined(slug.current)]{
  _id, title, "slug": slug.current
}"#;

pub const VIDEOS: &str =
    r#"*[_type == "video"]|order(order asc){_id, title, youtubeUrl, order}"#;

pub const LATEST_POSTS: &str = r#"*[_type == "post"]|order(publishedAt desc)[0...$limit]{
  _id, title, "slug": slug.current, publishedAt, "mainImageUrl": mainImage.asset->url
}"#;

pub const ALL_POSTS: &str = r#"*[_type == "post" && defined(slug.current)]|order(publishedAt desc){
  _id, title, "slug": slug.current, publishedAt, "mainImageUrl": mainImage.asset->url
}"#;

pub const POST_DETAIL: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  _id,
  title,
  "slug": slug.current,
  publishedAt,
  _updatedAt,
  "mainImageUrl": mainImage.asset->url,
  body
}"#;

pub const MEMBERS: &str = r#"*[_type == "bandMember" && defined(slug.current)]|order(order asc){
  _id, name, "slug": slug.current, role, "photoUrl": photo.asset->url
}"#;

pub const MEMBER_DETAIL: &str = r#"*[_type == "bandMember" && slug.current == $slug][0]{
  _id, name, "slug": slug.current, role, "photoUrl": photo.asset->url, bio
}"#;

pub const BIO: &str = r#"*[_type == "bio"][0]{
  title,
  "mainImageUrl": mainImage.asset->url,
  textContent,
  "photoGallery": photoGallery[].asset->url
}"#;

pub const MERCH: &str = r#"*[_type == "merchProduct"]{
  _id, name, price, "imageUrl": imageGallery[0].asset->url
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_project_poster_in_every_gig_listing() {
        for query in [PAST_GIGS, FUTURE_GIGS, ALL_GIGS, GIG_DETAIL] {
            assert!(query.contains("\"posterUrl\""), "poster missing from {query}");
            assert!(query.contains("\"posterWidth\""), "poster width missing from {query}");
        }
    }
}

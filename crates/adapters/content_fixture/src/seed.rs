//! The demo catalog.
//!
//! Gig dates span three calendar years so the archive's year tabs,
//! paging, and sorting all have something to bite on, and two gigs sit
//! in the future relative to seeding time so the upcoming page is
//! never empty.

use bandstand_domain::gig::{Gig, PosterImage};
use bandstand_domain::member::{BandMember, Biography};
use bandstand_domain::merch::MerchProduct;
use bandstand_domain::post::Post;
use bandstand_domain::release::{Release, ReleaseRef, Track};
use bandstand_domain::time::{Timestamp, now};
use bandstand_domain::video::Video;
use chrono::{Duration, TimeZone, Utc};

use crate::{SAMPLE_ALBUM_SLUG, SAMPLE_MEMBER_SLUG, SAMPLE_PAST_GIG_SLUG, SAMPLE_TRACK_SLUG};

fn at(year: i32, month: u32, day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, 20, 0, 0)
        .single()
        .unwrap_or(chrono::DateTime::UNIX_EPOCH)
}

fn image(name: &str) -> String {
    format!("https://cdn.example.com/images/{name}.jpg")
}

fn gig(ordinal: u32, slug: &str, title: &str, date: Timestamp, venue: &str, city: &str) -> Gig {
    let builder = Gig::builder()
        .id(format!("gig-{ordinal:02}"))
        .title(title)
        .date(date)
        .venue(venue)
        .city(city)
        .slug(slug);
    // The builder only fails on empty fields, which the seed never has.
    builder.build().unwrap_or_else(|_| unreachable!("seed gig is valid"))
}

pub fn gigs() -> Vec<Gig> {
    let mut gigs = vec![
        gig(1, "cellar-debut", "Cellar Debut", at(2023, 2, 11), "Kafe Mir", "Oslo"),
        gig(2, "spring-riot", "Spring Riot", at(2023, 4, 22), "Blitz", "Oslo"),
        gig(3, "harbour-stage", "Harbour Stage", at(2023, 6, 17), "USF Verftet", "Bergen"),
        gig(4, "august-heat", "August Heat", at(2023, 8, 5), "Byscenen", "Trondheim"),
        gig(5, "first-anniversary", "First Anniversary", at(2023, 11, 25), "Kafe Mir", "Oslo"),
        gig(6, "frost-night", "Frost Night", at(2024, 1, 20), "Parkteatret", "Oslo"),
        gig(7, "basement-sessions", "Basement Sessions", at(2024, 3, 9), "Blitz", "Oslo"),
        gig(8, "spring-circuit", "Spring Circuit", at(2024, 4, 27), "Folken", "Stavanger"),
        gig(9, "midsummer-set", "Midsummer Set", at(2024, 6, 21), "USF Verftet", "Bergen"),
        gig(10, "festival-sideshow", "Festival Sideshow", at(2024, 8, 10), "Revolver", "Oslo"),
        gig(11, "october-howl", "October Howl", at(2024, 10, 31), "Byscenen", "Trondheim"),
        gig(12, "winter-send-off", "Winter Send-Off", at(2024, 12, 14), "Parkteatret", "Oslo"),
    ];

    let mut release_party = gig(
        13,
        SAMPLE_PAST_GIG_SLUG,
        "Hometown Release Party",
        at(2025, 3, 8),
        "Rockefeller",
        "Oslo",
    );
    release_party.poster = Some(PosterImage {
        url: image("poster-release-party"),
        width: 1200,
        height: 1600,
    });
    release_party.setlist = Some(
        "Static Bloom\nMidnight Signal\nPaper Knives\nLast Ferry Home".to_owned(),
    );
    release_party.facts =
        Some("First show with the new light rig, and the first encore in band history.".to_owned());
    release_party.photo_gallery = vec![image("release-party-1"), image("release-party-2")];
    release_party.youtube_url = Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_owned());
    gigs.push(release_party);

    let seeded_at = now();
    let mut summer = gig(
        14,
        "open-air-summer",
        "Open Air Summer",
        seeded_at + Duration::days(30),
        "Middelalderparken",
        "Oslo",
    );
    summer.tickets_url = Some("https://tickets.example.com/open-air-summer".to_owned());
    gigs.push(summer);

    let mut club = gig(
        15,
        "club-night-return",
        "Club Night Return",
        seeded_at + Duration::days(75),
        "Blitz",
        "Oslo",
    );
    club.tickets_url = Some("https://tickets.example.com/club-night-return".to_owned());
    gigs.push(club);

    gigs
}

pub fn releases() -> Vec<Release> {
    vec![
        Release::builder()
            .id("release-01")
            .title("Midnight Signal")
            .slug(SAMPLE_ALBUM_SLUG)
            .artwork_url(image("midnight-signal"))
            .smart_link("https://listen.example.com/midnight-signal")
            .release_date(at(2025, 3, 7))
            .track_count(4)
            .first_track_slug(SAMPLE_TRACK_SLUG)
            .build()
            .unwrap_or_else(|_| unreachable!("seed release is valid")),
        Release::builder()
            .id("release-02")
            .title("Paper Knives")
            .slug("paper-knives")
            .artwork_url(image("paper-knives"))
            .release_date(at(2024, 9, 13))
            .track_count(1)
            .first_track_slug("paper-knives")
            .build()
            .unwrap_or_else(|_| unreachable!("seed release is valid")),
        Release::builder()
            .id("release-03")
            .title("Cellar Tapes")
            .slug("cellar-tapes")
            .artwork_url(image("cellar-tapes"))
            .release_date(at(2023, 5, 19))
            .track_count(6)
            .first_track_slug("cold-open")
            .build()
            .unwrap_or_else(|_| unreachable!("seed release is valid")),
    ]
}

fn track(id: &str, title: &str, slug: &str, release_title: &str, release_art: &str) -> Track {
    Track {
        id: id.into(),
        title: title.to_owned(),
        slug: slug.to_owned(),
        lyrics: None,
        about_song: None,
        about_instrumental: None,
        release: Some(ReleaseRef {
            title: release_title.to_owned(),
            artwork_url: image(release_art),
            smart_link: None,
        }),
    }
}

pub fn tracks() -> Vec<Track> {
    let mut static_bloom = track(
        "track-01",
        "Static Bloom",
        SAMPLE_TRACK_SLUG,
        "Midnight Signal",
        "midnight-signal",
    );
    static_bloom.lyrics =
        Some("Wires hum under the floor\nWe grow towards the noise".to_owned());
    static_bloom.about_song =
        Some("Written in one night after the first rehearsal in the new room.".to_owned());

    vec![
        static_bloom,
        track("track-02", "Midnight Signal", "midnight-signal-title", "Midnight Signal", "midnight-signal"),
        track("track-03", "Last Ferry Home", "last-ferry-home", "Midnight Signal", "midnight-signal"),
        track("track-04", "Glass Antenna", "glass-antenna", "Midnight Signal", "midnight-signal"),
        track("track-05", "Paper Knives", "paper-knives", "Paper Knives", "paper-knives"),
        track("track-06", "Cold Open", "cold-open", "Cellar Tapes", "cellar-tapes"),
    ]
}

/// Which release a seeded track belongs to, by slug.
pub fn release_of_track(track_slug: &str) -> Option<&'static str> {
    match track_slug {
        SAMPLE_TRACK_SLUG | "midnight-signal-title" | "last-ferry-home" | "glass-antenna" => {
            Some(SAMPLE_ALBUM_SLUG)
        }
        "paper-knives" => Some("paper-knives"),
        "cold-open" => Some("cellar-tapes"),
        _ => None,
    }
}

pub fn posts() -> Vec<Post> {
    vec![
        Post::builder()
            .id("post-01")
            .title("Autumn Tour Announced")
            .slug(crate::SAMPLE_POST_SLUG)
            .published_at(at(2025, 5, 2))
            .main_image_url(image("autumn-tour"))
            .body(
                "We are taking Midnight Signal on the road this autumn.\n\n\
                 Tickets for all dates go on sale Friday at noon."
                    .to_owned(),
            )
            .build()
            .unwrap_or_else(|_| unreachable!("seed post is valid")),
        Post::builder()
            .id("post-02")
            .title("Midnight Signal Is Out")
            .slug("midnight-signal-is-out")
            .published_at(at(2025, 3, 7))
            .body("Our second record is out everywhere you stream music.".to_owned())
            .build()
            .unwrap_or_else(|_| unreachable!("seed post is valid")),
        Post::builder()
            .id("post-03")
            .title("New Rehearsal Space")
            .slug("new-rehearsal-space")
            .published_at(at(2024, 11, 1))
            .build()
            .unwrap_or_else(|_| unreachable!("seed post is valid")),
    ]
}

pub fn members() -> Vec<BandMember> {
    vec![
        BandMember {
            id: "member-01".into(),
            name: "Vera Holt".to_owned(),
            slug: SAMPLE_MEMBER_SLUG.to_owned(),
            role: Some("vocals, guitar".to_owned()),
            photo_url: Some(image("vera-holt")),
            bio: Some(
                "Vera started the band in a borrowed cellar in 2022.\n\n\
                 She writes most of the lyrics on the night bus."
                    .to_owned(),
            ),
        },
        BandMember {
            id: "member-02".into(),
            name: "Jonas Eide".to_owned(),
            slug: "jonas-eide".to_owned(),
            role: Some("bass".to_owned()),
            photo_url: Some(image("jonas-eide")),
            bio: None,
        },
        BandMember {
            id: "member-03".into(),
            name: "Rikke Strand".to_owned(),
            slug: "rikke-strand".to_owned(),
            role: Some("drums".to_owned()),
            photo_url: None,
            bio: None,
        },
    ]
}

pub fn biography() -> Biography {
    Biography {
        title: "How we got loud".to_owned(),
        main_image_url: Some(image("band-2025")),
        text: "The band formed around a shared rehearsal space in Oslo in 2022.\n\n\
               Two records and a hundred-odd shows later, the cellar is still home."
            .to_owned(),
        photo_gallery: vec![image("band-live-1"), image("band-live-2")],
    }
}

pub fn products() -> Vec<MerchProduct> {
    vec![
        MerchProduct {
            id: "product-01".into(),
            name: "Midnight Signal LP".to_owned(),
            price: 35,
            image_url: Some(image("merch-lp")),
        },
        MerchProduct {
            id: "product-02".into(),
            name: "Logo Tee".to_owned(),
            price: 25,
            image_url: Some(image("merch-tee")),
        },
        MerchProduct {
            id: "product-03".into(),
            name: "Tote Bag".to_owned(),
            price: 15,
            image_url: None,
        },
    ]
}

pub fn videos() -> Vec<Video> {
    vec![
        Video {
            id: "video-01".into(),
            title: "Static Bloom (official video)".to_owned(),
            youtube_url: "https://www.youtube.com/watch?v=aqz-KE-bpKQ".to_owned(),
            order: 1,
        },
        Video {
            id: "video-02".into(),
            title: "Live at Rockefeller".to_owned(),
            youtube_url: "https://youtu.be/jNQXAC9IVRw".to_owned(),
            order: 2,
        },
    ]
}

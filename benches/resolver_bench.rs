use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mediamenu::{resolve, ArtistRef, Capability, CapabilitySet, MediaEntity, ResolverContext};

fn full_caps() -> CapabilitySet {
    [
        Capability::TrackPlayable,
        Capability::RadioCapable,
        Capability::SaveToLibrary,
        Capability::LibraryFeed,
        Capability::Share,
        Capability::TrackLike,
        Capability::TrackHide,
        Capability::ArtistFollow,
    ]
    .into_iter()
    .collect()
}

fn wide_playlist() -> MediaEntity {
    MediaEntity::Playlist {
        id: "playlist-1".to_string(),
        title: "Everything".to_string(),
        authors: (0..32)
            .map(|i| ArtistRef {
                id: format!("artist-{i}"),
                name: format!("Artist {i}"),
                cover: Some(format!("https://img.example/{i}.jpg")),
            })
            .collect(),
        is_editable: true,
        cover: None,
        source: None,
    }
}

fn bench_resolve(c: &mut Criterion) {
    let caps = full_caps();
    let ctx = ResolverContext {
        loaded: true,
        from_player: false,
        queue_size: 10,
        saved_to_library: true,
    };
    let playlist = wide_playlist();

    c.bench_function("resolve_wide_playlist", |b| {
        b.iter(|| resolve(black_box(&playlist), Some(black_box(&caps)), black_box(&ctx)))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);

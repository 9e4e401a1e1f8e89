//! End-to-end controller scenarios.
//!
//! Each test drives the real pipeline — controller, store adapter, renderer,
//! surface — over an in-memory backend, covering the guarantees the system
//! is built around:
//! - seeding an empty store exactly once across sessions
//! - newest-first display over an oldest-first persisted list
//! - silent rejection of empty drafts
//! - creation dates surviving reloads unchanged

use pretty_assertions::assert_eq;
use retie_core::Blog;
use retie_post::{FIRST_SEED_TITLE, SECOND_SEED_TITLE};
use retie_render::{DisplaySurface, MemorySurface};
use retie_store::{MemoryBackend, StorageBackend, Store, POSTS_KEY};
use retie_test_utils::{fixed_clock, surface_dates, surface_titles, RecordingDialog, ScriptedForm};

/// Start a session over `backend` with the clock pinned to the given date.
fn session(
    backend: MemoryBackend,
    year: i32,
    month: u32,
    day: u32,
) -> (Blog<MemoryBackend, retie_test_utils::FixedClock>, MemorySurface) {
    let blog = Blog::new(backend, fixed_clock(year, month, day));
    (blog, MemorySurface::new())
}

#[test]
fn first_run_seeds_and_publishing_lands_on_top() {
    let (mut blog, mut surface) = session(MemoryBackend::new(), 2026, 8, 30);

    blog.initialize(&mut surface).unwrap();

    // Two seed posts persisted, displayed newest (second seed) above first.
    assert_eq!(blog.posts().len(), 2);
    assert_eq!(blog.posts()[0].title, FIRST_SEED_TITLE);
    assert_eq!(blog.posts()[1].title, SECOND_SEED_TITLE);
    assert_eq!(
        surface_titles(&surface),
        vec![SECOND_SEED_TITLE.to_string(), FIRST_SEED_TITLE.to_string()]
    );

    let mut form = ScriptedForm::new("새 글", "내용");
    let mut dialog = RecordingDialog::new();
    blog.create_post(&mut surface, &mut form, &mut dialog).unwrap();

    // New post on top of the display, last in the persisted list.
    assert_eq!(surface_titles(&surface)[0], "새 글");
    assert_eq!(blog.posts().len(), 3);
    assert_eq!(blog.posts().last().unwrap().title, "새 글");
    assert!(form.was_reset());
    assert_eq!(dialog.close_count, 1);

    let stored = blog.into_store().load_posts().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored.last().unwrap().title, "새 글");
}

#[test]
fn second_session_does_not_reseed() {
    let (mut blog, mut surface) = session(MemoryBackend::new(), 2026, 8, 30);
    blog.initialize(&mut surface).unwrap();
    let backend = blog.into_store().into_backend();

    let (mut blog, mut surface) = session(backend, 2026, 8, 31);
    blog.initialize(&mut surface).unwrap();

    assert_eq!(blog.posts().len(), 2);
    assert_eq!(surface.children().len(), 2);
}

#[test]
fn displayed_order_is_reverse_of_persisted_order() {
    let (mut blog, mut surface) = session(MemoryBackend::new(), 2026, 8, 30);
    blog.initialize(&mut surface).unwrap();

    for title in ["T1", "T2", "T3", "T4"] {
        let mut form = ScriptedForm::new(title, "body");
        let mut dialog = RecordingDialog::new();
        blog.create_post(&mut surface, &mut form, &mut dialog).unwrap();
    }

    assert_eq!(
        surface_titles(&surface),
        vec!["T4", "T3", "T2", "T1", SECOND_SEED_TITLE, FIRST_SEED_TITLE]
    );

    let stored = blog.into_store().load_posts().unwrap();
    let stored_titles: Vec<_> = stored.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        stored_titles,
        vec![FIRST_SEED_TITLE, SECOND_SEED_TITLE, "T1", "T2", "T3", "T4"]
    );
}

#[test]
fn empty_drafts_change_nothing() {
    let (mut blog, mut surface) = session(MemoryBackend::new(), 2026, 8, 30);
    blog.initialize(&mut surface).unwrap();
    let titles_before = surface_titles(&surface);
    let posts_before = blog.posts().to_vec();

    for (title, content) in [("", "x"), ("x", ""), ("  ", "  ")] {
        let mut form = ScriptedForm::new(title, content);
        let mut dialog = RecordingDialog::new();
        blog.create_post(&mut surface, &mut form, &mut dialog).unwrap();

        assert!(!form.was_reset());
        assert_eq!(dialog.close_count, 0);
    }

    assert_eq!(surface_titles(&surface), titles_before);
    assert_eq!(blog.posts(), posts_before);
}

#[test]
fn reload_keeps_creation_dates() {
    let (mut blog, mut surface) = session(MemoryBackend::new(), 2026, 8, 30);
    blog.initialize(&mut surface).unwrap();
    let mut form = ScriptedForm::new("기록", "그날의 생각");
    let mut dialog = RecordingDialog::new();
    blog.create_post(&mut surface, &mut form, &mut dialog).unwrap();
    assert_eq!(surface_dates(&surface)[0], "2026. 8. 30.");
    let backend = blog.into_store().into_backend();

    // Far later session: the stored stamp, not today, must display.
    let (mut blog, mut surface) = session(backend, 2027, 1, 2);
    blog.initialize(&mut surface).unwrap();

    assert_eq!(surface_titles(&surface)[0], "기록");
    assert_eq!(surface_dates(&surface)[0], "2026. 8. 30.");
    assert_eq!(blog.posts().last().unwrap().date, "2026. 8. 30.");
}

#[test]
fn malformed_slot_recovers_by_reseeding() {
    let mut backend = MemoryBackend::new();
    backend.set(POSTS_KEY, "{this is not even json").unwrap();

    let (mut blog, mut surface) = session(backend, 2026, 8, 30);
    blog.initialize(&mut surface).unwrap();

    assert_eq!(blog.posts().len(), 2);
    assert_eq!(surface.children().len(), 2);

    // The damaged value was overwritten with a well-formed list.
    let store: Store<MemoryBackend> = blog.into_store();
    assert_eq!(store.load_posts().unwrap().len(), 2);
}

#[test]
fn file_backed_sessions_share_one_store() {
    let dir = tempfile::tempdir().unwrap();

    let backend = retie_store::FileBackend::open(dir.path()).unwrap();
    let mut blog = Blog::new(backend, fixed_clock(2026, 8, 30));
    let mut surface = MemorySurface::new();
    blog.initialize(&mut surface).unwrap();
    let mut form = ScriptedForm::new("디스크", "파일로 저장");
    let mut dialog = RecordingDialog::new();
    blog.create_post(&mut surface, &mut form, &mut dialog).unwrap();
    drop(blog);

    // A fresh process over the same directory picks up all three posts.
    let backend = retie_store::FileBackend::open(dir.path()).unwrap();
    let mut blog = Blog::new(backend, fixed_clock(2026, 9, 1));
    let mut surface = MemorySurface::new();
    blog.initialize(&mut surface).unwrap();

    assert_eq!(blog.posts().len(), 3);
    assert_eq!(surface_titles(&surface)[0], "디스크");
}

#[test]
fn composing_before_startup_respects_persisted_posts() {
    let (mut blog, mut surface) = session(MemoryBackend::new(), 2026, 8, 30);
    blog.initialize(&mut surface).unwrap();
    let backend = blog.into_store().into_backend();

    // New session that never initializes (no render) still appends, not
    // clobbers.
    let (mut blog, mut surface) = session(backend, 2026, 8, 31);
    let mut form = ScriptedForm::new("바로 쓰기", "초기화 없이");
    let mut dialog = RecordingDialog::new();
    blog.create_post(&mut surface, &mut form, &mut dialog).unwrap();

    let stored = blog.into_store().load_posts().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored.last().unwrap().title, "바로 쓰기");
}

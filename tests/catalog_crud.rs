//! Catalog CRUD Tests
//!
//! Exercises the catalog layer against isolated databases:
//! - Create-then-get returns the submitted field values
//! - Lookup misses are a distinct result variant, never a store error
//! - Updates write exactly the supplied fields
//! - Identifiers are unique and never reused

use cinedb::catalog::{Catalog, CatalogError, DirectorDraft, GenreDraft, MovieDraft, MovieFilter};

// =============================================================================
// Helper Functions
// =============================================================================

fn catalog() -> Catalog {
    Catalog::open_in_memory().unwrap()
}

fn dunkirk() -> MovieDraft {
    MovieDraft {
        title: Some("Dunkirk".to_string()),
        description: Some("WWII evacuation".to_string()),
        trailer: Some("https://example.com/dunkirk".to_string()),
        year: Some(2017),
        rating: Some(7.8),
        ..Default::default()
    }
}

// =============================================================================
// Movie Tests
// =============================================================================

/// Creating a movie and fetching it by the returned identifier yields
/// back the same field values.
#[test]
fn test_create_and_get_movie_roundtrip() {
    let catalog = catalog();

    let id = catalog.create_movie(&dunkirk()).unwrap();
    let movie = catalog.get_movie(id).unwrap();

    assert_eq!(movie.id, id);
    assert_eq!(movie.title.as_deref(), Some("Dunkirk"));
    assert_eq!(movie.description.as_deref(), Some("WWII evacuation"));
    assert_eq!(movie.year, Some(2017));
    assert_eq!(movie.rating, Some(7.8));
    assert_eq!(movie.director_id, None);
    assert_eq!(movie.genre_id, None);
}

/// A create payload may supply any subset of fields; the rest persist
/// as NULL.
#[test]
fn test_create_movie_from_empty_draft() {
    let catalog = catalog();

    let id = catalog.create_movie(&MovieDraft::default()).unwrap();
    let movie = catalog.get_movie(id).unwrap();

    assert_eq!(movie.title, None);
    assert_eq!(movie.year, None);
}

#[test]
fn test_get_missing_movie_is_not_found() {
    let catalog = catalog();

    let err = catalog.get_movie(42).unwrap_err();
    assert!(matches!(err, CatalogError::NotFound));
}

/// A partial update writes the supplied fields and leaves the rest
/// untouched.
#[test]
fn test_update_movie_writes_only_supplied_fields() {
    let catalog = catalog();
    let id = catalog.create_movie(&dunkirk()).unwrap();

    let patch = MovieDraft {
        rating: Some(8.0),
        ..Default::default()
    };
    catalog.update_movie(id, &patch).unwrap();

    let movie = catalog.get_movie(id).unwrap();
    assert_eq!(movie.rating, Some(8.0));
    assert_eq!(movie.title.as_deref(), Some("Dunkirk"));
    assert_eq!(movie.year, Some(2017));
}

/// Updating a non-existent movie is a row-count failure, not a silent
/// no-op.
#[test]
fn test_update_missing_movie_fails() {
    let catalog = catalog();

    let patch = MovieDraft {
        title: Some("Ghost".to_string()),
        ..Default::default()
    };
    let err = catalog.update_movie(42, &patch).unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedRowCount(0)));
}

/// An empty patch writes nothing but still requires the row to exist.
#[test]
fn test_update_movie_with_empty_patch() {
    let catalog = catalog();
    let id = catalog.create_movie(&dunkirk()).unwrap();

    catalog.update_movie(id, &MovieDraft::default()).unwrap();
    assert!(matches!(
        catalog.update_movie(id + 1, &MovieDraft::default()),
        Err(CatalogError::UnexpectedRowCount(0))
    ));
}

#[test]
fn test_delete_movie_then_get_is_not_found() {
    let catalog = catalog();
    let id = catalog.create_movie(&dunkirk()).unwrap();

    catalog.delete_movie(id).unwrap();

    assert!(matches!(
        catalog.get_movie(id),
        Err(CatalogError::NotFound)
    ));
}

#[test]
fn test_delete_missing_movie_is_not_found() {
    let catalog = catalog();

    assert!(matches!(
        catalog.delete_movie(42),
        Err(CatalogError::NotFound)
    ));
}

/// Identifiers are never reused, even after the highest row is
/// deleted.
#[test]
fn test_movie_ids_are_not_reused() {
    let catalog = catalog();

    let first = catalog.create_movie(&dunkirk()).unwrap();
    catalog.delete_movie(first).unwrap();
    let second = catalog.create_movie(&dunkirk()).unwrap();

    assert_ne!(first, second);
}

/// A movie may reference director/genre rows that do not exist; the
/// store accepts the dangling reference.
#[test]
fn test_dangling_references_are_representable() {
    let catalog = catalog();

    let draft = MovieDraft {
        title: Some("Orphan".to_string()),
        director_id: Some(999),
        genre_id: Some(999),
        ..Default::default()
    };
    let id = catalog.create_movie(&draft).unwrap();

    let movie = catalog.get_movie(id).unwrap();
    assert_eq!(movie.director_id, Some(999));
    assert_eq!(movie.genre_id, Some(999));
}

/// Deleting a referenced director leaves the movie's reference
/// dangling rather than cascading.
#[test]
fn test_deleting_director_leaves_reference_dangling() {
    let catalog = catalog();

    let director_id = catalog
        .create_director(&DirectorDraft {
            name: Some("Nolan".to_string()),
        })
        .unwrap();
    let movie_id = catalog
        .create_movie(&MovieDraft {
            title: Some("Dunkirk".to_string()),
            director_id: Some(director_id),
            ..Default::default()
        })
        .unwrap();

    catalog.delete_director(director_id).unwrap();

    let movie = catalog.get_movie(movie_id).unwrap();
    assert_eq!(movie.director_id, Some(director_id));
}

// =============================================================================
// Director Tests
// =============================================================================

#[test]
fn test_director_crud_roundtrip() {
    let catalog = catalog();

    let id = catalog
        .create_director(&DirectorDraft {
            name: Some("Nolan".to_string()),
        })
        .unwrap();

    let director = catalog.get_director(id).unwrap();
    assert_eq!(director.name.as_deref(), Some("Nolan"));

    let all = catalog.list_directors().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);

    catalog
        .update_director(
            id,
            &DirectorDraft {
                name: Some("Christopher Nolan".to_string()),
            },
        )
        .unwrap();
    let renamed = catalog.get_director(id).unwrap();
    assert_eq!(renamed.name.as_deref(), Some("Christopher Nolan"));

    catalog.delete_director(id).unwrap();
    assert!(matches!(
        catalog.get_director(id),
        Err(CatalogError::NotFound)
    ));
}

/// An update payload without a name leaves the stored name unchanged.
#[test]
fn test_director_update_without_name_keeps_name() {
    let catalog = catalog();
    let id = catalog
        .create_director(&DirectorDraft {
            name: Some("Nolan".to_string()),
        })
        .unwrap();

    catalog
        .update_director(id, &DirectorDraft::default())
        .unwrap();

    let director = catalog.get_director(id).unwrap();
    assert_eq!(director.name.as_deref(), Some("Nolan"));
}

#[test]
fn test_director_update_missing_row_is_not_found() {
    let catalog = catalog();

    assert!(matches!(
        catalog.update_director(42, &DirectorDraft::default()),
        Err(CatalogError::NotFound)
    ));
    assert!(matches!(
        catalog.update_director(
            42,
            &DirectorDraft {
                name: Some("Ghost".to_string())
            }
        ),
        Err(CatalogError::NotFound)
    ));
}

// =============================================================================
// Genre Tests
// =============================================================================

/// Creating a genre adds a genre row, not a director row.
#[test]
fn test_genre_create_builds_a_genre() {
    let catalog = catalog();

    let id = catalog
        .create_genre(&GenreDraft {
            name: Some("War".to_string()),
        })
        .unwrap();

    let genres = catalog.list_genres().unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].id, id);
    assert_eq!(genres[0].name.as_deref(), Some("War"));

    assert!(catalog.list_directors().unwrap().is_empty());
}

#[test]
fn test_genre_update_and_delete() {
    let catalog = catalog();
    let id = catalog
        .create_genre(&GenreDraft {
            name: Some("War".to_string()),
        })
        .unwrap();

    catalog
        .update_genre(
            id,
            &GenreDraft {
                name: Some("Drama".to_string()),
            },
        )
        .unwrap();
    assert_eq!(
        catalog.get_genre(id).unwrap().name.as_deref(),
        Some("Drama")
    );

    catalog.delete_genre(id).unwrap();
    assert!(matches!(
        catalog.delete_genre(id),
        Err(CatalogError::NotFound)
    ));
}

// =============================================================================
// Persistence Tests
// =============================================================================

/// Rows written through one catalog handle are visible after reopening
/// the same database file.
#[test]
fn test_file_backed_catalog_persists_rows() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("catalog.db");

    let id = {
        let catalog = Catalog::open(&path).unwrap();
        catalog.create_movie(&dunkirk()).unwrap()
    };

    let reopened = Catalog::open(&path).unwrap();
    let movie = reopened.get_movie(id).unwrap();
    assert_eq!(movie.title.as_deref(), Some("Dunkirk"));

    let all = reopened.list_movies(&MovieFilter::default()).unwrap();
    assert_eq!(all.len(), 1);
}

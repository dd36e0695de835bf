//! Trip service wired to the directory-backed handlers

use std::sync::Arc;
use waypost_authorization::{TripError, TripService};
use waypost_core::effects::StoreError;
use waypost_core::{Identity, Trip};
use waypost_effects::{Directory, DirectoryConfig, DirectoryTripStore, IdentityConfig, SessionSlot};
use waypost_testkit::init_test_tracing;

fn identity(handle: &str, connections: &[&str], trips: &[&str]) -> IdentityConfig {
    IdentityConfig {
        handle: handle.into(),
        connections: connections.iter().map(|s| s.to_string()).collect(),
        trips: trips.iter().map(|s| s.to_string()).collect(),
    }
}

fn directory(symmetric: bool) -> Arc<Directory> {
    let config = DirectoryConfig {
        symmetric_connections: symmetric,
        identities: vec![
            identity("alice", &[], &["Porto"]),
            identity("bob", &["alice"], &["Lisbon", "Springfield"]),
            identity("carol", &["bob"], &["Oslo"]),
        ],
    };
    Arc::new(Directory::provision(&config).unwrap())
}

fn member(directory: &Directory, handle: &str) -> Arc<Identity> {
    directory.by_handle(handle).unwrap().clone()
}

#[tokio::test]
async fn signed_in_friend_sees_directory_trips() {
    init_test_tracing();
    let directory = directory(false);
    let session = SessionSlot::signed_in(member(&directory, "alice"));
    let service = TripService::new(session, DirectoryTripStore::new(directory.clone()));

    let trips = service.trips_by(&member(&directory, "bob")).await.unwrap();
    assert_eq!(trips, vec![Trip::new("Lisbon"), Trip::new("Springfield")]);

    // carol lists bob, not alice
    assert!(service
        .trips_by(&member(&directory, "carol"))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn connections_are_one_way_unless_provisioned_symmetric() {
    let one_way = directory(false);
    let service = TripService::new(
        SessionSlot::signed_in(member(&one_way, "bob")),
        DirectoryTripStore::new(one_way.clone()),
    );
    assert!(service
        .trips_by(&member(&one_way, "alice"))
        .await
        .unwrap()
        .is_empty());

    let symmetric = directory(true);
    let service = TripService::new(
        SessionSlot::signed_in(member(&symmetric, "bob")),
        DirectoryTripStore::new(symmetric.clone()),
    );
    assert_eq!(
        service.trips_by(&member(&symmetric, "alice")).await,
        Ok(vec![Trip::new("Porto")])
    );
}

#[tokio::test]
async fn signing_out_revokes_access() {
    let directory = directory(false);
    let service = TripService::new(
        SessionSlot::signed_in(member(&directory, "alice")),
        DirectoryTripStore::new(directory.clone()),
    );
    let bob = member(&directory, "bob");
    assert_eq!(service.store().directory().len(), 3);

    assert_eq!(service.trips_by(&bob).await.unwrap().len(), 2);

    service.session().sign_out();
    assert!(service.session().current().is_none());
    assert_eq!(service.trips_by(&bob).await, Err(TripError::NotAuthenticated));

    service.session().sign_in(member(&directory, "alice"));
    assert_eq!(service.trips_by(&bob).await.unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_target_surfaces_store_error() {
    let directory = directory(false);
    let alice = member(&directory, "alice");
    let mut outsider = Identity::new("outsider");
    outsider.add_connection(&alice);

    let service = TripService::new(
        SessionSlot::signed_in(alice),
        DirectoryTripStore::new(directory.clone()),
    );

    assert_eq!(
        service.trips_by(&outsider).await,
        Err(TripError::Store(StoreError::UnknownIdentity(outsider.id())))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_service_answers_concurrent_callers() {
    let directory = directory(false);
    let service = Arc::new(TripService::new(
        SessionSlot::signed_in(member(&directory, "alice")),
        DirectoryTripStore::new(directory.clone()),
    ));

    let calls = ["bob", "carol", "bob", "alice"]
        .into_iter()
        .cycle()
        .take(40)
        .map(|handle| {
            let service = service.clone();
            let target = member(&directory, handle);
            tokio::spawn(async move { (target.handle().to_owned(), service.trips_by(&target).await) })
        });

    for joined in futures::future::join_all(calls).await {
        let (handle, result) = joined.unwrap();
        let trips = result.unwrap();
        match handle.as_str() {
            "bob" => assert_eq!(trips.len(), 2),
            _ => assert!(trips.is_empty()),
        }
    }
}

mod relationship_service;

pub use relationship_service::{
    load_initial_people, InMemoryRelationshipService, RelationshipProvider,
};

//! Person records: in-memory repository and HTTP handlers.
//!
//! The repository is a toy — a locked map, no persistence, no uniqueness
//! rule beyond the id. It is constructed explicitly at startup and handed to
//! [`PersonHandler::new`]; nothing here is a global.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};

/// A person record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
}

/// Payload accepted by `POST /person`. The id is optional; the repository
/// assigns one when it is absent.
#[derive(Deserialize)]
struct CreatePerson {
    #[serde(default)]
    id: Option<u64>,
    name: String,
}

/// In-memory person store.
///
/// Reads dominate, hence the `RwLock`. No further concurrent-access
/// guarantees are defined — last write to an id wins.
pub struct PersonRepository {
    people: RwLock<HashMap<u64, Person>>,
}

impl PersonRepository {
    pub fn new() -> Self {
        Self { people: RwLock::new(HashMap::new()) }
    }

    /// A repository preloaded with the two sample records.
    pub fn seeded() -> Self {
        let repo = Self::new();
        repo.save("John Doe".to_owned(), Some(1));
        repo.save("Jane Doe".to_owned(), Some(2));
        repo
    }

    pub fn find(&self, id: u64) -> Option<Person> {
        self.people.read().expect("person map poisoned").get(&id).cloned()
    }

    /// All records, sorted by id for deterministic listings.
    pub fn list(&self) -> Vec<Person> {
        let mut people: Vec<Person> =
            self.people.read().expect("person map poisoned").values().cloned().collect();
        people.sort_by_key(|p| p.id);
        people
    }

    /// Stores a record and returns it. When `id` is `None` the next id past
    /// the current maximum is assigned, so generated ids never collide with
    /// client-supplied ones. Returns `None` when no id can be assigned — a
    /// stored record already holds `u64::MAX`, so there is no "next" id.
    pub fn save(&self, name: String, id: Option<u64>) -> Option<Person> {
        let mut people = self.people.write().expect("person map poisoned");
        let id = match id {
            Some(id) => id,
            None => match people.keys().max() {
                None => 1,
                Some(&max) => max.checked_add(1)?,
            },
        };
        let person = Person { id, name };
        people.insert(id, person.clone());
        Some(person)
    }
}

impl Default for PersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// HTTP shaping over a [`PersonRepository`].
pub struct PersonHandler {
    repo: Arc<PersonRepository>,
}

impl PersonHandler {
    pub fn new(repo: Arc<PersonRepository>) -> Self {
        Self { repo }
    }

    /// `GET /person/{id}` — the record as JSON, `400` on a malformed id,
    /// `404` on an unknown one.
    pub async fn get_person(&self, req: Request) -> Response {
        let Some(Ok(id)) = req.param("id").map(str::parse::<u64>) else {
            return Response::status(StatusCode::BAD_REQUEST);
        };

        match self.repo.find(id) {
            Some(person) => Json(person).into_response(),
            None => Response::status(StatusCode::NOT_FOUND),
        }
    }

    /// `GET /person` — every record as a JSON array.
    pub async fn list_people(&self, _req: Request) -> Response {
        Json(self.repo.list()).into_response()
    }

    /// `POST /person` — stores the posted record and returns it with a
    /// `location` header. Malformed payloads get `400`.
    pub async fn create_person(&self, req: Request) -> Response {
        let input: CreatePerson = match serde_json::from_slice(req.body()) {
            Ok(input) => input,
            Err(e) => {
                debug!("rejecting create payload: {e}");
                return Response::status(StatusCode::BAD_REQUEST);
            }
        };

        let Some(person) = self.repo.save(input.name, input.id) else {
            // The id space is exhausted; nothing the client sent was wrong.
            return Response::status(StatusCode::INTERNAL_SERVER_ERROR);
        };
        match serde_json::to_vec(&person) {
            Ok(bytes) => Response::builder()
                .status(StatusCode::CREATED)
                .header("location", &format!("/person/{}", person.id))
                .json(bytes),
            Err(_) => Response::status(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use http::{HeaderMap, Method};

    #[test]
    fn save_assigns_ids_past_the_maximum() {
        let repo = PersonRepository::new();

        let a = repo.save("a".to_owned(), None).unwrap();
        assert_eq!(a.id, 1);

        repo.save("b".to_owned(), Some(10));
        let c = repo.save("c".to_owned(), None).unwrap();
        assert_eq!(c.id, 11);
    }

    #[test]
    fn save_refuses_to_generate_past_the_top_of_the_id_range() {
        let repo = PersonRepository::new();
        repo.save("top".to_owned(), Some(u64::MAX));

        // No next id exists, and the failed save must not disturb the store.
        assert_eq!(repo.save("next".to_owned(), None), None);
        assert!(repo.save("explicit".to_owned(), Some(5)).is_some());
        assert_eq!(repo.find(u64::MAX).map(|p| p.name), Some("top".to_owned()));
    }

    #[test]
    fn list_is_sorted_by_id() {
        let repo = PersonRepository::new();
        repo.save("late".to_owned(), Some(9));
        repo.save("early".to_owned(), Some(3));

        let ids: Vec<u64> = repo.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn seeded_repository_has_the_sample_records() {
        let repo = PersonRepository::seeded();
        assert_eq!(repo.find(1).map(|p| p.name), Some("John Doe".to_owned()));
        assert_eq!(repo.find(2).map(|p| p.name), Some("Jane Doe".to_owned()));
        assert_eq!(repo.find(3), None);
    }

    fn post(body: &'static [u8]) -> Request {
        Request::new(Method::POST, "/person", HeaderMap::new(), Bytes::from_static(body))
    }

    #[tokio::test]
    async fn create_rejects_malformed_payloads() {
        let handler = PersonHandler::new(Arc::new(PersonRepository::new()));

        let res = handler.create_person(post(b"not json")).await;
        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);

        let res = handler.create_person(post(br#"{"id":1}"#)).await;
        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_reports_an_exhausted_id_space() {
        let repo = Arc::new(PersonRepository::new());
        repo.save("top".to_owned(), Some(u64::MAX));
        let handler = PersonHandler::new(repo);

        let res = handler.create_person(post(br#"{"name":"next"}"#)).await;
        assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn create_stores_and_echoes_the_record() {
        let repo = Arc::new(PersonRepository::new());
        let handler = PersonHandler::new(Arc::clone(&repo));

        let res = handler.create_person(post(br#"{"name":"Ada"}"#)).await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
        assert_eq!(res.header("location"), Some("/person/1"));

        let stored: Person = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(repo.find(stored.id), Some(stored));
    }
}

use std::collections::BTreeMap;
use std::sync::Arc;

use common::{GameRecord, PlayerEntry};
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use futures::future::BoxFuture;
use futures::FutureExt;

use crate::models::{Game, GameEntry};
use crate::schema::{game_entries, games};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("connecting to the database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("running query: {0}")]
    Query(#[from] diesel::result::Error),
}

/// Persistence of the recorded games
pub trait GameStore: Send + Sync {
    /// Stores a new game with all of its entries at once and returns its id
    fn insert<'s>(
        &'s self,
        entries: BTreeMap<String, PlayerEntry>,
    ) -> BoxFuture<'s, Result<i32, StoreError>>;

    /// All games, newest first
    fn list_all<'s>(&'s self) -> BoxFuture<'s, Result<Vec<GameRecord>, StoreError>>;

    /// Returns whether a game with the id existed and was removed
    fn delete_by_id<'s>(&'s self, id: i32) -> BoxFuture<'s, Result<bool, StoreError>>;
}

pub struct DieselStore {
    database_url: Arc<str>,
}

impl DieselStore {
    pub fn new<U>(database_url: U) -> Self
    where
        U: Into<Arc<str>>,
    {
        Self {
            database_url: database_url.into(),
        }
    }

    async fn connection(&self) -> Result<diesel_async::AsyncPgConnection, StoreError> {
        Ok(crate::db_connection(&self.database_url).await?)
    }
}

impl GameStore for DieselStore {
    fn insert<'s>(
        &'s self,
        entries: BTreeMap<String, PlayerEntry>,
    ) -> BoxFuture<'s, Result<i32, StoreError>> {
        async move {
            let mut db_con = self.connection().await?;

            let game_id = db_con
                .build_transaction()
                .run::<_, diesel::result::Error, _>(|conn| {
                    Box::pin(async move {
                        let game_id: i32 = diesel::dsl::insert_into(games::table)
                            .default_values()
                            .returning(games::id)
                            .get_result(conn)
                            .await?;

                        let rows: Vec<GameEntry> = entries
                            .into_iter()
                            .map(|(player, entry)| GameEntry::new(game_id, player, entry))
                            .collect();

                        if !rows.is_empty() {
                            diesel::dsl::insert_into(game_entries::table)
                                .values(rows)
                                .execute(conn)
                                .await?;
                        }

                        Ok(game_id)
                    })
                })
                .await?;

            Ok(game_id)
        }
        .boxed()
    }

    fn list_all<'s>(&'s self) -> BoxFuture<'s, Result<Vec<GameRecord>, StoreError>> {
        async move {
            let mut db_con = self.connection().await?;

            let (stored_games, stored_entries) = db_con
                .build_transaction()
                .read_only()
                .repeatable_read()
                .run::<_, diesel::result::Error, _>(|conn| {
                    Box::pin(async move {
                        let stored_games: Vec<Game> = games::table
                            .order(games::id.desc())
                            .select(Game::as_select())
                            .load(conn)
                            .await?;

                        let stored_entries: Vec<GameEntry> = game_entries::table
                            .select(GameEntry::as_select())
                            .load(conn)
                            .await?;

                        Ok((stored_games, stored_entries))
                    })
                })
                .await?;

            tracing::debug!(
                games = stored_games.len(),
                entries = stored_entries.len(),
                "Loaded games"
            );

            let mut grouped = BTreeMap::<i32, BTreeMap<String, PlayerEntry>>::new();
            for mut row in stored_entries {
                let player = std::mem::take(&mut row.player);
                grouped
                    .entry(row.game_id)
                    .or_default()
                    .insert(player, row.entry());
            }

            Ok(stored_games
                .into_iter()
                .map(|game| GameRecord {
                    id: game.id,
                    played_at: game.played_at,
                    entries: grouped.remove(&game.id).unwrap_or_default(),
                })
                .collect())
        }
        .boxed()
    }

    fn delete_by_id<'s>(&'s self, id: i32) -> BoxFuture<'s, Result<bool, StoreError>> {
        async move {
            let mut db_con = self.connection().await?;

            let query = diesel::dsl::delete(games::table.filter(games::id.eq(id)));
            tracing::trace!(
                query = %diesel::debug_query::<diesel::pg::Pg, _>(&query),
                "Delete game query"
            );

            let removed = query.execute(&mut db_con).await?;
            Ok(removed > 0)
        }
        .boxed()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i32,
    games: BTreeMap<i32, GameRecord>,
}

/// Keeps all games in memory, they are lost once the process exits
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    state: Arc<tokio::sync::Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn insert<'s>(
        &'s self,
        entries: BTreeMap<String, PlayerEntry>,
    ) -> BoxFuture<'s, Result<i32, StoreError>> {
        async move {
            let mut state = self.state.lock().await;

            state.last_id += 1;
            let id = state.last_id;
            state.games.insert(
                id,
                GameRecord {
                    id,
                    played_at: chrono::Utc::now().naive_utc(),
                    entries,
                },
            );

            Ok(id)
        }
        .boxed()
    }

    fn list_all<'s>(&'s self) -> BoxFuture<'s, Result<Vec<GameRecord>, StoreError>> {
        async move {
            let state = self.state.lock().await;
            Ok(state.games.values().rev().cloned().collect())
        }
        .boxed()
    }

    fn delete_by_id<'s>(&'s self, id: i32) -> BoxFuture<'s, Result<bool, StoreError>> {
        async move {
            let mut state = self.state.lock().await;
            Ok(state.games.remove(&id).is_some())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entries(points: u32) -> BTreeMap<String, PlayerEntry> {
        [
            ("Anna".to_owned(), PlayerEntry::new("Gizeh", points)),
            ("Ben".to_owned(), PlayerEntry::new("Rhodos", 35)),
        ]
        .into_iter()
        .collect()
    }

    #[tokio::test]
    async fn list_newest_first() {
        let store = MemoryStore::new();

        let first = store.insert(entries(40)).await.unwrap();
        let second = store.insert(entries(52)).await.unwrap();
        assert!(second > first);

        let games = store.list_all().await.unwrap();
        assert_eq!(
            vec![second, first],
            games.iter().map(|g| g.id).collect::<Vec<_>>()
        );
        assert_eq!(entries(52), games[0].entries);
        assert_eq!(entries(40), games[1].entries);
    }

    #[tokio::test]
    async fn delete_missing() {
        let store = MemoryStore::new();
        let id = store.insert(entries(40)).await.unwrap();

        assert!(!store.delete_by_id(id + 1).await.unwrap());
        assert_eq!(1, store.list_all().await.unwrap().len());

        assert!(store.delete_by_id(id).await.unwrap());
        assert!(!store.delete_by_id(id).await.unwrap());
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let store = MemoryStore::new();

        let first = store.insert(entries(40)).await.unwrap();
        store.delete_by_id(first).await.unwrap();
        let second = store.insert(entries(41)).await.unwrap();

        assert_ne!(first, second);
    }
}

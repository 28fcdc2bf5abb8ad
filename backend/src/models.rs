use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Game {
    pub id: i32,
    pub played_at: chrono::NaiveDateTime,
}

#[derive(Queryable, Selectable, Insertable, Debug)]
#[diesel(table_name = crate::schema::game_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameEntry {
    pub game_id: i32,
    pub player: String,
    pub civilization: Option<String>,
    pub points: Option<i64>,
}

impl GameEntry {
    pub fn new(game_id: i32, player: String, entry: common::PlayerEntry) -> Self {
        Self {
            game_id,
            player,
            civilization: entry.civilization,
            points: entry.points.map(i64::from),
        }
    }

    /// Stored points outside of the `u32` range are treated as missing
    pub fn entry(self) -> common::PlayerEntry {
        common::PlayerEntry {
            civilization: self.civilization,
            points: self.points.and_then(|p| u32::try_from(p).ok()),
        }
    }
}

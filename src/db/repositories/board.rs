use crate::entities::{boards, prelude::*};
use crate::models::board::{Board, BoardSeed};
use anyhow::Result;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};
use tracing::info;

use crate::db::timestamp_now;

pub struct BoardRepository {
    conn: DatabaseConnection,
}

impl BoardRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Board>> {
        let rows = Boards::find()
            .order_by_asc(boards::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Board::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Board>> {
        let row = Boards::find_by_id(id).one(&self.conn).await?;
        Ok(row.map(Board::from))
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Boards::find().count(&self.conn).await?)
    }

    /// Inserts `seeds` only when the table is empty. Returns how many rows were written.
    pub async fn seed(&self, seeds: &[BoardSeed]) -> Result<usize> {
        if self.count().await? > 0 || seeds.is_empty() {
            return Ok(0);
        }

        let now = timestamp_now();
        let models: Vec<boards::ActiveModel> = seeds
            .iter()
            .map(|s| boards::ActiveModel {
                name: Set(s.name.to_string()),
                slug: Set(s.slug.to_string()),
                description: Set(Some(s.description.to_string())),
                is_active: Set(true),
                allow_anonymous: Set(s.allow_anonymous),
                require_password: Set(s.require_password),
                created_at: Set(now.clone()),
                ..Default::default()
            })
            .collect();

        Boards::insert_many(models).exec(&self.conn).await?;
        info!(count = seeds.len(), "Seeded default boards");
        Ok(seeds.len())
    }
}

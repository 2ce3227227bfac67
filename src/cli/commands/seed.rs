//! Seed boards command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_url,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let inserted = store.seed_default_boards().await?;
    if inserted == 0 {
        println!("Boards already exist, nothing seeded.");
    } else {
        println!("Seeded {inserted} boards.");
    }

    let boards = store.list_boards().await?;
    println!("Boards ({} total)", boards.len());
    println!("{:-<50}", "");
    for board in boards {
        println!("{:>3}  {:<12} {}", board.id, board.slug, board.name);
    }

    Ok(())
}

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use leadfolio_core::constants::DATE_FORMAT;
use leadfolio_core::filters::InteractionFilters;
use leadfolio_core::interactions::{
    InteractionRepositoryTrait, InteractionWithClient, NewInteraction,
};
use leadfolio_core::Result;

use super::model::{InteractionDB, NewInteractionDB};
use crate::cache::ReadCache;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{clients, interactions};

type JoinedRow = (InteractionDB, String, Option<String>, Option<String>);

pub struct InteractionRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
}

impl InteractionRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, cache: Arc<ReadCache>) -> Self {
        InteractionRepository {
            pool,
            writer,
            cache,
        }
    }

    fn list_filtered_impl(&self, filters: &InteractionFilters) -> Result<Vec<InteractionWithClient>> {
        let rows = self.cache.get_or_load("interactions.list", filters, || {
            let mut conn = get_connection(&self.pool)?;

            // Conjunctive predicate over the interactions/clients join;
            // every unset filter member is simply omitted.
            let mut query = interactions::table
                .inner_join(clients::table)
                .select((
                    InteractionDB::as_select(),
                    clients::company_name,
                    clients::sector,
                    clients::region,
                ))
                .into_boxed();
            if !filters.sectors.is_empty() {
                query = query.filter(clients::sector.eq_any(
                    filters.sectors.iter().map(|s| Some(s.clone())).collect::<Vec<_>>(),
                ));
            }
            if !filters.regions.is_empty() {
                query = query.filter(clients::region.eq_any(
                    filters.regions.iter().map(|r| Some(r.clone())).collect::<Vec<_>>(),
                ));
            }
            if !filters.rep_ids.is_empty() {
                let ids: Vec<Option<i32>> = filters.rep_ids.iter().map(|id| Some(*id)).collect();
                query = query.filter(interactions::assigned_to.eq_any(ids));
            }
            if let Some(start) = filters.start {
                query = query.filter(
                    interactions::interaction_date.ge(start.format(DATE_FORMAT).to_string()),
                );
            }
            if let Some(end) = filters.end {
                query = query.filter(
                    interactions::interaction_date.le(end.format(DATE_FORMAT).to_string()),
                );
            }

            let joined = query
                .order((
                    interactions::interaction_date.desc(),
                    interactions::id.desc(),
                ))
                .load::<JoinedRow>(&mut conn)
                .map_err(StorageError::from)?;

            Ok(joined
                .into_iter()
                .map(|(interaction_db, client_name, sector, region)| InteractionWithClient {
                    interaction: interaction_db.into(),
                    client_name,
                    sector,
                    region,
                })
                .collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }
}

#[async_trait]
impl InteractionRepositoryTrait for InteractionRepository {
    fn list_filtered(&self, filters: &InteractionFilters) -> Result<Vec<InteractionWithClient>> {
        self.list_filtered_impl(filters)
    }

    async fn insert(&self, new_interaction: NewInteraction) -> Result<InteractionWithClient> {
        self.writer
            .exec(
                move |conn: &mut SqliteConnection| -> Result<InteractionWithClient> {
                    let new_interaction_db: NewInteractionDB = new_interaction.into();
                    let result_db: InteractionDB = diesel::insert_into(interactions::table)
                        .values(&new_interaction_db)
                        .returning(InteractionDB::as_returning())
                        .get_result(conn)
                        .map_err(StorageError::from)?;

                    let (client_name, sector, region) = clients::table
                        .find(result_db.client_id)
                        .select((clients::company_name, clients::sector, clients::region))
                        .first::<(String, Option<String>, Option<String>)>(conn)
                        .map_err(StorageError::from)?;

                    Ok(InteractionWithClient {
                        interaction: result_db.into(),
                        client_name,
                        sector,
                        region,
                    })
                },
            )
            .await
    }
}

use async_trait::async_trait;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use leadfolio_core::constants::PROPOSAL_ACTION_TYPE;
use leadfolio_core::targets::{NewTarget, Target, TargetActuals, TargetRepositoryTrait};
use leadfolio_core::Result;

use super::model::{NewTargetDB, TargetDB};
use crate::cache::ReadCache;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{interactions, leads, meetings, targets};

/// First day of the period and of the following month, as ISO strings.
/// Text comparison against these bounds is chronological.
fn period_bounds(month: i32, year: i32) -> (String, String) {
    let start = format!("{year:04}-{month:02}-01");
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next = format!("{next_year:04}-{next_month:02}-01");
    (start, next)
}

pub struct TargetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    cache: Arc<ReadCache>,
}

impl TargetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle, cache: Arc<ReadCache>) -> Self {
        TargetRepository {
            pool,
            writer,
            cache,
        }
    }
}

#[async_trait]
impl TargetRepositoryTrait for TargetRepository {
    fn list(&self) -> Result<Vec<Target>> {
        let rows = self.cache.get_or_load("targets.list", &(), || {
            let mut conn = get_connection(&self.pool)?;
            let targets_db = targets::table
                .order((
                    targets::year.desc(),
                    targets::month.desc(),
                    targets::user_id.asc(),
                ))
                .load::<TargetDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(targets_db.into_iter().map(Target::from).collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }

    fn list_for_user(&self, user_id: i32) -> Result<Vec<Target>> {
        let rows = self.cache.get_or_load("targets.list_for_user", &user_id, || {
            let mut conn = get_connection(&self.pool)?;
            let targets_db = targets::table
                .filter(targets::user_id.eq(user_id))
                .order((targets::year.desc(), targets::month.desc()))
                .load::<TargetDB>(&mut conn)
                .map_err(StorageError::from)?;
            Ok(targets_db.into_iter().map(Target::from).collect::<Vec<_>>())
        })?;
        Ok(rows.as_ref().clone())
    }

    async fn upsert(&self, new_target: NewTarget) -> Result<Target> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Target> {
                let new_target_db: NewTargetDB = new_target.into();
                let result_db = diesel::insert_into(targets::table)
                    .values(&new_target_db)
                    .on_conflict((targets::user_id, targets::month, targets::year))
                    .do_update()
                    .set((
                        targets::new_clients_target.eq(new_target_db.new_clients_target),
                        targets::proposals_target.eq(new_target_db.proposals_target),
                        targets::revenue_target.eq(new_target_db.revenue_target),
                    ))
                    .returning(TargetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Target::from(result_db))
            })
            .await
    }

    fn actuals_for_period(&self, user_id: i32, month: i32, year: i32) -> Result<TargetActuals> {
        let actuals =
            self.cache
                .get_or_load("targets.actuals", &(user_id, month, year), || {
                    let mut conn = get_connection(&self.pool)?;
                    let (start, next) = period_bounds(month, year);

                    // New clients: this rep's leads that reached the Client
                    // stage within the period.
                    let new_clients = leads::table
                        .filter(leads::assigned_to.eq(Some(user_id)))
                        .filter(leads::stage.eq("Client"))
                        .filter(leads::created_at.ge(start.clone()))
                        .filter(leads::created_at.lt(next.clone()))
                        .count()
                        .get_result::<i64>(&mut conn)
                        .map_err(StorageError::from)?;

                    // Proposals: proposal-type interactions logged by the rep
                    // within the period.
                    let proposals = interactions::table
                        .filter(interactions::assigned_to.eq(Some(user_id)))
                        .filter(interactions::action_type.eq(PROPOSAL_ACTION_TYPE))
                        .filter(interactions::interaction_date.ge(start.clone()))
                        .filter(interactions::interaction_date.lt(next.clone()))
                        .count()
                        .get_result::<i64>(&mut conn)
                        .map_err(StorageError::from)?;

                    // Revenue: opportunity values of period meetings held with
                    // the clients behind this rep's leads.
                    let client_ids: Vec<i32> = leads::table
                        .filter(leads::assigned_to.eq(Some(user_id)))
                        .filter(leads::client_id.is_not_null())
                        .select(leads::client_id)
                        .load::<Option<i32>>(&mut conn)
                        .map_err(StorageError::from)?
                        .into_iter()
                        .flatten()
                        .collect();
                    let revenue = meetings::table
                        .filter(meetings::client_id.eq_any(client_ids))
                        .filter(meetings::meeting_date.ge(start))
                        .filter(meetings::meeting_date.lt(next))
                        .select(sum(meetings::opportunity_value))
                        .first::<Option<f64>>(&mut conn)
                        .map_err(StorageError::from)?
                        .unwrap_or(0.0);

                    Ok(TargetActuals {
                        new_clients,
                        proposals,
                        revenue,
                    })
                })?;
        Ok(actuals.as_ref().clone())
    }
}

//! Database models for targets.

use diesel::prelude::*;

use leadfolio_core::targets::{NewTarget, Target};

/// Database model for targets.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::targets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TargetDB {
    pub id: i32,
    pub user_id: i32,
    pub month: i32,
    pub year: i32,
    pub new_clients_target: i32,
    pub proposals_target: i32,
    pub revenue_target: f64,
}

/// Database model for inserting a target row.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::targets)]
pub struct NewTargetDB {
    pub user_id: i32,
    pub month: i32,
    pub year: i32,
    pub new_clients_target: i32,
    pub proposals_target: i32,
    pub revenue_target: f64,
}

impl From<TargetDB> for Target {
    fn from(db: TargetDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            month: db.month,
            year: db.year,
            new_clients_target: db.new_clients_target,
            proposals_target: db.proposals_target,
            revenue_target: db.revenue_target,
        }
    }
}

impl From<NewTarget> for NewTargetDB {
    fn from(domain: NewTarget) -> Self {
        Self {
            user_id: domain.user_id,
            month: domain.month,
            year: domain.year,
            new_clients_target: domain.new_clients_target,
            proposals_target: domain.proposals_target,
            revenue_target: domain.revenue_target,
        }
    }
}

use std::str::FromStr;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select};
use serde::Serialize;
use tracing::debug;

use super::predicate::{FilterPredicate, LIKE_ESCAPE};
use super::resource::{Resource, ResourceSpec};
use super::store::{Record, RecordStore, Window};
use crate::errors::StoreError;
use models::{customer, location, service_category};

/// SeaORM-backed record store.
pub struct SeaOrmRecordStore {
    pub db: DatabaseConnection,
}

impl SeaOrmRecordStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn column<E: EntityTrait>(name: &str) -> Result<E::Column, StoreError> {
    E::Column::from_str(name).map_err(|_| StoreError::Query(format!("unknown column '{name}'")))
}

/// `LOWER(field) LIKE pattern ESCAPE '\'`, OR-ed across the predicate's
/// fields and AND-ed across predicates.
pub fn condition<E: EntityTrait>(predicates: &[FilterPredicate]) -> Result<Condition, StoreError> {
    let mut all = Condition::all();
    for predicate in predicates {
        let pattern = predicate.like_pattern();
        let mut any = Condition::any();
        for field in predicate.fields() {
            let col = column::<E>(field)?;
            any = any.add(
                Expr::expr(Func::lower(Expr::col((E::default(), col))))
                    .like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)),
            );
        }
        all = all.add(any);
    }
    Ok(all)
}

/// `E::find()` narrowed by `predicates`; no `WHERE` at all when there are none.
fn filtered<E: EntityTrait>(predicates: &[FilterPredicate]) -> Result<Select<E>, StoreError> {
    let query = E::find();
    if predicates.is_empty() {
        return Ok(query);
    }
    Ok(query.filter(condition::<E>(predicates)?))
}

/// The filtered, ordered, windowed select shared by `select_rows`.
pub fn select_query<E: EntityTrait>(spec: &ResourceSpec, predicates: &[FilterPredicate], window: Window) -> Result<Select<E>, StoreError> {
    let sort = column::<E>(spec.sort_key)?;
    let tiebreak = column::<E>("id")?;
    Ok(filtered::<E>(predicates)?
        .order_by_desc(sort)
        .order_by_desc(tiebreak)
        .offset(window.offset)
        .limit(window.limit))
}

async fn count_rows<E>(db: &DatabaseConnection, predicates: &[FilterPredicate]) -> Result<u64, StoreError>
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    let total = filtered::<E>(predicates)?.count(db).await?;
    Ok(total)
}

async fn select_rows<E>(db: &DatabaseConnection, spec: &ResourceSpec, predicates: &[FilterPredicate], window: Window) -> Result<Vec<Record>, StoreError>
where
    E: EntityTrait,
    E::Model: Serialize + Send + Sync,
{
    let rows = select_query::<E>(spec, predicates, window)?.all(db).await?;
    rows.into_iter()
        .map(|m| serde_json::to_value(m).map_err(|e| StoreError::Query(e.to_string())))
        .collect()
}

#[async_trait]
impl RecordStore for SeaOrmRecordStore {
    async fn count(&self, spec: &ResourceSpec, predicates: &[FilterPredicate]) -> Result<u64, StoreError> {
        debug!(resource = spec.name, predicates = predicates.len(), "store count");
        match spec.resource {
            Resource::Customers => count_rows::<customer::Entity>(&self.db, predicates).await,
            Resource::Locations => count_rows::<location::Entity>(&self.db, predicates).await,
            Resource::ServiceCategories => count_rows::<service_category::Entity>(&self.db, predicates).await,
        }
    }

    async fn select(&self, spec: &ResourceSpec, predicates: &[FilterPredicate], window: Window) -> Result<Vec<Record>, StoreError> {
        debug!(resource = spec.name, offset = window.offset, limit = window.limit, "store select");
        if window.is_unreachable() {
            return Ok(Vec::new());
        }
        match spec.resource {
            Resource::Customers => select_rows::<customer::Entity>(&self.db, spec, predicates, window).await,
            Resource::Locations => select_rows::<location::Entity>(&self.db, spec, predicates, window).await,
            Resource::ServiceCategories => select_rows::<service_category::Entity>(&self.db, spec, predicates, window).await,
        }
    }
}

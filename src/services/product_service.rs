use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use sea_orm::ActiveValue::NotSet;

use crate::{
    db::begin_session,
    dto::products::ProductRequest,
    entity::products::{ActiveModel, Column, Entity as Products},
    error::{AppError, AppResult},
    models::Product,
    routes::params::ListProductsQuery,
    state::AppState,
};

pub async fn list_products(state: &AppState, query: ListProductsQuery) -> AppResult<Vec<Product>> {
    let (offset, limit) = query
        .window()
        .map_err(|errors| AppError::invalid("query", &errors))?;

    let mut finder = Products::find();
    if let Some(available) = query.available {
        finder = finder.filter(Column::Available.eq(available));
    }

    let products = finder
        .order_by_asc(Column::Id)
        .offset(offset)
        .limit(limit)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    Ok(products)
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<Product> {
    let result = Products::find_by_id(id).one(&state.orm).await?;
    let result = match result {
        Some(p) => p,
        None => return Err(AppError::ProductNotFound(id)),
    };
    Ok(result.into())
}

pub async fn create_product(state: &AppState, payload: ProductRequest) -> AppResult<Product> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        available: Set(payload.available),
        supplier: Set(payload.supplier),
    };
    let product = active.insert(&state.orm).await?;
    tracing::debug!(product_id = product.id, "product created");

    Ok(product.into())
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: ProductRequest,
) -> AppResult<Product> {
    let txn = begin_session(&state.orm).await?;

    let existing = Products::find_by_id(id).one(&txn).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::ProductNotFound(id)),
    };

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    active.price = Set(payload.price);
    active.available = Set(payload.available);
    active.supplier = Set(payload.supplier);

    let product = active.update(&txn).await?;
    txn.commit().await?;
    tracing::debug!(product_id = product.id, "product updated");

    Ok(product.into())
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::ProductNotFound(id));
    }
    tracing::debug!(product_id = id, "product deleted");

    Ok(())
}

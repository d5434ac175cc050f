use actix_web::{web, Responder};
use log::{info, warn};
use crate::server::controller::error::ApiError;
use crate::server::database::pool::DbClient;
use crate::server::model::order::{OrderResponse, PostOrderLineRequest, PostOrderRequest, PostOrderResponse};
use crate::server::model::validation::Quantity;
use crate::server::service::accumulator::OrderAccumulator;
use crate::server::service::submission;
use crate::server::state::AppState;
use crate::server::util::money::format_amount;

fn order_response(order: &OrderAccumulator) -> OrderResponse {
    OrderResponse {
        lines: order.current_lines().cloned().collect(),
        running_total: order.display_total(),
    }
}

/// show the lines of the in-progress order and its running total
pub(crate) async fn get_order<M: DbClient>(data: web::Data<AppState<M>>) -> impl Responder {
    let order = data.order().lock().await;
    web::Json(order_response(&order))
}

/// add one line to the in-progress order
pub(crate) async fn post_order_line<M: DbClient>(
    body: web::Json<PostOrderLineRequest>,
    data: web::Data<AppState<M>>,
) -> Result<web::Json<OrderResponse>, ApiError> {
    let item = data.catalog().select(body.menu_item_id)?;
    let quantity = Quantity::new(body.quantity)?;
    let mut order = data.order().lock().await;
    let line = order.add_line(item, quantity);
    info!("added {} x {} ({}) to order", line.quantity().get(), line.item_name(), line.menu_item_id());
    Ok(web::Json(order_response(&order)))
}

/// submit the in-progress order for a table; the order is kept if storing fails
pub(crate) async fn post_order<M: DbClient>(
    body: web::Json<PostOrderRequest>,
    data: web::Data<AppState<M>>,
) -> Result<web::Json<PostOrderResponse>, ApiError> {
    let mut order = data.order().lock().await;
    let submitted = match submission::submit(
        data.db_pool(),
        data.db_timeout(),
        body.table_number,
        order.lines(),
        order.running_total(),
    ).await {
        Ok(submitted) => submitted,
        Err(e) => {
            warn!("post_order failed, {}", e);
            return Err(e.into());
        }
    };
    order.clear();
    Ok(web::Json(PostOrderResponse {
        order_id: submitted.order_id,
        table_number: submitted.table_number,
        total_amount: format_amount(submitted.total_amount),
        line_count: submitted.line_count,
    }))
}

/// cancel the in-progress order
pub(crate) async fn delete_order<M: DbClient>(data: web::Data<AppState<M>>) -> impl Responder {
    let mut order = data.order().lock().await;
    if !order.is_empty() {
        info!("cancelling order with {} lines", order.lines().len());
    }
    order.clear();
    web::Json(order_response(&order))
}

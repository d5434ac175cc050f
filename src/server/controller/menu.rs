use actix_web::{web, Responder};
use crate::server::database::pool::DbClient;
use crate::server::model::menu_item::GetMenuResponse;
use crate::server::state::AppState;

/// list the menu loaded at startup
pub(crate) async fn get_menu<M: DbClient>(data: web::Data<AppState<M>>) -> impl Responder {
    web::Json(GetMenuResponse {
        items: data.catalog().items().to_vec(),
    })
}

use actix_web::web;
use crate::server::database::pool::DbClient;

pub(crate) mod error;
pub(crate) mod menu;
pub(crate) mod order;

/// Register the order desk routes for a given storage client.
pub(crate) fn configure<M: DbClient>(cfg: &mut web::ServiceConfig) {
    cfg.route("/v1/menu", web::get().to(menu::get_menu::<M>))
        .route("/v1/order/lines", web::post().to(order::post_order_line::<M>))
        .service(
            web::resource("/v1/order")
                .route(web::get().to(order::get_order::<M>))
                .route(web::post().to(order::post_order::<M>))
                .route(web::delete().to(order::delete_order::<M>)),
        );
}

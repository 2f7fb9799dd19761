//! App Router

use salvo::Router;

use crate::{carts, service_info};

pub(crate) fn app_router() -> Router {
    Router::new()
        .get(service_info::index)
        .push(Router::with_path("healthcheck").get(service_info::healthcheck))
        .push(
            Router::with_path("carts")
                .get(carts::index::handler)
                .post(carts::create::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler)
                        .push(Router::with_path("subtotal").put(carts::subtotal::handler))
                        .push(
                            Router::with_path("items")
                                .get(carts::items::index::handler)
                                .post(carts::items::create::handler)
                                .push(
                                    Router::with_path("{sku}")
                                        .get(carts::items::get::handler)
                                        .put(carts::items::update::handler)
                                        .delete(carts::items::delete::handler),
                                ),
                        ),
                ),
        )
}

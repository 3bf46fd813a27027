use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"Page not found"}</h1>
            <p>{format!("The page you are looking for is not part of {}.", config::BRAND_NAME)}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                {"Back to products"}
            </Link<Route>>
        </div>
    }
}

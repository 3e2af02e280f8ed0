use crate::components::hotel_detail::HotelDetail;
use crate::components::hotel_form::HotelForm;
use crate::components::hotel_list::HotelList;
use crate::route::Route;
use yew::{html, Component, Context, Html};

pub struct App {
    route: Route,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let location = web_sys::window().map(|w| w.location());
        let path = location.as_ref().and_then(|l| l.pathname().ok()).unwrap_or_default();
        let search = location.as_ref().and_then(|l| l.search().ok()).unwrap_or_default();
        Self {
            route: Route::parse(&path, &search),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let page = match self.route {
            Route::List { page } => html! { <HotelList {page} /> },
            Route::Detail(id) => html! { <HotelDetail {id} /> },
            Route::New => html! { <HotelForm hotel_id={None::<i64>} /> },
            Route::Edit(id) => html! { <HotelForm hotel_id={Some(id)} /> },
            Route::NotFound => html! {
                <div class="empty">
                    <p>{"Page not found."}</p>
                    <a href="/">{"Back to the hotel list"}</a>
                </div>
            },
        };

        html! {
            <div class="app">
                <header class="app-header">
                    <a class="brand" href="/">{"Hotels"}</a>
                </header>
                <main>{ page }</main>
            </div>
        }
    }
}

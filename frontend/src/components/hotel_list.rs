//! `/` page: paginated hotel cards with previous/next links.

use crate::api::{self, ApiFailure};
use crate::helpers::{format_price, sorted_pictures};
use crate::route::Route;
use common::model::hotel::Hotel;
use common::model::response::Page;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HotelListProps {
    pub page: u32,
}

pub enum Msg {
    Loaded(Page<Hotel>),
    Failed(ApiFailure),
}

pub struct HotelList {
    page: Option<Page<Hotel>>,
    errors: Vec<String>,
}

impl Component for HotelList {
    type Message = Msg;
    type Properties = HotelListProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let page = ctx.props().page;
        spawn_local(async move {
            match api::fetch_page(page).await {
                Ok(page) => link.send_message(Msg::Loaded(page)),
                Err(failure) => link.send_message(Msg::Failed(failure)),
            }
        });
        Self {
            page: None,
            errors: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(page) => self.page = Some(page),
            Msg::Failed(failure) => self.errors = failure.messages(),
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="hotel-list">
                <div class="toolbar">
                    <h1>{"Hotels"}</h1>
                    <a class="btn" href={Route::New.href()}>{"New hotel"}</a>
                </div>
                { for self.errors.iter().map(|e| html! { <p class="error">{ e.clone() }</p> }) }
                {
                    match &self.page {
                        None if self.errors.is_empty() => html! { <p class="loading">{"Loading..."}</p> },
                        None => html! {},
                        Some(page) if page.data.is_empty() => html! { <p class="empty">{"No hotels yet."}</p> },
                        Some(page) => html! {
                            <>
                                <div class="cards">{ for page.data.iter().map(hotel_card) }</div>
                                { pager(page) }
                            </>
                        },
                    }
                }
            </div>
        }
    }
}

fn hotel_card(hotel: &Hotel) -> Html {
    let cover = sorted_pictures(hotel).into_iter().next();
    html! {
        <a class="card" href={Route::Detail(hotel.id).href()}>
            {
                match cover {
                    Some(picture) => html! { <img src={picture.file_path} alt={hotel.fields.name.clone()} /> },
                    None => html! { <div class="no-picture">{"No pictures"}</div> },
                }
            }
            <h2>{ hotel.fields.name.clone() }</h2>
            <p>{ format!("{}, {}", hotel.fields.city, hotel.fields.country) }</p>
            <p class="price">{ format!("{} / night", format_price(hotel.fields.price_per_night)) }</p>
        </a>
    }
}

fn pager(page: &Page<Hotel>) -> Html {
    let meta = page.meta;
    html! {
        <nav class="pager">
            if meta.has_previous() {
                <a href={Route::List { page: meta.current_page - 1 }.href()}>{"« Previous"}</a>
            }
            <span>{ format!("Page {} of {} ({} hotels)", meta.current_page, meta.last_page, meta.total) }</span>
            if meta.has_next() {
                <a href={Route::List { page: meta.current_page + 1 }.href()}>{"Next »"}</a>
            }
        </nav>
    }
}

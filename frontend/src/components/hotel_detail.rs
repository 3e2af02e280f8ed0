//! `/hotel/{id}` page: picture slideshow, hotel details, edit and delete actions.

use crate::api::{self, ApiFailure};
use crate::helpers::{confirm, format_price, navigate_after_toast, sorted_pictures};
use crate::route::Route;
use common::model::hotel::Hotel;
use common::model::picture::Picture;
use num_format::{Locale, ToFormattedString};
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HotelDetailProps {
    pub id: i64,
}

pub enum Msg {
    Loaded(Hotel),
    Failed(ApiFailure),
    Show(usize),
    Delete,
    Deleted,
}

pub struct HotelDetail {
    hotel: Option<Hotel>,
    pictures: Vec<Picture>,
    current: usize,
    errors: Vec<String>,
    deleting: bool,
}

impl Component for HotelDetail {
    type Message = Msg;
    type Properties = HotelDetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let id = ctx.props().id;
        spawn_local(async move {
            match api::fetch_hotel(id).await {
                Ok(hotel) => link.send_message(Msg::Loaded(hotel)),
                Err(failure) => link.send_message(Msg::Failed(failure)),
            }
        });
        Self {
            hotel: None,
            pictures: Vec::new(),
            current: 0,
            errors: Vec::new(),
            deleting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(hotel) => {
                self.pictures = sorted_pictures(&hotel);
                self.hotel = Some(hotel);
                true
            }
            Msg::Failed(failure) => {
                self.deleting = false;
                self.errors = failure.messages();
                true
            }
            Msg::Show(position) => {
                self.current = position.min(self.pictures.len().saturating_sub(1));
                true
            }
            Msg::Delete => {
                if self.deleting || !confirm("Delete this hotel and all of its pictures?") {
                    return false;
                }
                self.deleting = true;
                let link = ctx.link().clone();
                let id = ctx.props().id;
                spawn_local(async move {
                    match api::delete_hotel(id).await {
                        Ok(()) => link.send_message(Msg::Deleted),
                        Err(failure) => link.send_message(Msg::Failed(failure)),
                    }
                });
                true
            }
            Msg::Deleted => {
                navigate_after_toast(Route::List { page: 1 }.href(), "Hotel deleted.");
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="hotel-detail">
                { for self.errors.iter().map(|e| html! { <p class="error">{ e.clone() }</p> }) }
                {
                    match &self.hotel {
                        None if self.errors.is_empty() => html! { <p class="loading">{"Loading..."}</p> },
                        None => html! { <a href="/">{"Back to the hotel list"}</a> },
                        Some(hotel) => html! {
                            <>
                                <div class="toolbar">
                                    <h1>{ hotel.fields.name.clone() }</h1>
                                    <a class="btn" href={Route::Edit(hotel.id).href()}>{"Edit"}</a>
                                    <button class="btn danger" disabled={self.deleting}
                                        onclick={link.callback(|_| Msg::Delete)}>{"Delete"}</button>
                                </div>
                                { self.slideshow(link) }
                                { details(hotel) }
                            </>
                        },
                    }
                }
            </div>
        }
    }
}

impl HotelDetail {
    fn slideshow(&self, link: &yew::html::Scope<Self>) -> Html {
        let Some(picture) = self.pictures.get(self.current) else {
            return html! { <div class="no-picture">{"No pictures"}</div> };
        };
        let count = self.pictures.len();
        let previous = (self.current + count - 1) % count;
        let next = (self.current + 1) % count;

        html! {
            <div class="slideshow">
                <img src={picture.file_path.clone()} alt={format!("Picture {}", self.current + 1)} />
                if count > 1 {
                    <div class="slideshow-controls">
                        <button onclick={link.callback(move |_| Msg::Show(previous))}>{"‹"}</button>
                        <span>{ format!("{} / {}", self.current + 1, count) }</span>
                        <button onclick={link.callback(move |_| Msg::Show(next))}>{"›"}</button>
                    </div>
                }
            </div>
        }
    }
}

fn details(hotel: &Hotel) -> Html {
    let fields = &hotel.fields;
    html! {
        <dl class="details">
            <dt>{"Address"}</dt>
            <dd>
                { fields.address.clone() }
                if let Some(address2) = &fields.address2 {
                    <><br />{ address2.clone() }</>
                }
                <br />{ format!("{} {}, {}", fields.zipcode, fields.city, fields.country) }
            </dd>
            <dt>{"Coordinates"}</dt>
            <dd>{ format!("{:.6}, {:.6}", fields.latitude, fields.longitude) }</dd>
            <dt>{"Capacity"}</dt>
            <dd>{ format!("{} guests", fields.max_capacity.to_formatted_string(&Locale::en)) }</dd>
            <dt>{"Price per night"}</dt>
            <dd>{ format_price(fields.price_per_night) }</dd>
            if let Some(description) = &fields.description {
                <>
                    <dt>{"Description"}</dt>
                    <dd class="description">{ description.clone() }</dd>
                </>
            }
            <dt>{"Listed since"}</dt>
            <dd>{ hotel.created_at.format("%Y-%m-%d").to_string() }</dd>
        </dl>
    }
}
